use crate::core::projection::{project, Projection};
use crate::domain::MatrixData;
use crate::utils::error::Result;

/// The current (sector, tier) pair. This is the only mutable state in the
/// program; it always holds keys present in the datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    sector: String,
    tier: String,
}

impl Selection {
    pub const DEFAULT_SECTOR: &'static str = "fintech";
    pub const DEFAULT_TIER: &'static str = "hustle";

    /// Create a selection, validating both keys against the datasets.
    pub fn new(data: &MatrixData, sector: &str, tier: &str) -> Result<Self> {
        let (sector, _) = data.sectors().lookup(sector)?;
        let (tier, _) = data.tiers().lookup(tier)?;
        Ok(Self {
            sector: sector.to_string(),
            tier: tier.to_string(),
        })
    }

    /// The default selection. Fails only when `data` does not carry the
    /// default keys, which externally loaded datasets are allowed to omit.
    pub fn default_for(data: &MatrixData) -> Result<Self> {
        Self::new(data, Self::DEFAULT_SECTOR, Self::DEFAULT_TIER)
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    pub fn tier(&self) -> &str {
        &self.tier
    }

    /// Replace the current sector. An unknown key fails with `InvalidKey`
    /// and leaves the prior selection untouched. Re-selecting the current
    /// key is a no-op.
    pub fn select_sector(&mut self, data: &MatrixData, key: &str) -> Result<()> {
        let (key, _) = data.sectors().lookup(key)?;
        if self.sector != key {
            tracing::debug!(sector = key, "sector selected");
            self.sector = key.to_string();
        }
        Ok(())
    }

    /// Same contract as `select_sector`, over the tier dataset.
    pub fn select_tier(&mut self, data: &MatrixData, key: &str) -> Result<()> {
        let (key, _) = data.tiers().lookup(key)?;
        if self.tier != key {
            tracing::debug!(tier = key, "tier selected");
            self.tier = key.to_string();
        }
        Ok(())
    }

    /// Resolve the current pair to its records.
    pub fn project<'a>(&self, data: &'a MatrixData) -> Result<Projection<'a>> {
        project(data, &self.sector, &self.tier)
    }
}
