//! Optional externalized datasets.
//!
//! The matrix tables are compiled in by default, but they are pure
//! configuration, so they can also be loaded from a TOML file. The file uses
//! arrays of tables, which keeps authoring order:
//!
//! ```toml
//! [[sectors]]
//! key = "fintech"
//! name = "FinTech"
//! icon = "💰"
//! regulators = ["CBK", "CMA", "KRA"]
//! critical_compliance = ["Central Bank of Kenya licensing"]
//! ip_focus = ["Software patents"]
//! common_risks = ["Regulatory sanctions"]
//!
//! [[tiers]]
//! key = "hustle"
//! name = "AIKYA HUSTLE"
//! price = "KSh 25,000/mo"
//! focus = "Foundation & Registration"
//! deliverables = ["Basic licensing roadmap"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Catalog, MatrixData, SectorProfile, TierPackage};
use crate::utils::error::{KeyDomain, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixFile {
    pub sectors: Vec<SectorEntry>,
    pub tiers: Vec<TierEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorEntry {
    pub key: String,
    #[serde(flatten)]
    pub profile: SectorProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierEntry {
    pub key: String,
    #[serde(flatten)]
    pub package: TierPackage,
}

impl MatrixFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: MatrixFile = toml::from_str(raw)?;
        Ok(file)
    }

    /// Convert into runtime datasets. Duplicate or empty keys are reported
    /// as configuration errors, never silently deduplicated.
    pub fn into_data(self) -> Result<MatrixData> {
        self.validate()?;
        let sectors = Catalog::from_entries(
            KeyDomain::Sector,
            self.sectors
                .into_iter()
                .map(|entry| (entry.key, entry.profile))
                .collect(),
        )?;
        let tiers = Catalog::from_entries(
            KeyDomain::Tier,
            self.tiers
                .into_iter()
                .map(|entry| (entry.key, entry.package))
                .collect(),
        )?;
        Ok(MatrixData::new(sectors, tiers))
    }
}

impl Validate for MatrixFile {
    fn validate(&self) -> Result<()> {
        for entry in &self.sectors {
            validate_non_empty_string("sectors.key", &entry.key)?;
            validate_non_empty_string("sectors.name", &entry.profile.name)?;
        }
        for entry in &self.tiers {
            validate_non_empty_string("tiers.key", &entry.key)?;
            validate_non_empty_string("tiers.name", &entry.package.name)?;
        }
        Ok(())
    }
}
