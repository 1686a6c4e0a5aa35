use serde::{Deserialize, Serialize};

use crate::domain::catalog::Catalog;

/// Per-sector compliance and IP metadata. All fields are pre-authored
/// display content; list order is authoring order and is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorProfile {
    pub name: String,
    pub icon: String,
    pub regulators: Vec<String>,
    pub critical_compliance: Vec<String>,
    pub ip_focus: Vec<String>,
    pub common_risks: Vec<String>,
}

/// One pricing/service package. `price` is a display label, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPackage {
    pub name: String,
    pub price: String,
    pub focus: String,
    pub deliverables: Vec<String>,
}

/// The two datasets, constructed once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct MatrixData {
    sectors: Catalog<SectorProfile>,
    tiers: Catalog<TierPackage>,
}

impl MatrixData {
    pub fn new(sectors: Catalog<SectorProfile>, tiers: Catalog<TierPackage>) -> Self {
        Self { sectors, tiers }
    }

    pub fn sectors(&self) -> &Catalog<SectorProfile> {
        &self.sectors
    }

    pub fn tiers(&self) -> &Catalog<TierPackage> {
        &self.tiers
    }
}
