use crate::domain::{MatrixData, SectorProfile, TierPackage};
use crate::utils::error::Result;

/// A (sector, tier) pair resolved to its records. Borrows from the
/// datasets; everything here is read-only display content.
#[derive(Debug, Clone, Copy)]
pub struct Projection<'a> {
    pub sector_key: &'a str,
    pub sector: &'a SectorProfile,
    pub tier_key: &'a str,
    pub tier: &'a TierPackage,
}

/// Pure lookup of both records. Deterministic: the datasets never change
/// after startup, so the same keys always yield the same pair.
pub fn project<'a>(data: &'a MatrixData, sector_key: &str, tier_key: &str) -> Result<Projection<'a>> {
    let (sector_key, sector) = data.sectors().lookup(sector_key)?;
    let (tier_key, tier) = data.tiers().lookup(tier_key)?;
    Ok(Projection {
        sector_key,
        sector,
        tier_key,
        tier,
    })
}
