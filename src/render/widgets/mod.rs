//! TUI widgets for the matrix view.
//!
//! Each widget renders one display grouping:
//! - `SectorPicker` / `TierPicker`: selectable rows, current key highlighted
//! - `CompliancePanel`: regulators + critical compliance items
//! - `IpRiskPanel`: IP focus + common risks
//! - `PackageSummary`: tier + sector combined package

mod panels;
mod pickers;
mod summary;

pub use panels::{CompliancePanel, IpRiskPanel};
pub use pickers::{SectorPicker, TierPicker};
pub use summary::PackageSummary;
