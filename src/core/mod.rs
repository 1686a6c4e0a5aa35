pub mod projection;
pub mod selection;

pub use crate::domain::{Catalog, MatrixData, SectorProfile, TierPackage};
pub use crate::utils::error::Result;
pub use projection::{project, Projection};
pub use selection::Selection;
