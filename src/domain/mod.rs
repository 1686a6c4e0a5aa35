// Domain layer: the two static datasets and their record types.

pub mod builtin;
pub mod catalog;
pub mod model;

pub use builtin::{INVESTMENT_NOTE, MATRIX_ATTRIBUTION, MATRIX_SUBTITLE, MATRIX_TITLE};
pub use catalog::Catalog;
pub use model::{MatrixData, SectorProfile, TierPackage};
