pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use config::{matrix_file::MatrixFile, CliConfig};
pub use core::{project, Projection, Selection};
pub use domain::{Catalog, MatrixData, SectorProfile, TierPackage};
pub use render::{render_plain, MatrixApp};
pub use utils::error::{MatrixError, Result};
