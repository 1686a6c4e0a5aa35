pub mod matrix_file;

use clap::Parser;

use crate::core::Selection;
use crate::domain::MatrixData;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_toml_path, Validate};
use matrix_file::MatrixFile;

#[derive(Debug, Clone, Parser)]
#[command(name = "aikya-matrix")]
#[command(about = "Sector-specific compliance & IP matrix viewer")]
pub struct CliConfig {
    #[arg(long, default_value = Selection::DEFAULT_SECTOR, help = "Initial sector selection")]
    pub sector: String,

    #[arg(long, default_value = Selection::DEFAULT_TIER, help = "Initial tier selection")]
    pub tier: String,

    #[arg(long, help = "Load sector/tier datasets from a TOML file")]
    pub data: Option<String>,

    #[arg(long, help = "Print the projection once and exit instead of opening the TUI")]
    pub plain: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Datasets to run against: the optional TOML file, or the compiled-in
    /// tables.
    pub fn load_data(&self) -> Result<MatrixData> {
        match &self.data {
            Some(path) => {
                tracing::info!("Loading datasets from {}", path);
                MatrixFile::from_path(std::path::Path::new(path))?.into_data()
            }
            None => Ok(MatrixData::builtin()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("sector", &self.sector)?;
        validate_non_empty_string("tier", &self.tier)?;
        if let Some(path) = &self.data {
            validate_toml_path("data", path)?;
        }
        Ok(())
    }
}
