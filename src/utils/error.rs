use thiserror::Error;

/// Which dataset a key was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDomain {
    Sector,
    Tier,
}

impl std::fmt::Display for KeyDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyDomain::Sector => write!(f, "sector"),
            KeyDomain::Tier => write!(f, "tier"),
        }
    }
}

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("unknown {domain} key: {key}")]
    InvalidKey { domain: KeyDomain, key: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MatrixError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            MatrixError::InvalidKey { domain, key } => {
                format!("'{}' is not a known {} key", key, domain)
            }
            MatrixError::IoError(e) => format!("File operation failed: {}", e),
            MatrixError::TomlError(e) => format!("Dataset file is not valid TOML: {}", e),
            MatrixError::ConfigError { message } => format!("Configuration problem: {}", message),
            MatrixError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!(
                    "Configuration field '{}' rejected '{}': {}",
                    field, value, reason
                )
            }
        }
    }

    /// Exit code used by the CLI: 2 for configuration problems, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            MatrixError::InvalidKey { .. }
            | MatrixError::ConfigError { .. }
            | MatrixError::InvalidConfigValueError { .. }
            | MatrixError::TomlError(_) => 2,
            MatrixError::IoError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
