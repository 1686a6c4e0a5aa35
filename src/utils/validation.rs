use crate::utils::error::{MatrixError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatrixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_toml_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if path.contains('\0') {
        return Err(MatrixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some("toml") => Ok(()),
        Some(extension) => Err(MatrixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!("Unsupported file extension: {}. Expected: toml", extension),
        }),
        None => Err(MatrixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_string() {
        assert!(validate_non_empty_string("sector", "fintech").is_ok());
        assert!(validate_non_empty_string("sector", "").is_err());
        assert!(validate_non_empty_string("sector", "   ").is_err());
    }

    #[test]
    fn test_toml_path() {
        assert!(validate_toml_path("data", "datasets/matrix.toml").is_ok());
        assert!(validate_toml_path("data", "matrix.json").is_err());
        assert!(validate_toml_path("data", "matrix").is_err());
        assert!(validate_toml_path("data", "").is_err());
    }
}
