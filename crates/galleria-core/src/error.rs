//! Error types for Galleria

use thiserror::Error;

/// Main error type for Galleria operations
#[derive(Error, Debug)]
pub enum GalleriaError {
    /// No gallery image carries the requested identifier
    #[error("Image not found: {0}")]
    ImageNotFound(String),

    /// License tier name did not match personal, commercial or exclusive
    #[error("Unknown license tier: {0}")]
    UnknownLicenseTier(String),

    /// Site configuration could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Site configuration parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Error during JSON serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using GalleriaError
pub type GalleriaResult<T> = Result<T, GalleriaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalleriaError::ImageNotFound("missing-shot".to_string());
        assert_eq!(format!("{}", err), "Image not found: missing-shot");

        let err = GalleriaError::UnknownLicenseTier("royalty".to_string());
        assert_eq!(format!("{}", err), "Unknown license tier: royalty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GalleriaError = io_err.into();
        assert!(matches!(err, GalleriaError::Io(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("title = ").unwrap_err();
        let err: GalleriaError = toml_err.into();
        assert!(matches!(err, GalleriaError::ConfigParse(_)));
    }
}
