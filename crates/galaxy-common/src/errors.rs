use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GalaxyError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("galaxy.radius = -1 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: galaxy.radius = -1 is out of range"
        );

        let err = ConfigError::WatchError("inotify limit reached".into());
        assert_eq!(err.to_string(), "config watch error: inotify limit reached");
    }

    #[test]
    fn galaxy_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: GalaxyError = config_err.into();
        assert!(matches!(err, GalaxyError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn galaxy_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GalaxyError = io_err.into();
        assert!(matches!(err, GalaxyError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn galaxy_error_other_variants() {
        let err = GalaxyError::InvalidParameter("branches must be >= 1".into());
        assert_eq!(err.to_string(), "invalid parameter: branches must be >= 1");

        let err = GalaxyError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = GalaxyError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
