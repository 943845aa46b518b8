use thiserror::Error;

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to parse config file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::Io("no such file".to_string());
        assert_eq!(err.to_string(), "failed to read config file: no such file");

        let err = ConfigError::Parse("expected table".to_string());
        assert!(err.to_string().starts_with("failed to parse"));
    }
}
