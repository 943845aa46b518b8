//! Config file loading.
//!
//! The config file is optional; when present it is a TOML document
//! deserialized into [`ChaloConfig`], with every missing section falling
//! back to the built-in defaults.

use tracing::info;

use chalo_types::config::ChaloConfig;
use chalo_types::error::ConfigError;

use std::fs;
use std::path::Path;

/// Load a `ChaloConfig` from a TOML file.
pub fn load(path: &Path) -> Result<ChaloConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    let config: ChaloConfig =
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "assistant = [broken").unwrap();
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_empty_file_gives_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = load(file.path()).unwrap();
        assert_eq!(config.assistant.typing_delay_ms, 800);
        assert_eq!(config.knowledge.site.name, "CarSe-Chalo");
    }

    #[test]
    fn test_load_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[assistant]\nname = \"Trip Genie\"\nwelcome = \"Namaste!\"\n"
        )
        .unwrap();
        let config = load(file.path()).unwrap();
        assert_eq!(config.assistant.name, "Trip Genie");
        assert_eq!(config.assistant.welcome, "Namaste!");
        assert_eq!(config.assistant.history_preview, 20);
    }
}
