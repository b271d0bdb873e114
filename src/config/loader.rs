//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ShellConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::ui::ComponentRegistry;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str, registry: &ComponentRegistry) -> Result<ShellConfig, ConfigError> {
    let config: ShellConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
    validate_config(&config, registry).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path, registry: &ComponentRegistry) -> Result<ShellConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("shell.toml");
        fs::write(
            &path,
            "[layout]\ntitle = \"Village\"\n\n[listener]\nbind_address = \"127.0.0.1:3000\"\n",
        )
        .unwrap();

        let config = load_config(&path, &ComponentRegistry::builtin()).unwrap();

        assert_eq!(config.layout.title, "Village");
        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");
        assert_eq!(config.routes.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml"), &ComponentRegistry::builtin())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_message_lists_errors() {
        let err = parse_config(
            "[[routes]]\npath = \"x\"\npage = \"simulation\"\n\n[timeouts]\nrequest_secs = 0\n",
            &ComponentRegistry::builtin(),
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("route path `x` must start with '/'"));
        assert!(message.contains("request timeout must be greater than zero"));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("routes = 5", &ComponentRegistry::builtin()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
