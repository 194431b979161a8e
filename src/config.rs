use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GitTagsError, Result};

/// Represents the complete configuration for git-tags.
///
/// Controls which git binary is invoked and supplies query defaults applied
/// when command-line arguments omit them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Settings for the git invocation itself.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_git_bin")]
    pub bin: String,
}

/// Returns the default git program name.
fn default_git_bin() -> String {
    "git".to_string()
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            bin: default_git_bin(),
        }
    }
}

/// Query defaults applied when CLI arguments omit them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub range: Option<String>,

    #[serde(default)]
    pub rev: Option<String>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gittags.toml` in current directory
/// 3. `.gittags.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gittags.toml").exists() {
        fs::read_to_string("./gittags.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gittags.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|err| GitTagsError::config(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.git.bin, "git");
        assert_eq!(config.defaults.range, None);
        assert_eq!(config.defaults.rev, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[defaults]\nrange = \"^1.0.0\"\n").unwrap();
        assert_eq!(config.git.bin, "git");
        assert_eq!(config.defaults.range.as_deref(), Some("^1.0.0"));
    }
}
