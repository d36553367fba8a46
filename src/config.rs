use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name searched in the current directory
pub const LOCAL_CONFIG_FILE: &str = "semverkit.toml";

/// File name searched in the user config directory
pub const USER_CONFIG_FILE: &str = ".semverkit.toml";

/// Represents the complete configuration for the semverkit CLI.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub parse: ParseConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// How command-line inputs are read.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ParseConfig {
    /// Accept `v` prefixes, whitespace, leading zeros and short cores
    #[serde(default)]
    pub tolerant: bool,
}

/// Direction used by the `sort` command
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// How results are printed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub order: SortOrder,

    /// Drop precedence-equal duplicates after sorting
    #[serde(default)]
    pub dedup: bool,

    /// Drop unparsable inputs instead of failing
    #[serde(default)]
    pub skip_invalid: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semverkit.toml` in current directory
/// 3. `.semverkit.toml` in user config directory
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
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.parse.tolerant);
        assert_eq!(config.output.order, SortOrder::Ascending);
        assert!(!config.output.dedup);
        assert!(!config.output.skip_invalid);
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str("[output]\norder = \"descending\"\n").unwrap();
        assert_eq!(config.output.order, SortOrder::Descending);
        assert!(!config.output.dedup);
        assert!(!config.parse.tolerant);
    }

    #[test]
    fn test_unknown_order_rejected() {
        assert!(toml::from_str::<Config>("[output]\norder = \"sideways\"\n").is_err());
    }
}
