use std::{fs, path::Path};

use color_eyre::eyre::WrapErr;
use cube_core::DEFAULT_SCRAMBLE_LENGTH;
use serde::{Deserialize, Serialize};

/// Settings read from the optional TOML configuration file. Every field may be
/// left out; command-line flags take precedence over whatever is set here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// How many quarter turns a scramble uses.
    pub scramble_length: usize,
    /// Seed for the scramble generator; random when unset.
    pub seed: Option<u64>,
    /// Paint facelets with ANSI background colors instead of printing letters.
    pub color: bool,
    /// Text printed for each colored facelet.
    pub sticker: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
            color: true,
            sticker: "  ".to_owned(),
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::parse(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn partial_file() {
        let config = CliConfig::parse("scramble_length = 30\nseed = 99\n").unwrap();
        assert_eq!(config.scramble_length, 30);
        assert_eq!(config.seed, Some(99));
        assert!(config.color);
        assert_eq!(config.sticker, "  ");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(CliConfig::parse("scramble_lenght = 30").is_err());
        assert!(CliConfig::parse("color = \"yes\"").is_err());
    }

    #[test]
    fn round_trip_through_toml() {
        let config = CliConfig {
            scramble_length: 5,
            seed: Some(1),
            color: false,
            sticker: "██".to_owned(),
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::parse(&text).unwrap(), config);
    }
}
