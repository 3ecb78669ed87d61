//! Codec and tool configuration
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! log_level = "debug"
//!
//! [codec.silence]
//! mode = "below_dbfs"
//! threshold = -20.0
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::silence::SilencePolicy;
use crate::error::{Error, Result};

/// Packet codec settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// When a frame is sent as a silent packet
    pub silence: SilencePolicy,
}

impl CodecConfig {
    pub fn validate(&self) -> Result<()> {
        if let SilencePolicy::BelowDbfs { threshold } = self.silence {
            if !threshold.is_finite() {
                return Err(Error::Config(format!(
                    "silence threshold must be a finite dBFS value, got {}",
                    threshold
                )));
            }
        }
        Ok(())
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub codec: CodecConfig,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            codec: CodecConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        config.codec.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path`, or `None` when the file does not exist
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Load from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        Ok(Self::load_optional(path)?.unwrap_or_default())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Platform config location, e.g. `~/.config/lane-packet/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "lane-packet").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.codec.silence, SilencePolicy::DigitalZero);
    }

    #[test]
    fn test_parse_dbfs_policy() {
        let config = AppConfig::from_toml_str(
            r#"
            log_level = "debug"

            [codec.silence]
            mode = "below_dbfs"
            threshold = -30.0
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.codec.silence, SilencePolicy::BelowDbfs { threshold: -30.0 });
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(AppConfig::from_toml_str("[codec.silence]\nmode = \"loudest\"").is_err());
        assert!(
            AppConfig::from_toml_str("[codec.silence]\nmode = \"below_dbfs\"\nthreshold = nan")
                .is_err()
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig {
            codec: CodecConfig {
                silence: SilencePolicy::BelowDbfs { threshold: -20.0 },
            },
            log_level: "warn".to_string(),
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("lane-packet-missing-config-7f3a.toml");
        assert_eq!(AppConfig::load_optional(&path).unwrap(), None);
        assert_eq!(AppConfig::load_or_default(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_optional_reads_existing_file() {
        let path = std::env::temp_dir().join(format!(
            "lane-packet-config-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "log_level = \"trace\"\n").unwrap();
        let loaded = AppConfig::load_optional(&path);
        fs::remove_file(&path).unwrap();

        let config = loaded.unwrap().expect("config file present");
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.codec, CodecConfig::default());
    }
}
