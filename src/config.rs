use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use serial_code::{CodeConfig, SecretKey};

/// Layout and key overrides read from a YAML file. Missing fields keep the
/// built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub total_length: Option<usize>,
    pub group_width: Option<usize>,
    pub checksum_length: Option<usize>,
    pub key: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let conf_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&conf_str)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(conf_str: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not to a map.
        if conf_str.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(conf_str)?)
    }

    /// Apply the overrides and check the result is usable.
    pub fn into_code_config(self) -> anyhow::Result<CodeConfig> {
        let key = match self.key {
            Some(key) => SecretKey::new(key).context("invalid key in config")?,
            None => SecretKey::default(),
        };
        let mut config = CodeConfig::new(key);
        if let Some(total_length) = self.total_length {
            config.total_length = total_length;
        }
        if let Some(group_width) = self.group_width {
            config.group_width = group_width;
        }
        if let Some(checksum_length) = self.checksum_length {
            config.checksum_length = checksum_length;
        }
        config.validate().context("invalid code layout in config")?;
        Ok(config)
    }
}
