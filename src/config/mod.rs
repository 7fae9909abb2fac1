pub mod models;
#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, FileLoggingConfigItem, ShowBannerConfigItem, UnitPricePolicyConfigItem,
};
use crate::core::types::UnitPricePolicy;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    UnitPricePolicy,
    FileLoggingEnabled,
    ShowBanner,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub unit_price_policy: UnitPricePolicyConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
    #[serde(default)]
    pub show_banner: ShowBannerConfigItem,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self { path, data })
    }

    /// Like [`Config::load_from`], but a missing file yields the defaults.
    /// Nothing is written until a value is changed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load_from(path);
        }
        Ok(Self {
            path: path.to_path_buf(),
            data: ConfigFile::default(),
        })
    }

    pub fn unit_price_policy(&self) -> UnitPricePolicy {
        *self.data.unit_price_policy.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }
    pub fn show_banner(&self) -> bool {
        self.data.show_banner.get_value().0
    }

    /// (key, description, current value) for every setting.
    pub fn rows(&self) -> Vec<(String, String, String)> {
        ConfigKey::iter()
            .map(|key| {
                let (description, value) = match key {
                    ConfigKey::UnitPricePolicy => (
                        self.data.unit_price_policy.description(),
                        self.data.unit_price_policy.get_value().to_string(),
                    ),
                    ConfigKey::FileLoggingEnabled => (
                        self.data.file_logging_enabled.description(),
                        self.data.file_logging_enabled.get_value().to_string(),
                    ),
                    ConfigKey::ShowBanner => (
                        self.data.show_banner.description(),
                        self.data.show_banner.get_value().to_string(),
                    ),
                };
                (key.to_string(), description.to_string(), value)
            })
            .collect()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = ConfigKey::from_str(key_str).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        self.edit(|cfg| match key {
            ConfigKey::UnitPricePolicy => cfg.unit_price_policy.set_value(new_value),
            ConfigKey::FileLoggingEnabled => cfg.file_logging_enabled.set_value(new_value),
            ConfigKey::ShowBanner => cfg.show_banner.set_value(new_value),
        })
    }

    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        f(&mut self.data)?;
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::Config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::Config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
