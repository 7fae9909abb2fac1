use crate::core::types::{Bool, UnitPricePolicy};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitPricePolicyConfigItem {
    pub value: UnitPricePolicy,
    pub description: String,
}

impl Default for UnitPricePolicyConfigItem {
    fn default() -> Self {
        Self {
            value: UnitPricePolicy::default(),
            description: "How to treat a unit price that is not a whole number of Credits."
                .into(),
        }
    }
}

impl ConfigItem<UnitPricePolicy> for UnitPricePolicyConfigItem {
    fn get_value(&self) -> &UnitPricePolicy {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = UnitPricePolicy::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowBannerConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for ShowBannerConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Print the banner and usage hints at startup.".into(),
        }
    }
}

impl ConfigItem<Bool> for ShowBannerConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
