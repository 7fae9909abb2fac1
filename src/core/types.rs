use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Words with a fixed meaning in statements. None of them can be defined as
/// an alphabet token or used as a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
pub enum Keyword {
    #[strum(serialize = "is")]
    Is,
    #[strum(serialize = "how")]
    How,
    #[strum(serialize = "much")]
    Much,
    #[strum(serialize = "many")]
    Many,
    #[strum(serialize = "Credits")]
    Credits,
    #[strum(serialize = "?")]
    Question,
}

impl Keyword {
    /// `how` also matches `How` at the start of a sentence; every other
    /// keyword is matched exactly.
    pub fn matches(self, token: &str) -> bool {
        match self {
            Keyword::How => token.eq_ignore_ascii_case(self.as_ref()),
            _ => token == self.as_ref(),
        }
    }

    pub fn is_reserved(token: &str) -> bool {
        Keyword::iter().any(|k| k.matches(token))
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "kebab-case")]
pub enum UnitPricePolicy {
    #[default]
    #[strum(serialize = "allow-fractional", to_string = "allow-fractional")]
    AllowFractional,
    #[strum(serialize = "whole-credits", to_string = "whole-credits")]
    WholeCredits,
}

impl UnitPricePolicy {
    pub fn help(&self) -> &'static str {
        match self {
            UnitPricePolicy::AllowFractional => {
                "Keep exact fractional unit prices (3910 Credits for 20 units is 195.5 each)."
            }
            UnitPricePolicy::WholeCredits => {
                "Reject price statements whose unit price is not a whole number of Credits."
            }
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid unit price policy: '{}'. Allowed policies: {}",
                s.trim(),
                valid_csv::<UnitPricePolicy>()
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}
