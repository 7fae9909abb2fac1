pub mod converter;
pub mod symbol;
pub mod validator;

use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

pub use converter::{to_decimal, to_numeral};
pub use symbol::Symbol;
pub use validator::{Violation, is_valid, validate};

/// An ordered sequence of symbols. Holds any sequence; validity is checked
/// separately by [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Numeral(Vec<Symbol>);

impl Numeral {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, symbol: Symbol) {
        self.0.push(symbol);
    }

    pub fn extend(&mut self, other: &Numeral) {
        self.0.extend_from_slice(&other.0);
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses literal symbol characters. Case-sensitive; any other character
    /// (including whitespace) is rejected.
    pub fn try_from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| Symbol::from_char(c).ok_or_else(|| Error::UnknownSymbol(s.to_string())))
            .collect::<Result<Vec<_>>>()
            .map(Numeral)
    }
}

impl From<Vec<Symbol>> for Numeral {
    fn from(symbols: Vec<Symbol>) -> Self {
        Numeral(symbols)
    }
}

impl FromStr for Numeral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from_str(s)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
