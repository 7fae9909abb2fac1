use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

/// The seven canonical Roman symbols. Parsing is case-sensitive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive,
)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    pub fn value(self) -> u32 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::UnknownSymbol(format!(
                "'{}'. Valid symbols: {}",
                s.trim(),
                valid_csv::<Symbol>()
            ))
        })
    }

    /// Every symbol whose value is strictly below this one.
    pub fn smaller_than(self) -> impl Iterator<Item = Symbol> {
        Symbol::iter().filter(move |s| s.value() < self.value())
    }

    /// I, X, C and M may repeat (up to three times in a row).
    pub fn is_repeatable(self) -> bool {
        matches!(self, Symbol::I | Symbol::X | Symbol::C | Symbol::M)
    }

    /// V, L and D may appear at most once in a numeral.
    pub fn is_single_occurrence(self) -> bool {
        matches!(self, Symbol::V | Symbol::L | Symbol::D)
    }

    /// Whether `self` written directly before `larger` is one of the six
    /// legal subtractive pairs.
    pub fn can_subtract_from(self, larger: Symbol) -> bool {
        matches!(
            (self, larger),
            (Symbol::I, Symbol::V | Symbol::X)
                | (Symbol::X, Symbol::L | Symbol::C)
                | (Symbol::C, Symbol::D | Symbol::M)
        )
    }
}
