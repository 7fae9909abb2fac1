
use std::collections::HashMap;

use crate::core::types::Keyword;
use crate::errors::{Error, Result, join_tokens};
use crate::numeral::{Numeral, Symbol, to_decimal};

/// Outcome of turning tokens into symbols: either everything resolved, or
/// the first token that still needs a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Resolved(T),
    Missing(String),
}

impl<T> Resolution<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Resolution<U> {
        match self {
            Resolution::Resolved(value) => Resolution::Resolved(f(value)),
            Resolution::Missing(token) => Resolution::Missing(token),
        }
    }
}

/// A `<token> is <Symbol>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub token: String,
    pub symbol: Symbol,
}

impl Definition {
    /// Parses exactly three tokens with `is` in the middle and a single
    /// canonical symbol at the end. Any other layout, a lowercase or
    /// multi-letter symbol included, rejects the whole line.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        match tokens {
            [token, copula, symbol] if Keyword::Is.matches(copula.as_ref()) => {
                let symbol =
                    Symbol::try_from(symbol.as_ref()).map_err(|_| Error::invalid(tokens))?;
                Ok(Self {
                    token: token.as_ref().to_string(),
                    symbol,
                })
            }
            _ => Err(Error::invalid(tokens)),
        }
    }
}

/// Token to symbol mapping learned during a session. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct Alphabet {
    symbols: HashMap<String, Symbol>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the mapping, returning the symbol it replaced.
    pub fn define(&mut self, token: impl Into<String>, symbol: Symbol) -> Option<Symbol> {
        self.symbols.insert(token.into(), symbol)
    }

    pub fn get(&self, token: &str) -> Option<Symbol> {
        self.symbols.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.symbols.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Maps each token to its symbol. A token with no mapping that is itself
    /// written in roman symbols (`XIV`) stands for those symbols.
    pub fn resolve<S: AsRef<str>>(&self, tokens: &[S]) -> Resolution<Numeral> {
        let mut numeral = Numeral::new();
        for token in tokens {
            let token = token.as_ref();
            if let Some(symbol) = self.get(token) {
                numeral.push(symbol);
                continue;
            }
            match Numeral::try_from_str(token) {
                Ok(literal) if !literal.is_empty() => numeral.extend(&literal),
                _ => return Resolution::Missing(token.to_string()),
            }
        }
        Resolution::Resolved(numeral)
    }

    /// Resolution, validation and conversion in one step. An invalid numeral
    /// is reported against the tokens the user typed.
    pub fn to_decimal_via_resolution<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<Resolution<u32>> {
        let numeral = match self.resolve(tokens) {
            Resolution::Resolved(numeral) => numeral,
            Resolution::Missing(token) => return Ok(Resolution::Missing(token)),
        };
        match to_decimal(&numeral) {
            Ok(value) => Ok(Resolution::Resolved(value)),
            Err(Error::InvalidNumeral { violation, .. }) => Err(Error::InvalidNumeral {
                tokens: join_tokens(tokens),
                violation,
            }),
            Err(other) => Err(other),
        }
    }
}
