use crate::core::types::Keyword;
use crate::errors::{Error, Result};
use crate::interpreter::price::{Price, PriceTable};
use crate::numeral::Symbol;
use crate::resolver::{Alphabet, Definition};

/// Everything learned during one interpreter session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub alphabet: Alphabet,
    pub prices: PriceTable,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learns a token. Returns the symbol the token previously stood for.
    pub fn define(&mut self, definition: &Definition) -> Result<Option<Symbol>> {
        let token = definition.token.as_str();
        if Keyword::is_reserved(token) {
            return Err(Error::ReservedToken(token.to_string()));
        }
        if self.prices.contains(token) {
            return Err(Error::TokenIsMaterial(token.to_string()));
        }
        Ok(self.alphabet.define(token, definition.symbol))
    }

    /// A material is a capitalized word that is neither a keyword nor an
    /// alphabet token.
    pub fn check_material(&self, material: &str) -> Result<()> {
        let capitalized = material.chars().next().is_some_and(char::is_uppercase);
        if !capitalized || Keyword::is_reserved(material) || self.alphabet.contains(material) {
            return Err(Error::NotAMaterial(material.to_string()));
        }
        Ok(())
    }

    pub fn set_price(&mut self, material: &str, unit_price: Price) -> Result<Option<Price>> {
        self.check_material(material)?;
        Ok(self.prices.set(material, unit_price))
    }

    pub fn unit_price(&self, material: &str) -> Result<Price> {
        self.check_material(material)?;
        self.prices
            .get(material)
            .ok_or_else(|| Error::UnknownMaterial(material.to_string()))
    }
}
