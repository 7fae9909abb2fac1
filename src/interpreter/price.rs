use std::collections::HashMap;
use std::fmt;

use num::rational::Rational64;
use num::Signed;

/// Exact price in Credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(pub Rational64);

impl Price {
    pub fn is_whole(&self) -> bool {
        self.0.is_integer()
    }

    /// Digits after the decimal point when the denominator only has factors
    /// 2 and 5, otherwise `None`.
    fn decimal_places(denom: i64) -> Option<u32> {
        let mut d = denom;
        let (mut twos, mut fives) = (0, 0);
        while d % 2 == 0 {
            d /= 2;
            twos += 1;
        }
        while d % 5 == 0 {
            d /= 5;
            fives += 1;
        }
        (d == 1).then_some(twos.max(fives))
    }
}

/// Whole prices print as integers, terminating fractions as exact decimals,
/// anything else as `numer/denom`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (numer, denom) = (*self.0.numer(), *self.0.denom());
        if denom == 1 {
            return write!(f, "{numer}");
        }
        let Some(places) = Self::decimal_places(denom) else {
            return write!(f, "{numer}/{denom}");
        };
        let sign = if self.0.is_negative() { "-" } else { "" };
        let scale = 10i128.pow(places);
        let scaled = (numer as i128).abs() * scale / denom as i128;
        let (whole, frac) = (scaled / scale, scaled % scale);
        write!(f, "{sign}{whole}.{frac:0width$}", width = places as usize)
    }
}

/// Unit price per material. Redefinition overwrites.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<String, Price>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, material: impl Into<String>, unit_price: Price) -> Option<Price> {
        self.prices.insert(material.into(), unit_price)
    }

    pub fn get(&self, material: &str) -> Option<Price> {
        self.prices.get(material).copied()
    }

    pub fn contains(&self, material: &str) -> bool {
        self.prices.contains_key(material)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
