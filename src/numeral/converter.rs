use crate::errors::{Error, Result};
use crate::numeral::{Numeral, Symbol, validate};

/// Greedy substitution table, largest first.
const SUBSTITUTIONS: [(u32, &[Symbol]); 13] = [
    (1000, &[Symbol::M]),
    (900, &[Symbol::C, Symbol::M]),
    (500, &[Symbol::D]),
    (400, &[Symbol::C, Symbol::D]),
    (100, &[Symbol::C]),
    (90, &[Symbol::X, Symbol::C]),
    (50, &[Symbol::L]),
    (40, &[Symbol::X, Symbol::L]),
    (10, &[Symbol::X]),
    (9, &[Symbol::I, Symbol::X]),
    (5, &[Symbol::V]),
    (4, &[Symbol::I, Symbol::V]),
    (1, &[Symbol::I]),
];

pub const MAX_NUMERAL: u32 = 3999;

/// Value of a numeral. Invalid numerals are refused rather than summed.
pub fn to_decimal(numeral: &Numeral) -> Result<u32> {
    validate(numeral).map_err(|violation| Error::InvalidNumeral {
        tokens: numeral.to_string(),
        violation,
    })?;

    let symbols = numeral.symbols();
    let mut total: i64 = 0;
    for (i, symbol) in symbols.iter().enumerate() {
        let value = symbol.value();
        match symbols.get(i + 1) {
            Some(next) if next.value() > value => total -= value as i64,
            _ => total += value as i64,
        }
    }
    // Validation guarantees a positive sum below 4000.
    Ok(total as u32)
}

/// Canonical numeral for `n` in 1..=3999.
pub fn to_numeral(n: u32) -> Result<Numeral> {
    if n == 0 || n > MAX_NUMERAL {
        return Err(Error::NumeralOutOfRange(n));
    }
    let mut remaining = n;
    let mut numeral = Numeral::new();
    for &(value, symbols) in SUBSTITUTIONS.iter() {
        while remaining >= value {
            for &symbol in symbols {
                numeral.push(symbol);
            }
            remaining -= value;
        }
    }
    Ok(numeral)
}
