use std::fmt;

use strum::IntoEnumIterator;

use crate::numeral::{Numeral, Symbol};

/// The first rule a numeral was found to break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Empty,
    UnknownCharacter(char),
    /// V, L or D appears more than once.
    RepeatedSingle(Symbol),
    /// Four or more of the same repeatable symbol in a row.
    RunTooLong(Symbol),
    /// A run, one smaller symbol, then two or more of the same symbol again
    /// (`XXXIXX`).
    RunResumed(Symbol),
    /// A smaller symbol before a larger one that is not a legal subtractive pair.
    IllegalSubtraction { smaller: Symbol, larger: Symbol },
    /// Two smaller symbols both subtracted from the same larger one.
    DoubleSubtraction { larger: Symbol },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty => write!(f, "empty numeral"),
            Violation::UnknownCharacter(c) => write!(f, "'{c}' is not a roman symbol"),
            Violation::RepeatedSingle(s) => write!(f, "{s} may appear only once"),
            Violation::RunTooLong(s) => write!(f, "{s} repeated more than three times"),
            Violation::RunResumed(s) => {
                write!(f, "{s} repeated again after a subtraction")
            }
            Violation::IllegalSubtraction { smaller, larger } => {
                write!(f, "{smaller} cannot be subtracted from {larger}")
            }
            Violation::DoubleSubtraction { larger } => {
                write!(f, "more than one symbol subtracted from {larger}")
            }
        }
    }
}

/// String-level check: charset first, then every rule.
pub fn is_valid(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    match Numeral::try_from_str(s) {
        Ok(numeral) => validate(&numeral).is_ok(),
        Err(_) => false,
    }
}

/// Checks all numeral rules, stopping at the first violation.
pub fn validate(numeral: &Numeral) -> Result<(), Violation> {
    let symbols = numeral.symbols();
    if symbols.is_empty() {
        return Err(Violation::Empty);
    }
    check_single_occurrence(symbols)?;
    let runs = runs(symbols);
    for symbol in Symbol::iter().filter(|s| s.is_repeatable()) {
        check_runs(&runs, symbol)?;
    }
    check_subtractions(symbols)
}

fn check_single_occurrence(symbols: &[Symbol]) -> Result<(), Violation> {
    for single in Symbol::iter().filter(|s| s.is_single_occurrence()) {
        if symbols.iter().filter(|&&s| s == single).count() > 1 {
            return Err(Violation::RepeatedSingle(single));
        }
    }
    Ok(())
}

/// Run-length encoding: consecutive equal symbols collapsed into (symbol, length).
fn runs(symbols: &[Symbol]) -> Vec<(Symbol, usize)> {
    let mut out: Vec<(Symbol, usize)> = Vec::new();
    for &symbol in symbols {
        match out.last_mut() {
            Some((last, len)) if *last == symbol => *len += 1,
            _ => out.push((symbol, 1)),
        }
    }
    out
}

fn check_runs(runs: &[(Symbol, usize)], repeated: Symbol) -> Result<(), Violation> {
    for (i, &(symbol, len)) in runs.iter().enumerate() {
        if symbol != repeated {
            continue;
        }
        if len >= 4 {
            return Err(Violation::RunTooLong(repeated));
        }
        // Exactly one smaller symbol between this run and the next run of the
        // same symbol; the next run must stay below two.
        if let (Some(&(between, 1)), Some(&(resumed, resumed_len))) =
            (runs.get(i + 1), runs.get(i + 2))
        {
            if between.value() < repeated.value() && resumed == repeated && resumed_len >= 2 {
                return Err(Violation::RunResumed(repeated));
            }
        }
    }
    Ok(())
}

fn check_subtractions(symbols: &[Symbol]) -> Result<(), Violation> {
    for i in 1..symbols.len() {
        let (prev, cur) = (symbols[i - 1], symbols[i]);
        if prev.value() >= cur.value() {
            continue;
        }
        if !prev.can_subtract_from(cur) {
            return Err(Violation::IllegalSubtraction {
                smaller: prev,
                larger: cur,
            });
        }
        if i >= 2 && symbols[i - 2].value() < cur.value() {
            return Err(Violation::DoubleSubtraction { larger: cur });
        }
    }
    Ok(())
}
