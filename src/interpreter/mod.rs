pub mod price;
pub mod session;
pub mod statement;

use num::rational::Rational64;
use num::CheckedMul;

use crate::core::types::{Keyword, UnitPricePolicy};
use crate::errors::{Error, Result, join_tokens};
use crate::resolver::{Definition, Resolution};

pub use price::{Price, PriceTable};
pub use session::Session;
pub use statement::Statement;

/// What a statement produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A fact was stored; the text describes it for the log file only.
    Learned(String),
    /// A line to print for the user.
    Answer(String),
    /// Suspended: `token` must be defined before the statement can finish.
    Missing(String),
}

/// Splits a line on whitespace. A `?` glued to the last word becomes its own
/// token.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if let Some(last) = tokens.last_mut() {
        let question = Keyword::Question.as_ref();
        if last.len() > question.len() && last.ends_with(question) {
            last.truncate(last.len() - question.len());
            tokens.push(question.to_string());
        }
    }
    tokens
}

/// The line shown when resolution stops at an undefined token.
pub fn missing_prompt(token: &str) -> String {
    format!("missing information / invalid input: How much is {token} ?")
}

/// Classifies statements and drives resolution, validation and conversion
/// against its own session state. Performs no console I/O.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    session: Session,
    policy: UnitPricePolicy,
}

impl Interpreter {
    pub fn new(policy: UnitPricePolicy) -> Self {
        Self {
            session: Session::new(),
            policy,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn policy(&self) -> UnitPricePolicy {
        self.policy
    }

    pub fn execute(&mut self, tokens: &[String]) -> Result<Reply> {
        match Statement::classify(tokens)? {
            Statement::Definition(definition) => self.learn_symbol(&definition),
            Statement::PriceFact {
                amount,
                material,
                credits,
            } => self.learn_price(amount, material, credits),
            Statement::ValueQuery { amount } => self.answer_value(amount),
            Statement::PriceQuery { amount, material } => self.answer_price(amount, material),
        }
    }

    /// Accepts a line answering a pending [`Reply::Missing`]. The line must
    /// define exactly `missing`; anything else is refused and leaves the
    /// session untouched.
    pub fn supply_definition(&mut self, missing: &str, tokens: &[String]) -> Result<Reply> {
        let definition = Definition::parse(tokens)?;
        if definition.token != missing {
            return Err(Error::invalid(tokens));
        }
        self.learn_symbol(&definition)
    }

    fn learn_symbol(&mut self, definition: &Definition) -> Result<Reply> {
        let previous = self.session.define(definition)?;
        let note = match previous {
            Some(old) if old != definition.symbol => format!(
                "Redefined {} as {} (was {old})",
                definition.token, definition.symbol
            ),
            _ => format!("Defined {} as {}", definition.token, definition.symbol),
        };
        Ok(Reply::Learned(note))
    }

    fn learn_price(&mut self, amount: &[String], material: &str, credits: i64) -> Result<Reply> {
        self.session.check_material(material)?;
        let quantity = match self.quantity(amount)? {
            Resolution::Resolved(q) => q,
            Resolution::Missing(token) => return Ok(Reply::Missing(token)),
        };
        let unit_price = Price(Rational64::new(credits, i64::from(quantity)));
        if self.policy == UnitPricePolicy::WholeCredits && !unit_price.is_whole() {
            return Err(Error::FractionalUnitPrice {
                material: material.to_string(),
                price: unit_price.to_string(),
            });
        }
        self.session.set_price(material, unit_price)?;
        Ok(Reply::Learned(format!(
            "Priced {material} at {unit_price} Credits per unit"
        )))
    }

    fn answer_value(&self, amount: &[String]) -> Result<Reply> {
        self.reject_materials(amount)?;
        Ok(match self.session.alphabet.to_decimal_via_resolution(amount)? {
            Resolution::Resolved(value) => {
                Reply::Answer(format!("{} is {value}", join_tokens(amount)))
            }
            Resolution::Missing(token) => Reply::Missing(token),
        })
    }

    fn answer_price(&self, amount: &[String], material: &str) -> Result<Reply> {
        let unit_price = self.session.unit_price(material)?;
        let quantity = match self.quantity(amount)? {
            Resolution::Resolved(q) => q,
            Resolution::Missing(token) => return Ok(Reply::Missing(token)),
        };
        let total = unit_price
            .0
            .checked_mul(&Rational64::from_integer(i64::from(quantity)))
            .ok_or_else(|| Error::PriceOverflow(material.to_string()))?;
        let subject = if amount.is_empty() {
            material.to_string()
        } else {
            format!("{} {material}", join_tokens(amount))
        };
        Ok(Reply::Answer(format!("{subject} is {} Credits", Price(total))))
    }

    /// Numeric value of an amount; an empty amount means one unit.
    fn quantity(&self, amount: &[String]) -> Result<Resolution<u32>> {
        if amount.is_empty() {
            return Ok(Resolution::Resolved(1));
        }
        self.reject_materials(amount)?;
        self.session.alphabet.to_decimal_via_resolution(amount)
    }

    /// Material names never stand for symbols, so they cannot be resolved.
    fn reject_materials(&self, amount: &[String]) -> Result<()> {
        if amount.iter().any(|t| self.session.prices.contains(t)) {
            return Err(Error::invalid(amount));
        }
        Ok(())
    }
}
