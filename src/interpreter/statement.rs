use crate::core::types::Keyword;
use crate::errors::{Error, Result};
use crate::resolver::Definition;

/// One classified input line. Amount slices borrow the caller's tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `<token> is <Symbol>`
    Definition(Definition),
    /// `<token>... <Material> is <integer> Credits`
    PriceFact {
        amount: &'a [String],
        material: &'a str,
        credits: i64,
    },
    /// `how much is <token>... ?`
    ValueQuery { amount: &'a [String] },
    /// `how many Credits is <token>... <Material> ?`
    PriceQuery {
        amount: &'a [String],
        material: &'a str,
    },
}

impl<'a> Statement<'a> {
    /// Classifies by trailing marker first (`?`, then `Credits`), then by the
    /// copula in second position.
    pub fn classify(tokens: &'a [String]) -> Result<Self> {
        let Some(last) = tokens.last() else {
            return Err(Error::invalid(tokens));
        };
        if Keyword::Question.matches(last) {
            return Self::classify_query(tokens);
        }
        if Keyword::Credits.matches(last) {
            return Self::classify_price_fact(tokens);
        }
        if tokens.get(1).is_some_and(|t| Keyword::Is.matches(t)) {
            return Definition::parse(tokens).map(Statement::Definition);
        }
        Err(Error::UnrecognizedQuery)
    }

    fn classify_price_fact(tokens: &'a [String]) -> Result<Self> {
        // <amount...> <Material> is <credits> Credits
        let n = tokens.len();
        if n < 4 || !Keyword::Is.matches(&tokens[n - 3]) {
            return Err(Error::invalid(tokens));
        }
        // Plain digits only: no sign, no separators.
        let digits = &tokens[n - 2];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid(tokens));
        }
        let credits: i64 = digits.parse().map_err(|_| Error::invalid(tokens))?;
        let amount = &tokens[..n - 4];
        reject_keywords(amount, tokens)?;
        Ok(Statement::PriceFact {
            amount,
            material: &tokens[n - 4],
            credits,
        })
    }

    fn classify_query(tokens: &'a [String]) -> Result<Self> {
        let body = &tokens[..tokens.len() - 1];
        if let Some(amount) = strip_keywords(body, &[Keyword::How, Keyword::Much, Keyword::Is]) {
            if amount.is_empty() {
                return Err(Error::invalid(tokens));
            }
            reject_keywords(amount, tokens)?;
            return Ok(Statement::ValueQuery { amount });
        }
        if let Some(rest) = strip_keywords(
            body,
            &[Keyword::How, Keyword::Many, Keyword::Credits, Keyword::Is],
        ) {
            let Some((material, amount)) = rest.split_last() else {
                return Err(Error::invalid(tokens));
            };
            reject_keywords(amount, tokens)?;
            return Ok(Statement::PriceQuery {
                amount,
                material: material.as_str(),
            });
        }
        Err(Error::UnrecognizedQuery)
    }
}

/// Returns what follows `prefix` if `tokens` starts with exactly those keywords.
fn strip_keywords<'t>(tokens: &'t [String], prefix: &[Keyword]) -> Option<&'t [String]> {
    if tokens.len() < prefix.len() {
        return None;
    }
    let (head, rest) = tokens.split_at(prefix.len());
    head.iter()
        .zip(prefix)
        .all(|(token, keyword)| keyword.matches(token))
        .then_some(rest)
}

fn reject_keywords(amount: &[String], tokens: &[String]) -> Result<()> {
    if amount.iter().any(|t| Keyword::is_reserved(t)) {
        return Err(Error::invalid(tokens));
    }
    Ok(())
}
