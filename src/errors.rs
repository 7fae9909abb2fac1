use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

use crate::numeral::Violation;

/// Everything that can go wrong while interpreting a session.
///
/// The `Display` text of the statement-level variants is exactly what the
/// user sees in reply to the offending line.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Statements ---------------------------------------------------------
    /// Statement matched a known shape but has the wrong token count or layout.
    #[error("invalid input, ignored: {0}")]
    StructurallyInvalid(String),

    /// A question that matches none of the known query shapes.
    #[error("I have no idea what you are talking about")]
    UnrecognizedQuery,

    /// Price query for a material that was never priced.
    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    /// Material slot holds an alphabet token or an uncapitalized word.
    #[error("not a material: {0}")]
    NotAMaterial(String),

    /// Attempt to define one of the reserved keywords as an alphabet token.
    #[error("reserved word cannot be defined: {0}")]
    ReservedToken(String),

    /// Attempt to define an alphabet token that is already a material name.
    #[error("already known as a material: {0}")]
    TokenIsMaterial(String),

    /// Unit price rejected by the `whole-credits` policy.
    #[error("unit price of {material} is not a whole number of Credits: {price}")]
    FractionalUnitPrice { material: String, price: String },

    /// Price arithmetic left the representable range.
    #[error("price out of range for {0}")]
    PriceOverflow(String),

    // ---- Numerals -----------------------------------------------------------
    /// Resolved symbols do not form a valid Roman numeral.
    #[error("no valid numeral: {tokens}")]
    InvalidNumeral { tokens: String, violation: Violation },

    /// Integer outside 1..=3999 handed to the numeral writer.
    #[error("no numeral for {0}: only 1 to 3999 can be written")]
    NumeralOutOfRange(u32),

    /// Definition line that does not name a canonical symbol.
    #[error("not a roman symbol: {0}")]
    UnknownSymbol(String),

    // ---- Config -------------------------------------------------------------
    /// Any issue reading or writing the config file.
    #[error("Config error: {0}")]
    Config(String),

    /// Value handed to a config item or CLI flag that could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (stdin, log files, config file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config JSON decode/encode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to reject a whole statement, echoing its tokens.
    pub fn invalid<S: AsRef<str>>(tokens: &[S]) -> Self {
        Error::StructurallyInvalid(join_tokens(tokens))
    }
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// True for errors caused by what the user typed, as opposed to the
    /// environment (files, streams).
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::Json(_) | Error::Config(_))
    }
}

/// Space-joins a token slice the way statements are echoed back.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}
