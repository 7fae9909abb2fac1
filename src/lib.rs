pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod interpreter;
pub mod logging;
pub mod numeral;
pub mod prompter;
pub mod resolver;
pub mod ui;
