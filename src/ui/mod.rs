pub mod ansi;
pub mod ascii;
pub mod chrome;
mod width_util;
