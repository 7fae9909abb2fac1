mod common;
mod config;
mod core;
mod session;
