//! Application layer: configuration and command-line interface

pub mod cli;
pub mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
