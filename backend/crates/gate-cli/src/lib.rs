//! gate-cli library
//!
//! Exports the file classification runner for use in tests.

pub mod classify;
pub mod cli;
pub mod commands;

#[cfg(test)]
mod tests;

pub use classify::{
    CliResult, ClassifyOptions, classify_file,
    error::{CliError, is_success},
};
