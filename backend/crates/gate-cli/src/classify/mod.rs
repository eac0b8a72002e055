pub mod classify_file;
pub mod error;

pub use classify_file::{ClassifyOptions, classify_file};
pub use error::Result as CliResult;
