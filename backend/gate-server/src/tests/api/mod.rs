mod error;
mod viewer;
