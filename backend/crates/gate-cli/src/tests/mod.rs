mod cli;
mod options;
