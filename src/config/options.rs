// src/config/options.rs
use std::path::PathBuf;

/// Runtime options for one check run, built by `cli::parse_args`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    pub manual_path: PathBuf,
    pub generated_path: PathBuf,
    pub verbose: bool,
}

impl CheckOptions {
    pub fn new(manual_path: impl Into<PathBuf>, generated_path: impl Into<PathBuf>) -> Self {
        Self {
            manual_path: manual_path.into(),
            generated_path: generated_path.into(),
            verbose: false,
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Check(CheckOptions),
    Help,
}
