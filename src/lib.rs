// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod compare;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod normalize;
pub mod report;
pub mod specs;

pub use compare::{compare, Finding, FindingKind, Verdict};
pub use error::CheckError;
pub use model::{SignatureEntry, SignatureMap};
