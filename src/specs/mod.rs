// src/specs/mod.rs
//! # Document "specs"
//!
//! One module per HTML dialect. Each spec encodes *where the signatures live*
//! in its kind of document and *how to lift them out robustly* into a
//! [`SignatureMap`](crate::model::SignatureMap).
//!
//! ## What lives here
//! - Table selection (header labels for the manual reference, the
//!   `memberdecls` class marker for generated output).
//! - Row interpretation: which column means what, continuation rows,
//!   qualifier truncation, method-name extraction.
//! - Normalization of every extracted value via [`crate::normalize`].
//!
//! ## What does **not** live here
//! - Reading files, exit codes, console output (`cli`).
//! - Deciding whether two maps agree (`compare`).
//!
//! ## Conventions
//! - Pure functions of the document text; no I/O.
//! - Malformed rows are skipped, never an error. Skips are debug-logged.
//!
//! ## Typical call chain
//! ```text
//! cli::check → fs::read_to_string → specs::manual::extract    ↘
//!                                 → specs::generated::extract → compare::compare
//! ```
pub mod generated;
pub mod manual;
