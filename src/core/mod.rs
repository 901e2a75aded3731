// src/core/mod.rs

pub mod html;
pub mod sanitize;
pub mod table;
pub mod vischars;

pub use table::{parse_tables, Cell, GridRow, Row, Table};
