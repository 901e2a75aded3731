// src/specs/manual.rs
//! Spec for the hand-written API reference.
//!
//! The page carries one table whose first row reads
//! `Method | Returns | Signature | Description` (or the older
//! `Method | Return Type | Signature(s) | Description`). Every later row
//! documents one overload.
//!
//! Authors lay out overloads in a few ways, all accepted:
//! - full four-cell rows with the method repeated,
//! - a blank method cell (and optionally a blank return cell) meaning
//!   "same as the row above",
//! - `rowspan` on the method/return cells,
//! - short rows that simply leave out the leading cells: a three-cell row is
//!   `returns | signature | description`, a two-cell row is
//!   `signature | description`.

use crate::config::consts::MANUAL_HEADERS;
use crate::core::sanitize::normalize_ws;
use crate::core::{parse_tables, Table};
use crate::model::{record, SignatureMap};
use crate::normalize::normalize;

const WIDTH: usize = 4;

/// Extract every documented signature. Empty when no qualifying table exists.
pub fn extract(doc: &str) -> SignatureMap {
    let tables = parse_tables(doc);
    match find_doc_table(&tables) {
        Some(table) => extract_from_table(table),
        None => {
            logd!("Manual: no table with a recognised header among {} tables", tables.len());
            SignatureMap::new()
        }
    }
}

/// First table whose header row has exactly the four expected labels.
pub fn find_doc_table(tables: &[Table]) -> Option<&Table> {
    tables.iter().find(|t| t.rows.first().is_some_and(|row| {
        let labels: Vec<String> = row.cells.iter().map(|c| normalize_ws(&c.text)).collect();
        labels.len() == WIDTH
            && MANUAL_HEADERS.iter().any(|h| labels.iter().zip(h).all(|(a, b)| a == b))
    }))
}

pub fn extract_from_table(table: &Table) -> SignatureMap {
    let mut map = SignatureMap::new();
    let mut method: Option<String> = None;
    let mut returns = s!();

    for (i, row) in table.grid(WIDTH).iter().enumerate().skip(1) {
        let cols = &row.cols;
        // A method cell spanning rows makes each later row a continuation.
        let label = if row.carried[0] { "" } else { cols[0].trim() };
        let ret = cols[1].trim();
        let body = cols[2].trim();

        if !label.is_empty() {
            method = Some(s!(label));
            returns = normalize(ret);
        } else if !ret.is_empty() {
            returns = normalize(ret);
        } else if body.is_empty() {
            // description-only continuation
            logd!("Manual: row {i} has no method, return or signature; skipped");
            continue;
        }

        let Some(name) = method.as_deref() else {
            logd!("Manual: row {i} continues no method; skipped");
            continue;
        };
        let signature = join!(name, " (", &normalize(body), ")");
        logd!("Manual: {name} -> {returns} | {signature}");
        record(&mut map, name, returns.clone(), signature);
    }

    logd!("Manual: {} methods documented", map.len());
    map
}
