// src/specs/generated.rs
//! Spec for generator output (Doxygen-style class pages).
//!
//! Member declarations sit in tables tagged `class="memberdecls"`. A
//! declaration row has exactly two class-less `<td>` cells: the return type
//! and the full signature, e.g. `void` | `crop (const Geometry &geometry_) const`.
//!
//! The signature is cut right after the `)` that closes its first `(`, which
//! drops trailing `const`, `noexcept`, `= 0` and the like. The method name is
//! the identifier directly in front of that first `(`.
//!
//! Known limitation: operators and names written with template arguments do
//! not yield their real name. `operator= (...)` has no identifier right before
//! its `(` and is skipped; `operator() (...)` is filed under `operator`.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::MEMBER_DECLS_CLASS;
use crate::core::{parse_tables, Row};
use crate::model::{record, SignatureMap};
use crate::normalize::normalize;

// Identifier at the very end of the text before the first '('.
static TRAILING_IDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^A-Za-z0-9_])([A-Za-z_][A-Za-z0-9_]*)\s*$").expect("valid regex")
});

pub fn extract(doc: &str) -> SignatureMap {
    let mut map = SignatureMap::new();
    let mut tables = 0usize;

    for table in parse_tables(doc).iter().filter(|t| t.has_class(MEMBER_DECLS_CLASS)) {
        tables += 1;
        for (i, row) in table.rows.iter().enumerate() {
            let Some((ret, sig)) = declaration_cells(row) else { continue };
            let return_type = normalize(ret);
            let signature = s!(truncate_signature(&normalize(sig)));
            match method_name(&signature) {
                Some(name) => {
                    logd!("Generated: {name} -> {return_type} | {signature}");
                    record(&mut map, name, return_type, signature.clone());
                }
                None => logd!("Generated: table {tables} row {i}: no method name in {signature:?}"),
            }
        }
    }

    logd!("Generated: {} methods in {} member tables", map.len(), tables);
    map
}

// (return type, signature) text when the row is a two-cell declaration row.
fn declaration_cells(row: &Row) -> Option<(&str, &str)> {
    let mut cells = row.cells.iter().filter(|c| !c.header && !c.has_class_attr());
    let ret = cells.next()?;
    let sig = cells.next()?;
    match cells.next() {
        None => Some((ret.text.as_str(), sig.text.as_str())),
        Some(_) => None,
    }
}

/// Keep everything up to the `)` matching the first `(`. Text without a
/// `(`, or whose first `(` is never closed, comes back unchanged.
pub fn truncate_signature(sig: &str) -> &str {
    let Some(open) = sig.find('(') else { return sig };
    let mut depth = 0usize;
    for (i, ch) in sig[open..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return &sig[..open + i + 1];
                }
            }
            _ => {}
        }
    }
    sig
}

/// Identifier immediately preceding the first `(`, if any.
pub fn method_name(sig: &str) -> Option<&str> {
    let open = sig.find('(')?;
    TRAILING_IDENT
        .captures(&sig[..open])
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncation_drops_qualifiers() {
        assert_eq!(truncate_signature("crop (size_t w, size_t h) const"), "crop (size_t w, size_t h)");
        assert_eq!(truncate_signature("f (void (*cb)(int)) noexcept"), "f (void (*cb)(int))");
        assert_eq!(truncate_signature("broken (int"), "broken (int");
        assert_eq!(truncate_signature("columns"), "columns");
    }

    #[test]
    fn names() {
        assert_eq!(method_name("crop (size_t w)"), Some("crop"));
        assert_eq!(method_name("crop(size_t w)"), Some("crop"));
        assert_eq!(method_name("~Image ()"), Some("Image"));
        assert_eq!(method_name("operator= (const Image& image_)"), None);
        assert_eq!(method_name("operator() (int)"), Some("operator"));
        assert_eq!(method_name("(int)"), None);
        assert_eq!(method_name("3d (int)"), None);
        assert_eq!(method_name("no parens"), None);
    }

    #[test]
    fn only_memberdecls_tables_and_two_cell_rows() {
        let doc = r#"
            <table class="memberdecls">
              <tr class="heading"><td colspan="2"><h2>Public Member Functions</h2></td></tr>
              <tr><td>void </td><td>crop (const Geometry &amp;geometry_)</td></tr>
              <tr><td>void</td><td>crop (size_t w, size_t h) const</td></tr>
              <tr><td>a</td><td>b (int)</td><td>extra</td></tr>
              <tr><td class="mdescLeft">&#160;</td><td class="mdescRight">Crop (in place)</td></tr>
            </table>
            <table class="other"><tr><td>int</td><td>hidden (int)</td></tr></table>
        "#;
        let map = extract(doc);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["crop"]);
        let e = &map["crop"];
        assert_eq!(e.returns.iter().collect::<Vec<_>>(), vec!["void"]);
        assert_eq!(
            e.signatures.iter().collect::<Vec<_>>(),
            vec!["crop (const Geometry& geometry_)", "crop (size_t w, size_t h)"]
        );
    }

    #[test]
    fn rows_without_name_skipped() {
        let doc = r#"<table class="memberdecls"><tr><td>int</td><td>count</td></tr></table>"#;
        assert!(extract(doc).is_empty());
    }
}
