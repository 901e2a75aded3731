// src/normalize.rs
//! Canonical form for return types and signatures lifted out of HTML cells.
//!
//! Two renderings of the same declaration must compare equal after
//! [`normalize`], whatever the markup did to whitespace. Rules, in order:
//!
//! 1. newline, tab, carriage return and non-breaking space become a space
//! 2. pointer/reference markers hug the left: `char * p` → `char* p`
//! 3. commas hug the left: `a ,b` → `a, b`
//! 4. `::` is removed (namespace/class qualification is not compared)
//! 5. whitespace runs collapse to one space; ends are trimmed
//!
//! The chain is re-run until the text stops changing, so spacing exposed by
//! step 4 gets the same treatment as everything else.

use std::sync::LazyLock;

use regex::Regex;

static LINE_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\n\t\r\u{a0}]").expect("valid regex"));
static PTR_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([*&]+)\s*").expect("valid regex"));
static COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("valid regex"));
static WS_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

const MAX_PASSES: usize = 8;

fn pass(s: &str) -> String {
    let s = LINE_NOISE.replace_all(s, " ");
    let s = PTR_REF.replace_all(&s, "$1 ");
    let s = COMMA.replace_all(&s, ", ");
    let s = s.replace("::", "");
    WS_RUN.replace_all(&s, " ").trim().to_string()
}

pub fn normalize(raw: &str) -> String {
    let mut cur = pass(raw);
    for _ in 1..MAX_PASSES {
        let next = pass(&cur);
        if next == cur {
            break;
        }
        cur = next;
    }
    cur
}
