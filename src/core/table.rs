// src/core/table.rs
//! Table collection built from a single tag scan over a document.
//!
//! Tolerates the usual hand-written shortcuts: omitted `</td>` / `</tr>`,
//! cells outside any `<tr>`, nested tables (collected as tables of their own,
//! their rows never leak into the enclosing table).

use super::html::{Tag, Tags, has_class};
use super::vischars::visible_text;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// `true` for `<th>`, `false` for `<td>`.
    pub header: bool,
    /// Attribute text of the opening tag.
    pub attrs: String,
    /// Visible text, entities decoded, trimmed.
    pub text: String,
}

impl Cell {
    pub fn has_class_attr(&self) -> bool {
        super::html::attr_value(&self.attrs, "class").is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    /// Attribute text of the `<table>` tag.
    pub attrs: String,
    pub rows: Vec<Row>,
}

/// One row of [`Table::grid`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridRow {
    pub cols: Vec<String>,
    /// `true` where the column was filled by a `rowspan` from a row above.
    pub carried: Vec<bool>,
}

impl Table {
    pub fn has_class(&self, token: &str) -> bool {
        has_class(&self.attrs, token)
    }

    /// Rectangular text grid `width` columns wide. `rowspan` cells are repeated
    /// into the rows below, `colspan` cells into the columns to the right.
    ///
    /// A row's own cells fill the columns no `rowspan` carried into it, aligned
    /// to the right: a short row leaves its leading free columns "", a long one
    /// drops what does not fit.
    pub fn grid(&self, width: usize) -> Vec<GridRow> {
        let mut carry: Vec<Option<(usize, String)>> = vec![None; width];
        let mut out = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            let mut line: Vec<Option<String>> = vec![None; width];
            for (col, slot) in carry.iter_mut().enumerate() {
                let expired = match slot {
                    Some((left, text)) => {
                        line[col] = Some(text.clone());
                        *left -= 1;
                        *left == 0
                    }
                    None => false,
                };
                if expired {
                    *slot = None;
                }
            }

            let own: Vec<(&str, usize)> = row
                .cells
                .iter()
                .flat_map(|c| {
                    let span = span_attr(&c.attrs, "colspan");
                    let rows = span_attr(&c.attrs, "rowspan");
                    std::iter::repeat_n((c.text.as_str(), rows), span)
                })
                .collect();

            let carried: Vec<bool> = line.iter().map(Option::is_some).collect();
            let free: Vec<usize> = (0..width).filter(|&c| !carried[c]).collect();
            let skip = free.len().saturating_sub(own.len());
            for (&col, (text, rows)) in free.iter().skip(skip).zip(own) {
                line[col] = Some(s!(text));
                if rows > 1 {
                    carry[col] = Some((rows - 1, s!(text)));
                }
            }

            out.push(GridRow {
                cols: line.into_iter().map(Option::unwrap_or_default).collect(),
                carried,
            });
        }
        out
    }
}

// `rowspan` / `colspan` value, at least 1; garbage reads as 1.
fn span_attr(attrs: &str, name: &str) -> usize {
    super::html::attr_value(attrs, name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, 1000)
}

// In-progress state for one open <table>.
struct Builder {
    slot: usize,
    table: Table,
    row: Option<Row>,
    cell: Option<(bool, String, usize)>, // (header, attrs, text start)
}

impl Builder {
    fn close_cell(&mut self, doc: &str, at: usize) {
        if let Some((header, attrs, from)) = self.cell.take() {
            let text = visible_text(&doc[from..at.max(from)]);
            self.row.get_or_insert_with(Row::default).cells.push(Cell { header, attrs, text });
        }
    }

    fn close_row(&mut self, doc: &str, at: usize) {
        self.close_cell(doc, at);
        if let Some(row) = self.row.take() {
            if !row.cells.is_empty() {
                self.table.rows.push(row);
            }
        }
    }
}

/// Every `<table>` of the document, in order of their opening tags.
pub fn parse_tables(doc: &str) -> Vec<Table> {
    let mut done: Vec<Option<Table>> = Vec::new();
    let mut open: Vec<Builder> = Vec::new();

    for tag in Tags::new(doc) {
        let Tag { name, is_close, attrs, start, end } = tag;

        if name == "table" {
            if !is_close {
                done.push(None);
                open.push(Builder {
                    slot: done.len() - 1,
                    table: Table { attrs: attrs.to_string(), rows: Vec::new() },
                    row: None,
                    cell: None,
                });
            } else if let Some(mut b) = open.pop() {
                b.close_row(doc, start);
                done[b.slot] = Some(b.table);
            }
            continue;
        }

        let Some(b) = open.last_mut() else { continue };
        match (name.as_str(), is_close) {
            ("tr", false) => {
                b.close_row(doc, start);
                b.row = Some(Row::default());
            }
            ("tr", true) => b.close_row(doc, start),
            ("td" | "th", false) => {
                b.close_cell(doc, start);
                b.cell = Some((name == "th", attrs.to_string(), end));
            }
            ("td" | "th", true) => b.close_cell(doc, start),
            _ => {}
        }
    }

    // Unclosed tables at end of input still count.
    while let Some(mut b) = open.pop() {
        b.close_row(doc, doc.len());
        done[b.slot] = Some(b.table);
    }

    done.into_iter().flatten().collect()
}
