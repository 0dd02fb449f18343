// src/extract.rs
//
// The extraction core: locate the first table, resolve a header for it,
// normalize the row shapes. Whole thing is a read-only walk over the
// parsed tree; output strings are copied out and outlive the document.

use std::sync::LazyLock;

use log::warn;
use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;

static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table"));
static THEAD: LazyLock<Selector> = LazyLock::new(|| sel("thead"));
static TH: LazyLock<Selector> = LazyLock::new(|| sel("th"));
static TR: LazyLock<Selector> = LazyLock::new(|| sel("tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| sel("th, td"));

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("selector literal")
}

/// Header + rows pulled out of one document. `header == None` means no
/// header was detected; rows are then raw positional data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableBundle {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl TableBundle {
    pub fn empty() -> Self {
        Self { header: None, rows: Vec::new() }
    }

    /// Neither header nor rows. The wrapper treats this as a failed run.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.rows.is_empty()
    }

    /// Header arity, 0 without a header.
    pub fn arity(&self) -> usize {
        self.header.as_ref().map_or(0, Vec::len)
    }
}

/// Extract the first table of a parsed document. No table at all is an
/// ordinary empty result, not an error.
pub fn extract(doc: &Html) -> TableBundle {
    let Some(table) = first_table(doc) else {
        warn!("no <table> element found in document");
        return TableBundle::empty();
    };
    let header = resolve_header(table);
    let rows = collect_rows(table, header.as_deref());
    TableBundle { header, rows }
}

/* ---------------- Table Locator ---------------- */

/// First `<table>` in document (pre-)order. Deliberately not the biggest
/// or "best" one when several exist.
pub fn first_table(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&TABLE).next()
}

/* ---------------- Header Resolver ---------------- */

/// Header policy, in strict priority order:
/// 1. `<th>` cells under the table's first `<thead>`, if any exist.
///    Whitespace-only cells stay as empty-string field names.
/// 2. Otherwise all cells of the first `<tr>`, if any exist. That row is
///    filtered out later by the normalizer's header-match rule.
/// 3. Otherwise no header.
pub fn resolve_header(table: ElementRef<'_>) -> Option<Vec<String>> {
    if let Some(thead) = table.select(&THEAD).next() {
        let cells: Vec<String> = thead.select(&TH).map(cell_text).collect();
        if !cells.is_empty() {
            return Some(cells);
        }
        // thead without <th> cells falls through to the first-row rule
    }

    let first_row = table.select(&TR).next()?;
    let cells: Vec<String> = first_row.select(&CELL).map(cell_text).collect();
    if cells.is_empty() { None } else { Some(cells) }
}

/* ---------------- Row Normalizer ---------------- */

/// Walk every `<tr>` under the table (header sections included) in
/// document order:
/// - rows contributing zero cells are dropped entirely;
/// - a row exactly equal to the header is dropped (this removes the
///   header row itself, and any literal duplicate of it among the data);
/// - rows shorter than the header are right-padded with empty strings;
/// - longer rows are emitted as-is, never truncated.
///
/// Never errors; zero usable rows is a legitimate empty result.
pub fn collect_rows(table: ElementRef<'_>, header: Option<&[String]>) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    for tr in table.select(&TR) {
        let mut cells: Vec<String> = tr.select(&CELL).map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        if let Some(h) = header {
            if cells.as_slice() == h {
                continue;
            }
            if cells.len() < h.len() {
                cells.resize(h.len(), s!());
            }
        }
        out.push(cells);
    }
    out
}

/// Trimmed, whitespace-collapsed text of one cell's subtree.
fn cell_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}
