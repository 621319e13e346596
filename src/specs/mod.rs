// src/specs/mod.rs
//! # Page "specs" module
//!
//! One spec per yoweb page kind. Each spec encodes *where the ground truth lives*
//! in the page's table grid (table N, row R, column C) and hands the cells to the
//! matching records. Nothing outside this module indexes into a grid by position,
//! so when the site shuffles its markup only the affected spec changes.
//!
//! ## What lives here
//! - **Positional layout contracts**, one named accessor per logical field
//!   (`affiliation_text`, `third_frame`, …).
//! - **Page-level text dispatch** that needs more than one record, e.g. deriving a
//!   crew's name from whichever heading layout the page uses.
//! - **Strictness**: a missing table/row/cell is a [`YowebError::Parse`], never a
//!   silently empty record.
//!
//! ## What does **not** live here
//! - **Fetching or caching**: specs take `&[TableGrid]` and return a snapshot;
//!   the entity handles decide when to load.
//! - **Record semantics**: splitting a reputation column or a roster is the
//!   record's job (`crate::records`).
//!
//! ## Typical call chain
//! ```text
//! Pirate::affiliations → LazyPage::ensure_loaded → TableFetcher::fetch_tables
//!                                               ↘ specs::pirate::parse → records::*
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against grids whose shape is pinned in the tests, so
//! a layout change shows up as a failing shape test rather than a wrong value.

pub mod crew;
pub mod flag;
pub mod pirate;
pub mod taxes;

use crate::core::TableGrid;
use crate::error::{Result, YowebError};

pub(crate) fn table<'g>(tables: &'g [TableGrid], page: &'static str, idx: usize) -> Result<&'g TableGrid> {
    tables.get(idx).ok_or_else(|| {
        YowebError::parse(page, format!("table {idx} missing (page has {})", tables.len()))
    })
}

pub(crate) fn cell<'g>(
    tables: &'g [TableGrid],
    page: &'static str,
    idx: usize,
    row: usize,
    col: usize,
) -> Result<&'g str> {
    table(tables, page, idx)?
        .cell(row, col)
        .ok_or_else(|| YowebError::parse(page, format!("table {idx} has no cell at row {row}, column {col}")))
}

pub(crate) fn column<'g>(
    tables: &'g [TableGrid],
    page: &'static str,
    idx: usize,
    col: usize,
) -> Result<Vec<&'g str>> {
    let values = table(tables, page, idx)?.column(col);
    if values.is_empty() {
        return Err(YowebError::parse(page, format!("table {idx} has no column {col}")));
    }
    // Values are read by position, so a short row must not shift the rest up.
    values
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.ok_or_else(|| {
                YowebError::parse(page, format!("table {idx} row {row} has no column {col}"))
            })
        })
        .collect()
}

/// The text between the first and second occurrence of `sep`, or after the
/// first one if it occurs only once.
pub(crate) fn piece_after<'t>(text: &'t str, sep: &str) -> Option<&'t str> {
    text.split(sep).nth(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_report_position() {
        let tables = vec![TableGrid::from_rows(&[&["a"]])];
        assert_eq!(cell(&tables, "test", 0, 0, 0).unwrap(), "a");

        let e = cell(&tables, "test", 0, 1, 0).unwrap_err();
        assert!(e.to_string().contains("row 1, column 0"));
        let e = table(&tables, "test", 3).unwrap_err();
        assert!(e.to_string().contains("table 3 missing"));
        assert!(column(&tables, "test", 0, 2).is_err());
    }

    #[test]
    fn column_with_a_short_row_is_an_error() {
        let tables = vec![TableGrid::from_rows(&[&["a", "1"], &["b"], &["c", "3"]])];
        let e = column(&tables, "test", 0, 1).unwrap_err();
        assert!(e.to_string().contains("row 1 has no column 1"));
        assert_eq!(column(&tables, "test", 0, 0).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn piece_after_matches_split_semantics() {
        assert_eq!(piece_after("a: b: c", ": "), Some("b"));
        assert_eq!(piece_after("a: b", ": "), Some("b"));
        assert_eq!(piece_after("ab", ": "), None);
    }
}
