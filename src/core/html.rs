// src/core/html.rs
//! Table extraction.
//!
//! Every `<table>` in the document becomes one [`TableGrid`], in document order,
//! nested tables included as grids of their own. A table owns the `<tr>` elements
//! whose nearest enclosing `<table>` is itself, so rows of a nested table never
//! leak into the outer grid. The outer cell still carries the nested text, folded
//! by [`fold_cell_text`]; that is where most double-space separators come from.
//!
//! Spanned cells are expanded so every position lines up with what the page
//! shows: `colspan` repeats a cell to the right, `rowspan` repeats it into the
//! same column of the rows below.

use scraper::{ElementRef, Html};

use super::grid::TableGrid;
use super::sanitize::fold_cell_text;

/// Upper bound on span expansion; anything larger is site noise.
const MAX_SPAN: usize = 64;

/// A cell still spanning down into later rows.
struct Carried {
    text: String,
    rows_left: usize,
}

pub fn extract_tables(doc: &str) -> Vec<TableGrid> {
    let html = Html::parse_document(doc);
    html.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "table")
        .map(read_table)
        .collect()
}

fn read_table(table: ElementRef<'_>) -> TableGrid {
    // indexed by column
    let mut carried: Vec<Option<Carried>> = Vec::new();
    let rows = table
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "tr" && owned_by(*el, table))
        .map(|tr| read_row(tr, &mut carried))
        .collect();
    TableGrid::new(rows)
}

/// `<td>`/`<th>` children of a row, with cells spanning down from earlier rows
/// slotted in at their column first.
fn read_row(tr: ElementRef<'_>, carried: &mut Vec<Option<Carried>>) -> Vec<String> {
    let mut cells = Vec::new();
    for cell in tr.children().filter_map(ElementRef::wrap) {
        if !matches!(cell.value().name(), "td" | "th") { continue; }

        take_carried(carried, &mut cells);
        let text = fold_cell_text(&cell.text().collect::<String>());
        let down = span(cell, "rowspan");
        for _ in 0..span(cell, "colspan") {
            if down > 1 {
                let col = cells.len();
                if carried.len() <= col {
                    carried.resize_with(col + 1, || None);
                }
                carried[col] = Some(Carried { text: text.clone(), rows_left: down - 1 });
            }
            cells.push(text.clone());
        }
    }
    take_carried(carried, &mut cells);
    cells
}

/// Fill consecutive columns from `cells.len()` on with cells spanning into this row.
fn take_carried(carried: &mut [Option<Carried>], cells: &mut Vec<String>) {
    loop {
        let col = cells.len();
        let Some(Some(c)) = carried.get_mut(col) else { break };
        cells.push(c.text.clone());
        c.rows_left -= 1;
        if c.rows_left == 0 {
            carried[col] = None;
        }
    }
}

fn span(cell: ElementRef<'_>, attr: &str) -> usize {
    cell.value()
        .attr(attr)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .map_or(1, |n| n.min(MAX_SPAN))
}

fn owned_by(el: ElementRef<'_>, table: ElementRef<'_>) -> bool {
    el.ancestors()
        .find(|n| n.value().as_element().is_some_and(|e| e.name() == "table"))
        .is_some_and(|n| ElementRef::wrap(n) == Some(table))
}
