// src/core/grid.rs

/// One parsed HTML table: rows of cell text, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableGrid {
    rows: Vec<Vec<String>>,
}

impl TableGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Convenience for fixtures: `TableGrid::from_rows(&[&["a", "b"], &["c"]])`.
    pub fn from_rows(rows: &[&[&str]]) -> Self {
        Self::new(rows.iter().map(|r| r.iter().map(|c| s!(*c)).collect()).collect())
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Column `col` top to bottom, one entry per row. A row too short to have
    /// the column yields `None`, so positions stay aligned with row indices.
    pub fn column(&self, col: usize) -> Vec<Option<&str>> {
        self.rows.iter().map(|r| r.get(col).map(String::as_str)).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_are_positional() {
        let g = TableGrid::from_rows(&[&["a", "b"], &["c"], &["d", "e", "f"]]);
        assert_eq!(g.len(), 3);
        assert_eq!(g.cell(0, 1), Some("b"));
        assert_eq!(g.cell(1, 1), None);
        assert_eq!(g.cell(9, 0), None);
        assert_eq!(g.column(1), vec![Some("b"), None, Some("e")]);
        assert_eq!(g.row(2).map(<[String]>::len), Some(3));
    }
}
