// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bordered text tables.
use std::fmt;

/// A bordered text table with one row per game result.
///
/// Headers print centered, cells print left aligned, and every column takes
/// the width of its widest cell:
///
/// ```text
/// +----------+------+
/// |  Player  | Wins |
/// +----------+------+
/// | Player 1 | 2    |
/// | Player 2 | 0    |
/// +----------+------+
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given column headers.
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Adds a row of cells, one per column.
    ///
    /// Panics if the number of cells differs from the number of columns.
    pub fn add_row(&mut self, cells: &[String]) {
        assert_eq!(cells.len(), self.headers.len());
        self.rows.push(cells.to_vec());
    }

    /// Column widths from the widest of header and cells.
    fn widths(&self) -> Vec<usize> {
        let mut widths = self.headers.iter().map(String::len).collect::<Vec<_>>();

        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        widths
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let border = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");
        let border = format!("+{border}+");

        let headers = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| format!(" {h:^w$} "))
            .collect::<Vec<_>>()
            .join("|");

        writeln!(f, "{border}")?;
        writeln!(f, "|{headers}|")?;
        writeln!(f, "{border}")?;

        for row in &self.rows {
            let cells = row
                .iter()
                .zip(&widths)
                .map(|(c, &w)| format!(" {c:<w$} "))
                .collect::<Vec<_>>()
                .join("|");
            writeln!(f, "|{cells}|")?;
        }

        write!(f, "{border}")
    }
}
