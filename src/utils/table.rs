//! Table rendering utilities for CLI outputs.

use super::formatting::{display_width, pad_right};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: display_width(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row; columns grow to fit the widest cell.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            let w = cell.lines().map(display_width).max().unwrap_or(0);
            col.width = col.width.max(w);
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.truncate(out.trim_end().len());
        out.push('\n');

        // Rows (multi-line cells are laid out side by side)
        for row in &self.rows {
            let height = row.iter().map(|c| c.lines().count().max(1)).max().unwrap_or(1);
            for line in 0..height {
                let mut text = String::new();
                for (i, col) in self.columns.iter().enumerate() {
                    let cell = row.get(i).and_then(|c| c.lines().nth(line)).unwrap_or("");
                    text.push_str(&pad_right(cell, col.width));
                    text.push(' ');
                }
                out.push_str(text.trim_end());
                out.push('\n');
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_grow_to_fit() {
        let mut t = Table::new(vec![Column::new("Fecha"), Column::new("Evento")]);
        t.add_row(vec!["Enero 05".into(), "A".into()]);
        t.add_row(vec!["Enero 20".into(), "una carrera\nlarga".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Fecha    Evento");
        assert_eq!(lines[1], "Enero 05 A");
        assert_eq!(lines[2], "Enero 20 una carrera");
        assert_eq!(lines[3], "         larga");
    }
}
