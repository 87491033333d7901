//! Box-drawn tables for tabular command output.

/// A table rendered with box-drawing borders.
///
/// Rows may be shorter than the header; missing cells render empty.
/// Column widths fit the widest cell at render time.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new table with the given column headers.
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            headers: headers.into_iter().map(str::to_string).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row.
    pub fn add_row(&mut self, row: Vec<&str>) {
        self.rows.push(row.into_iter().map(str::to_string).collect());
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.column_widths();

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(border(&widths, '┌', '┬', '┐'));
        lines.push(data_line(&widths, &self.headers));
        lines.push(border(&widths, '├', '┼', '┤'));
        for row in &self.rows {
            lines.push(data_line(&widths, row));
        }
        lines.push(border(&widths, '└', '┴', '┘'));

        lines.join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }
        widths
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let spans: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, spans.join(&mid.to_string()), right)
}

fn data_line(widths: &[usize], row: &[String]) -> String {
    let mut line = String::from("│");
    for (i, &width) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        line.push_str(&format!(" {:width$} │", cell, width = width));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty() {
        let table = Table::new(vec!["Name", "Category"]);
        assert!(table.is_empty());

        let output = table.render();
        assert!(output.contains("Name"));
        assert!(output.contains("Category"));
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(vec!["Name", "Category"]);
        table.add_row(vec!["Meropenem", "carbapenem"]);
        table.add_row(vec!["Vancomycin", "glycopeptide"]);

        assert!(!table.is_empty());

        let output = table.render();
        assert!(output.contains("Meropenem"));
        assert!(output.contains("carbapenem"));
        assert!(output.contains("Vancomycin"));
        assert!(output.contains("glycopeptide"));
    }

    #[test]
    fn table_fits_the_widest_cell() {
        let mut table = Table::new(vec!["A"]);
        table.add_row(vec!["a_much_longer_value"]);

        let output = table.render();
        assert!(output.contains("a_much_longer_value"));
        // Every line spans the widened column.
        let lens: Vec<usize> = output.lines().map(|l| l.chars().count()).collect();
        assert!(lens.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn table_uses_box_drawing() {
        let table = Table::new(vec!["Test"]);
        let output = table.render();

        assert!(output.contains("┌"));
        assert!(output.contains("┐"));
        assert!(output.contains("└"));
        assert!(output.contains("┘"));
        assert!(output.contains("│"));
        assert!(output.contains("─"));
    }

    #[test]
    fn table_handles_missing_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(vec!["only", "two"]);

        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }

    #[test]
    fn table_render_consistency() {
        let mut table = Table::new(vec!["Range", "Dose", "Frequency"]);
        table.add_row(vec!["Normal", "1g", "q8h"]);
        table.add_row(vec!["50~60", "1g", "q12h"]);
        table.add_row(vec!["<5", "500mg", "q24h"]);

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();

        // Top border, header, separator, 3 data rows, bottom border
        assert_eq!(lines.len(), 7);
    }
}
