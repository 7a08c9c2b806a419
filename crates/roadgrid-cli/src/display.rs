//! Tabular display of matrices.

use std::fmt::Write;

/// Width of every column in a matrix table.
const COLUMN_WIDTH: usize = 15;

/// Formats a travel time with one decimal, `∞` when unreachable.
pub fn format_time(time: f64) -> String {
    if time.is_finite() {
        format!("{:.1}", time)
    } else {
        "∞".to_string()
    }
}

/// Renders a square matrix with location names as row and column headers.
pub fn matrix_table(names: &[String], rows: &[Vec<f64>]) -> String {
    let mut out = String::new();

    let _ = write!(out, "{:>width$}", "", width = COLUMN_WIDTH);
    for name in names {
        let _ = write!(out, "{:>width$}", name, width = COLUMN_WIDTH);
    }
    out.push('\n');

    for (name, row) in names.iter().zip(rows) {
        let _ = write!(out, "{:>width$}", name, width = COLUMN_WIDTH);
        for &value in row {
            let _ = write!(out, "{:>width$}", format_time(value), width = COLUMN_WIDTH);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(15.0), "15.0");
        assert_eq!(format_time(2.34), "2.3");
        assert_eq!(format_time(f64::INFINITY), "∞");
    }

    #[test]
    fn test_matrix_table_layout() {
        let names = vec!["A".to_string(), "B".to_string()];
        let rows = vec![vec![0.0, 10.0], vec![f64::INFINITY, 0.0]];

        let table = matrix_table(&names, &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("{:>15}{:>15}{:>15}", "", "A", "B"));
        assert_eq!(lines[1], format!("{:>15}{:>15}{:>15}", "A", "0.0", "10.0"));
        assert_eq!(lines[2], format!("{:>15}{:>15}{:>15}", "B", "∞", "0.0"));
    }
}
