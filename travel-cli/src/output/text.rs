//! Fixed-width text output.
//!
//! Columns are padded to a common width (15 by default, wider when a name
//! does not fit). Values longer than the width are never cut.

/// Minimum column width.
pub const COLUMN_WIDTH: usize = 15;

/// Fixed-width text formatter
pub struct TextOutput;

impl TextOutput {
    /// Column width that fits every label plus a two-space gutter.
    pub fn column_width<'a>(labels: impl IntoIterator<Item = &'a str>) -> usize {
        labels
            .into_iter()
            .map(|l| l.chars().count() + 2)
            .max()
            .unwrap_or(0)
            .max(COLUMN_WIDTH)
    }

    /// Left-align every cell in `width` columns.
    pub fn left(cells: &[&str], width: usize) -> String {
        cells
            .iter()
            .map(|c| format!("{:<width$}", c, width = width))
            .collect()
    }

    /// Right-align every cell in `width` columns.
    pub fn right(cells: &[&str], width: usize) -> String {
        cells
            .iter()
            .map(|c| format!("{:>width$}", c, width = width))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_width() {
        assert_eq!(TextOutput::column_width(["Riverside", "Hemet"]), COLUMN_WIDTH);
        assert_eq!(
            TextOutput::column_width(["San Bernardino County Line"]),
            "San Bernardino County Line".len() + 2
        );
        assert_eq!(TextOutput::column_width(std::iter::empty()), COLUMN_WIDTH);
    }

    #[test]
    fn test_left() {
        assert_eq!(TextOutput::left(&["ab", "c"], 4), "ab  c   ");
    }

    #[test]
    fn test_right() {
        assert_eq!(TextOutput::right(&["ab", "c"], 4), "  ab   c");
    }

    #[test]
    fn test_long_values_are_not_cut() {
        assert_eq!(TextOutput::left(&["abcdef"], 3), "abcdef");
    }
}
