//! Untyped cell values as they come out of the vendor workbook.
//!
//! The workbook parser reduces every spreadsheet cell to one of these three
//! shapes so the normalizer never has to know which spreadsheet library (or
//! workbook format) produced the data.

/// A single untyped cell from a vendor spreadsheet row.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// A numeric cell. Spreadsheet serial dates also arrive as this variant.
    Number(f64),
    /// A textual cell, whitespace and all.
    Text(String),
    /// An empty or unreadable cell.
    Empty,
}

impl RawCell {
    /// Returns the trimmed textual content of the cell, if any.
    ///
    /// Numbers are rendered without a trailing `.0` so that a carrier code or
    /// route typed as a numeric cell still comes through as plain text.
    pub fn text(&self) -> Option<String> {
        match self {
            RawCell::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            RawCell::Number(n) if n.is_finite() => {
                if n.fract() == 0.0 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(n.to_string())
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_trims_and_drops_empty() {
        assert_eq!(RawCell::Text("  KE ".into()).text().as_deref(), Some("KE"));
        assert_eq!(RawCell::Text("   ".into()).text(), None);
        assert_eq!(RawCell::Empty.text(), None);
    }

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(RawCell::Number(700.0).text().as_deref(), Some("700"));
        assert_eq!(RawCell::Number(2.5).text().as_deref(), Some("2.5"));
    }
}
