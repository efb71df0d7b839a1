//! Rule-based field extraction from OCR transcripts.
//!
//! Every field is recovered by an ordered list of matcher/validator
//! pairs; the first pattern whose match passes validation wins, and a
//! field with no winning match is a miss, never an error. Scalar rules
//! run over the whitespace-collapsed transcript, line-item rules over
//! the raw line structure.

pub mod amounts;
pub mod dates;
pub mod gstin;
pub mod patterns;
pub mod purchase;
pub mod sales;

pub use gstin::{validate_gstin, GstinExtractor};
pub use dates::DateExtractor;
pub use purchase::PurchaseBillExtractor;
pub use sales::SalesInvoiceExtractor;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first winning match from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all matches of the field, in text order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Collapse a transcript to a single line: trims every line, drops blank
/// ones, and joins the rest with single spaces. Scalar patterns match
/// against this form so labels split across OCR lines still anchor.
pub fn collapse_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// First non-blank line of the transcript, trimmed.
pub fn first_line(raw: &str) -> Option<String> {
    raw.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_lines() {
        let raw = "  Acme Traders \n\n GSTIN: X\n";
        assert_eq!(collapse_lines(raw), "Acme Traders GSTIN: X");
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("\n  Acme Traders\nPune"), Some("Acme Traders".to_string()));
        assert_eq!(first_line("   \n\t\n"), None);
    }
}
