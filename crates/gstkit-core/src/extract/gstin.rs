//! GSTIN (Goods and Services Tax Identification Number) extraction.
//!
//! A GSTIN is a fixed 15-character identifier: 2-digit state code,
//! 10-character PAN (5 letters, 4 digits, 1 letter), entity digit,
//! the literal `Z`, and a check character.

use super::patterns::{GSTIN_FORMAT, GSTIN_LABELED, GSTIN_STRICT};
use super::FieldExtractor;

/// GSTIN field extractor.
///
/// The loose form accepts any 15-character uppercase alphanumeric token
/// after a `GSTIN`/`GST No.` label; the strict form only matches tokens
/// in the structured layout.
pub struct GstinExtractor {
    strict: bool,
}

impl GstinExtractor {
    /// Loose extractor (sales invoices).
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Strict extractor (purchase bills).
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

impl Default for GstinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GstinExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let pattern = if self.strict { &*GSTIN_STRICT } else { &*GSTIN_LABELED };

        pattern
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Validate the structured 15-character GSTIN layout.
pub fn validate_gstin(candidate: &str) -> bool {
    GSTIN_FORMAT.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_gstin() {
        assert!(validate_gstin("27AAPFU0939F1ZV"));
        assert!(validate_gstin("29ABCDE1234F2Z5"));
        // Wrong length.
        assert!(!validate_gstin("27AAPFU0939F1Z"));
        // Entity digit may not be zero.
        assert!(!validate_gstin("27AAPFU0939F0ZV"));
        // Fourteenth character must be Z.
        assert!(!validate_gstin("27AAPFU0939F1XV"));
        // PAN section must be letters.
        assert!(!validate_gstin("27AAP1U0939F1ZV"));
    }

    #[test]
    fn test_loose_extracts_in_text_order() {
        let text = "GSTIN: 27AAPFU0939F1ZV ... GST No. 29ABCDE1234F2Z5";
        let all = GstinExtractor::new().extract_all(text);
        assert_eq!(
            all,
            vec!["27AAPFU0939F1ZV".to_string(), "29ABCDE1234F2Z5".to_string()]
        );
    }

    #[test]
    fn test_loose_requires_label() {
        let text = "27AAPFU0939F1ZV appears with no label";
        assert_eq!(GstinExtractor::new().extract(text), None);
    }

    #[test]
    fn test_strict_rejects_malformed_token() {
        // 15 alphanumerics but not in the structured layout: loose takes
        // it, strict refuses.
        let text = "GSTIN: ABCDEFGH1234567";
        assert_eq!(
            GstinExtractor::new().extract(text),
            Some("ABCDEFGH1234567".to_string())
        );
        assert_eq!(GstinExtractor::strict().extract(text), None);
    }

    #[test]
    fn test_strict_accepts_structured_token() {
        let text = "Vendor GSTIN 27AAPFU0939F1ZV Pune";
        assert_eq!(
            GstinExtractor::strict().extract(text),
            Some("27AAPFU0939F1ZV".to_string())
        );
    }
}
