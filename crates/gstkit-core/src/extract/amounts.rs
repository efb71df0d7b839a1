//! Labeled monetary amount extraction.

use regex::Regex;

/// Strip thousands separators from a captured amount.
pub fn normalize_amount(raw: &str) -> String {
    raw.replace(',', "")
}

/// One labeled-amount rule: a pattern whose first capture group is the
/// amount, normalized on the way out. A field that should read as zero
/// when unmatched uses [`LabeledAmount::extract_or_zero`]; a field that
/// should read as absent uses [`LabeledAmount::extract`].
pub struct LabeledAmount {
    pattern: &'static Regex,
}

impl LabeledAmount {
    pub fn new(pattern: &'static Regex) -> Self {
        Self { pattern }
    }

    /// First match with separators stripped, or `None`.
    pub fn extract(&self, text: &str) -> Option<String> {
        self.pattern
            .captures(text)
            .map(|caps| normalize_amount(&caps[1]))
    }

    /// First match with separators stripped, or the string `"0"`.
    pub fn extract_or_zero(&self, text: &str) -> String {
        self.extract(text).unwrap_or_else(|| "0".to_string())
    }
}
