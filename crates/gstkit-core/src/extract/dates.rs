//! Date token extraction.
//!
//! Dates are reported verbatim as they appear in the transcript; the
//! winner is the earliest token in text order.

use super::patterns::{DATE_NUMERIC, DATE_TOKEN};
use super::FieldExtractor;

/// Date field extractor.
pub struct DateExtractor {
    numeric_only: bool,
}

impl DateExtractor {
    /// Accept numeric (`31/03/2024`, `31-3-24`) and long-form
    /// (`31 March 2024`) tokens.
    pub fn new() -> Self {
        Self { numeric_only: false }
    }

    /// Accept only numeric tokens with four-digit years.
    pub fn numeric() -> Self {
        Self { numeric_only: true }
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let pattern = if self.numeric_only { &*DATE_NUMERIC } else { &*DATE_TOKEN };

        pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
