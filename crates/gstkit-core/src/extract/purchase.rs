//! Field extraction for purchase bills.
//!
//! Differs from the sales extractor by contract: every amount defaults
//! to the string `"0"` when unmatched, the tax split is extracted per
//! head (CGST/SGST/IGST), the vendor GSTIN must satisfy the structured
//! 15-character layout, and line items are classified positionally from
//! the trailing tokens of each candidate line.

use tracing::debug;

use crate::models::fields::{PurchaseBillFields, PurchaseLineItem};

use super::amounts::{normalize_amount, LabeledAmount};
use super::patterns::*;
use super::{collapse_lines, first_line, DateExtractor, FieldExtractor, GstinExtractor};

/// Rule-based extractor for purchase bill transcripts.
pub struct PurchaseBillExtractor;

impl PurchaseBillExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Apply every field rule to the transcript.
    pub fn extract(&self, raw_text: &str) -> PurchaseBillFields {
        let text = collapse_lines(raw_text);

        let fields = PurchaseBillFields {
            bill_type: "purchase".to_string(),
            invoice_number: BILL_NUMBER
                .captures(&text)
                .map(|caps| caps[1].trim().to_string()),
            invoice_date: DateExtractor::numeric().extract(&text),
            vendor_name: self.extract_vendor_name(&text, raw_text),
            vendor_gstin: GstinExtractor::strict().extract(&text),
            taxable_amount: LabeledAmount::new(&TAXABLE_LOOSE).extract_or_zero(&text),
            cgst_amount: LabeledAmount::new(&CGST_LOOSE).extract_or_zero(&text),
            sgst_amount: LabeledAmount::new(&SGST_LOOSE).extract_or_zero(&text),
            igst_amount: LabeledAmount::new(&IGST_LOOSE).extract_or_zero(&text),
            total_amount: LabeledAmount::new(&TOTAL_LOOSE).extract_or_zero(&text),
            items: extract_particulars(raw_text),
            raw_text: raw_text.to_string(),
        };

        debug!(
            "extracted purchase bill {:?} with {} line items",
            fields.invoice_number,
            fields.items.len()
        );

        fields
    }

    fn extract_vendor_name(&self, text: &str, raw_text: &str) -> Option<String> {
        match SELLER_SPAN.captures(text) {
            Some(caps) => Some(caps[1].trim().to_string()),
            None => first_line(raw_text),
        }
    }
}

impl Default for PurchaseBillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan the block between the particulars header and the totals line.
/// A candidate line must carry a digit, must not be a summary line, and
/// must split into more than three whitespace tokens; the trailing three
/// tokens classify as HSN / quantity / rate by digit-class checks.
fn extract_particulars(raw_text: &str) -> Vec<PurchaseLineItem> {
    let Some(block) = PARTICULARS_BLOCK.find(raw_text) else {
        return Vec::new();
    };

    let mut items = Vec::new();

    for line in block.as_str().lines() {
        if !HAS_DIGIT.is_match(line) || SUMMARY_LINE.is_match(line) {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() <= 3 {
            continue;
        }

        let (head, tail) = parts.split_at(parts.len() - 3);
        items.push(PurchaseLineItem {
            description: head.join(" "),
            hsn: classify_hsn(tail[0]),
            quantity: classify_quantity(tail[1]),
            rate: classify_rate(tail[2]),
        });
    }

    items
}

/// An HSN token is all digits and at most 8 characters.
fn classify_hsn(token: &str) -> String {
    if !token.is_empty() && token.len() <= 8 && token.chars().all(|c| c.is_ascii_digit()) {
        token.to_string()
    } else {
        String::new()
    }
}

/// A quantity token is digits with optional decimal points.
fn classify_quantity(token: &str) -> String {
    if is_decimal_token(token) {
        token.to_string()
    } else {
        "1".to_string()
    }
}

/// A rate token is digits with optional separators; commas are stripped
/// from the reported value.
fn classify_rate(token: &str) -> String {
    let stripped = normalize_amount(token);
    if is_decimal_token(&stripped) {
        stripped
    } else {
        "0".to_string()
    }
}

fn is_decimal_token(token: &str) -> bool {
    let digits: String = token.chars().filter(|c| *c != '.').collect();
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
