//! Field extraction for sales invoices.

use tracing::debug;

use crate::models::fields::{SalesInvoiceFields, SalesLineItem};

use super::amounts::{normalize_amount, LabeledAmount};
use super::patterns::*;
use super::{collapse_lines, first_line, DateExtractor, FieldExtractor, GstinExtractor};

/// Rule-based extractor for sales invoice transcripts.
///
/// Rules per field run in a fixed order and the first match wins; a
/// field with no match is reported as null. The extractor is a pure
/// function of the transcript.
pub struct SalesInvoiceExtractor;

impl SalesInvoiceExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Apply every field rule to the transcript.
    pub fn extract(&self, raw_text: &str) -> SalesInvoiceFields {
        let text = collapse_lines(raw_text);
        let gstins = GstinExtractor::new().extract_all(&text);

        let fields = SalesInvoiceFields {
            invoice_number: self.extract_invoice_number(&text),
            invoice_date: DateExtractor::new().extract(&text),
            vendor_name: self.extract_vendor_name(&text, raw_text),
            vendor_gstin: gstins.first().cloned(),
            customer_name: self.extract_customer_name(&text),
            customer_gstin: gstins.get(1).cloned(),
            items: self.extract_items(raw_text),
            taxable_amount: LabeledAmount::new(&TAXABLE_AMOUNT).extract(&text),
            igst_amount: LabeledAmount::new(&IGST_AMOUNT).extract(&text),
            total_amount: LabeledAmount::new(&TOTAL_AMOUNT).extract(&text),
            raw_text: raw_text.to_string(),
        };

        debug!(
            "extracted sales invoice {:?} with {} line items",
            fields.invoice_number,
            fields.items.len()
        );

        fields
    }

    /// Labeled token, stripped to the identifier alphabet. Candidates
    /// that are document markings or carry no digit are rejected.
    fn extract_invoice_number(&self, text: &str) -> Option<String> {
        let caps = INVOICE_NUMBER.captures(text)?;
        let cleaned = NUMBER_CHARSET.replace_all(&caps[1], "").trim().to_string();

        if cleaned.is_empty()
            || NON_NUMBER_WORDS.is_match(&cleaned)
            || !HAS_DIGIT.is_match(&cleaned)
        {
            return None;
        }

        Some(cleaned)
    }

    /// Span between the vendor label and the next GSTIN/Address label;
    /// falls back to the first transcript line when no label is present.
    fn extract_vendor_name(&self, text: &str, raw_text: &str) -> Option<String> {
        match VENDOR_SPAN.captures(text) {
            Some(caps) => Some(caps[1].trim().to_string()),
            None => first_line(raw_text),
        }
    }

    fn extract_customer_name(&self, text: &str) -> Option<String> {
        CUSTOMER_SPAN
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }

    /// Every non-blank line of the items block, matched against the
    /// composite line pattern.
    fn extract_items(&self, raw_text: &str) -> Vec<SalesLineItem> {
        let Some(caps) = ITEMS_BLOCK.captures(raw_text) else {
            return Vec::new();
        };

        caps[1]
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(parse_item_line)
            .collect()
    }
}

impl Default for SalesInvoiceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_item_line(line: &str) -> Option<SalesLineItem> {
    let caps = ITEM_LINE.captures(line)?;

    let name = caps[1].trim().to_string();
    let hsn_sac = caps.get(2).map(|m| m.as_str().trim().to_string());

    let quantity = non_empty_or(normalize_amount(&caps[3]), "1");
    let unit_price = non_empty_or(normalize_amount(&caps[4]), "0");

    // The one deliberate floating-point computation in the extractor.
    let line_total =
        quantity.parse::<f64>().unwrap_or(1.0) * unit_price.parse::<f64>().unwrap_or(0.0);

    let gst_rate = caps.get(5).map(|m| m.as_str().to_string());
    let gst_amount = caps.get(6).map(|m| normalize_amount(m.as_str()));

    Some(SalesLineItem {
        name,
        hsn_sac,
        quantity,
        unit_price,
        line_total: format!("{:?}", line_total),
        gst_rate,
        gst_amount,
    })
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invoice_number_labeled() {
        let extractor = SalesInvoiceExtractor::new();
        let fields = extractor.extract("Invoice No: INV-2024-001\n");
        assert_eq!(fields.invoice_number, Some("INV-2024-001".to_string()));
    }

    #[test]
    fn test_invoice_number_rejects_markings() {
        let extractor = SalesInvoiceExtractor::new();

        // "ORIGINAL" after the label is a copy marking, not a number.
        let fields = extractor.extract("Tax Invoice ORIGINAL\nAcme Traders");
        assert_eq!(fields.invoice_number, None);

        // A candidate without a single digit is rejected too.
        let fields = extractor.extract("Invoice Number: PENDING");
        assert_eq!(fields.invoice_number, None);
    }

    #[test]
    fn test_invoice_date_first_token_wins() {
        let extractor = SalesInvoiceExtractor::new();
        let fields = extractor.extract("Invoice Date: 15/01/2024\nDue: 29/01/2024");
        assert_eq!(fields.invoice_date, Some("15/01/2024".to_string()));
    }

    #[test]
    fn test_vendor_span_and_fallback() {
        let extractor = SalesInvoiceExtractor::new();

        let fields = extractor.extract("Billed From: Acme Traders GSTIN: 27AAPFU0939F1ZV");
        assert_eq!(fields.vendor_name, Some("Acme Traders".to_string()));

        // No vendor label anywhere: first transcript line stands in.
        let fields = extractor.extract("Acme Traders\nInvoice No: A-1\n");
        assert_eq!(fields.vendor_name, Some("Acme Traders".to_string()));
    }

    #[test]
    fn test_vendor_and_customer_gstin_by_occurrence() {
        let text = "Billed From: Acme GSTIN: 27AAPFU0939F1ZV\n\
                    Billed To: Zenith GSTIN: 29ABCDE1234F2Z5\n";
        let fields = SalesInvoiceExtractor::new().extract(text);

        assert_eq!(fields.vendor_gstin, Some("27AAPFU0939F1ZV".to_string()));
        assert_eq!(fields.customer_gstin, Some("29ABCDE1234F2Z5".to_string()));
        assert_eq!(fields.customer_name, Some("Zenith".to_string()));
    }

    #[test]
    fn test_single_gstin_leaves_customer_null() {
        let fields = SalesInvoiceExtractor::new().extract("GSTIN: 27AAPFU0939F1ZV\n");
        assert_eq!(fields.vendor_gstin, Some("27AAPFU0939F1ZV".to_string()));
        assert_eq!(fields.customer_gstin, None);
    }

    #[test]
    fn test_items_block() {
        let text = "Acme Traders\n\
                    Items\n\
                    Widget 7326 2 250.00 @ 18% 90.00\n\
                    Bolt 7318 10 35.50\n\
                    Total Amount: 1,018.90\n";
        let fields = SalesInvoiceExtractor::new().extract(text);

        assert_eq!(fields.items.len(), 2);

        let first = &fields.items[0];
        assert_eq!(first.name, "Widget");
        assert_eq!(first.hsn_sac, Some("7326".to_string()));
        assert_eq!(first.quantity, "2");
        assert_eq!(first.unit_price, "250.00");
        assert_eq!(first.line_total, "500.0");
        assert_eq!(first.gst_rate, Some("18".to_string()));
        assert_eq!(first.gst_amount, Some("90.00".to_string()));

        let second = &fields.items[1];
        assert_eq!(second.name, "Bolt");
        assert_eq!(second.gst_rate, None);
        assert_eq!(second.gst_amount, None);
        assert_eq!(second.line_total, "355.0");
    }

    #[test]
    fn test_totals() {
        let text = "Taxable Amount: ₹ 1,000.00\nIGST: 180.00\nTotal Amount: ₹ 1,180.00\n";
        let fields = SalesInvoiceExtractor::new().extract(text);

        assert_eq!(fields.taxable_amount, Some("1000.00".to_string()));
        assert_eq!(fields.igst_amount, Some("180.00".to_string()));
        assert_eq!(fields.total_amount, Some("1180.00".to_string()));
    }

    #[test]
    fn test_label_free_transcript_yields_nulls() {
        let raw = "blurry smudged page\nnothing recognizable here";
        let fields = SalesInvoiceExtractor::new().extract(raw);

        assert_eq!(fields.invoice_number, None);
        assert_eq!(fields.invoice_date, None);
        // Vendor name falls back to the first transcript line.
        assert_eq!(fields.vendor_name, Some("blurry smudged page".to_string()));
        assert_eq!(fields.vendor_gstin, None);
        assert_eq!(fields.customer_name, None);
        assert_eq!(fields.customer_gstin, None);
        assert!(fields.items.is_empty());
        assert_eq!(fields.taxable_amount, None);
        assert_eq!(fields.igst_amount, None);
        assert_eq!(fields.total_amount, None);
        assert_eq!(fields.raw_text, raw);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Invoice No: INV-7\nBilled From: Acme GSTIN: 27AAPFU0939F1ZV\n\
                    Items\nWasher 7318 4 1.25\nTotal Amount: 5.00\n";
        let extractor = SalesInvoiceExtractor::new();

        assert_eq!(extractor.extract(text), extractor.extract(text));
    }
}
