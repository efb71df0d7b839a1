//! Regex patterns for invoice and bill field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Invoice number: anchored on the literal "Invoice" label. The sales
    // form allows lowercase and underscores; the purchase form is the
    // uppercase variant with a "Bill" label alternative.
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)Invoice\s*(?:No\.?|Number)?[\s:]*([A-Za-z0-9\-_/]+)"
    ).unwrap();

    pub static ref BILL_NUMBER: Regex = Regex::new(
        r"(?i)Invoice\s*(?:No|Number|Bill)?[\s:]*([A-Z0-9/-]+)"
    ).unwrap();

    // Candidates that are document markings rather than identifiers.
    pub static ref NON_NUMBER_WORDS: Regex = Regex::new(
        r"(?i)^(?:original|duplicate|copy|tax\s*invoice)$"
    ).unwrap();

    pub static ref NUMBER_CHARSET: Regex = Regex::new(
        r"[^A-Za-z0-9\-_/]"
    ).unwrap();

    pub static ref HAS_DIGIT: Regex = Regex::new(r"\d").unwrap();

    // Date tokens: numeric DD/MM/YYYY-style or long "12 March 2024".
    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"\b(?:\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}|\d{1,2}\s+[A-Za-z]{3,9}\s+\d{4})\b"
    ).unwrap();

    // Purchase bills only accept numeric dates with four-digit years.
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"\d{1,2}[/\-]\d{1,2}[/\-]\d{4}"
    ).unwrap();

    // Party name spans, bounded by the next label or end of text.
    pub static ref VENDOR_SPAN: Regex = Regex::new(
        r"(?i)(?:Billed From|Vendor|From)[\s:]*(.*?)(?:GSTIN|Address|$)"
    ).unwrap();

    pub static ref CUSTOMER_SPAN: Regex = Regex::new(
        r"(?i)(?:Billed To|Customer)[\s:]*(.*?)(?:GSTIN|Address|$)"
    ).unwrap();

    pub static ref SELLER_SPAN: Regex = Regex::new(
        r"(?i)(?:From|Seller|Vendor)[\s:]+([^0-9]+?)(?:GSTIN|$)"
    ).unwrap();

    // GSTIN: loose form takes any 15-char uppercase alphanumeric token
    // after the label; strict form validates the structured layout
    // (state code, PAN, entity digit, the literal Z, check character).
    pub static ref GSTIN_LABELED: Regex = Regex::new(
        r"(?:GSTIN|GST No\.?)[\s:]*([0-9A-Z]{15})\b"
    ).unwrap();

    pub static ref GSTIN_STRICT: Regex = Regex::new(
        r"(?i)GSTIN[\s:]*([0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z])"
    ).unwrap();

    pub static ref GSTIN_FORMAT: Regex = Regex::new(
        r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$"
    ).unwrap();

    // Sales line items: the block between the item-table header and the
    // totals section, and the composite per-line pattern capturing
    // name / HSN / quantity / price / rate / tax amount.
    pub static ref ITEMS_BLOCK: Regex = Regex::new(
        r"(?is)(?:Items|Name of Product / Service)(.*?)(?:Total in words|Total Amount)"
    ).unwrap();

    pub static ref ITEM_LINE: Regex = Regex::new(
        r"^(.+?)\s+([0-9A-Za-z]+)?\s+([0-9,.]+)\s+([0-9,.]+)\s*(?:@|\+)?\s*(\d+)?%?\s*([0-9,.]+)?"
    ).unwrap();

    // Purchase line items: header through the totals line; candidate
    // lines are split on whitespace and classified positionally.
    pub static ref PARTICULARS_BLOCK: Regex = Regex::new(
        r"(?is)(?:Description|Particulars|Item).+?Total"
    ).unwrap();

    pub static ref SUMMARY_LINE: Regex = Regex::new(
        r"(?i)Total|Taxable"
    ).unwrap();

    // Labeled amounts. Sales totals require two decimal places; purchase
    // amounts are looser and tolerate a missing fraction.
    pub static ref TAXABLE_AMOUNT: Regex = Regex::new(
        r"(?i)Taxable Amount[\s:]*₹?\s*([0-9,]+\.\d{2})"
    ).unwrap();

    pub static ref IGST_AMOUNT: Regex = Regex::new(
        r"(?i)IGST[\s:]*([0-9,]+\.\d{2})"
    ).unwrap();

    pub static ref TOTAL_AMOUNT: Regex = Regex::new(
        r"(?i)(?:Total\s*Amount|Net Total)[\s:]*₹?\s*([0-9,]+\.\d{2})"
    ).unwrap();

    pub static ref TOTAL_LOOSE: Regex = Regex::new(
        r"(?i)Total[\s:₹]*([0-9,]+\.?[0-9]*)"
    ).unwrap();

    pub static ref TAXABLE_LOOSE: Regex = Regex::new(
        r"(?i)Taxable[\s:₹]*([0-9,]+\.?[0-9]*)"
    ).unwrap();

    pub static ref CGST_LOOSE: Regex = Regex::new(
        r"(?i)CGST[\s:₹]*([0-9,]+\.?[0-9]*)"
    ).unwrap();

    pub static ref SGST_LOOSE: Regex = Regex::new(
        r"(?i)SGST[\s:₹]*([0-9,]+\.?[0-9]*)"
    ).unwrap();

    pub static ref IGST_LOOSE: Regex = Regex::new(
        r"(?i)IGST[\s:₹]*([0-9,]+\.?[0-9]*)"
    ).unwrap();
}
