//! Extractor payloads returned to the calling process.
//!
//! Field keys are part of the wire contract and must not change: the
//! caller consumes the JSON printed on stdout by key. The two extractors
//! deliberately differ in how a missed field is represented: sales fields
//! are nullable (`Option`, serialized as `null`), purchase amounts are
//! defaulted to the string `"0"`.

use serde::{Deserialize, Serialize};

/// Fields recovered from a sales invoice transcript.
///
/// Any scalar may be `None` when no extraction rule matched; `items` may
/// be empty; `raw_text` always carries the full OCR transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesInvoiceFields {
    #[serde(rename = "Invoice Number")]
    pub invoice_number: Option<String>,

    #[serde(rename = "Invoice Date")]
    pub invoice_date: Option<String>,

    #[serde(rename = "Vendor Name")]
    pub vendor_name: Option<String>,

    #[serde(rename = "Vendor GSTIN")]
    pub vendor_gstin: Option<String>,

    #[serde(rename = "Customer Name")]
    pub customer_name: Option<String>,

    #[serde(rename = "Customer GSTIN")]
    pub customer_gstin: Option<String>,

    #[serde(rename = "Items")]
    pub items: Vec<SalesLineItem>,

    #[serde(rename = "Taxable Amount")]
    pub taxable_amount: Option<String>,

    #[serde(rename = "IGST Amount")]
    pub igst_amount: Option<String>,

    #[serde(rename = "Total Amount")]
    pub total_amount: Option<String>,

    pub raw_text: String,
}

/// One line item recovered from a sales invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesLineItem {
    #[serde(rename = "Item Name")]
    pub name: String,

    #[serde(rename = "HSN/SAC Code")]
    pub hsn_sac: Option<String>,

    /// Defaults to "1" when the pattern captured nothing.
    #[serde(rename = "Quantity")]
    pub quantity: String,

    /// Defaults to "0" when the pattern captured nothing.
    #[serde(rename = "Unit Price")]
    pub unit_price: String,

    /// Quantity times unit price, computed in floating point.
    #[serde(rename = "Line Total")]
    pub line_total: String,

    #[serde(rename = "GST Rate")]
    pub gst_rate: Option<String>,

    #[serde(rename = "GST Amount")]
    pub gst_amount: Option<String>,
}

/// Fields recovered from a purchase bill transcript.
///
/// Amounts default to `"0"` rather than null; the tax split is reported
/// per head (CGST/SGST/IGST).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseBillFields {
    pub bill_type: String,

    #[serde(rename = "Invoice Number")]
    pub invoice_number: Option<String>,

    #[serde(rename = "Invoice Date")]
    pub invoice_date: Option<String>,

    #[serde(rename = "Vendor Name")]
    pub vendor_name: Option<String>,

    #[serde(rename = "Vendor GSTIN")]
    pub vendor_gstin: Option<String>,

    #[serde(rename = "Taxable Amount")]
    pub taxable_amount: String,

    #[serde(rename = "CGST Amount")]
    pub cgst_amount: String,

    #[serde(rename = "SGST Amount")]
    pub sgst_amount: String,

    #[serde(rename = "IGST Amount")]
    pub igst_amount: String,

    #[serde(rename = "Total Amount")]
    pub total_amount: String,

    #[serde(rename = "Items")]
    pub items: Vec<PurchaseLineItem>,

    pub raw_text: String,
}

/// One line item recovered from a purchase bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLineItem {
    #[serde(rename = "Description")]
    pub description: String,

    /// Empty string when the candidate token fails the digit/length check.
    #[serde(rename = "HSN")]
    pub hsn: String,

    #[serde(rename = "Qty")]
    pub quantity: String,

    #[serde(rename = "Rate")]
    pub rate: String,
}
