//! GSTR-1 report data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Inclusive reporting window read from stdin.
///
/// `start <= end` is the caller's responsibility; a reversed range is
/// passed through and simply matches no rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One invoice row as projected by the report query.
///
/// Field order mirrors the query projection, which the CSV output
/// reproduces column for column.
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceRow {
    pub invoice_id: i32,
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub invoice_value: Decimal,
    pub pos: Option<String>,
    pub taxable_value: Decimal,
    pub igst_amount: Decimal,
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub customer_gstin: Option<String>,
}

/// The GSTR-1 return document written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gstr1Document {
    /// GSTIN of the filing entity.
    pub gstin: String,

    /// Filing period as MMYYYY.
    pub fp: String,

    /// Business-to-business invoices grouped by counterparty GSTIN.
    pub b2b: Vec<B2bGroup>,
}

/// Invoices of a single counterparty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct B2bGroup {
    /// Counterparty GSTIN.
    pub ctin: String,

    /// Invoices issued to this counterparty in the period.
    pub inv: Vec<B2bInvoice>,
}

/// One invoice entry in the return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct B2bInvoice {
    pub inum: String,

    /// Issue date as DD-MM-YYYY.
    pub idt: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub val: Decimal,

    pub pos: Option<String>,

    #[serde(with = "rust_decimal::serde::float")]
    pub taxable: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub cgst: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub sgst: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub igst: Decimal,

    /// Exactly one synthetic line item summarizing the invoice.
    pub itms: Vec<InvoiceItem>,
}

/// Numbered line item wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub num: u32,
    pub itm_det: ItemDetail,
}

/// Taxable value and tax split of a line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetail {
    #[serde(with = "rust_decimal::serde::float")]
    pub txval: Decimal,

    /// Rate is not derived from any rate table; it is the configured
    /// default (0 unless the deployment supplies one).
    pub rt: u32,

    #[serde(with = "rust_decimal::serde::float")]
    pub camt: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub samt: Decimal,
}

/// Run summary printed to stdout for the calling process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_customers: usize,
    pub total_invoices: usize,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
}
