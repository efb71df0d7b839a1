//! GSTR-1 report generation.
//!
//! Rows fetched for the requested window are rendered three ways: a flat
//! CSV mirroring the query projection, a JSON document grouping invoices
//! by counterparty GSTIN, and a one-line summary for the calling process.

pub mod db;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{ReportError, Result};
use crate::models::config::ReportConfig;
use crate::models::report::{
    B2bGroup, B2bInvoice, Gstr1Document, InvoiceItem, InvoiceRow, ItemDetail, ReportSummary,
};

/// Builds and writes the GSTR-1 artifacts.
pub struct Gstr1Generator {
    gstin: String,
    default_rate: u32,
}

impl Gstr1Generator {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            gstin: config.gstin.clone(),
            default_rate: config.default_rate,
        }
    }

    /// Group rows by counterparty GSTIN into the return document.
    ///
    /// Groups are ordered by GSTIN; rows without one collect under the
    /// empty string so every fetched row lands in exactly one group.
    pub fn build(&self, rows: &[InvoiceRow], period: &str) -> Gstr1Document {
        let mut groups: BTreeMap<String, Vec<B2bInvoice>> = BTreeMap::new();

        for row in rows {
            let ctin = row.customer_gstin.clone().unwrap_or_default();
            groups.entry(ctin).or_default().push(self.invoice_entry(row));
        }

        Gstr1Document {
            gstin: self.gstin.clone(),
            fp: period.to_string(),
            b2b: groups
                .into_iter()
                .map(|(ctin, inv)| B2bGroup { ctin, inv })
                .collect(),
        }
    }

    /// One return entry per invoice, carrying a single synthetic line
    /// item that summarizes the whole invoice.
    fn invoice_entry(&self, row: &InvoiceRow) -> B2bInvoice {
        B2bInvoice {
            inum: row.invoice_number.clone(),
            idt: row.issue_date.format("%d-%m-%Y").to_string(),
            val: row.invoice_value,
            pos: row.pos.clone(),
            taxable: row.taxable_value,
            cgst: row.cgst_amount,
            sgst: row.sgst_amount,
            igst: row.igst_amount,
            itms: vec![InvoiceItem {
                num: 1,
                itm_det: ItemDetail {
                    txval: row.taxable_value,
                    rt: self.default_rate,
                    camt: row.cgst_amount,
                    samt: row.sgst_amount,
                },
            }],
        }
    }

    /// Write the row-per-invoice CSV mirroring the query projection.
    /// The header row is written even when the window matched nothing.
    pub fn write_csv(&self, rows: &[InvoiceRow], path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path).map_err(ReportError::Csv)?;

        writer
            .write_record([
                "invoice_id",
                "invoice_number",
                "issue_date",
                "invoice_value",
                "pos",
                "taxable_value",
                "igst_amount",
                "cgst_amount",
                "sgst_amount",
                "customer_gstin",
            ])
            .map_err(ReportError::Csv)?;

        for row in rows {
            writer
                .write_record([
                    row.invoice_id.to_string(),
                    row.invoice_number.clone(),
                    row.issue_date.to_string(),
                    row.invoice_value.to_string(),
                    row.pos.clone().unwrap_or_default(),
                    row.taxable_value.to_string(),
                    row.igst_amount.to_string(),
                    row.cgst_amount.to_string(),
                    row.sgst_amount.to_string(),
                    row.customer_gstin.clone().unwrap_or_default(),
                ])
                .map_err(ReportError::Csv)?;
        }

        writer
            .flush()
            .map_err(|e| ReportError::Csv(csv::Error::from(e)))?;

        info!("wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }

    /// Write the grouped return document as formatted JSON.
    pub fn write_json(&self, document: &Gstr1Document, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(document)?)?;
        info!("wrote return document to {}", path.display());
        Ok(())
    }

    /// Summary printed to stdout for the calling process.
    pub fn summarize(document: &Gstr1Document, rows: &[InvoiceRow]) -> ReportSummary {
        ReportSummary {
            total_customers: document.b2b.len(),
            total_invoices: rows.len(),
            total_value: rows.iter().map(|r| r.invoice_value).sum::<Decimal>(),
        }
    }
}

/// Current filing period as MMYYYY.
pub fn filing_period_now() -> String {
    chrono::Local::now().format("%m%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn row(id: i32, number: &str, gstin: Option<&str>, value: Decimal) -> InvoiceRow {
        InvoiceRow {
            invoice_id: id,
            invoice_number: number.to_string(),
            issue_date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
            invoice_value: value,
            pos: Some("27".to_string()),
            taxable_value: dec!(1000.00),
            igst_amount: dec!(0.00),
            cgst_amount: dec!(90.00),
            sgst_amount: dec!(90.00),
            customer_gstin: gstin.map(str::to_string),
        }
    }

    fn generator() -> Gstr1Generator {
        Gstr1Generator::new(&ReportConfig::default())
    }

    #[test]
    fn test_one_group_per_counterparty() {
        let rows = vec![
            row(1, "INV-1", Some("27AAPFU0939F1ZV"), dec!(1180.00)),
            row(2, "INV-2", Some("29ABCDE1234F2Z5"), dec!(1180.00)),
            row(3, "INV-3", Some("27AAPFU0939F1ZV"), dec!(590.00)),
        ];

        let document = generator().build(&rows, "042024");

        assert_eq!(document.b2b.len(), 2);

        // Group sizes sum to the fetched row count.
        let grouped: usize = document.b2b.iter().map(|g| g.inv.len()).sum();
        assert_eq!(grouped, rows.len());

        // Groups come out ordered by counterparty GSTIN.
        assert_eq!(document.b2b[0].ctin, "27AAPFU0939F1ZV");
        assert_eq!(document.b2b[0].inv.len(), 2);
        assert_eq!(document.b2b[1].ctin, "29ABCDE1234F2Z5");
    }

    #[test]
    fn test_rows_without_gstin_still_grouped() {
        let rows = vec![
            row(1, "INV-1", None, dec!(100.00)),
            row(2, "INV-2", Some("27AAPFU0939F1ZV"), dec!(100.00)),
        ];

        let document = generator().build(&rows, "042024");
        let grouped: usize = document.b2b.iter().map(|g| g.inv.len()).sum();

        assert_eq!(grouped, 2);
        assert_eq!(document.b2b[0].ctin, "");
    }

    #[test]
    fn test_invoice_entry_shape() {
        let rows = vec![row(1, "INV-9", Some("27AAPFU0939F1ZV"), dec!(1180.00))];
        let document = generator().build(&rows, "042024");

        let entry = &document.b2b[0].inv[0];
        assert_eq!(entry.inum, "INV-9");
        assert_eq!(entry.idt, "15-04-2024");
        assert_eq!(entry.itms.len(), 1);

        let detail = &entry.itms[0].itm_det;
        assert_eq!(detail.txval, dec!(1000.00));
        assert_eq!(detail.rt, 0);
        assert_eq!(detail.camt, dec!(90.00));
        assert_eq!(detail.samt, dec!(90.00));
    }

    #[test]
    fn test_summary() {
        let rows = vec![
            row(1, "INV-1", Some("27AAPFU0939F1ZV"), dec!(1180.00)),
            row(2, "INV-2", Some("29ABCDE1234F2Z5"), dec!(820.00)),
        ];
        let document = generator().build(&rows, "042024");

        let summary = Gstr1Generator::summarize(&document, &rows);
        assert_eq!(summary.total_customers, 2);
        assert_eq!(summary.total_invoices, 2);
        assert_eq!(summary.total_value, dec!(2000.00));
    }

    #[test]
    fn test_empty_window_still_produces_outputs() {
        // A reversed or empty date range fetches no rows; the document
        // and summary are still well formed.
        let document = generator().build(&[], "042024");
        assert!(document.b2b.is_empty());

        let summary = Gstr1Generator::summarize(&document, &[]);
        assert_eq!(summary.total_invoices, 0);
        assert_eq!(summary.total_value, dec!(0));
    }

    #[test]
    fn test_csv_mirrors_projection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gstr1.csv");

        let rows = vec![row(1, "INV-1", Some("27AAPFU0939F1ZV"), dec!(1180.00))];
        generator().write_csv(&rows, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next().unwrap(),
            "invoice_id,invoice_number,issue_date,invoice_value,pos,taxable_value,\
             igst_amount,cgst_amount,sgst_amount,customer_gstin"
        );
        assert_eq!(
            lines.next().unwrap(),
            "1,INV-1,2024-04-15,1180.00,27,1000.00,0.00,90.00,90.00,27AAPFU0939F1ZV"
        );
    }

    #[test]
    fn test_csv_header_written_for_empty_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gstr1.csv");

        generator().write_csv(&[], &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("invoice_id,"));
        assert_eq!(written.lines().count(), 1);
    }

    #[test]
    fn test_filing_period_shape() {
        let period = filing_period_now();
        assert_eq!(period.len(), 6);
        assert!(period.chars().all(|c| c.is_ascii_digit()));
    }
}
