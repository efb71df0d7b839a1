//! Invoice store access for the report generator.

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::debug;

use crate::error::ReportError;
use crate::models::report::{DateRange, InvoiceRow};

/// The one query this tool issues: invoices of the requested category in
/// the inclusive window, joined to their counterparty, oldest first.
const INVOICE_QUERY: &str = r"
SELECT i.id AS invoice_id,
       i.invoice_number,
       i.issue_date,
       i.net_amount AS invoice_value,
       i.place_of_supply_state AS pos,
       i.taxable_value,
       i.igst_amount,
       i.cgst_amount,
       i.sgst_amount,
       c.gstin AS customer_gstin
FROM invoices i
JOIN customers c ON c.id = i.customer_id
WHERE i.issue_date BETWEEN $1 AND $2
  AND i.invoice_type = $3
ORDER BY i.issue_date
";

/// Connect to the invoice store.
pub async fn connect(database_url: &str) -> Result<PgPool, ReportError> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Fetch the invoice rows for the window.
///
/// The range is passed through unvalidated; a reversed window matches
/// nothing and yields an empty vector.
pub async fn fetch_invoices(
    pool: &PgPool,
    range: &DateRange,
    category: &str,
) -> Result<Vec<InvoiceRow>, ReportError> {
    let rows = sqlx::query_as::<_, InvoiceRow>(INVOICE_QUERY)
        .bind(range.start)
        .bind(range.end)
        .bind(category)
        .fetch_all(pool)
        .await?;

    debug!(
        "fetched {} invoices between {} and {}",
        rows.len(),
        range.start,
        range.end
    );

    Ok(rows)
}
