//! CSV export of calculator output
//!
//! Writes the same structures the calculators return; layout and styling
//! are left to whoever opens the file.

use crate::catalog::FinancialProduct;
use crate::comparison::ComparisonResult;
use crate::error::{Result, SimError};
use crate::projection::ProjectionPoint;
use serde::Serialize;
use std::io::Write;

/// Flattened comparison row with presentation columns from the catalog
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonRow<'a> {
    product_id: &'a str,
    product_name: &'a str,
    rate: String,
    tax_exempt: bool,
    guaranteed: bool,
    gross_amount: f64,
    tax: f64,
    net_terminal_value: f64,
    net_profit: f64,
    equivalent_to_benchmark_percent: f64,
    comparable: bool,
}

/// Write projection points, one row per year
pub fn write_projection_csv<W: Write>(writer: W, points: &[ProjectionPoint]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in points {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write comparison results next to the catalog entries they came from
pub fn write_comparison_csv<W: Write>(
    writer: W,
    catalog: &[FinancialProduct],
    results: &[ComparisonResult],
) -> Result<()> {
    if catalog.len() != results.len() {
        return Err(SimError::InvalidData(format!(
            "catalog has {} products but {} results were given",
            catalog.len(),
            results.len()
        )));
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (product, result) in catalog.iter().zip(results) {
        csv_writer.serialize(ComparisonRow {
            product_id: &product.id,
            product_name: &product.name,
            rate: product.rule.rate_label(),
            tax_exempt: product.is_tax_exempt,
            guaranteed: result.is_guaranteed,
            gross_amount: result.gross_amount,
            tax: result.tax,
            net_terminal_value: result.net_terminal_value,
            net_profit: result.net_profit,
            equivalent_to_benchmark_percent: result.equivalent_to_benchmark_percent,
            comparable: result.is_comparable(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
