//! Load product catalogs from CSV
//!
//! Columns: `id,name,kind,rate,tax_exempt` where `kind` is one of
//! `fixed`, `benchmark` or `variable` and `rate` is either an annual
//! percent or a percent of the benchmark.

use super::{FinancialProduct, RateRule};
use crate::error::{Result, SimError};
use crate::validation;
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the catalog columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    kind: String,
    rate: f64,
    tax_exempt: bool,
}

impl CsvRow {
    fn to_product(self) -> Result<FinancialProduct> {
        let rate = validation::finite("rate", self.rate)?;

        let rule = match self.kind.trim().to_ascii_lowercase().as_str() {
            "fixed" => RateRule::FixedRate { annual_rate_percent: rate },
            "benchmark" => RateRule::BenchmarkMultiple {
                percent_of_benchmark: validation::non_negative("rate", rate)?,
            },
            "variable" => RateRule::VariableRate { annual_rate_percent: rate },
            other => {
                return Err(SimError::InvalidData(format!(
                    "unknown rate kind `{}` for product {}",
                    other, self.id
                )))
            }
        };

        Ok(FinancialProduct {
            id: self.id,
            name: self.name,
            rule,
            is_tax_exempt: self.tax_exempt,
        })
    }
}

/// Load a catalog from a CSV file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FinancialProduct>> {
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load a catalog from any reader
pub fn load_catalog_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<FinancialProduct>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<FinancialProduct>> {
    let mut products = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        products.push(row.to_product()?);
    }

    log::debug!("loaded {} catalog products", products.len());
    Ok(products)
}
