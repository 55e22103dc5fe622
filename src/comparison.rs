//! Tax-adjusted comparison of fixed-income products
//!
//! Uses plain annual compounding, deliberately coarser than the monthly
//! recurrence of the projection engine. Keep the two models separate.

use crate::catalog::FinancialProduct;
use crate::error::{Degeneracy, Result, SimError};
use crate::projection::MAX_PROJECTION_YEARS;
use crate::rates::RateSnapshot;
use crate::validation;
use serde::{Deserialize, Serialize};

/// Flat withholding rate applied to taxable gross profit
pub const DEFAULT_WITHHOLDING_RATE: f64 = 0.15;

/// Withholding applied to taxable products
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxPolicy {
    /// Decimal rate applied to gross profit
    pub flat_withholding_rate: f64,
}

impl TaxPolicy {
    pub fn flat(rate: f64) -> Self {
        Self {
            flat_withholding_rate: rate,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let rate = validation::non_negative("flat_withholding_rate", self.flat_withholding_rate)?;
        if rate > 1.0 {
            return Err(SimError::InvalidParameter {
                field: "flat_withholding_rate",
                value: rate,
                reason: "must not exceed 1.0",
            });
        }
        Ok(())
    }

    /// Tax owed on `gross_profit`. A loss yields a negative (credited) amount.
    pub fn tax_on(&self, gross_profit: f64, is_tax_exempt: bool) -> f64 {
        if is_tax_exempt {
            0.0
        } else {
            gross_profit * self.flat_withholding_rate
        }
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self::flat(DEFAULT_WITHHOLDING_RATE)
    }
}

/// The fixed reference scenario every product is measured against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonScenario {
    pub initial_amount: f64,
    pub years: u32,
}

impl ComparisonScenario {
    pub fn validate(&self) -> Result<()> {
        validation::non_negative("initial_amount", self.initial_amount)?;
        if self.years > MAX_PROJECTION_YEARS {
            return Err(SimError::InvalidParameter {
                field: "years",
                value: self.years as f64,
                reason: "exceeds the maximum projection horizon",
            });
        }
        Ok(())
    }
}

/// Outcome for one product under one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub product_id: String,
    pub effective_annual_rate: f64,
    pub gross_amount: f64,
    pub gross_profit: f64,
    pub tax: f64,
    pub net_terminal_value: f64,
    pub net_profit: f64,
    pub equivalent_to_benchmark_percent: f64,
    pub is_guaranteed: bool,
    /// Set when `equivalent_to_benchmark_percent` is a fallback, not a ratio
    pub degeneracy: Option<Degeneracy>,
}

impl ComparisonResult {
    pub fn is_comparable(&self) -> bool {
        self.degeneracy.is_none()
    }
}

/// Product comparator bound to a tax policy
#[derive(Debug, Clone, Default)]
pub struct ProductComparator {
    tax: TaxPolicy,
}

impl ProductComparator {
    pub fn new(tax: TaxPolicy) -> Self {
        Self { tax }
    }

    /// Compare every product; results follow catalog order
    pub fn compare(
        &self,
        catalog: &[FinancialProduct],
        scenario: &ComparisonScenario,
        rates: &RateSnapshot,
    ) -> Result<Vec<ComparisonResult>> {
        scenario.validate()?;
        rates.validate()?;
        self.tax.validate()?;

        let benchmark_return = (1.0 + rates.benchmark_decimal()).powi(scenario.years as i32) - 1.0;
        log::debug!(
            "comparing {} products over {} years, benchmark return {:.6}",
            catalog.len(),
            scenario.years,
            benchmark_return
        );

        catalog
            .iter()
            .map(|product| self.evaluate(product, scenario, rates, benchmark_return))
            .collect()
    }

    fn evaluate(
        &self,
        product: &FinancialProduct,
        scenario: &ComparisonScenario,
        rates: &RateSnapshot,
        benchmark_return: f64,
    ) -> Result<ComparisonResult> {
        let rate = validation::finite("effective_annual_rate", product.effective_annual_rate(rates))?;
        let initial = scenario.initial_amount;

        let gross_amount = initial * (1.0 + rate).powi(scenario.years as i32);
        let gross_profit = gross_amount - initial;
        let tax = self.tax.tax_on(gross_profit, product.is_tax_exempt);
        let net_terminal_value = gross_amount - tax;
        let net_profit = net_terminal_value - initial;

        let (equivalent_to_benchmark_percent, degeneracy) =
            equivalence(net_terminal_value, initial, benchmark_return);

        if let Some(d) = degeneracy {
            log::warn!("product {} not comparable to benchmark: {}", product.id, d);
        }

        if !(gross_amount.is_finite() && net_terminal_value.is_finite()) {
            return Err(SimError::InvalidParameter {
                field: "effective_annual_rate",
                value: rate,
                reason: "terminal value overflowed to a non-finite value",
            });
        }

        Ok(ComparisonResult {
            product_id: product.id.clone(),
            effective_annual_rate: rate,
            gross_amount,
            gross_profit,
            tax,
            net_terminal_value,
            net_profit,
            equivalent_to_benchmark_percent,
            is_guaranteed: product.rule.is_guaranteed(),
            degeneracy,
        })
    }
}

/// Net return as a percentage of the benchmark return (100 = matches benchmark)
fn equivalence(net_amount: f64, initial: f64, benchmark_return: f64) -> (f64, Option<Degeneracy>) {
    if benchmark_return == 0.0 {
        return (0.0, Some(Degeneracy::ZeroBenchmarkReturn));
    }
    if initial == 0.0 {
        return (0.0, Some(Degeneracy::UndefinedResult));
    }

    let ratio = (net_amount / initial - 1.0) / benchmark_return * 100.0;
    if ratio.is_finite() {
        (ratio, None)
    } else {
        (0.0, Some(Degeneracy::UndefinedResult))
    }
}

/// Compare a catalog with the default flat withholding policy
pub fn compare(
    catalog: &[FinancialProduct],
    scenario: &ComparisonScenario,
    rates: &RateSnapshot,
) -> Result<Vec<ComparisonResult>> {
    ProductComparator::default().compare(catalog, scenario, rates)
}
