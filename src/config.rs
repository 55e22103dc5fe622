//! Injectable engine constants
//!
//! Everything the calculators would otherwise hardcode lives here so that
//! callers can override it, either in code or from a JSON file:
//!
//! ```json
//! { "fallback_rates": { "benchmarkAnnualRatePercent": 11.25,
//!                       "savingsAnnualRatePercent": 6.5,
//!                       "inflationAnnualRatePercent": 4.0 },
//!   "tax": { "flat_withholding_rate": 0.15 } }
//! ```

use crate::comparison::TaxPolicy;
use crate::error::Result;
use crate::rates::RateSnapshot;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Used only when the rate source cannot supply a snapshot
    pub fallback_rates: RateSnapshot,
    pub tax: TaxPolicy,
}

impl EngineConfig {
    /// Load configuration from a JSON file; missing fields keep their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.fallback_rates.validate()?;
        self.tax.validate()
    }
}
