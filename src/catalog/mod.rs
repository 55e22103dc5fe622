//! Product catalog: static data owned by the caller, never mutated by the engine

mod product;
pub mod loader;

pub use loader::{load_catalog, load_catalog_from_reader};
pub use product::{FinancialProduct, RateRule};

/// The canonical catalog shared by every presentation surface
pub fn default_catalog() -> Vec<FinancialProduct> {
    vec![
        FinancialProduct::new(
            "tesouro-selic",
            "Tesouro Selic",
            RateRule::BenchmarkMultiple { percent_of_benchmark: 100.0 },
            false,
        ),
        FinancialProduct::new(
            "cdb",
            "CDB",
            RateRule::BenchmarkMultiple { percent_of_benchmark: 110.0 },
            false,
        ),
        FinancialProduct::new(
            "lci-lca",
            "LCI/LCA",
            RateRule::BenchmarkMultiple { percent_of_benchmark: 95.0 },
            true,
        ),
        FinancialProduct::new(
            "tesouro-prefixado",
            "Tesouro Prefixado",
            RateRule::FixedRate { annual_rate_percent: 12.5 },
            false,
        ),
        FinancialProduct::new(
            "tesouro-ipca",
            "Tesouro IPCA+",
            RateRule::VariableRate { annual_rate_percent: 11.0 },
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog_ids_unique() {
        let catalog = default_catalog();
        let ids: HashSet<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_only_lci_lca_is_exempt() {
        let exempt: Vec<_> = default_catalog()
            .into_iter()
            .filter(|p| p.is_tax_exempt)
            .map(|p| p.id)
            .collect();
        assert_eq!(exempt, vec!["lci-lca".to_string()]);
    }
}
