//! Integration tests for the IP-ROAS engine
//!
//! Tests are organized by topic:
//! - `formulas` - The closed-form formula library and its sentinel guards
//! - `evaluate` - Critical-product selection and the aggregate calculator
//! - `analysis` - Sensitivity sweep ranges, spacing, and invariants
//! - `csv` - Permissive portfolio ingestion

mod csv;

use crate::model::{ClientParameters, Product};

/// The worked example used across topics: shoe-store client, one product.
pub(crate) fn example_params() -> ClientParameters {
    ClientParameters {
        ad_spend: 50_000.0,
        fixed_fee: 10_000.0,
        expected_income: 15_000.0,
        products: vec![Product::new("Zapatos", 1_500.0, 0.35)],
    }
}
