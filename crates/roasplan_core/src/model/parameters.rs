//! Engagement input parameters

use serde::{Deserialize, Serialize};

use super::products::Product;

/// The complete input to every calculation.
///
/// A fresh value is constructed from current caller state on every
/// recalculation; the engine never mutates derived state incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClientParameters {
    /// IP: advertising budget negotiated with the client
    pub ad_spend: f64,
    /// TF: the agency's fixed service fee
    pub fixed_fee: f64,
    /// IE: the agency's target profit on the engagement
    pub expected_income: f64,
    /// Product portfolio, in entry order
    pub products: Vec<Product>,
}

impl ClientParameters {
    /// Total cost the engagement must cover: `ad_spend + fixed_fee + expected_income`.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.ad_spend + self.fixed_fee + self.expected_income
    }
}
