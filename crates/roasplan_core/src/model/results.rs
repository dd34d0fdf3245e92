//! Derived output types
//!
//! Both types here are fully derived from a `ClientParameters` value and are
//! recomputed from scratch on every input change; nothing is persisted.

use serde::{Deserialize, Serialize};

/// The complete result bundle for one evaluation.
///
/// Threshold fields may be positive infinity when a denominator is
/// non-positive; this is a defined sentinel output, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    /// Return-on-ad-spend threshold covering fees and target profit
    pub ip_roas: f64,
    /// VUM: minimum units to sell, a non-negative integer stored as f64
    pub min_units_to_sell: f64,
    /// Minimum ROAS expressed against total sales revenue
    pub min_traditional_roas: f64,
    /// CPR: ad spend divided by minimum units to sell
    pub estimated_cost_per_result: f64,
    /// ad_spend + fixed_fee + expected_income
    pub total_cost: f64,
    /// Absolute margin of the critical product
    pub min_margin_used: f64,
    /// Unit price of the critical product
    pub critical_product_price: f64,
    /// Name of the critical product, or `"N/A"` for an empty portfolio
    pub critical_product_name: String,
}

impl Results {
    /// The defined outcome for an empty portfolio: all numeric fields zero,
    /// critical product name `"N/A"`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            ip_roas: 0.0,
            min_units_to_sell: 0.0,
            min_traditional_roas: 0.0,
            estimated_cost_per_result: 0.0,
            total_cost: 0.0,
            min_margin_used: 0.0,
            critical_product_price: 0.0,
            critical_product_name: "N/A".to_string(),
        }
    }
}

/// One point of a sensitivity sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// The swept value of the varied input
    pub x: f64,
    pub ip_roas: f64,
    pub traditional_roas: f64,
}
