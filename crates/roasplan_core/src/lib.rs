//! IP-ROAS calculation engine
//!
//! This crate implements an advertising-ROI methodology for agency
//! engagements: given a client's ad budget, the agency's fixed fee, the
//! agency's target profit, and a product portfolio, it derives:
//! - IP-ROAS: the return-on-ad-spend threshold covering fees and profit
//! - VUM: the minimum units that must sell to cover total cost
//! - The minimum traditional ROAS equivalent
//! - The estimated cost per result (CPR)
//!
//! The economics are bounded by the *critical product*: the portfolio item
//! with the lowest absolute margin (price x gross margin). Sensitivity sweeps
//! re-run the formulas over a linearly spaced range of one input to show how
//! the thresholds respond.
//!
//! The engine is pure and synchronous: every operation is a computation over
//! its arguments with no I/O, no shared state, and no failure modes. Degenerate
//! denominators yield positive infinity rather than errors, and an empty
//! portfolio yields a well-defined zeroed result.
//!
//! ```
//! use roasplan_core::evaluate;
//! use roasplan_core::model::{ClientParameters, Product};
//!
//! let params = ClientParameters {
//!     ad_spend: 50_000.0,
//!     fixed_fee: 10_000.0,
//!     expected_income: 15_000.0,
//!     products: vec![Product::new("Zapatos", 1_500.0, 0.35)],
//! };
//!
//! let results = evaluate(&params);
//! assert_eq!(results.ip_roas, 1.5);
//! assert_eq!(results.min_units_to_sell, 143.0);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod csv;
pub mod evaluate;
pub mod formulas;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{SweepConfig, SweepInput, sweep};
pub use csv::parse_products;
pub use evaluate::{critical_product, evaluate};
pub use model::{ClientParameters, Product, Results, SensitivityPoint};
