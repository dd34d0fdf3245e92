//! Sensitivity sweep analysis module.
//!
//! Re-runs the IP-ROAS formulas over a linearly spaced range of one varied
//! input, holding all others fixed, to show how the thresholds respond. The
//! output is a sequence of [`SensitivityPoint`](crate::model::SensitivityPoint)
//! values in ascending sweep order, ready for charting.
//!
//! ```
//! use roasplan_core::analysis::{SweepConfig, SweepInput, sweep};
//! use roasplan_core::model::{ClientParameters, Product};
//!
//! let params = ClientParameters {
//!     ad_spend: 50_000.0,
//!     fixed_fee: 10_000.0,
//!     expected_income: 15_000.0,
//!     products: vec![Product::new("Zapatos", 1_500.0, 0.35)],
//! };
//!
//! let config = SweepConfig::new(SweepInput::AdSpend);
//! let points = sweep(&config, &params).expect("non-empty portfolio");
//! assert_eq!(points.len(), 50);
//! assert!((points[0].x - 25_000.0).abs() < 1e-9);
//! ```

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;
