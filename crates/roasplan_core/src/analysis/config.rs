//! Configuration types for sensitivity sweeps.

use serde::{Deserialize, Serialize};

use crate::model::ClientParameters;

/// Which input a sweep varies. All other inputs are held at their original
/// values; the portfolio composition itself is never varied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepInput {
    /// IP: the advertising budget
    AdSpend,
    /// TF: the agency's fixed fee
    FixedFee,
    /// IE: the agency's target profit
    ExpectedIncome,
    /// The critical product's gross-margin fraction
    GrossMargin,
}

impl SweepInput {
    /// Fallback base value used when the parameter's current value is
    /// non-positive, so the derived range is never zero-width or inverted.
    #[must_use]
    pub fn default_base(&self) -> f64 {
        match self {
            SweepInput::AdSpend => 10_000.0,
            SweepInput::FixedFee => 5_000.0,
            SweepInput::ExpectedIncome => 5_000.0,
            SweepInput::GrossMargin => 0.3,
        }
    }

    /// Read this input's current value out of the parameters.
    ///
    /// For `GrossMargin` the relevant value is the critical product's
    /// gross-margin fraction, supplied by the caller since resolving the
    /// critical product is the sweep's job.
    #[must_use]
    pub fn base_value(&self, params: &ClientParameters, critical_gross_margin: f64) -> f64 {
        match self {
            SweepInput::AdSpend => params.ad_spend,
            SweepInput::FixedFee => params.fixed_fee,
            SweepInput::ExpectedIncome => params.expected_income,
            SweepInput::GrossMargin => critical_gross_margin,
        }
    }

    /// Derive the inclusive sweep range around a base value.
    ///
    /// Monetary inputs sweep 50%..150% of base with a floor (100 for ad
    /// spend, 0 for fees and profit). The margin fraction is additionally
    /// clamped into `[0.05, 0.95]`.
    #[must_use]
    pub fn range(&self, base: f64) -> (f64, f64) {
        match self {
            SweepInput::AdSpend => ((base * 0.5).max(100.0), base * 1.5),
            SweepInput::FixedFee | SweepInput::ExpectedIncome => ((base * 0.5).max(0.0), base * 1.5),
            SweepInput::GrossMargin => ((base * 0.5).max(0.05), (base * 1.5).min(0.95)),
        }
    }

    /// Display label for chart axes and reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SweepInput::AdSpend => "Ad Spend (IP)",
            SweepInput::FixedFee => "Fixed Fee (TF)",
            SweepInput::ExpectedIncome => "Expected Income (IE)",
            SweepInput::GrossMargin => "Gross Margin",
        }
    }
}

/// Complete sweep specification: the varied input and the point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// The input to vary
    pub input: SweepInput,
    /// Number of points in the sweep, at least 1
    pub step_count: usize,
}

impl SweepConfig {
    pub const DEFAULT_STEP_COUNT: usize = 50;

    #[must_use]
    pub fn new(input: SweepInput) -> Self {
        Self {
            input,
            step_count: Self::DEFAULT_STEP_COUNT,
        }
    }

    /// Generate the sweep values: `step_count` points linearly spaced across
    /// `[low, high]`, inclusive of both ends. A single-point sweep produces
    /// exactly `low`.
    #[must_use]
    pub fn sweep_values(&self, low: f64, high: f64) -> Vec<f64> {
        if self.step_count <= 1 {
            return vec![low];
        }
        let step_size = (high - low) / (self.step_count - 1) as f64;
        (0..self.step_count)
            .map(|i| low + step_size * i as f64)
            .collect()
    }
}
