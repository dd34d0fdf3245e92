//! Product portfolio types

use serde::{Deserialize, Serialize};

/// A single product in the client's portfolio.
///
/// `price` is expected to be positive and `gross_margin` a fraction in
/// `[0, 1]`, but neither is enforced here: the engine is total over all real
/// inputs and degenerate values surface through the formula guards instead.
/// Products are immutable once added and identified by portfolio position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Unit sale price
    pub price: f64,
    /// Gross margin as a fraction of price
    pub gross_margin: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, gross_margin: f64) -> Self {
        Self {
            name: name.into(),
            price,
            gross_margin,
        }
    }

    /// Absolute margin per unit: `price * gross_margin`.
    ///
    /// No clamping: negative or zero inputs pass through unchanged.
    #[must_use]
    pub fn absolute_margin(&self) -> f64 {
        self.price * self.gross_margin
    }
}
