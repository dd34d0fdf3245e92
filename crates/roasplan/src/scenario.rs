//! Scenario files: one engagement described as YAML.
//!
//! A scenario carries the numeric inputs, an optional inline portfolio, and
//! an optional CSV portfolio path. Resolving a scenario produces the
//! `ClientParameters` value handed to the engine; it is rebuilt from scratch
//! on every run rather than mutated incrementally.

use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};

use roasplan_core::model::{ClientParameters, Product};
use roasplan_core::parse_products;

/// One engagement scenario as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Scenario {
    /// IP: advertising budget
    #[serde(default)]
    pub ad_spend: f64,
    /// TF: agency fixed fee
    #[serde(default)]
    pub fixed_fee: f64,
    /// IE: agency target profit
    #[serde(default)]
    pub expected_income: f64,
    /// Inline product portfolio
    #[serde(default)]
    pub products: Vec<Product>,
    /// Optional CSV portfolio, appended after the inline products.
    /// Relative paths resolve against the scenario file's directory.
    #[serde(default)]
    pub portfolio_csv: Option<PathBuf>,
}

impl Scenario {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_yaml(&text)
            .wrap_err_with(|| format!("failed to parse scenario {}", path.display()))
    }

    /// Resolve the scenario into engine parameters, reading the portfolio
    /// CSV (if configured) relative to `base_dir`.
    pub fn into_parameters(self, base_dir: &Path) -> color_eyre::Result<ClientParameters> {
        let mut products = self.products;
        if let Some(csv_path) = &self.portfolio_csv {
            let resolved = if csv_path.is_absolute() {
                csv_path.clone()
            } else {
                base_dir.join(csv_path)
            };
            let text = std::fs::read_to_string(&resolved)
                .wrap_err_with(|| format!("failed to read portfolio CSV {}", resolved.display()))?;
            products.extend(parse_portfolio(&text, &resolved));
        }

        Ok(ClientParameters {
            ad_spend: self.ad_spend,
            fixed_fee: self.fixed_fee,
            expected_income: self.expected_income,
            products,
        })
    }
}

/// Parse a portfolio CSV, logging how many rows the best-effort parser
/// dropped so the skip policy leaves a trace.
pub fn parse_portfolio(text: &str, source: &Path) -> Vec<Product> {
    let data_rows = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .count()
        .saturating_sub(1);
    let products = parse_products(text);
    if products.len() < data_rows {
        tracing::debug!(
            "skipped {} unusable rows in {}",
            data_rows - products.len(),
            source.display()
        );
    }
    tracing::info!("loaded {} products from {}", products.len(), source.display());
    products
}
