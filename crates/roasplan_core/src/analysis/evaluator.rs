//! Sweep evaluator - recomputes the thresholds at each swept value.

use crate::evaluate::critical_product;
use crate::formulas;
use crate::model::{ClientParameters, SensitivityPoint};

use super::{SweepConfig, SweepInput};

/// Run a sensitivity sweep over one input.
///
/// Returns `None` for an empty portfolio: with no critical product there is
/// nothing to anchor the sweep. Otherwise the critical product's absolute
/// margin and price are fixed for the whole sweep; if the varied input's
/// current value is non-positive, a fixed default base is substituted before
/// the range is derived (the other parameters always keep their original,
/// unsubstituted values).
///
/// For the `GrossMargin` sweep, `ip_roas` is structurally independent of the
/// margin and stays equal to the unswept base value at every point, while the
/// swept fraction scales the absolute margin with the price held fixed.
#[must_use]
pub fn sweep(config: &SweepConfig, params: &ClientParameters) -> Option<Vec<SensitivityPoint>> {
    let critical = critical_product(&params.products)?;
    let critical_margin = critical.absolute_margin();
    let critical_price = critical.price;

    let mut base = config.input.base_value(params, critical.gross_margin);
    if base <= 0.0 {
        base = config.input.default_base();
    }
    let (low, high) = config.input.range(base);

    let base_ip_roas = formulas::ip_roas(params.ad_spend, params.fixed_fee, params.expected_income);

    let points = config
        .sweep_values(low, high)
        .into_iter()
        .map(|x| {
            let (ip_roas, traditional_roas) = match config.input {
                SweepInput::AdSpend => (
                    formulas::ip_roas(x, params.fixed_fee, params.expected_income),
                    formulas::traditional_roas_at(
                        x,
                        params.fixed_fee,
                        params.expected_income,
                        critical_margin,
                        critical_price,
                    ),
                ),
                SweepInput::FixedFee => (
                    formulas::ip_roas(params.ad_spend, x, params.expected_income),
                    formulas::traditional_roas_at(
                        params.ad_spend,
                        x,
                        params.expected_income,
                        critical_margin,
                        critical_price,
                    ),
                ),
                SweepInput::ExpectedIncome => (
                    formulas::ip_roas(params.ad_spend, params.fixed_fee, x),
                    formulas::traditional_roas_at(
                        params.ad_spend,
                        params.fixed_fee,
                        x,
                        critical_margin,
                        critical_price,
                    ),
                ),
                SweepInput::GrossMargin => (
                    base_ip_roas,
                    formulas::traditional_roas_at(
                        params.ad_spend,
                        params.fixed_fee,
                        params.expected_income,
                        critical_price * x,
                        critical_price,
                    ),
                ),
            };
            SensitivityPoint {
                x,
                ip_roas,
                traditional_roas,
            }
        })
        .collect();

    Some(points)
}
