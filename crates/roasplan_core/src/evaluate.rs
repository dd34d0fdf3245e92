//! Critical-product selection and the aggregate calculator.

use crate::formulas;
use crate::model::{ClientParameters, Product, Results};

/// Select the product bounding the engagement's economics: the one with the
/// minimum absolute margin.
///
/// Strict less-than comparison, so ties keep the first occurrence in
/// portfolio order. Returns `None` for an empty portfolio.
#[must_use]
pub fn critical_product(products: &[Product]) -> Option<&Product> {
    products.iter().reduce(|min, p| {
        if p.absolute_margin() < min.absolute_margin() {
            p
        } else {
            min
        }
    })
}

/// Compute the full result bundle for one set of client parameters.
///
/// An empty portfolio is a defined outcome, not a failure: it yields
/// [`Results::empty`]. Otherwise the critical product's absolute margin
/// drives VUM, and its price drives the traditional-ROAS equivalent.
#[must_use]
pub fn evaluate(params: &ClientParameters) -> Results {
    let Some(critical) = critical_product(&params.products) else {
        return Results::empty();
    };

    let total_cost = params.total_cost();
    let min_margin = critical.absolute_margin();
    let vum = formulas::min_units_to_sell(total_cost, min_margin);

    Results {
        ip_roas: formulas::ip_roas(params.ad_spend, params.fixed_fee, params.expected_income),
        min_units_to_sell: vum,
        min_traditional_roas: formulas::min_traditional_roas(critical.price, vum, params.ad_spend),
        estimated_cost_per_result: formulas::estimated_cost_per_result(params.ad_spend, vum),
        total_cost,
        min_margin_used: min_margin,
        critical_product_price: critical.price,
        critical_product_name: critical.name.clone(),
    }
}
