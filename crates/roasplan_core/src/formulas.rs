//! The IP-ROAS formula library.
//!
//! Every function here is pure and total: any real input produces a defined
//! output. Non-positive denominators yield positive infinity rather than an
//! error or NaN, because these formulas back interactive what-if controls
//! where an obviously-undefined value should not interrupt the flow.

/// Return-on-ad-spend threshold covering the agency's fixed fee and target
/// profit: `1 + (fixed_fee + expected_income) / ad_spend`.
///
/// Equals exactly 1 when both fee and profit are zero and `ad_spend > 0`.
/// Positive infinity when `ad_spend <= 0`.
#[must_use]
pub fn ip_roas(ad_spend: f64, fixed_fee: f64, expected_income: f64) -> f64 {
    if ad_spend <= 0.0 {
        return f64::INFINITY;
    }
    1.0 + (fixed_fee + expected_income) / ad_spend
}

/// VUM: minimum units to sell to cover `total_cost` at `min_margin` per unit.
///
/// Rounds up to a whole unit and never goes below zero. Returns 0 when
/// `min_margin <= 0` (no margin means no meaningful unit count).
#[must_use]
pub fn min_units_to_sell(total_cost: f64, min_margin: f64) -> f64 {
    if min_margin <= 0.0 {
        return 0.0;
    }
    (total_cost / min_margin).ceil().max(0.0)
}

/// Minimum traditional ROAS: the revenue-based equivalent of the margin-based
/// threshold, `critical_price * vum / ad_spend`.
///
/// Positive infinity when `ad_spend <= 0`.
#[must_use]
pub fn min_traditional_roas(critical_price: f64, vum: f64, ad_spend: f64) -> f64 {
    if ad_spend <= 0.0 {
        return f64::INFINITY;
    }
    critical_price * vum / ad_spend
}

/// CPR: estimated cost per result, `ad_spend / vum`.
///
/// Positive infinity when `vum <= 0`.
#[must_use]
pub fn estimated_cost_per_result(ad_spend: f64, vum: f64) -> f64 {
    if vum <= 0.0 {
        return f64::INFINITY;
    }
    ad_spend / vum
}

/// Composite traditional ROAS for sensitivity sweeps.
///
/// Unlike [`min_traditional_roas`], this recomputes VUM from its own
/// arguments, so a sweep can perturb any of the fee, margin, or spend inputs
/// independently. Positive infinity when `ad_spend <= 0` or `min_margin <= 0`.
#[must_use]
pub fn traditional_roas_at(
    ad_spend: f64,
    fixed_fee: f64,
    expected_income: f64,
    min_margin: f64,
    critical_price: f64,
) -> f64 {
    if ad_spend <= 0.0 || min_margin <= 0.0 {
        return f64::INFINITY;
    }
    let vum = ((fixed_fee + ad_spend + expected_income) / min_margin)
        .ceil()
        .max(0.0);
    critical_price * vum / ad_spend
}
