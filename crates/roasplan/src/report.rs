//! Text and JSON rendering of evaluation results and sensitivity sweeps.
//!
//! The engine's infinity sentinels are rendered as `∞` in text output; JSON
//! output serializes the result types directly.

use std::fmt::Write;

use roasplan_core::analysis::SweepConfig;
use roasplan_core::model::{Results, SensitivityPoint};

/// Format a threshold value, rendering the infinity sentinel as `∞`.
fn metric(value: f64) -> String {
    if value.is_infinite() {
        "∞".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Human-readable result bundle.
#[must_use]
pub fn render_results_text(results: &Results) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "IP-ROAS Report");
    let _ = writeln!(out, "==============");
    let _ = writeln!(
        out,
        "Critical product       {} (price {}, margin {})",
        results.critical_product_name,
        metric(results.critical_product_price),
        metric(results.min_margin_used),
    );
    let _ = writeln!(out, "Total cost             {}", metric(results.total_cost));
    let _ = writeln!(out, "IP-ROAS                {}", metric(results.ip_roas));
    let _ = writeln!(
        out,
        "Min units to sell      {:.0}",
        results.min_units_to_sell
    );
    let _ = writeln!(
        out,
        "Min traditional ROAS   {}",
        metric(results.min_traditional_roas)
    );
    let _ = writeln!(
        out,
        "Est. cost per result   {}",
        metric(results.estimated_cost_per_result)
    );
    out
}

/// Sensitivity sweep as an aligned three-column table.
#[must_use]
pub fn render_sweep_text(config: &SweepConfig, points: &[SensitivityPoint]) -> String {
    let mut out = String::new();
    let label = config.input.label();
    let _ = writeln!(out, "Sensitivity: {label} ({} points)", points.len());
    let _ = writeln!(out, "{:>16}  {:>10}  {:>12}", label, "IP-ROAS", "Trad. ROAS");
    for point in points {
        let _ = writeln!(
            out,
            "{:>16.4}  {:>10}  {:>12}",
            point.x,
            metric(point.ip_roas),
            metric(point.traditional_roas)
        );
    }
    out
}

pub fn render_results_json(results: &Results) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

pub fn render_sweep_json(points: &[SensitivityPoint]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(points)
}

#[cfg(test)]
mod tests {
    use roasplan_core::analysis::SweepInput;
    use roasplan_core::model::{ClientParameters, Product};
    use roasplan_core::{evaluate, sweep};

    use super::*;

    fn example_results() -> Results {
        evaluate(&ClientParameters {
            ad_spend: 50_000.0,
            fixed_fee: 10_000.0,
            expected_income: 15_000.0,
            products: vec![Product::new("Zapatos", 1_500.0, 0.35)],
        })
    }

    #[test]
    fn test_text_report_contains_key_figures() {
        let text = render_results_text(&example_results());
        assert!(text.contains("Zapatos"), "missing product name:\n{text}");
        assert!(text.contains("1.50"), "missing IP-ROAS:\n{text}");
        assert!(text.contains("143"), "missing VUM:\n{text}");
        assert!(text.contains("75000.00"), "missing total cost:\n{text}");
    }

    #[test]
    fn test_infinity_renders_as_symbol() {
        let results = evaluate(&ClientParameters {
            ad_spend: 0.0,
            fixed_fee: 10_000.0,
            expected_income: 15_000.0,
            products: vec![Product::new("Zapatos", 1_500.0, 0.35)],
        });
        let text = render_results_text(&results);
        assert!(text.contains('∞'), "sentinel not rendered:\n{text}");
        assert!(!text.contains("inf"), "raw inf leaked:\n{text}");
    }

    #[test]
    fn test_json_round_trips_results() {
        let results = example_results();
        let json = render_results_json(&results).unwrap();
        let back: Results = serde_json::from_str(&json).unwrap();
        assert_eq!(back, results);
    }

    #[test]
    fn test_sweep_table_has_one_row_per_point() {
        let params = ClientParameters {
            ad_spend: 50_000.0,
            fixed_fee: 10_000.0,
            expected_income: 15_000.0,
            products: vec![Product::new("Zapatos", 1_500.0, 0.35)],
        };
        let config = SweepConfig {
            input: SweepInput::AdSpend,
            step_count: 5,
        };
        let points = sweep(&config, &params).unwrap();
        let text = render_sweep_text(&config, &points);
        // header + column row + 5 data rows
        assert_eq!(text.lines().count(), 7, "unexpected table:\n{text}");
        assert!(text.contains("Ad Spend (IP)"));
    }
}
