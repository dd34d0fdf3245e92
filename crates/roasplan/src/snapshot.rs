//! Context snapshot for the chat assistant.
//!
//! The assistant itself is an external service: the application forwards the
//! conversation history plus this textual snapshot of the current inputs and
//! outputs, and relays the token stream back. Only the snapshot is produced
//! here; no assistant logic belongs on this side of the boundary.

use std::fmt::Write;

use roasplan_core::model::{ClientParameters, Results};

/// Render the current inputs and outputs as the plain-text context block
/// the assistant receives alongside the conversation.
#[must_use]
pub fn context_snapshot(params: &ClientParameters, results: &Results) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Current calculator inputs:");
    let _ = writeln!(out, "- Ad spend (IP): {:.2}", params.ad_spend);
    let _ = writeln!(out, "- Fixed fee (TF): {:.2}", params.fixed_fee);
    let _ = writeln!(out, "- Expected income (IE): {:.2}", params.expected_income);
    let _ = writeln!(out, "- Portfolio ({} products):", params.products.len());
    for product in &params.products {
        let _ = writeln!(
            out,
            "  - {} | price {:.2} | gross margin {:.0}%",
            product.name,
            product.price,
            product.gross_margin * 100.0
        );
    }
    let _ = writeln!(out, "Current calculator outputs:");
    let _ = writeln!(out, "- IP-ROAS: {}", number(results.ip_roas));
    let _ = writeln!(
        out,
        "- Min units to sell (VUM): {:.0}",
        results.min_units_to_sell
    );
    let _ = writeln!(
        out,
        "- Min traditional ROAS: {}",
        number(results.min_traditional_roas)
    );
    let _ = writeln!(
        out,
        "- Estimated cost per result: {}",
        number(results.estimated_cost_per_result)
    );
    let _ = writeln!(out, "- Total cost: {:.2}", results.total_cost);
    let _ = writeln!(
        out,
        "- Critical product: {} (margin {:.2})",
        results.critical_product_name, results.min_margin_used
    );
    out
}

fn number(value: f64) -> String {
    if value.is_infinite() {
        "undefined (no valid denominator)".to_string()
    } else {
        format!("{value:.2}")
    }
}
