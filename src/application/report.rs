// Human-readable rendering of a selection result

use super::coverage_solver::payback_agrees;
use crate::domain::selection::SelectionResult;
use std::fmt::Write;

pub fn render_report(result: &SelectionResult) -> String {
    let mut out = String::new();

    if !result.is_optimal() {
        let _ = writeln!(
            out,
            "No optimal solution found (status: {}, solver: {}).",
            result.status, result.solver_name
        );
        return out;
    }

    let _ = writeln!(out, "Solution ({}):", result.solver_name);
    if result.selected.is_empty() {
        let _ = writeln!(out, "  no options selected");
    }
    for option in &result.selected {
        let _ = writeln!(
            out,
            "  Investment option {} ({}): Cost = {}, Payback = {}, Risk = {}",
            option.id, option.description, option.cost, option.payback, option.risk
        );
    }

    let _ = writeln!(out, "Per risk tier:");
    for tier in result.tier_summaries() {
        let _ = writeln!(
            out,
            "  {:<6} selected = {}, cost = {}",
            tier.risk, tier.count, tier.cost
        );
    }

    let _ = writeln!(out, "Total cost: {}", result.total_cost());
    let recomputed = result.recomputed_payback();
    if payback_agrees(result.total_payback, recomputed as f64) {
        let _ = writeln!(out, "Total payback: {recomputed}");
    } else {
        let _ = writeln!(out, "Total payback: {:.2}", result.total_payback);
    }
    out
}
