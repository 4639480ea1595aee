// Selection thresholds and the interpreted outcome of a selection solve

use super::catalog::InvestmentOption;
use super::value_objects::{RiskCategory, SolutionStatus};
use serde::Deserialize;

/// Default cutoff above which a decision value counts as selected
pub const DEFAULT_SELECTION_THRESHOLD: f64 = 0.99;

/// Minimum count and cost cap for one risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierLimits {
    pub min_count: u32,
    pub cost_cap: u64,
}

impl TierLimits {
    pub fn new(min_count: u32, cost_cap: u64) -> Self {
        Self {
            min_count,
            cost_cap,
        }
    }
}

/// Thresholds parameterizing the selection model
///
/// Deserialized field by field on top of [`SelectionConfig::default`]: a tier
/// table that sets only `cost_cap` keeps that tier's default `min_count`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "SelectionOverrides")]
pub struct SelectionConfig {
    pub low: TierLimits,
    pub medium: TierLimits,
    pub high: TierLimits,
    pub total_budget: u64,
    /// Decision values strictly above this count as selected.
    ///
    /// A MIP backend returns exact 0/1 values; an LP relaxation may return
    /// fractional values and this cutoff is then the only integrality check.
    pub selection_threshold: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            low: TierLimits::new(2, 1_200_000),
            medium: TierLimits::new(2, 1_500_000),
            high: TierLimits::new(1, 900_000),
            total_budget: 2_400_000,
            selection_threshold: DEFAULT_SELECTION_THRESHOLD,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TierOverrides {
    min_count: Option<u32>,
    cost_cap: Option<u64>,
}

impl TierOverrides {
    fn apply(self, limits: TierLimits) -> TierLimits {
        TierLimits {
            min_count: self.min_count.unwrap_or(limits.min_count),
            cost_cap: self.cost_cap.unwrap_or(limits.cost_cap),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SelectionOverrides {
    low: TierOverrides,
    medium: TierOverrides,
    high: TierOverrides,
    total_budget: Option<u64>,
    selection_threshold: Option<f64>,
}

impl From<SelectionOverrides> for SelectionConfig {
    fn from(overrides: SelectionOverrides) -> Self {
        let defaults = SelectionConfig::default();
        Self {
            low: overrides.low.apply(defaults.low),
            medium: overrides.medium.apply(defaults.medium),
            high: overrides.high.apply(defaults.high),
            total_budget: overrides.total_budget.unwrap_or(defaults.total_budget),
            selection_threshold: overrides
                .selection_threshold
                .unwrap_or(defaults.selection_threshold),
        }
    }
}

impl SelectionConfig {
    pub fn limits(&self, risk: RiskCategory) -> TierLimits {
        match risk {
            RiskCategory::Low => self.low,
            RiskCategory::Medium => self.medium,
            RiskCategory::High => self.high,
        }
    }

    pub fn with_total_budget(mut self, total_budget: u64) -> Self {
        self.total_budget = total_budget;
        self
    }

    pub fn with_selection_threshold(mut self, threshold: f64) -> Self {
        self.selection_threshold = threshold;
        self
    }

    pub fn with_limits(mut self, risk: RiskCategory, limits: TierLimits) -> Self {
        match risk {
            RiskCategory::Low => self.low = limits,
            RiskCategory::Medium => self.medium = limits,
            RiskCategory::High => self.high = limits,
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        let t = self.selection_threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(format!("selection_threshold must be in (0, 1], got {t}"));
        }
        Ok(())
    }
}

/// Count and cost of the selected options in one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierSummary {
    pub risk: RiskCategory,
    pub count: usize,
    pub cost: u64,
}

/// Interpreted result of a selection solve
#[derive(Debug, Clone)]
pub struct SelectionResult {
    pub status: SolutionStatus,
    /// Selected options in catalog order; empty unless optimal
    pub selected: Vec<InvestmentOption>,
    /// Objective value reported by the solver
    pub total_payback: f64,
    pub solver_name: String,
}

impl SelectionResult {
    pub fn optimal(
        selected: Vec<InvestmentOption>,
        total_payback: f64,
        solver_name: impl Into<String>,
    ) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            selected,
            total_payback,
            solver_name: solver_name.into(),
        }
    }

    pub fn no_optimal(status: SolutionStatus, solver_name: impl Into<String>) -> Self {
        Self {
            status,
            selected: Vec::new(),
            total_payback: 0.0,
            solver_name: solver_name.into(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// Payback summed over the selected options, saturating at `u64::MAX`
    pub fn recomputed_payback(&self) -> u64 {
        self.selected
            .iter()
            .fold(0u64, |acc, o| acc.saturating_add(o.payback))
    }

    /// Cost summed over the selected options, saturating at `u64::MAX`
    pub fn total_cost(&self) -> u64 {
        self.selected
            .iter()
            .fold(0u64, |acc, o| acc.saturating_add(o.cost))
    }

    pub fn tier_summary(&self, risk: RiskCategory) -> TierSummary {
        let in_tier = self.selected.iter().filter(|o| o.risk == risk);
        let (count, cost) = in_tier.fold((0, 0u64), |(n, c), o| (n + 1, c.saturating_add(o.cost)));
        TierSummary { risk, count, cost }
    }

    pub fn tier_summaries(&self) -> Vec<TierSummary> {
        RiskCategory::ALL
            .iter()
            .map(|&risk| self.tier_summary(risk))
            .collect()
    }

    pub fn selected_ids(&self) -> Vec<u32> {
        self.selected.iter().map(|o| o.id).collect()
    }
}
