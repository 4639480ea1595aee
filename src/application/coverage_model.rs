// Formulation of the risk-tiered budgeted selection as a 0/1 linear model

use crate::domain::{
    catalog::InvestmentCatalog,
    models::{Constraint, ObjectiveFunction, OptimizationProblem, Variable},
    selection::SelectionConfig,
    value_objects::RiskCategory,
};
use tracing::debug;

pub const BUDGET_CONSTRAINT: &str = "budget";

pub fn min_count_constraint_name(risk: RiskCategory) -> String {
    format!("min_count_{}", risk.key())
}

pub fn cost_cap_constraint_name(risk: RiskCategory) -> String {
    format!("cost_cap_{}", risk.key())
}

/// Builds the selection model for one catalog and one set of thresholds.
///
/// Decision variable `i` is the binary "select option `i`" in catalog order.
/// The model maximizes total payback subject to, in order:
///
/// - `budget`: total cost of the selection ≤ `total_budget`
/// - `min_count_{low,medium,high}`: selected options in the tier ≥ `min_count`
/// - `cost_cap_{low,medium,high}`: cost of the selection in the tier ≤ `cost_cap`
pub struct CoverageModelBuilder<'a> {
    catalog: &'a InvestmentCatalog,
    config: &'a SelectionConfig,
}

impl<'a> CoverageModelBuilder<'a> {
    pub fn new(catalog: &'a InvestmentCatalog, config: &'a SelectionConfig) -> Self {
        Self { catalog, config }
    }

    pub fn build(&self) -> OptimizationProblem {
        let variables = (0..self.catalog.len())
            .map(|i| Variable::binary(format!("option_decision_{i}")))
            .collect();

        let paybacks = self.catalog.iter().map(|o| o.payback as f64).collect();
        let costs: Vec<f64> = self.catalog.iter().map(|o| o.cost as f64).collect();

        let mut problem = OptimizationProblem::new(ObjectiveFunction::maximize(paybacks))
            .with_name("risk_tiered_selection")
            .with_variables(variables)
            .add_constraint(
                Constraint::leq(costs.clone(), self.config.total_budget as f64)
                    .with_name(BUDGET_CONSTRAINT),
            );

        for risk in RiskCategory::ALL {
            let limits = self.config.limits(risk);
            let counts = self.tier_coefficients(risk, |_| 1.0);
            problem = problem.add_constraint(
                Constraint::geq(counts, limits.min_count as f64)
                    .with_name(min_count_constraint_name(risk)),
            );
        }

        for risk in RiskCategory::ALL {
            let limits = self.config.limits(risk);
            let tier_costs = self.tier_coefficients(risk, |i| costs[i]);
            problem = problem.add_constraint(
                Constraint::leq(tier_costs, limits.cost_cap as f64)
                    .with_name(cost_cap_constraint_name(risk)),
            );
        }

        debug!(
            variables = problem.num_variables(),
            constraints = problem.constraints.len(),
            "built selection model"
        );

        problem
    }

    /// Dense coefficients: `value(i)` for options in the tier, 0 elsewhere
    fn tier_coefficients(&self, risk: RiskCategory, value: impl Fn(usize) -> f64) -> Vec<f64> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(i, o)| if o.risk == risk { value(i) } else { 0.0 })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        catalog::InvestmentOption,
        selection::TierLimits,
        value_objects::ConstraintType,
    };

    fn catalog() -> InvestmentCatalog {
        InvestmentCatalog::new(vec![
            InvestmentOption::new(0, "Option 0", 100_000, 200_000, RiskCategory::Low),
            InvestmentOption::new(1, "Option 1", 150_000, 250_000, RiskCategory::Medium),
            InvestmentOption::new(2, "Option 2", 300_000, 500_000, RiskCategory::High),
            InvestmentOption::new(3, "Option 3", 120_000, 180_000, RiskCategory::Low),
        ])
        .unwrap()
    }

    #[test]
    fn test_one_binary_variable_per_option() {
        let catalog = catalog();
        let config = SelectionConfig::default();
        let problem = CoverageModelBuilder::new(&catalog, &config).build();

        assert_eq!(problem.variables.len(), 4);
        assert_eq!(problem.num_variables(), 4);
        assert_eq!(problem.variables[3].name, "option_decision_3");
    }

    #[test]
    fn test_objective_is_payback() {
        let catalog = catalog();
        let config = SelectionConfig::default();
        let problem = CoverageModelBuilder::new(&catalog, &config).build();

        assert_eq!(
            problem.objective.coefficients,
            vec![200_000.0, 250_000.0, 500_000.0, 180_000.0]
        );
    }

    #[test]
    fn test_seven_constraints_in_order() {
        let catalog = catalog();
        let config = SelectionConfig::default();
        let problem = CoverageModelBuilder::new(&catalog, &config).build();

        let names: Vec<&str> = problem.constraints.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "budget",
                "min_count_low",
                "min_count_medium",
                "min_count_high",
                "cost_cap_low",
                "cost_cap_medium",
                "cost_cap_high",
            ]
        );
    }

    #[test]
    fn test_budget_covers_every_option() {
        let catalog = catalog();
        let config = SelectionConfig::default().with_total_budget(500_000);
        let problem = CoverageModelBuilder::new(&catalog, &config).build();

        let budget = problem.constraint(BUDGET_CONSTRAINT).unwrap();
        assert_eq!(budget.constraint_type, ConstraintType::LessThanOrEqual);
        assert_eq!(budget.bound, 500_000.0);
        assert_eq!(
            budget.coefficients,
            vec![100_000.0, 150_000.0, 300_000.0, 120_000.0]
        );
    }

    #[test]
    fn test_tier_constraints_only_touch_their_tier() {
        let catalog = catalog();
        let config = SelectionConfig::default()
            .with_limits(RiskCategory::Low, TierLimits::new(2, 250_000));
        let problem = CoverageModelBuilder::new(&catalog, &config).build();

        let min_low = problem.constraint("min_count_low").unwrap();
        assert_eq!(min_low.constraint_type, ConstraintType::GreaterThanOrEqual);
        assert_eq!(min_low.bound, 2.0);
        assert_eq!(min_low.coefficients, vec![1.0, 0.0, 0.0, 1.0]);

        let cap_low = problem.constraint("cost_cap_low").unwrap();
        assert_eq!(cap_low.constraint_type, ConstraintType::LessThanOrEqual);
        assert_eq!(cap_low.bound, 250_000.0);
        assert_eq!(cap_low.coefficients, vec![100_000.0, 0.0, 0.0, 120_000.0]);

        let cap_high = problem.constraint("cost_cap_high").unwrap();
        assert_eq!(cap_high.bound, 900_000.0);
        assert_eq!(cap_high.coefficients, vec![0.0, 0.0, 300_000.0, 0.0]);
    }

    #[test]
    fn test_empty_catalog_keeps_constraint_shape() {
        let catalog = InvestmentCatalog::default();
        let config = SelectionConfig::default();
        let problem = CoverageModelBuilder::new(&catalog, &config).build();

        assert_eq!(problem.num_variables(), 0);
        assert_eq!(problem.constraints.len(), 7);
        assert!(problem.constraints.iter().all(|c| c.coefficients.is_empty()));
    }
}
