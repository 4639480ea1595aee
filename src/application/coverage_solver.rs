// Use case: solve the selection model and interpret the solver's answer

use super::coverage_model::CoverageModelBuilder;
use crate::domain::{
    catalog::InvestmentCatalog,
    selection::{SelectionConfig, SelectionResult},
    solver_service::{Result, SolverError, SolverService},
};
use tracing::{debug, info, warn};

/// Relative tolerance between the solver objective and the recomputed payback
pub const PAYBACK_TOLERANCE: f64 = 1e-6;

/// Solves risk-tiered selection runs against any [`SolverService`].
///
/// Holds only read-only thresholds; every call builds a fresh model.
pub struct CoverageSolver {
    config: SelectionConfig,
}

impl CoverageSolver {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn solve(
        &self,
        catalog: &InvestmentCatalog,
        solver: &dyn SolverService,
    ) -> Result<SelectionResult> {
        self.config
            .validate()
            .map_err(SolverError::InvalidProblem)?;

        let problem = CoverageModelBuilder::new(catalog, &self.config).build();
        info!(
            options = catalog.len(),
            solver = solver.name(),
            "solving selection model"
        );
        if !solver.supports_mip() {
            warn!(
                solver = solver.name(),
                threshold = self.config.selection_threshold,
                "solver relaxes integrality, decision values may be fractional"
            );
        }

        let solution = solver.solve(&problem)?;
        debug!(
            status = %solution.status,
            solve_time_ms = solution.statistics.solve_time_ms,
            message = %solution.message,
            "solver returned"
        );

        if !solution.is_optimal() {
            info!(status = %solution.status, "no optimal solution");
            return Ok(SelectionResult::no_optimal(solution.status, solver.name()));
        }

        if solution.variable_values.len() != catalog.len() {
            return Err(SolverError::ExecutionFailed(format!(
                "solver returned {} values for {} options",
                solution.variable_values.len(),
                catalog.len()
            )));
        }

        let threshold = self.config.selection_threshold;
        let selected: Vec<_> = catalog
            .iter()
            .zip(&solution.variable_values)
            .filter(|(_, value)| **value > threshold)
            .map(|(option, _)| option.clone())
            .collect();

        let objective = solution
            .optimal_value
            .unwrap_or_else(|| problem.objective.evaluate(&solution.variable_values));
        let result = SelectionResult::optimal(selected, objective, solver.name());

        let recomputed = result.recomputed_payback() as f64;
        if !payback_agrees(objective, recomputed) {
            warn!(
                objective,
                recomputed, "solver objective disagrees with payback of selected options"
            );
        }

        info!(
            selected = result.selected.len(),
            total_payback = result.total_payback,
            total_cost = result.total_cost(),
            "optimal selection found"
        );

        Ok(result)
    }
}

/// Whether two payback figures agree within [`PAYBACK_TOLERANCE`]
pub fn payback_agrees(a: f64, b: f64) -> bool {
    (a - b).abs() <= PAYBACK_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        catalog::InvestmentOption,
        models::{OptimizationProblem, Solution},
        value_objects::{RiskCategory, SolutionStatus},
    };
    use std::sync::Mutex;

    /// Returns a canned solution and records the problem it was given
    struct ScriptedSolver {
        solution: Solution,
        mip: bool,
        seen: Mutex<Vec<OptimizationProblem>>,
    }

    impl ScriptedSolver {
        fn new(solution: Solution) -> Self {
            Self {
                solution,
                mip: true,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl SolverService for ScriptedSolver {
        fn solve(&self, problem: &OptimizationProblem) -> Result<Solution> {
            self.seen.lock().unwrap().push(problem.clone());
            Ok(self.solution.clone())
        }

        fn name(&self) -> &str {
            "scripted"
        }

        fn supports_mip(&self) -> bool {
            self.mip
        }
    }

    fn catalog() -> InvestmentCatalog {
        InvestmentCatalog::new(vec![
            InvestmentOption::new(10, "a", 100, 1_000, RiskCategory::Low),
            InvestmentOption::new(11, "b", 200, 2_000, RiskCategory::Medium),
            InvestmentOption::new(12, "c", 300, 3_000, RiskCategory::High),
        ])
        .unwrap()
    }

    #[test]
    fn test_selects_values_above_threshold_in_catalog_order() {
        let solver = ScriptedSolver::new(Solution::optimal(4_000.0, vec![1.0, 0.0, 0.9999999]));
        let result = CoverageSolver::new(SelectionConfig::default())
            .solve(&catalog(), &solver)
            .unwrap();

        assert!(result.is_optimal());
        assert_eq!(result.selected_ids(), vec![10, 12]);
        assert_eq!(result.total_payback, 4_000.0);
        assert_eq!(result.recomputed_payback(), 4_000);
        assert_eq!(result.solver_name, "scripted");
    }

    #[test]
    fn test_near_selection_below_threshold_is_dropped() {
        let mut solver = ScriptedSolver::new(Solution::optimal(2_980.0, vec![1.0, 0.99, 0.0]));
        solver.mip = false;
        let result = CoverageSolver::new(SelectionConfig::default())
            .solve(&catalog(), &solver)
            .unwrap();

        // 0.99 is not strictly above the cutoff
        assert_eq!(result.selected_ids(), vec![10]);
        // The reported objective is the solver's, not the recomputed sum
        assert_eq!(result.total_payback, 2_980.0);
        assert!(!payback_agrees(result.total_payback, result.recomputed_payback() as f64));
    }

    #[test]
    fn test_threshold_is_configurable() {
        let solver = ScriptedSolver::new(Solution::optimal(2_000.0, vec![0.6, 0.4, 0.0]));
        let config = SelectionConfig::default().with_selection_threshold(0.5);
        let result = CoverageSolver::new(config).solve(&catalog(), &solver).unwrap();
        assert_eq!(result.selected_ids(), vec![10]);
    }

    #[test]
    fn test_non_optimal_statuses_select_nothing() {
        for status in [
            SolutionStatus::Infeasible,
            SolutionStatus::Unbounded,
            SolutionStatus::Other,
        ] {
            // Values present on a non-optimal answer must be ignored
            let mut solution = Solution::new(status, "no luck");
            solution.variable_values = vec![1.0, 1.0, 1.0];
            let solver = ScriptedSolver::new(solution);

            let result = CoverageSolver::new(SelectionConfig::default())
                .solve(&catalog(), &solver)
                .unwrap();
            assert_eq!(result.status, status);
            assert!(result.selected.is_empty());
            assert_eq!(result.total_payback, 0.0);
        }
    }

    #[test]
    fn test_fresh_model_per_call() {
        let solver = ScriptedSolver::new(Solution::optimal(1_000.0, vec![1.0, 0.0, 0.0]));
        let coverage = CoverageSolver::new(SelectionConfig::default());
        let catalog = catalog();

        let first = coverage.solve(&catalog, &solver).unwrap();
        let second = coverage.solve(&catalog, &solver).unwrap();

        assert_eq!(first.selected_ids(), second.selected_ids());
        let seen = solver.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].constraints.len(), 7);
        assert_eq!(seen[1].constraints.len(), 7);
    }

    #[test]
    fn test_wrong_value_count_is_an_error() {
        let solver = ScriptedSolver::new(Solution::optimal(1_000.0, vec![1.0]));
        let err = CoverageSolver::new(SelectionConfig::default())
            .solve(&catalog(), &solver)
            .unwrap_err();
        assert!(matches!(err, SolverError::ExecutionFailed(_)));
    }

    #[test]
    fn test_invalid_threshold_rejected_before_solving() {
        let solver = ScriptedSolver::new(Solution::optimal(0.0, vec![0.0; 3]));
        let config = SelectionConfig::default().with_selection_threshold(2.0);
        let err = CoverageSolver::new(config)
            .solve(&catalog(), &solver)
            .unwrap_err();
        assert!(matches!(err, SolverError::InvalidProblem(_)));
        assert!(solver.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_payback_tolerance_is_relative() {
        assert!(payback_agrees(1_580_000.0, 1_580_000.0 + 1.0));
        assert!(!payback_agrees(1_580_000.0, 1_580_000.0 + 10.0));
        assert!(payback_agrees(0.0, 1e-7));
    }
}
