// HiGHS Solver Adapter
// Implements the SolverService interface for HiGHS
// This is an adapter pattern - translates our domain models to HiGHS API

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::{solve_without_variables, Result, SolverService},
    value_objects::{ConstraintType, SolutionStatus as DomainSolutionStatus},
};
use highs::{HighsModelStatus, RowProblem, Sense};
use std::time::Instant;
use tracing::debug;

pub struct HighsSolver {
    relaxed: bool,
}

impl HighsSolver {
    /// Branch-and-bound solver: binary variables stay integral
    pub fn new() -> Self {
        Self { relaxed: false }
    }

    /// LP relaxation: binary variables become continuous in [0, 1].
    ///
    /// Vertices of the relaxation may be fractional, so callers must treat the
    /// selection threshold as the integrality check.
    pub fn relaxation() -> Self {
        Self { relaxed: true }
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        // Validate first
        self.validate(problem)?;

        let start_time = Instant::now();

        if problem.num_variables() == 0 {
            let statistics = SolverStatistics::for_problem(problem, 0.0);
            return Ok(solve_without_variables(problem).with_statistics(statistics));
        }

        // Use HiGHS RowProblem (add variables first, then constraints)
        let mut pb = RowProblem::default();
        let mut cols = Vec::with_capacity(problem.variables.len());

        for &obj_coeff in &problem.objective.coefficients {
            let col = if self.relaxed {
                pb.add_column(obj_coeff, 0.0..=1.0)
            } else {
                pb.add_integer_column(obj_coeff, 0.0..=1.0)
            };
            cols.push(col);
        }

        for constraint in &problem.constraints {
            let terms: Vec<_> = constraint
                .terms()
                .map(|(i, coeff)| (cols[i], coeff))
                .collect();

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    pb.add_row(..=constraint.bound, &terms);
                }
                ConstraintType::GreaterThanOrEqual => {
                    pb.add_row(constraint.bound.., &terms);
                }
            }
        }

        let mut model = pb.optimise(Sense::Maximise);
        model.make_quiet();
        let solved = model.solve();
        let solve_time = start_time.elapsed().as_secs_f64() * 1000.0;
        let statistics = SolverStatistics::for_problem(problem, solve_time);

        let status = solved.status();
        debug!(solver = self.name(), ?status, solve_time_ms = solve_time, "HiGHS finished");

        let solution = match status {
            HighsModelStatus::Optimal => {
                let variable_values = solved.get_solution().columns().to_vec();
                let objective = problem.objective.evaluate(&variable_values);

                let mut solution = DomainSolution::optimal(objective, variable_values);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                solution
            }
            HighsModelStatus::Infeasible => DomainSolution::infeasible(),
            HighsModelStatus::Unbounded => DomainSolution::new(
                DomainSolutionStatus::Unbounded,
                "Problem is unbounded: objective can be improved infinitely",
            ),
            other => DomainSolution::new(
                DomainSolutionStatus::Other,
                format!("HiGHS solver returned status: {:?}", other),
            ),
        };

        Ok(solution.with_statistics(statistics))
    }

    fn name(&self) -> &str {
        if self.relaxed {
            "HiGHS (LP relaxation)"
        } else {
            "HiGHS"
        }
    }

    fn supports_mip(&self) -> bool {
        !self.relaxed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Constraint, ObjectiveFunction, Variable};

    fn knapsack() -> OptimizationProblem {
        // Maximize 150a + 90b + 120c subject to 7a + 3b + 4c <= 8
        OptimizationProblem::new(ObjectiveFunction::maximize(vec![150.0, 90.0, 120.0]))
            .with_name("knapsack")
            .with_variables(vec![
                Variable::binary("a"),
                Variable::binary("b"),
                Variable::binary("c"),
            ])
            .add_constraint(Constraint::leq(vec![7.0, 3.0, 4.0], 8.0).with_name("weight"))
    }

    #[test]
    fn test_solver_name() {
        assert_eq!(HighsSolver::new().name(), "HiGHS");
        assert!(HighsSolver::new().supports_mip());
        assert!(!HighsSolver::relaxation().supports_mip());
    }

    #[test]
    fn test_binary_knapsack() {
        let solution = HighsSolver::new().solve(&knapsack()).unwrap();

        assert!(solution.is_optimal());
        // b + c (210) beats a alone (150)
        let values: Vec<i64> = solution
            .variable_values
            .iter()
            .map(|v| v.round() as i64)
            .collect();
        assert_eq!(values, vec![0, 1, 1]);
        assert!((solution.optimal_value.unwrap() - 210.0).abs() < 1e-6);
        assert_eq!(solution.statistics.num_binary_vars, 3);
    }

    #[test]
    fn test_relaxation_can_be_fractional() {
        let solution = HighsSolver::relaxation().solve(&knapsack()).unwrap();

        assert!(solution.is_optimal());
        // LP optimum takes b and c fully plus 1/7 of a
        assert!(solution.optimal_value.unwrap() > 210.0 + 1e-6);
        let a = solution.variable_values[0];
        assert!(a > 0.0 && a < 1.0, "expected fractional value, got {a}");
    }

    #[test]
    fn test_infeasible() {
        let problem = knapsack().add_constraint(
            Constraint::geq(vec![1.0, 1.0, 1.0], 3.0).with_name("take_all"),
        );
        let solution = HighsSolver::new().solve(&problem).unwrap();
        assert!(!solution.is_optimal());
        assert!(solution.variable_values.is_empty());
    }

    #[test]
    fn test_empty_problem() {
        let problem = OptimizationProblem::new(ObjectiveFunction::maximize(vec![]))
            .add_constraint(Constraint::geq(vec![], 1.0));
        let solution = HighsSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.status, DomainSolutionStatus::Infeasible);
    }
}
