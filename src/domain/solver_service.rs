// Domain service interface for solving optimization problems
// Defines the contract that any solver implementation must follow

use super::models::{OptimizationProblem, Solution};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Solver not available: {0}")]
    SolverNotAvailable(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for optimization solvers
///
/// The selection model is built against this trait only, so a backend can be
/// swapped without touching constraint construction. Non-optimal outcomes
/// (infeasible, unbounded, limits) are reported through
/// [`Solution::status`]; `Err` is reserved for failures of the engine itself.
pub trait SolverService: Send + Sync {
    /// Solve an optimization problem
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution>;

    /// Validate a problem without solving it
    fn validate(&self, problem: &OptimizationProblem) -> Result<()> {
        let mut errors = Vec::new();

        let num_vars = problem.num_variables();

        // Check variables match objective
        if problem.variables.len() != num_vars {
            errors.push(format!(
                "Number of variables ({}) doesn't match objective coefficients ({})",
                problem.variables.len(),
                num_vars
            ));
        }

        // Check constraints
        for (i, constraint) in problem.constraints.iter().enumerate() {
            if constraint.num_variables() != num_vars {
                errors.push(format!(
                    "Constraint {} '{}' has {} coefficients but problem has {} variables",
                    i,
                    constraint.name,
                    constraint.num_variables(),
                    num_vars
                ));
            }
        }

        if problem.objective.coefficients.iter().any(|c| !c.is_finite()) {
            errors.push("Objective has a non-finite coefficient".to_string());
        }
        for constraint in &problem.constraints {
            if !constraint.bound.is_finite() || constraint.coefficients.iter().any(|c| !c.is_finite()) {
                errors.push(format!(
                    "Constraint '{}' has a non-finite coefficient or bound",
                    constraint.name
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;

    /// Check if this solver enforces integrality
    fn supports_mip(&self) -> bool;
}

/// Answer a problem without decision variables.
///
/// Every constraint is evaluated at the empty point: the problem is optimal
/// with objective 0 when all of them accept 0, infeasible otherwise.
pub fn solve_without_variables(problem: &OptimizationProblem) -> Solution {
    if problem.constraints.iter().all(|c| c.is_satisfied_by(&[])) {
        Solution::optimal(0.0, Vec::new())
    } else {
        Solution::infeasible()
    }
}
