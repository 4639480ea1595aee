// COIN-OR CBC Solver Adapter (via good_lp)

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::{solve_without_variables, Result, SolverError, SolverService},
    value_objects::{ConstraintType, SolutionStatus as DomainSolutionStatus},
};
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolutionTrait, SolverModel, Variable as GoodLpVariable,
};
use std::time::Instant;
use tracing::debug;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        // Validate first
        self.validate(problem)?;

        let start_time = Instant::now();

        if problem.num_variables() == 0 {
            let statistics = SolverStatistics::for_problem(problem, 0.0);
            return Ok(solve_without_variables(problem).with_statistics(statistics));
        }

        // Build variables using good_lp
        let mut vars = variables!();
        let lp_variables: Vec<GoodLpVariable> = problem
            .variables
            .iter()
            .map(|_| vars.add(variable().binary()))
            .collect();

        let mut obj_expr: Expression = 0.into();
        for (&coeff, &var) in problem.objective.coefficients.iter().zip(&lp_variables) {
            if coeff != 0.0 {
                obj_expr += coeff * var;
            }
        }

        let mut lp_model = vars.maximise(obj_expr).using(coin_cbc::coin_cbc);
        lp_model.set_parameter("log", "0");

        for constraint in &problem.constraints {
            let mut lhs: Expression = 0.into();
            for (i, coeff) in constraint.terms() {
                lhs += coeff * lp_variables[i];
            }

            lp_model = match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => lp_model.with(lhs.leq(constraint.bound)),
                ConstraintType::GreaterThanOrEqual => lp_model.with(lhs.geq(constraint.bound)),
            };
        }

        let solution_result = lp_model.solve();
        let solve_time = start_time.elapsed().as_secs_f64() * 1000.0;
        let statistics = SolverStatistics::for_problem(problem, solve_time);
        debug!(solver = self.name(), solve_time_ms = solve_time, "CBC finished");

        let solution = match solution_result {
            Ok(sol) => {
                let variable_values: Vec<f64> =
                    lp_variables.iter().map(|&var| sol.value(var)).collect();
                let objective = problem.objective.evaluate(&variable_values);

                let mut solution = DomainSolution::optimal(objective, variable_values);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                solution
            }
            Err(ResolutionError::Infeasible) => DomainSolution::infeasible(),
            Err(ResolutionError::Unbounded) => DomainSolution::new(
                DomainSolutionStatus::Unbounded,
                "Problem is unbounded: objective can be improved infinitely",
            ),
            Err(ResolutionError::Other(msg)) => {
                DomainSolution::new(DomainSolutionStatus::Other, msg.to_string())
            }
            Err(e) => return Err(SolverError::ExecutionFailed(format!("{:?}", e))),
        };

        Ok(solution.with_statistics(statistics))
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
