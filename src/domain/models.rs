use super::value_objects::{ConstraintType, SolutionStatus};

/// Binary decision variable (x ∈ {0, 1})
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn binary(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Linear objective, always maximized
#[derive(Debug, Clone)]
pub struct ObjectiveFunction {
    pub coefficients: Vec<f64>,
}

impl ObjectiveFunction {
    pub fn maximize(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }

    /// Objective value at the given point
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(coeff, value)| coeff * value)
            .sum()
    }
}

/// Linear constraint on variables
///
/// Coefficients are dense: one entry per variable, zero for variables the
/// constraint does not touch.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub constraint_type: ConstraintType,
    pub coefficients: Vec<f64>,
    pub bound: f64,
    pub name: String,
}

impl Constraint {
    pub fn new(constraint_type: ConstraintType, coefficients: Vec<f64>, bound: f64) -> Self {
        Self {
            constraint_type,
            coefficients,
            bound,
            name: String::new(),
        }
    }

    pub fn leq(coefficients: Vec<f64>, bound: f64) -> Self {
        Self::new(ConstraintType::LessThanOrEqual, coefficients, bound)
    }

    pub fn geq(coefficients: Vec<f64>, bound: f64) -> Self {
        Self::new(ConstraintType::GreaterThanOrEqual, coefficients, bound)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }

    /// Non-zero `(index, coefficient)` terms
    pub fn terms(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.coefficients
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, coeff)| coeff != 0.0)
    }

    pub fn lhs(&self, values: &[f64]) -> f64 {
        self.terms()
            .map(|(i, coeff)| coeff * values.get(i).copied().unwrap_or(0.0))
            .sum()
    }

    pub fn is_satisfied_by(&self, values: &[f64]) -> bool {
        self.constraint_type.holds(self.lhs(values), self.bound)
    }
}

/// Complete optimization problem
#[derive(Debug, Clone)]
pub struct OptimizationProblem {
    pub name: String,
    pub objective: ObjectiveFunction,
    pub constraints: Vec<Constraint>,
    pub variables: Vec<Variable>,
}

impl OptimizationProblem {
    pub fn new(objective: ObjectiveFunction) -> Self {
        Self {
            name: String::new(),
            objective,
            constraints: Vec::new(),
            variables: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn add_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }

    pub fn num_variables(&self) -> usize {
        self.objective.num_variables()
    }

    pub fn constraint(&self, name: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.name == name)
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    pub solve_time_ms: f64,
    pub num_variables: u32,
    pub num_constraints: u32,
    pub num_binary_vars: u32,
}

impl SolverStatistics {
    pub fn for_problem(problem: &OptimizationProblem, solve_time_ms: f64) -> Self {
        Self {
            solve_time_ms,
            num_variables: problem.num_variables() as u32,
            num_constraints: problem.constraints.len() as u32,
            num_binary_vars: problem.variables.len() as u32,
        }
    }
}

/// Raw solver output for an optimization problem
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: SolutionStatus,
    pub optimal_value: Option<f64>,
    pub variable_values: Vec<f64>,
    pub message: String,
    pub statistics: SolverStatistics,
}

impl Solution {
    pub fn new(status: SolutionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            optimal_value: None,
            variable_values: Vec::new(),
            message: message.into(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn optimal(value: f64, variable_values: Vec<f64>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            optimal_value: Some(value),
            variable_values,
            message: "Optimal solution found".to_string(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn infeasible() -> Self {
        Self::new(
            SolutionStatus::Infeasible,
            "Problem is infeasible: no solution satisfies all constraints",
        )
    }

    pub fn with_statistics(mut self, statistics: SolverStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}
