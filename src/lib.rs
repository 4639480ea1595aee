// Domain layer: Business logic and rules
pub mod domain;

// Application layer: Use cases (model construction, solve interpretation, reporting)
pub mod application;

// Infrastructure layer: External concerns (CSV, config files, logging)
pub mod infrastructure;

// Solver adapters: Concrete implementations of SolverService
pub mod solver;

// Re-export commonly used types
pub use domain::{
    Constraint, ConstraintType, InvestmentCatalog, InvestmentOption, ObjectiveFunction,
    OptimizationProblem, RiskCategory, SelectionConfig, SelectionResult, Solution,
    SolutionStatus, SolverBackend, SolverError, SolverService, TierLimits, Variable,
};

pub use application::{render_report, CoverageModelBuilder, CoverageSolver};

pub use infrastructure::{load_catalog, load_catalog_from_reader, AppConfig, CatalogError};

pub use solver::SolverFactory;

#[cfg(feature = "highs")]
pub use solver::HighsSolver;

#[cfg(feature = "cbc")]
pub use solver::CoinCbcSolver;
