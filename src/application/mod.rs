// Application layer: use cases built on the domain

pub mod coverage_model;
pub mod coverage_solver;
pub mod report;

pub use coverage_model::CoverageModelBuilder;
pub use coverage_solver::CoverageSolver;
pub use report::render_report;
