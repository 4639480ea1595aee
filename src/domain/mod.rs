// Domain module: Business logic and models

pub mod catalog;
pub mod models;
pub mod selection;
pub mod solver_service;
pub mod value_objects;

pub use catalog::*;
pub use models::*;
pub use selection::*;
pub use solver_service::*;
pub use value_objects::*;
