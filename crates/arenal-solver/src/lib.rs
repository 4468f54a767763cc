mod engine;
mod model;
mod report;
mod solution;

pub use model::{ConstraintId, Direction, Model, ModelError, Variable};
pub use report::production_report;
pub use solution::{Solution, Status};
