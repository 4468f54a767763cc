//! Bridge to the external LP engine.
//!
//! The model is lowered to a [`microlp::Problem`] and the solve is delegated
//! entirely to the engine; nothing in this crate implements simplex. The
//! call blocks until the engine returns.

use log::debug;
use microlp::{ComparisonOp, OptimizationDirection, Problem};

use crate::model::{Direction, Model};
use crate::solution::Solution;

impl Model {
    /// Solve the model with the external engine.
    ///
    /// Borrows the model immutably; re-solving an unmodified model yields
    /// identical resolved values.
    pub fn solve(&self) -> Solution {
        let (problem, engine_vars) = lower(self);
        debug!(
            "solving LP: {} variables, {} constraints",
            self.num_variables(),
            self.num_constraints()
        );
        match problem.solve() {
            Ok(solved) => {
                let values = engine_vars.iter().map(|&v| solved[v]).collect();
                debug!("solve finished: optimal, objective {}", solved.objective());
                Solution::optimal(solved.objective(), values)
            }
            Err(microlp::Error::Infeasible) => {
                debug!("solve finished: infeasible");
                Solution::infeasible()
            }
            Err(microlp::Error::Unbounded) => {
                debug!("solve finished: unbounded");
                Solution::unbounded()
            }
            Err(err) => {
                debug!("solve failed: {err}");
                Solution::error(err.to_string())
            }
        }
    }
}

/// Build the engine problem: one engine variable per model variable, and one
/// engine row per finite side of each banded constraint.
fn lower(model: &Model) -> (Problem, Vec<microlp::Variable>) {
    let direction = match model.direction {
        Direction::Minimize => OptimizationDirection::Minimize,
        Direction::Maximize => OptimizationDirection::Maximize,
    };
    let mut problem = Problem::new(direction);

    let engine_vars: Vec<microlp::Variable> = model
        .variables
        .iter()
        .zip(&model.objective)
        .map(|(def, &coeff)| problem.add_var(coeff, (def.lower, def.upper)))
        .collect();

    for constraint in &model.constraints {
        let row: Vec<(microlp::Variable, f64)> = constraint
            .terms
            .iter()
            .map(|&(var, coeff)| (engine_vars[var.idx()], coeff))
            .collect();
        if constraint.lower == constraint.upper {
            problem.add_constraint(&row, ComparisonOp::Eq, constraint.lower);
            continue;
        }
        if constraint.lower.is_finite() {
            problem.add_constraint(&row, ComparisonOp::Ge, constraint.lower);
        }
        if constraint.upper.is_finite() {
            problem.add_constraint(&row, ComparisonOp::Le, constraint.upper);
        }
        // A fully open band adds no row at all.
    }

    (problem, engine_vars)
}
