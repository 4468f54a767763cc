use crate::model::Variable;

/// Outcome of a solve.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// An optimal solution was found.
    Optimal,
    /// The constraints cannot all be satisfied at once.
    Infeasible,
    /// The objective can be improved without limit.
    Unbounded,
    /// The engine failed.
    Error,
}

/// The result of solving a model.
///
/// Resolved values exist only for an optimal solve: every accessor returns
/// `None` unless [`Solution::status`] is [`Status::Optimal`], so a caller
/// cannot read meaningless numbers off an infeasible or unbounded result.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Solution {
    status: Status,
    objective_value: f64,
    values: Vec<f64>,
    message: Option<String>,
}

impl Solution {
    pub(crate) fn optimal(objective_value: f64, values: Vec<f64>) -> Self {
        Self {
            status: Status::Optimal,
            objective_value,
            values,
            message: None,
        }
    }

    pub(crate) fn infeasible() -> Self {
        Self {
            status: Status::Infeasible,
            objective_value: f64::INFINITY,
            values: Vec::new(),
            message: None,
        }
    }

    pub(crate) fn unbounded() -> Self {
        Self {
            status: Status::Unbounded,
            objective_value: f64::NEG_INFINITY,
            values: Vec::new(),
            message: None,
        }
    }

    pub(crate) fn error(message: String) -> Self {
        Self {
            status: Status::Error,
            objective_value: f64::NAN,
            values: Vec::new(),
            message: Some(message),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }

    /// Resolved objective value, if the solve was optimal.
    pub fn objective_value(&self) -> Option<f64> {
        self.is_optimal().then_some(self.objective_value)
    }

    /// Resolved value of one variable, if the solve was optimal.
    pub fn value(&self, var: Variable) -> Option<f64> {
        if !self.is_optimal() {
            return None;
        }
        self.values.get(var.idx()).copied()
    }

    /// Resolved values in variable registration order, if the solve was
    /// optimal.
    pub fn values(&self) -> Option<&[f64]> {
        self.is_optimal().then_some(self.values.as_slice())
    }

    /// Engine diagnostic accompanying a [`Status::Error`] result.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_optimal_solutions_expose_no_values() {
        for solution in [
            Solution::infeasible(),
            Solution::unbounded(),
            Solution::error("boom".to_string()),
        ] {
            assert!(!solution.is_optimal());
            assert_eq!(solution.objective_value(), None);
            assert_eq!(solution.value(Variable(0)), None);
            assert_eq!(solution.values(), None);
        }
    }

    #[test]
    fn optimal_solution_exposes_values() {
        let solution = Solution::optimal(125.0, vec![12.5, 0.0]);
        assert_eq!(solution.status(), Status::Optimal);
        assert_eq!(solution.objective_value(), Some(125.0));
        assert_eq!(solution.value(Variable(0)), Some(12.5));
        assert_eq!(solution.value(Variable(1)), Some(0.0));
        assert_eq!(solution.value(Variable(2)), None);
        assert_eq!(solution.values(), Some(&[12.5, 0.0][..]));
        assert_eq!(solution.message(), None);
    }

    #[test]
    fn error_solution_carries_the_engine_message() {
        let solution = Solution::error("numerical trouble".to_string());
        assert_eq!(solution.status(), Status::Error);
        assert_eq!(solution.message(), Some("numerical trouble"));
    }
}
