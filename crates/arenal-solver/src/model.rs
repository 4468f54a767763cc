use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Duplicate variable: {0}")]
    DuplicateVariable(String),
    #[error("Invalid bounds: {lower} .. {upper}")]
    InvalidBounds { lower: f64, upper: f64 },
    #[error("Unknown variable: index {0}")]
    UnknownVariable(usize),
    #[error("Variable {0} appears more than once in one expression")]
    DuplicateTerm(String),
}

/// Handle to a decision variable registered in a [`Model`].
///
/// Handles are cheap to copy and are the primary way to refer to a variable;
/// name-based lookup via [`Model::variable`] exists for interop with callers
/// that only hold the registered name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable(pub(crate) usize);

impl Variable {
    /// Position of the variable in the registration order.
    pub fn idx(&self) -> usize {
        self.0
    }
}

/// Handle to a constraint added to a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintId(pub(crate) usize);

/// Whether the objective is minimized or maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

#[derive(Debug, Clone)]
pub(crate) struct VariableDef {
    pub(crate) name: String,
    pub(crate) lower: f64,
    pub(crate) upper: f64,
}

/// A banded linear constraint: `lower <= sum(coeff * var) <= upper`.
#[derive(Debug, Clone)]
pub(crate) struct Constraint {
    pub(crate) name: Option<String>,
    pub(crate) lower: f64,
    pub(crate) upper: f64,
    pub(crate) terms: Vec<(Variable, f64)>,
}

/// A linear programming model: decision variables, one linear objective and
/// a list of banded linear constraints.
///
/// The model owns everything until [`Model::solve`] hands it to the external
/// engine. Solving borrows the model immutably, so a model can be re-solved
/// and always yields the same resolved values.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) variables: Vec<VariableDef>,
    /// Dense objective coefficient per variable, in registration order.
    pub(crate) objective: Vec<f64>,
    pub(crate) direction: Direction,
    pub(crate) constraints: Vec<Constraint>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            objective: Vec::new(),
            direction: Direction::Minimize,
            constraints: Vec::new(),
        }
    }

    /// Register a continuous decision variable with inclusive bounds.
    ///
    /// Either bound may be infinite (`f64::NEG_INFINITY` / `f64::INFINITY`).
    /// The name must be unique within the model.
    pub fn add_variable(
        &mut self,
        lower: f64,
        upper: f64,
        name: impl Into<String>,
    ) -> Result<Variable, ModelError> {
        check_bounds(lower, upper)?;
        let name = name.into();
        if self.variables.iter().any(|v| v.name == name) {
            return Err(ModelError::DuplicateVariable(name));
        }
        let var = Variable(self.variables.len());
        self.variables.push(VariableDef { name, lower, upper });
        self.objective.push(0.0);
        Ok(var)
    }

    /// Look up a variable by its registered name.
    pub fn variable(&self, name: &str) -> Option<Variable> {
        self.variables
            .iter()
            .position(|v| v.name == name)
            .map(Variable)
    }

    /// Name the variable was registered under.
    pub fn variable_name(&self, var: Variable) -> Option<&str> {
        self.variables.get(var.0).map(|v| v.name.as_str())
    }

    /// Set the linear objective, replacing any previously set objective
    /// entirely. A later coefficient for the same variable replaces an
    /// earlier one.
    pub fn set_objective(
        &mut self,
        terms: &[(Variable, f64)],
        direction: Direction,
    ) -> Result<(), ModelError> {
        for &(var, _) in terms {
            if var.0 >= self.variables.len() {
                return Err(ModelError::UnknownVariable(var.0));
            }
        }
        self.objective = vec![0.0; self.variables.len()];
        for &(var, coeff) in terms {
            self.objective[var.0] = coeff;
        }
        self.direction = direction;
        Ok(())
    }

    /// Append a banded constraint `lower <= sum(coeff * var) <= upper`.
    ///
    /// Constraints accumulate; there is no replacement. `lower` may be
    /// negative infinity and `upper` positive infinity. The optional name is
    /// kept for diagnostics only.
    pub fn add_constraint(
        &mut self,
        lower: f64,
        upper: f64,
        terms: &[(Variable, f64)],
        name: Option<&str>,
    ) -> Result<ConstraintId, ModelError> {
        check_bounds(lower, upper)?;
        let mut seen = std::collections::HashSet::new();
        for &(var, _) in terms {
            if var.0 >= self.variables.len() {
                return Err(ModelError::UnknownVariable(var.0));
            }
            if !seen.insert(var.0) {
                // The engine panics on a repeated variable in a row; reject
                // it here instead.
                return Err(ModelError::DuplicateTerm(
                    self.variables[var.0].name.clone(),
                ));
            }
        }
        let id = ConstraintId(self.constraints.len());
        self.constraints.push(Constraint {
            name: name.map(String::from),
            lower,
            upper,
            terms: terms.to_vec(),
        });
        Ok(id)
    }

    /// Diagnostic name the constraint was added under, if any.
    pub fn constraint_name(&self, id: ConstraintId) -> Option<&str> {
        self.constraints.get(id.0).and_then(|c| c.name.as_deref())
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

/// Bounds must be ordered, NaN-free and satisfiable: a lower bound of +inf
/// (or an upper bound of -inf) admits no value at all.
fn check_bounds(lower: f64, upper: f64) -> Result<(), ModelError> {
    if !(lower <= upper) || lower == f64::INFINITY || upper == f64::NEG_INFINITY {
        return Err(ModelError::InvalidBounds { lower, upper });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    #[test]
    fn duplicate_variable_name_is_rejected() {
        let mut model = Model::new();
        model.add_variable(-INF, INF, "x").unwrap();
        let err = model.add_variable(0.0, INF, "x").unwrap_err();
        assert_eq!(err, ModelError::DuplicateVariable("x".to_string()));
    }

    #[test]
    fn reversed_or_nan_bounds_are_rejected() {
        let mut model = Model::new();
        assert!(matches!(
            model.add_variable(1.0, 0.0, "x"),
            Err(ModelError::InvalidBounds { .. })
        ));
        assert!(matches!(
            model.add_variable(f64::NAN, 1.0, "y"),
            Err(ModelError::InvalidBounds { .. })
        ));
        assert!(matches!(
            model.add_variable(INF, INF, "z"),
            Err(ModelError::InvalidBounds { .. })
        ));
        assert_eq!(model.num_variables(), 0);
    }

    #[test]
    fn lookup_by_name_returns_the_original_handle() {
        let mut model = Model::new();
        let x = model.add_variable(-INF, INF, "blue_sand_kg").unwrap();
        let y = model.add_variable(-INF, INF, "yellow_sand_kg").unwrap();
        assert_eq!(model.variable("blue_sand_kg"), Some(x));
        assert_eq!(model.variable("yellow_sand_kg"), Some(y));
        assert_eq!(model.variable("red_sand_kg"), None);
        assert_eq!(model.variable_name(y), Some("yellow_sand_kg"));
    }

    #[test]
    fn set_objective_replaces_rather_than_accumulates() {
        let mut model = Model::new();
        let x = model.add_variable(-INF, INF, "x").unwrap();
        let y = model.add_variable(-INF, INF, "y").unwrap();

        model.set_objective(&[(x, 3.0)], Direction::Minimize).unwrap();
        model
            .set_objective(&[(y, 5.0), (x, 10.0)], Direction::Maximize)
            .unwrap();

        assert_eq!(model.objective, vec![10.0, 5.0]);
        assert_eq!(model.direction, Direction::Maximize);
    }

    #[test]
    fn later_objective_coefficient_overwrites_earlier() {
        let mut model = Model::new();
        let x = model.add_variable(-INF, INF, "x").unwrap();
        model
            .set_objective(&[(x, 1.0), (x, 7.0)], Direction::Maximize)
            .unwrap();
        assert_eq!(model.objective, vec![7.0]);
    }

    #[test]
    fn constraints_accumulate() {
        let mut model = Model::new();
        let x = model.add_variable(-INF, INF, "x").unwrap();
        let a = model.add_constraint(0.0, INF, &[(x, 1.0)], Some("x_nonneg")).unwrap();
        let b = model.add_constraint(-INF, 100.0, &[(x, 8.0)], None).unwrap();
        assert_eq!(a, ConstraintId(0));
        assert_eq!(b, ConstraintId(1));
        assert_eq!(model.num_constraints(), 2);
        assert_eq!(model.constraint_name(a), Some("x_nonneg"));
        assert_eq!(model.constraint_name(b), None);
    }

    #[test]
    fn repeated_variable_in_a_constraint_is_rejected() {
        let mut model = Model::new();
        let x = model.add_variable(-INF, INF, "x").unwrap();
        let err = model
            .add_constraint(0.0, INF, &[(x, 1.0), (x, 2.0)], None)
            .unwrap_err();
        assert_eq!(err, ModelError::DuplicateTerm("x".to_string()));
    }

    #[test]
    fn foreign_handle_is_rejected() {
        let mut a = Model::new();
        let mut b = Model::new();
        a.add_variable(-INF, INF, "x").unwrap();
        let x = a.add_variable(-INF, INF, "y").unwrap();
        b.add_variable(-INF, INF, "x").unwrap();
        assert_eq!(
            b.set_objective(&[(x, 1.0)], Direction::Maximize),
            Err(ModelError::UnknownVariable(1))
        );
        assert_eq!(
            b.add_constraint(0.0, INF, &[(x, 1.0)], None),
            Err(ModelError::UnknownVariable(1))
        );
    }
}
