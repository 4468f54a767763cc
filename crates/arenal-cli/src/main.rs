use arenal_solver::{production_report, Direction, Model, ModelError, Status, Variable};

const INF: f64 = f64::INFINITY;

/// Profit per kg of blue and yellow sand.
const BLUE_PROFIT: f64 = 10.0;
const YELLOW_PROFIT: f64 = 5.0;

/// Labor hours per kg and the available labor-hour capacity.
const BLUE_HOURS: f64 = 8.0;
const YELLOW_HOURS: f64 = 3.0;
const CAPACITY_HOURS: f64 = 100.0;

/// Maximize 10·blue + 5·yellow subject to blue >= 0, yellow >= 0 and the
/// labor-hour capacity 8·blue + 3·yellow <= 100.
fn build_model() -> Result<(Model, Variable, Variable), ModelError> {
    let mut model = Model::new();

    let blue = model.add_variable(-INF, INF, "blue_sand_kg")?;
    let yellow = model.add_variable(-INF, INF, "yellow_sand_kg")?;

    model.set_objective(
        &[(blue, BLUE_PROFIT), (yellow, YELLOW_PROFIT)],
        Direction::Maximize,
    )?;

    model.add_constraint(0.0, INF, &[(blue, 1.0)], Some("blue_sand_nonneg"))?;
    model.add_constraint(0.0, INF, &[(yellow, 1.0)], Some("yellow_sand_nonneg"))?;
    model.add_constraint(
        -INF,
        CAPACITY_HOURS,
        &[(blue, BLUE_HOURS), (yellow, YELLOW_HOURS)],
        Some("labor_hours"),
    )?;

    Ok((model, blue, yellow))
}

fn main() {
    let (model, blue, yellow) = match build_model() {
        Ok(built) => built,
        Err(e) => {
            eprintln!("Model error: {}", e);
            std::process::exit(1);
        }
    };

    let solution = model.solve();

    match solution.status() {
        Status::Optimal => {
            let objective = solution.objective_value().unwrap();
            let blue_kg = solution.value(blue).unwrap();
            let yellow_kg = solution.value(yellow).unwrap();
            print!(
                "{}",
                production_report(
                    objective,
                    &[("arena azul", blue_kg), ("arena amarilla", yellow_kg)],
                )
            );
        }
        Status::Infeasible => {
            eprintln!("No feasible production plan exists.");
            std::process::exit(1);
        }
        Status::Unbounded => {
            eprintln!("The profit is unbounded; the model is missing a capacity limit.");
            std::process::exit(1);
        }
        Status::Error => {
            eprintln!(
                "Solver error: {}",
                solution.message().unwrap_or("unknown engine failure")
            );
            std::process::exit(1);
        }
    }
}
