//! Formatting of a solved production plan.

use std::fmt::Write;

/// Render the report for an optimal plan: the profit line followed by one
/// production line per quantity, each value rounded to two decimals.
///
/// Pure formatting; the caller decides whether the solve status warrants a
/// report at all. Each quantity line carries its own label, so two variables
/// are never reported under the same name.
pub fn production_report(objective_value: f64, quantities: &[(&str, f64)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Máxima ganancia: {objective_value:.2}");
    for (label, value) in quantities {
        let _ = writeln!(out, "Produciendo {value:.2} Kg de {label}");
    }
    out
}
