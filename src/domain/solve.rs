use log::{debug, warn};

use crate::domain::formulate::formulate;
use crate::domain::solver::Solver;
use crate::domain::solvers::MicrolpSolver;
use crate::domain::validate::validate_shape;
use crate::error::{Result, SolveError};
use crate::models::{SolutionVector, Status};

/// Outcome of a successful solve
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub solution: SolutionVector,
    pub objective: f64,
    pub solver: String,
}

/// Solve the maximin LP with the default backend.
pub fn solve(a: &[Vec<f64>], b: &[f64]) -> Result<SolutionVector> {
    solve_with(&MicrolpSolver::new(), a, b)
}

/// Solve the maximin LP with the given backend and return only the weights.
pub fn solve_with(solver: &dyn Solver, a: &[Vec<f64>], b: &[f64]) -> Result<SolutionVector> {
    solve_report(solver, a, b).map(|report| report.solution)
}

/// Validate, formulate and solve; the returned vector is aligned to the
/// columns of `a`.
///
/// Any non-optimal termination is a [`SolveError::SolveFailed`], so callers
/// never receive a vector from a model the backend gave up on.
pub fn solve_report(solver: &dyn Solver, a: &[Vec<f64>], b: &[f64]) -> Result<SolveReport> {
    let (n_rows, n_cols) = validate_shape(a, b)?;
    let program = formulate(a, b);
    debug!(
        "solving {} x {} maximin LP with {}",
        n_rows,
        n_cols,
        solver.name()
    );

    let outcome = solver.solve(&program)?;
    if outcome.status != Status::Optimal {
        return Err(SolveError::SolveFailed {
            status: outcome.status,
        });
    }
    if outcome.values.len() != n_cols {
        return Err(SolveError::BackendInternal(format!(
            "{} returned {} values for {} variables",
            solver.name(),
            outcome.values.len(),
            n_cols,
        )));
    }

    let solution: SolutionVector = outcome
        .values
        .iter()
        .enumerate()
        .map(|(j, value)| {
            value.unwrap_or_else(|| {
                warn!("{} left x_{} unresolved, reporting 0", solver.name(), j);
                0.0
            })
        })
        .collect();

    let objective = outcome
        .objective
        .unwrap_or_else(|| program.objective_value(&solution));

    Ok(SolveReport {
        solution,
        objective,
        solver: solver.name().to_string(),
    })
}
