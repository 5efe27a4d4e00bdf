use crate::domain::formulate::LinearProgram;
use crate::domain::solver::{BackendSolution, Solver};
use crate::error::{Result, SolveError};
use crate::models::Status;

use ::highs::{HighsModelStatus, RowProblem, Sense};

/// HiGHS solver implementation
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        HighsSolver
    }

    /// Convert HiGHS status to our API status
    fn convert_status(model_status: HighsModelStatus) -> Status {
        match model_status {
            HighsModelStatus::Optimal => Status::Optimal,
            HighsModelStatus::Infeasible => Status::Infeasible,
            // Columns are bounded, so this can only mean infeasible
            HighsModelStatus::UnboundedOrInfeasible => Status::Infeasible,
            HighsModelStatus::Unbounded => Status::Unbounded,
            _ => Status::Undefined,
        }
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for HighsSolver {
    fn solve(&self, program: &LinearProgram) -> Result<BackendSolution> {
        let mut problem = RowProblem::default();

        let cols: Vec<_> = program
            .variables
            .iter()
            .zip(&program.objective)
            .map(|(var, &coeff)| problem.add_column(coeff, var.lower..=var.upper))
            .collect();

        for constraint in &program.constraints {
            let row_factors: Vec<_> = cols
                .iter()
                .copied()
                .zip(constraint.coefficients.iter().copied())
                .filter(|&(_, coeff)| coeff != 0.0)
                .collect();
            problem.add_row(..=constraint.rhs, &row_factors);
        }

        let mut model = problem.optimise(Sense::Maximise);
        model.set_option("output_flag", false);
        model.set_option("solver", "simplex");

        let solved = model.try_solve().map_err(|status| {
            SolveError::BackendInternal(format!("HiGHS failed: {:?}", status))
        })?;

        let status = Self::convert_status(solved.status());
        if status != Status::Optimal {
            return Ok(BackendSolution::without_values(status, cols.len()));
        }

        let solution = solved.get_solution();
        let values: Vec<Option<f64>> = (0..cols.len())
            .map(|idx| solution.columns().get(idx).copied())
            .collect();
        let objective = values
            .iter()
            .zip(&program.objective)
            .map(|(v, c)| v.unwrap_or(0.0) * c)
            .sum();

        Ok(BackendSolution {
            status,
            objective: Some(objective),
            values,
        })
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
