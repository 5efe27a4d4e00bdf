use crate::domain::formulate::LinearProgram;
use crate::domain::solver::{BackendSolution, Solver};
use crate::error::{Result, SolveError};
use crate::models::Status;

use microlp::{ComparisonOp, OptimizationDirection, Problem};

/// Pure Rust simplex backend, always compiled in
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        MicrolpSolver
    }
}

impl Default for MicrolpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for MicrolpSolver {
    fn solve(&self, program: &LinearProgram) -> Result<BackendSolution> {
        let n_vars = program.num_variables();
        let mut problem = Problem::new(OptimizationDirection::Maximize);

        let vars: Vec<microlp::Variable> = program
            .variables
            .iter()
            .zip(&program.objective)
            .map(|(var, &coeff)| problem.add_var(coeff, (var.lower, var.upper)))
            .collect();

        for constraint in &program.constraints {
            let expr: Vec<(microlp::Variable, f64)> = vars
                .iter()
                .copied()
                .zip(constraint.coefficients.iter().copied())
                .filter(|&(_, coeff)| coeff != 0.0)
                .collect();
            // An all-zero row still matters when its bound is negative
            if expr.is_empty() {
                if constraint.rhs < 0.0 {
                    return Ok(BackendSolution::without_values(Status::Infeasible, n_vars));
                }
                continue;
            }
            problem.add_constraint(expr, ComparisonOp::Le, constraint.rhs);
        }

        match problem.solve() {
            Ok(solution) => Ok(BackendSolution {
                status: Status::Optimal,
                objective: Some(solution.objective()),
                values: vars.iter().map(|&v| Some(solution[v])).collect(),
            }),
            Err(microlp::Error::Infeasible) => {
                Ok(BackendSolution::without_values(Status::Infeasible, n_vars))
            }
            Err(microlp::Error::Unbounded) => {
                Ok(BackendSolution::without_values(Status::Unbounded, n_vars))
            }
            Err(e) => Err(SolveError::BackendInternal(format!(
                "microlp failed: {}",
                e
            ))),
        }
    }

    fn name(&self) -> &str {
        "microlp"
    }
}
