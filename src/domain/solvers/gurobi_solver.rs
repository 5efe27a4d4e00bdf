use crate::domain::formulate::LinearProgram;
use crate::domain::solver::{BackendSolution, Solver};
use crate::error::{Result, SolveError};
use crate::models::Status;

use grb::prelude::*;

/// Gurobi solver implementation
pub struct GurobiSolver;

impl GurobiSolver {
    pub fn new() -> Self {
        GurobiSolver
    }

    /// Convert Gurobi status to our API status
    fn convert_status(status: grb::Status) -> Status {
        match status {
            grb::Status::Optimal => Status::Optimal,
            // Variables are bounded, so InfOrUnbd can only mean infeasible
            grb::Status::InfOrUnbd | grb::Status::Infeasible => Status::Infeasible,
            grb::Status::Unbounded => Status::Unbounded,
            grb::Status::SubOptimal => Status::Feasible,
            _ => Status::Undefined,
        }
    }
}

impl Default for GurobiSolver {
    fn default() -> Self {
        Self::new()
    }
}

fn backend_err(what: &str, e: grb::Error) -> SolveError {
    SolveError::BackendInternal(format!("{}: {}", what, e))
}

impl Solver for GurobiSolver {
    fn solve(&self, program: &LinearProgram) -> Result<BackendSolution> {
        // A missing license or shared library shows up here
        let mut env = Env::new("")
            .map_err(|e| SolveError::Unavailable(format!("Gurobi environment: {}", e)))?;

        env.set(param::OutputFlag, 0)
            .map_err(|e| backend_err("Failed to set Gurobi output flag", e))?;
        // Primal simplex keeps results reproducible
        env.set(param::Method, 0)
            .map_err(|e| backend_err("Failed to set Gurobi method", e))?;

        let mut model = Model::with_env("subcmixer", &env)
            .map_err(|e| backend_err("Failed to create Gurobi model", e))?;

        let mut vars: Vec<Var> = Vec::with_capacity(program.num_variables());
        for var in &program.variables {
            let gurobi_var = add_ctsvar!(
                model,
                name: &var.name,
                bounds: var.lower..var.upper
            )
            .map_err(|e| backend_err("Failed to add variable", e))?;
            vars.push(gurobi_var);
        }

        model
            .update()
            .map_err(|e| backend_err("Failed to update model after adding variables", e))?;

        for constraint in &program.constraints {
            let expr = vars
                .iter()
                .zip(&constraint.coefficients)
                .filter(|(_, &coeff)| coeff != 0.0)
                .fold(Expr::Constant(0.0), |acc, (&var, &coeff)| acc + coeff * var);

            model
                .add_constr(&constraint.label, c!(expr <= constraint.rhs))
                .map_err(|e| backend_err("Failed to add constraint", e))?;
        }

        let obj_expr = vars
            .iter()
            .zip(&program.objective)
            .fold(Expr::Constant(0.0), |acc, (&var, &coeff)| acc + coeff * var);

        model
            .set_objective(obj_expr, ModelSense::Maximize)
            .map_err(|e| backend_err("Failed to set objective", e))?;

        model
            .optimize()
            .map_err(|e| backend_err("Failed to optimize", e))?;

        let model_status = model
            .status()
            .map_err(|e| backend_err("Failed to get model status", e))?;
        let status = Self::convert_status(model_status);
        if status != Status::Optimal {
            return Ok(BackendSolution::without_values(status, vars.len()));
        }

        let values: Vec<Option<f64>> = vars
            .iter()
            .map(|var| model.get_obj_attr(attr::X, var).ok())
            .collect();
        let objective = model.get_attr(attr::ObjVal).ok();

        Ok(BackendSolution {
            status,
            objective,
            values,
        })
    }

    fn name(&self) -> &str {
        "Gurobi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_status_treats_inf_or_unbd_as_infeasible() {
        assert_eq!(
            GurobiSolver::convert_status(grb::Status::InfOrUnbd),
            Status::Infeasible
        );
        assert_eq!(
            GurobiSolver::convert_status(grb::Status::Infeasible),
            Status::Infeasible
        );
        assert_eq!(GurobiSolver::convert_status(grb::Status::Optimal), Status::Optimal);
    }
}
