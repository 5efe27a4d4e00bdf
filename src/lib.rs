//! Maximin subcorpus composition solver.
//!
//! Given a matrix `A` (one row per condition, one column per text) and a
//! bound vector `b`, find weights `x` in `[0, 1]` maximizing `sum(x)`
//! subject to `A x <= b`.

pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod models;
pub mod server;

pub use domain::solve::{solve, solve_report, solve_with, SolveReport};
pub use domain::solver::{BackendSolution, Solver};
pub use domain::solver_factory::{create_solver, create_solver_by_name, SolverType};
pub use error::{Result, SolveError};
pub use models::{SolutionVector, SolveData, Status};
