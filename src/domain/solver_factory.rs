use crate::domain::solver::Solver;
use crate::domain::solvers::MicrolpSolver;
use crate::error::{Result, SolveError};

#[cfg(feature = "highs-solver")]
use crate::domain::solvers::HighsSolver;

#[cfg(feature = "gurobi-solver")]
use crate::domain::solvers::GurobiSolver;

/// Known solver backends, whether or not they are compiled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverType {
    Microlp,
    Highs,
    Gurobi,
}

impl SolverType {
    /// Parse solver type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "microlp" => Some(SolverType::Microlp),
            "highs" => Some(SolverType::Highs),
            "gurobi" => Some(SolverType::Gurobi),
            _ => None,
        }
    }

    /// Cargo feature that must be enabled for this backend
    fn feature(self) -> Option<&'static str> {
        match self {
            SolverType::Microlp => None,
            SolverType::Highs => Some("highs-solver"),
            SolverType::Gurobi => Some("gurobi-solver"),
        }
    }
}

/// Create a solver instance based on the specified type
pub fn create_solver(solver_type: SolverType) -> Result<Box<dyn Solver>> {
    match solver_type {
        SolverType::Microlp => Ok(Box::new(MicrolpSolver::new())),
        #[cfg(feature = "highs-solver")]
        SolverType::Highs => Ok(Box::new(HighsSolver::new())),
        #[cfg(feature = "gurobi-solver")]
        SolverType::Gurobi => Ok(Box::new(GurobiSolver::new())),
        #[allow(unreachable_patterns)]
        other => Err(SolveError::Unavailable(format!(
            "{:?} backend requires building with feature `{}`",
            other,
            other.feature().unwrap_or_default(),
        ))),
    }
}

/// Resolve a backend by name; unknown names are treated as unavailable
pub fn create_solver_by_name(name: &str) -> Result<Box<dyn Solver>> {
    let solver_type = SolverType::from_str(name)
        .ok_or_else(|| SolveError::Unavailable(format!("unknown solver backend '{}'", name)))?;
    create_solver(solver_type)
}
