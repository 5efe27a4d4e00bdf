use crate::domain::formulate::LinearProgram;
use crate::error::Result;
use crate::models::Status;

/// What a backend reports after running on a [`LinearProgram`]
#[derive(Debug, Clone, PartialEq)]
pub struct BackendSolution {
    pub status: Status,
    pub objective: Option<f64>,
    /// One slot per variable, in variable order; `None` if the backend
    /// did not assign a value
    pub values: Vec<Option<f64>>,
}

impl BackendSolution {
    /// A solution carrying only a terminal status
    pub fn without_values(status: Status, n_vars: usize) -> Self {
        BackendSolution {
            status,
            objective: None,
            values: vec![None; n_vars],
        }
    }
}

/// Common interface for LP backends
pub trait Solver: Send + Sync {
    /// Solve a maximization LP
    ///
    /// # Arguments
    /// * `program` - Variables with bounds, objective and `<=` rows
    ///
    /// # Returns
    /// The backend status and the value assigned to each variable. A
    /// non-optimal status is reported as `Ok`; only faults are `Err`.
    fn solve(&self, program: &LinearProgram) -> Result<BackendSolution>;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}
