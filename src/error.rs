use thiserror::Error;

use crate::models::Status;

/// Result type for solver operations
pub type Result<T> = std::result::Result<T, SolveError>;

/// Exit code for a successful solve
pub const EXIT_OK: i32 = 0;
/// Exit code for any failure that is not an environment problem
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when the LP backend cannot be used in this environment.
/// Callers may fall back to a different strategy on this code.
pub const EXIT_UNAVAILABLE: i32 = 3;

/// Errors that can occur while validating, building or solving the LP
#[derive(Error, Debug)]
pub enum SolveError {
    /// Matrix and bound vector dimensions do not line up
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// The payload could not be parsed into a matrix and a bound vector
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Requested backend is missing from this build or runtime
    #[error("solver backend unavailable: {0}")]
    Unavailable(String),

    /// Backend finished without an optimal solution
    #[error("solve failed with status {status:?}")]
    SolveFailed { status: Status },

    /// Backend raised a fault while building or solving the model
    #[error("backend error: {0}")]
    BackendInternal(String),
}

impl SolveError {
    /// Process exit code for this error kind
    pub fn exit_code(&self) -> i32 {
        match self {
            SolveError::Unavailable(_) => EXIT_UNAVAILABLE,
            _ => EXIT_FAILURE,
        }
    }

    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            SolveError::ShapeMismatch(_) => "shape_mismatch",
            SolveError::InvalidPayload(_) => "invalid_payload",
            SolveError::Unavailable(_) => "unavailable",
            SolveError::SolveFailed { .. } => "solve_failed",
            SolveError::BackendInternal(_) => "backend_internal",
        }
    }
}

impl From<serde_json::Error> for SolveError {
    fn from(e: serde_json::Error) -> Self {
        SolveError::InvalidPayload(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_distinguishes_unavailable() {
        assert_eq!(SolveError::Unavailable("highs".into()).exit_code(), EXIT_UNAVAILABLE);
        assert_eq!(SolveError::ShapeMismatch("x".into()).exit_code(), EXIT_FAILURE);
        assert_eq!(
            SolveError::SolveFailed { status: Status::Infeasible }.exit_code(),
            EXIT_FAILURE
        );
        assert_eq!(SolveError::BackendInternal("x".into()).exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_invalid_json_maps_to_invalid_payload() {
        let err: SolveError = serde_json::from_str::<Vec<f64>>("not json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), "invalid_payload");
    }
}
