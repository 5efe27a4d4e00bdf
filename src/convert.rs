use crate::domain::solve::SolveReport;
use crate::error::{Result, SolveError};
use crate::models::{ApiError, ApiSolution, SolveData};

/// Parse one serialized `{"A": [[..]], "b": [..]}` payload
pub fn parse_payload(payload: &str) -> Result<SolveData> {
    if payload.trim().is_empty() {
        return Err(SolveError::InvalidPayload("empty input".to_string()));
    }
    Ok(serde_json::from_str(payload)?)
}

/// Serialize weights as a bare JSON array with no trailing newline
pub fn to_wire(solution: &[f64]) -> Result<String> {
    Ok(serde_json::to_string(solution)?)
}

impl From<SolveReport> for ApiSolution {
    fn from(r: SolveReport) -> Self {
        ApiSolution {
            solution: r.solution,
            objective: r.objective,
            solver: r.solver,
        }
    }
}

impl From<&SolveError> for ApiError {
    fn from(e: &SolveError) -> Self {
        ApiError {
            error: e.to_string(),
            kind: e.kind().to_string(),
        }
    }
}
