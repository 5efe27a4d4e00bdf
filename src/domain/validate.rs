use crate::error::{Result, SolveError};

/// Check that `a` is a non-empty rectangular matrix with one bound per row.
///
/// Returns `(n_rows, n_cols)` on success.
pub fn validate_shape(a: &[Vec<f64>], b: &[f64]) -> Result<(usize, usize)> {
    let first = a
        .first()
        .ok_or_else(|| SolveError::ShapeMismatch("coefficient matrix has no rows".to_string()))?;

    let n_cols = first.len();
    if n_cols == 0 {
        return Err(SolveError::ShapeMismatch(
            "coefficient matrix has no columns".to_string(),
        ));
    }

    for (row_idx, row) in a.iter().enumerate() {
        if row.len() != n_cols {
            return Err(SolveError::ShapeMismatch(format!(
                "row {} has {} coefficients, expected {}",
                row_idx,
                row.len(),
                n_cols,
            )));
        }
        if let Some(col_idx) = row.iter().position(|v| !v.is_finite()) {
            return Err(SolveError::ShapeMismatch(format!(
                "coefficient at ({}, {}) is not a finite number",
                row_idx, col_idx,
            )));
        }
    }

    if b.len() != a.len() {
        return Err(SolveError::ShapeMismatch(format!(
            "bound vector has {} entries but matrix has {} rows",
            b.len(),
            a.len(),
        )));
    }
    if let Some(idx) = b.iter().position(|v| !v.is_finite()) {
        return Err(SolveError::ShapeMismatch(format!(
            "bound {} is not a finite number",
            idx,
        )));
    }

    Ok((a.len(), n_cols))
}
