/// Every inclusion weight lives in `[WEIGHT_MIN, WEIGHT_MAX]`.
pub const WEIGHT_MIN: f64 = 0.0;
pub const WEIGHT_MAX: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub lower: f64,
    pub upper: f64,
}

/// A single `coefficients · x <= rhs` row
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Label for solver diagnostics only
    pub label: String,
    pub coefficients: Vec<f64>,
    pub rhs: f64,
}

/// Backend-neutral maximization LP over bounded continuous variables
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram {
    pub variables: Vec<Variable>,
    /// Objective coefficient per variable, always maximized
    pub objective: Vec<f64>,
    pub constraints: Vec<Constraint>,
}

impl LinearProgram {
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Objective value of `values` (missing entries count as zero)
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective.iter().zip(values).map(|(c, x)| c * x).sum()
    }
}

/// Build the maximin LP: maximize `sum(x)` s.t. `A x <= b`, `0 <= x <= 1`.
///
/// The caller is expected to have run [`validate_shape`] first.
///
/// [`validate_shape`]: crate::domain::validate::validate_shape
pub fn formulate(a: &[Vec<f64>], b: &[f64]) -> LinearProgram {
    let n_cols = a.first().map(Vec::len).unwrap_or(0);

    let variables = (0..n_cols)
        .map(|j| Variable {
            name: format!("x_{}", j),
            lower: WEIGHT_MIN,
            upper: WEIGHT_MAX,
        })
        .collect();

    let constraints = a
        .iter()
        .zip(b)
        .enumerate()
        .map(|(i, (row, &rhs))| Constraint {
            label: format!("Max_constraint_{}", i),
            coefficients: row.clone(),
            rhs,
        })
        .collect();

    LinearProgram {
        variables,
        objective: vec![1.0; n_cols],
        constraints,
    }
}
