use serde::{Deserialize, Serialize};

// ---------- Wire types: owned & serde-friendly ----------

/// One solve request: `A` holds one row per condition, one column per text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SolveData {
    #[serde(rename = "A")]
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,
}

/// Weights in input column order
pub type SolutionVector = Vec<f64>;

/// Backend termination status; discriminants follow GLPK's numbering
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Undefined = 1,
    Feasible = 2,
    Infeasible = 3,
    Optimal = 5,
    Unbounded = 6,
}

/// Server-mode success body
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiSolution {
    pub solution: SolutionVector,
    pub objective: f64,
    pub solver: String,
}

/// Server-mode failure body
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiError {
    pub error: String,
    pub kind: String,
}

// ---------- Corpus composition summary ----------

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CategorySize {
    pub total: i64,
    pub ratio: f64,
    pub expression: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CorpusComposition {
    pub doc_ids: Vec<String>,
    pub size_assembled: i64,
    pub category_sizes: Vec<CategorySize>,
}
