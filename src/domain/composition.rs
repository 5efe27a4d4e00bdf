use crate::domain::solve::solve_with;
use crate::domain::solver::Solver;
use crate::error::{Result, SolveError};
use crate::models::{CategorySize, CorpusComposition};

/// Texts taking part in a composition, index-aligned to the LP columns
#[derive(Debug, Clone, Copy)]
pub struct TextSet<'a> {
    pub doc_ids: &'a [String],
    /// Size of each text in positions
    pub sizes: &'a [i64],
}

/// Turn fractional weights into a corpus composition.
///
/// Weights are rounded half-to-even into 0/1 selections. Each condition
/// row of `a` is then summed over the selected texts; `labels[i]` names
/// row `i` in the output.
pub fn compose(
    weights: &[f64],
    a: &[Vec<f64>],
    texts: TextSet<'_>,
    labels: &[String],
) -> Result<CorpusComposition> {
    let n = weights.len();
    if texts.doc_ids.len() != n || texts.sizes.len() != n {
        return Err(SolveError::ShapeMismatch(format!(
            "{} weights for {} document ids and {} sizes",
            n,
            texts.doc_ids.len(),
            texts.sizes.len(),
        )));
    }
    if labels.len() != a.len() {
        return Err(SolveError::ShapeMismatch(format!(
            "{} labels for {} conditions",
            labels.len(),
            a.len(),
        )));
    }

    let selections: Vec<f64> = weights.iter().map(|w| w.round_ties_even()).collect();

    let size_assembled: f64 = selections
        .iter()
        .zip(texts.sizes)
        .map(|(s, &size)| s * size as f64)
        .sum();

    let mut category_sizes = Vec::with_capacity(a.len());
    for (row, label) in a.iter().zip(labels) {
        let total = dot(&selections, row)?;
        let ratio = if size_assembled > 0.0 {
            total / size_assembled
        } else {
            0.0
        };
        category_sizes.push(CategorySize {
            total: total as i64,
            ratio,
            expression: label.clone(),
        });
    }

    let doc_ids = selections
        .iter()
        .zip(texts.doc_ids)
        .filter(|(s, _)| **s == 1.0)
        .map(|(_, id)| id.clone())
        .collect();

    Ok(CorpusComposition {
        doc_ids,
        size_assembled: size_assembled as i64,
        category_sizes,
    })
}

/// Solve and compose in one go. A bound vector with no positive entry
/// cannot select anything, so it yields an empty composition without
/// running the backend.
pub fn solve_composition(
    solver: &dyn Solver,
    a: &[Vec<f64>],
    b: &[f64],
    texts: TextSet<'_>,
    labels: &[String],
) -> Result<CorpusComposition> {
    if b.iter().all(|&v| v <= 0.0) {
        return Ok(CorpusComposition::default());
    }
    let weights = solve_with(solver, a, b)?;
    compose(&weights, a, texts, labels)
}

fn dot(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(SolveError::ShapeMismatch(
            "vectors must have the same size".to_string(),
        ));
    }
    Ok(x.iter().zip(y).map(|(a, b)| a * b).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::solvers::MicrolpSolver;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("doc{}", i)).collect()
    }

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compose_rounds_half_to_even() {
        let doc_ids = ids(4);
        let sizes = vec![10, 20, 30, 40];
        let a = vec![vec![10.0, 20.0, 30.0, 40.0]];
        let comp = compose(
            &[0.5, 1.0, 0.51, 1.5],
            &a,
            TextSet { doc_ids: &doc_ids, sizes: &sizes },
            &labels(&["genre == 'fiction'"]),
        )
        .unwrap();
        // 0.5 -> 0, 1.0 -> 1, 0.51 -> 1, 1.5 -> 2 (not a selection)
        assert_eq!(comp.doc_ids, vec!["doc1".to_string(), "doc2".to_string()]);
        assert_eq!(comp.size_assembled, 20 + 30 + 80);
    }

    #[test]
    fn test_compose_reports_category_ratios() {
        let doc_ids = ids(3);
        let sizes = vec![100, 50, 50];
        let a = vec![vec![100.0, 0.0, 50.0], vec![0.0, 50.0, 0.0]];
        let comp = compose(
            &[1.0, 1.0, 0.0],
            &a,
            TextSet { doc_ids: &doc_ids, sizes: &sizes },
            &labels(&["txtype == 'A'", "txtype == 'B'"]),
        )
        .unwrap();
        assert_eq!(comp.size_assembled, 150);
        assert_eq!(comp.category_sizes[0].total, 100);
        assert!((comp.category_sizes[0].ratio - 100.0 / 150.0).abs() < 1e-9);
        assert_eq!(comp.category_sizes[1].total, 50);
        assert_eq!(comp.category_sizes[1].expression, "txtype == 'B'");
    }

    #[test]
    fn test_compose_with_nothing_selected_has_zero_ratios() {
        let doc_ids = ids(2);
        let sizes = vec![5, 5];
        let comp = compose(
            &[0.0, 0.2],
            &[vec![5.0, 5.0]],
            TextSet { doc_ids: &doc_ids, sizes: &sizes },
            &labels(&["x"]),
        )
        .unwrap();
        assert!(comp.doc_ids.is_empty());
        assert_eq!(comp.size_assembled, 0);
        assert_eq!(comp.category_sizes[0].ratio, 0.0);
    }

    #[test]
    fn test_compose_rejects_misaligned_texts() {
        let doc_ids = ids(1);
        let sizes = vec![5, 5];
        let result = compose(
            &[1.0, 1.0],
            &[vec![1.0, 1.0]],
            TextSet { doc_ids: &doc_ids, sizes: &sizes },
            &labels(&["x"]),
        );
        assert!(matches!(result, Err(SolveError::ShapeMismatch(_))));
    }

    #[test]
    fn test_compose_rejects_label_count_mismatch() {
        let doc_ids = ids(2);
        let sizes = vec![5, 5];
        let result = compose(
            &[1.0, 0.0],
            &[vec![5.0, 0.0], vec![0.0, 5.0]],
            TextSet { doc_ids: &doc_ids, sizes: &sizes },
            &labels(&["only one"]),
        );
        assert!(matches!(result, Err(SolveError::ShapeMismatch(_))));
    }

    #[test]
    fn test_solve_composition_with_zero_bounds_is_empty() {
        let doc_ids = ids(2);
        let sizes = vec![5, 5];
        let comp = solve_composition(
            &MicrolpSolver::new(),
            &[vec![5.0, 5.0]],
            &[0.0],
            TextSet { doc_ids: &doc_ids, sizes: &sizes },
            &labels(&["x"]),
        )
        .unwrap();
        assert_eq!(comp, CorpusComposition::default());
    }

    #[test]
    fn test_solve_composition_selects_texts_within_bounds() {
        let doc_ids = ids(3);
        let sizes = vec![10, 10, 10];
        let a = vec![vec![10.0, 10.0, 0.0], vec![0.0, 0.0, 10.0]];
        let comp = solve_composition(
            &MicrolpSolver::new(),
            &a,
            &[20.0, 10.0],
            TextSet { doc_ids: &doc_ids, sizes: &sizes },
            &labels(&["a", "b"]),
        )
        .unwrap();
        assert_eq!(comp.doc_ids.len(), 3);
        assert_eq!(comp.size_assembled, 30);
        assert_eq!(comp.category_sizes[0].total, 20);
    }
}
