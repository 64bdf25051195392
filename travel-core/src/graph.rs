//! Dense weight matrix over a fixed, ordered set of nodes.
//!
//! A [`GraphModel`] is built once from a square matrix and never mutated
//! afterwards. Nodes are plain indices; naming them is the caller's business.
//!
//! # Edge semantics
//!
//! - `weight[i][i]` is always `0`.
//! - A weight of exactly `0` between two *distinct* nodes means there is no
//!   direct edge, not a free one. A genuinely zero-cost edge therefore cannot
//!   be expressed. See [`GraphModel::has_edge`].
//! - Weights must be finite and non-negative; the constructor rejects
//!   anything else.
//! - Weights must be small enough that no path total can overflow to
//!   infinity: `heaviest * N` has to stay finite.

use crate::error::{GraphError, Result};

/// Immutable N×N weight matrix.
///
/// Weights are stored row-major as `f64` regardless of the element type the
/// caller supplied, so integer distances and fractional costs go through the
/// same engine code.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphModel {
    node_count: usize,
    weights: Vec<f64>,
}

impl GraphModel {
    /// Build a graph from `rows`, checking it is `node_count`×`node_count`.
    ///
    /// Accepts any row type that can be viewed as a slice (`Vec<T>`, `[T; N]`,
    /// `&[T]`) of any weight type that converts into `f64`.
    ///
    /// # Example
    ///
    /// ```
    /// use travel_core::GraphModel;
    ///
    /// let graph = GraphModel::new(2, &[[0, 7], [7, 0]]).unwrap();
    /// assert_eq!(graph.weight_between(0, 1).unwrap(), 7.0);
    /// ```
    pub fn new<W, R>(node_count: usize, rows: &[R]) -> Result<Self>
    where
        W: Copy + Into<f64>,
        R: AsRef<[W]>,
    {
        if rows.len() != node_count {
            return Err(GraphError::RowCount {
                expected: node_count,
                rows: rows.len(),
            });
        }

        let mut weights = Vec::with_capacity(node_count * node_count);
        let mut heaviest = (0, 0, 0.0f64);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != node_count {
                return Err(GraphError::RowLength {
                    row,
                    len: values.len(),
                    expected: node_count,
                });
            }

            for (col, &raw) in values.iter().enumerate() {
                let value: f64 = raw.into();
                check_weight(row, col, value)?;
                if value > heaviest.2 {
                    heaviest = (row, col, value);
                }
                weights.push(value);
            }
        }

        // Path totals never exceed heaviest * (N - 1); one extra factor
        // absorbs rounding in the running sums.
        let (row, col, value) = heaviest;
        if !(value * node_count as f64).is_finite() {
            return Err(GraphError::InvalidWeight {
                row,
                col,
                value,
                reason: "weight is too large, path totals would overflow",
            });
        }

        Ok(Self {
            node_count,
            weights,
        })
    }

    /// Build a graph whose node count is the number of rows supplied.
    pub fn from_rows<W, R>(rows: &[R]) -> Result<Self>
    where
        W: Copy + Into<f64>,
        R: AsRef<[W]>,
    {
        Self::new(rows.len(), rows)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Weight of the direct connection from `from` to `to`.
    ///
    /// Returns `0.0` on the diagonal and for node pairs without a direct edge.
    pub fn weight_between(&self, from: usize, to: usize) -> Result<f64> {
        self.check_index(from)?;
        self.check_index(to)?;
        Ok(self.weight(from, to))
    }

    /// Whether a direct edge runs from `from` to `to`.
    ///
    /// False on the diagonal, for zero weights, and for out-of-range indices.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from != to
            && from < self.node_count
            && to < self.node_count
            && self.weight(from, to) != 0.0
    }

    /// Whether `weight[i][j] == weight[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.node_count)
            .all(|i| (i + 1..self.node_count).all(|j| self.weight(i, j) == self.weight(j, i)))
    }

    /// Matrix rows in node order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.weights.chunks(self.node_count.max(1))
    }

    /// Validate a signed index (typically user input) and convert it.
    pub fn node_index(&self, raw: i64) -> Result<usize> {
        checked_index(raw, self.node_count)
    }

    /// Fail with `OutOfRange` unless `index < node_count`.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.node_count {
            Ok(())
        } else {
            Err(GraphError::out_of_range(index, self.node_count))
        }
    }

    /// Unchecked lookup; callers guarantee both indices are in range.
    #[inline]
    pub(crate) fn weight(&self, from: usize, to: usize) -> f64 {
        self.weights[from * self.node_count + to]
    }
}

/// Convert a signed node number into an index below `node_count`.
///
/// Shared by anything that accepts node numbers from users before a graph
/// is involved.
pub fn checked_index(raw: i64, node_count: usize) -> Result<usize> {
    usize::try_from(raw)
        .ok()
        .filter(|&idx| idx < node_count)
        .ok_or(GraphError::OutOfRange {
            index: raw,
            node_count,
        })
}

fn check_weight(row: usize, col: usize, value: f64) -> Result<()> {
    let reason = if !value.is_finite() {
        "weights must be finite"
    } else if value < 0.0 {
        "weights must be non-negative"
    } else if row == col && value != 0.0 {
        "diagonal weights must be zero"
    } else {
        return Ok(());
    };

    Err(GraphError::InvalidWeight {
        row,
        col,
        value,
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distances() -> GraphModel {
        GraphModel::new(
            4,
            &[[0, 16, 24, 33], [16, 0, 18, 26], [24, 18, 0, 30], [33, 26, 30, 0]],
        )
        .unwrap()
    }

    #[test]
    fn test_weight_lookup() {
        let graph = distances();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.weight_between(0, 3).unwrap(), 33.0);
        assert_eq!(graph.weight_between(2, 1).unwrap(), 18.0);
    }

    #[test]
    fn test_diagonal_is_zero() {
        let graph = distances();
        for i in 0..graph.node_count() {
            assert_eq!(graph.weight_between(i, i).unwrap(), 0.0);
            assert!(!graph.has_edge(i, i));
        }
    }

    #[test]
    fn test_weight_between_out_of_range() {
        let graph = distances();
        let err = graph.weight_between(4, 0).unwrap_err();
        assert_eq!(
            err,
            GraphError::OutOfRange {
                index: 4,
                node_count: 4
            }
        );
        assert!(graph.weight_between(0, 9).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_non_square_matrix_is_shape_error() {
        let rows = vec![vec![0.0, 1.0, 2.0, 3.0]; 3];
        let err = GraphModel::new(3, &rows).unwrap_err();
        assert!(err.is_shape());
        assert_eq!(
            err,
            GraphError::RowLength {
                row: 0,
                len: 4,
                expected: 3
            }
        );

        let err = GraphModel::from_rows(&rows).unwrap_err();
        assert!(err.is_shape());
    }

    #[test]
    fn test_wrong_row_count_is_shape_error() {
        let err = GraphModel::new(3, &[[0, 1, 2], [1, 0, 2]]).unwrap_err();
        assert_eq!(
            err,
            GraphError::RowCount {
                expected: 3,
                rows: 2
            }
        );
    }

    #[test]
    fn test_ragged_matrix_is_shape_error() {
        let rows: Vec<Vec<f64>> = vec![vec![0.0, 1.0], vec![1.0]];
        let err = GraphModel::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            GraphError::RowLength {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_rejects_invalid_weights() {
        let err = GraphModel::from_rows(&[[0.0, -1.0], [1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { row: 0, col: 1, .. }));

        let err = GraphModel::from_rows(&[[0.0, f64::NAN], [1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));

        let err = GraphModel::from_rows(&[[0.0, 1.0], [1.0, f64::INFINITY]]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { row: 1, col: 1, .. }));

        let err = GraphModel::from_rows(&[[5, 1], [1, 0]]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { row: 0, col: 0, .. }));
    }

    #[test]
    fn test_rejects_weights_whose_sums_overflow() {
        let huge = f64::MAX / 1.5;
        let err = GraphModel::from_rows(&[[0.0, huge, 0.0], [huge, 0.0, huge], [0.0, huge, 0.0]])
            .unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidWeight { row: 0, col: 1, .. }
        ));
        assert!(err.to_string().contains("overflow"));

        let large = f64::MAX / 4.0;
        assert!(
            GraphModel::from_rows(&[[0.0, large, 0.0], [large, 0.0, large], [0.0, large, 0.0]])
                .is_ok()
        );
    }

    #[test]
    fn test_checked_index() {
        assert_eq!(checked_index(2, 3).unwrap(), 2);
        assert!(checked_index(3, 3).unwrap_err().is_out_of_range());
        assert!(checked_index(-1, 3).unwrap_err().is_out_of_range());
        assert!(checked_index(0, 0).is_err());
    }

    #[test]
    fn test_zero_off_diagonal_means_no_edge() {
        let graph = GraphModel::from_rows(&[[0, 0, 5], [0, 0, 3], [5, 3, 0]]).unwrap();
        assert!(!graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert!(graph.has_edge(0, 2));
        assert_eq!(graph.weight_between(0, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_accepts_fractional_and_integer_weights() {
        let costs = GraphModel::from_rows(&[[0.0f32, 2.5], [2.5, 0.0]]).unwrap();
        assert_eq!(costs.weight_between(0, 1).unwrap(), 2.5);

        let miles = GraphModel::from_rows(&[vec![0u32, 9], vec![9, 0]]).unwrap();
        assert_eq!(miles.weight_between(1, 0).unwrap(), 9.0);
    }

    #[test]
    fn test_symmetry() {
        assert!(distances().is_symmetric());
        let directed = GraphModel::from_rows(&[[0, 1], [2, 0]]).unwrap();
        assert!(!directed.is_symmetric());
    }

    #[test]
    fn test_rows() {
        let graph = distances();
        let rows: Vec<&[f64]> = graph.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], &[16.0, 0.0, 18.0, 26.0]);

        let empty = GraphModel::new::<f64, Vec<f64>>(0, &[]).unwrap();
        assert_eq!(empty.rows().count(), 0);
    }

    #[test]
    fn test_node_index() {
        let graph = distances();
        assert_eq!(graph.node_index(0).unwrap(), 0);
        assert_eq!(graph.node_index(3).unwrap(), 3);
        assert_eq!(
            graph.node_index(-1).unwrap_err(),
            GraphError::OutOfRange {
                index: -1,
                node_count: 4
            }
        );
        assert!(graph.node_index(4).unwrap_err().is_out_of_range());
    }
}
