//! Error types for travel-core.

use thiserror::Error;

/// Result type alias for travel-core operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while building a graph or querying it.
///
/// All variants are input-validation failures. Nothing here is transient, so
/// callers should never retry. An unreachable destination is not an error; see
/// [`crate::Distance::Unreachable`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The matrix does not have one row per node.
    #[error("Weight matrix must have {expected} rows, got {rows}")]
    RowCount {
        /// Declared node count.
        expected: usize,
        /// Number of rows supplied.
        rows: usize,
    },

    /// A matrix row does not have one column per node.
    #[error("Weight matrix row {row} has {len} columns, expected {expected}")]
    RowLength {
        /// Offending row.
        row: usize,
        /// Number of columns in that row.
        len: usize,
        /// Declared node count.
        expected: usize,
    },

    /// A node index outside `[0, node_count)`.
    #[error("Node index {index} is out of range (valid: 0..{node_count})")]
    OutOfRange {
        /// The rejected index, signed so raw user input can be reported as typed.
        index: i64,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// A weight the engine cannot work with.
    #[error("Invalid weight {value} at [{row}][{col}]: {reason}")]
    InvalidWeight {
        row: usize,
        col: usize,
        value: f64,
        reason: &'static str,
    },
}

impl GraphError {
    /// True for the malformed-matrix variants.
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::RowCount { .. } | Self::RowLength { .. })
    }

    /// True when a node index was rejected.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    pub(crate) fn out_of_range(index: usize, node_count: usize) -> Self {
        Self::OutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            node_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::RowLength {
            row: 2,
            len: 4,
            expected: 3,
        };
        assert!(err.to_string().contains("row 2"));
        assert!(err.to_string().contains("4 columns"));

        let err = GraphError::OutOfRange {
            index: -1,
            node_count: 4,
        };
        assert!(err.to_string().contains("-1"));
        assert!(err.to_string().contains("0..4"));
    }

    #[test]
    fn test_error_classification() {
        assert!(GraphError::RowCount {
            expected: 3,
            rows: 2
        }
        .is_shape());
        assert!(!GraphError::out_of_range(7, 3).is_shape());
        assert!(GraphError::out_of_range(7, 3).is_out_of_range());
    }
}
