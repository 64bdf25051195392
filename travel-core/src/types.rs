//! Result types produced by the shortest-path engine.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

/// Best known cumulative weight from the source.
///
/// Unreachability is an explicit tag rather than a huge sentinel number, so a
/// legitimately large weight can never be mistaken for "no path".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Finite(f64),
    Unreachable,
}

impl Distance {
    /// The weight, if the node is reachable.
    pub fn finite(self) -> Option<f64> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

/// `Unreachable` sorts after every finite weight.
impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.partial_cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Some(Ordering::Less),
            (Distance::Unreachable, Distance::Finite(_)) => Some(Ordering::Greater),
            (Distance::Unreachable, Distance::Unreachable) => Some(Ordering::Equal),
        }
    }
}

/// Honors the formatter precision (`{:.2}`); unreachable renders as `INF`.
impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, f.precision()) {
            (Distance::Finite(w), Some(precision)) => write!(f, "{:.*}", precision, w),
            (Distance::Finite(w), None) => write!(f, "{}", w),
            (Distance::Unreachable, _) => f.write_str("INF"),
        }
    }
}

/// Serialized as a number, or `null` when unreachable.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(w) => serializer.serialize_f64(*w),
            Distance::Unreachable => serializer.serialize_none(),
        }
    }
}

/// Shortest route from the source to one destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub destination: usize,
    pub total_weight: Distance,
    /// Node indices from the source to `destination`, inclusive.
    /// Empty when the destination is unreachable.
    pub path: Vec<usize>,
}

impl PathResult {
    pub fn is_reachable(&self) -> bool {
        self.total_weight.is_reachable()
    }

    /// Number of edges travelled, `None` when unreachable.
    pub fn hops(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// All results of one engine run, indexed by destination node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    source: usize,
    results: Vec<PathResult>,
}

impl ShortestPaths {
    pub(crate) fn new(source: usize, results: Vec<PathResult>) -> Self {
        Self { source, results }
    }

    /// The node every path starts from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Result for `destination`, or `None` if it is not a node of the graph.
    pub fn get(&self, destination: usize) -> Option<&PathResult> {
        self.results.get(destination)
    }

    /// Results in destination order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Destinations with a finite weight, the source included.
    pub fn reachable_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_reachable()).count()
    }
}

impl Index<usize> for ShortestPaths {
    type Output = PathResult;

    fn index(&self, destination: usize) -> &PathResult {
        &self.results[destination]
    }
}

impl<'a> IntoIterator for &'a ShortestPaths {
    type Item = &'a PathResult;
    type IntoIter = std::slice::Iter<'a, PathResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ordering() {
        assert!(Distance::Finite(1.0) < Distance::Finite(2.0));
        assert!(Distance::Finite(f64::MAX) < Distance::Unreachable);
        assert!(Distance::Unreachable > Distance::Finite(0.0));
        assert!(!(Distance::Unreachable < Distance::Unreachable));
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(format!("{:.2}", Distance::Finite(4.95)), "4.95");
        assert_eq!(format!("{:.2}", Distance::Finite(16.0)), "16.00");
        assert_eq!(format!("{}", Distance::Finite(3.5)), "3.5");
        assert_eq!(format!("{:.2}", Distance::Unreachable), "INF");
    }

    #[test]
    fn test_path_result_serialization() {
        let reachable = PathResult {
            destination: 2,
            total_weight: Distance::Finite(24.0),
            path: vec![0, 2],
        };
        let json = serde_json::to_value(&reachable).unwrap();
        assert_eq!(json["total_weight"], 24.0);
        assert_eq!(json["path"], serde_json::json!([0, 2]));

        let unreachable = PathResult {
            destination: 3,
            total_weight: Distance::Unreachable,
            path: vec![],
        };
        let json = serde_json::to_value(&unreachable).unwrap();
        assert!(json["total_weight"].is_null());
        assert_eq!(unreachable.hops(), None);
        assert_eq!(reachable.hops(), Some(1));
    }
}
