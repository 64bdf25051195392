//! Travel Core - shortest-path engine for the travel route planner.
//!
//! This crate holds the algorithmic part of the planner: an immutable dense
//! weight matrix ([`GraphModel`]) and a single-source shortest-path engine
//! ([`shortest_paths`]) that works the same way for any weight metric
//! (miles, dollars, minutes).
//!
//! # Features
//!
//! - **Metric-agnostic**: integer and fractional matrices are both stored as
//!   `f64` and go through one engine
//! - **Explicit unreachability**: [`Distance::Unreachable`] instead of a
//!   sentinel number
//! - **Deterministic paths**: lowest-index tie-break when picking the next node
//! - **Parallel metrics**: [`shortest_paths_parallel`] runs one graph per
//!   rayon task
//!
//! Node names, matrix data, prompting and rendering live in `travel-cli`.
//!
//! # Usage
//!
//! ```
//! use travel_core::{shortest_paths, GraphModel};
//!
//! let miles = GraphModel::new(3, &[[0, 16, 24], [16, 0, 18], [24, 18, 0]])?;
//! let paths = shortest_paths(&miles, 0)?;
//!
//! for result in &paths {
//!     println!("{} {:.2} {:?}", result.destination, result.total_weight, result.path);
//! }
//! # Ok::<(), travel_core::GraphError>(())
//! ```

pub mod engine;
pub mod error;
pub mod graph;
pub mod types;

pub use engine::{shortest_paths, shortest_paths_parallel};
pub use error::{GraphError, Result};
pub use graph::{checked_index, GraphModel};
pub use types::{Distance, PathResult, ShortestPaths};

/// Version of travel-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
