//! Directed graphs with optional node values and edge weights.
//!
//! - [`Digraph`] stores nodes and edges; writes never fail.
//! - [`Dag`] wraps a `Digraph` and refuses any edge that would close a cycle.
//! - [`analysis`] holds the read-only algorithms: depth-first and
//!   breadth-first traversal, Kahn's topological sort and the reachability
//!   probe used by `Dag`.
//!
//! The two acyclicity checks agree: a graph sorts topologically exactly when
//! it could have been built through `Dag::add_edge` without a refusal.
//!
//! ```
//! use digraph_core::{Dag, Digraph};
//!
//! let mut g: Digraph<&str> = Digraph::new();
//! g.add_edge("X", "Y", None);
//! g.add_edge("Y", "Z", None);
//! g.add_edge("Z", "X", None);
//! assert!(g.top_sort().unwrap_err().is_cycle());
//!
//! let mut dag: Dag<&str> = Dag::new();
//! dag.add_edge("X", "Y", None).unwrap();
//! dag.add_edge("Y", "Z", None).unwrap();
//! assert!(dag.add_edge("Z", "X", None).is_err());
//! ```

pub mod analysis;
pub mod graph;
#[cfg(feature = "sync")]
pub mod sync;

pub use analysis::Bfs;
pub use graph::{Dag, Digraph, GraphError, GraphResult, NodeKey};
#[cfg(feature = "sync")]
pub use sync::SharedGraph;
