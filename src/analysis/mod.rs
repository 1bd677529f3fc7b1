//! Read-only algorithms over a [`Digraph`](crate::Digraph).
//!
//! Each function takes the graph by shared reference. [`Digraph`](crate::Digraph)
//! and [`Dag`](crate::Dag) expose them as methods as well.
pub mod reachability;
pub mod topology;
pub mod traversal;

pub use reachability::{find_path, has_path};
pub use topology::top_sort;
pub use traversal::{bfs, dfs, Bfs};
