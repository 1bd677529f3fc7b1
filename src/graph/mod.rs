//! Defines the core data structures for directed graphs.
pub mod dag;
pub mod error;
pub mod storage;

// Re-export key types for convenient access
pub use dag::Dag;
pub use error::{GraphError, GraphResult};
pub use storage::{Digraph, NodeKey};
