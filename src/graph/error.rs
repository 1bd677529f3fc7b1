//! Defines the error types for graph lookups and guarded mutation.
use std::fmt::{Debug, Write};
use thiserror::Error;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors surfaced by graph operations.
///
/// Identifiers are rendered with their `Debug` form so the error type stays
/// independent of the graph's node type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// A node lookup named an identifier that was never added.
    #[error("Node not found: {node}")]
    NodeNotFound { node: String },

    /// A weight lookup named an ordered pair with no edge between them.
    #[error("Edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    /// The requested edge or ordering is inconsistent with an acyclic graph.
    #[error("Cycle detected: {path}")]
    CycleDetected { path: String },
}

impl GraphError {
    pub fn node_not_found<N: Debug>(node: &N) -> Self {
        Self::NodeNotFound { node: format!("{:?}", node) }
    }

    pub fn edge_not_found<N: Debug>(from: &N, to: &N) -> Self {
        Self::EdgeNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub fn cycle(path: impl Into<String>) -> Self {
        Self::CycleDetected { path: path.into() }
    }

    /// True for both node and edge lookups that missed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound { .. } | Self::EdgeNotFound { .. })
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CycleDetected { .. })
    }
}

/// Joins `Debug` renderings of `nodes` with `sep`.
pub(crate) fn render_nodes<N: Debug>(nodes: &[N], sep: &str) -> String {
    let mut out = String::new();
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        let _ = write!(out, "{:?}", node);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_render_debug_ids() {
        assert_eq!(GraphError::node_not_found(&"A").to_string(), "Node not found: \"A\"");
        assert_eq!(GraphError::edge_not_found(&1, &2).to_string(), "Edge not found: 1 -> 2");
        assert_eq!(GraphError::cycle("1 -> 2 -> 1").to_string(), "Cycle detected: 1 -> 2 -> 1");
    }

    #[test]
    fn test_render_nodes() {
        assert_eq!(render_nodes(&["a", "b"], " -> "), "\"a\" -> \"b\"");
        assert_eq!(render_nodes::<u8>(&[], ", "), "");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(GraphError::node_not_found(&0).is_not_found());
        assert!(GraphError::edge_not_found(&0, &1).is_not_found());
        assert!(!GraphError::cycle("x").is_not_found());
        assert!(GraphError::cycle("x").is_cycle());
    }
}
