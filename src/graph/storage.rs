//! storage.rs
//! Node table plus sorted adjacency. The leaf every algorithm reads from.

use super::error::{GraphError, GraphResult};
use crate::analysis::{reachability, topology, traversal};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Bounds shared by every node identifier.
///
/// `Ord` drives the deterministic tie-break in traversal and sorting, `Debug`
/// is used when an identifier is reported inside a [`GraphError`].
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> NodeKey for T {}

/// A simple directed graph with optional node values and edge weights.
///
/// At most one edge exists per ordered pair; self-loops are allowed. Writes
/// never fail here. Use [`Dag`](super::Dag) for acyclic insertion.
#[derive(Debug, Clone)]
pub struct Digraph<N, V = (), W = ()> {
    // Insertion order is the enumeration order of `get_nodes`.
    nodes: IndexMap<N, Option<V>>,
    // Every key of `nodes` has an entry here, possibly empty.
    edges: IndexMap<N, BTreeMap<N, Option<W>>>,
}

impl<N, V, W> Default for Digraph<N, V, W> {
    fn default() -> Self {
        Self { nodes: IndexMap::new(), edges: IndexMap::new() }
    }
}

// Order-insensitive: two graphs are equal when they hold the same nodes,
// values, edges and weights.
impl<N: NodeKey, V: PartialEq, W: PartialEq> PartialEq for Digraph<N, V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl<N: NodeKey, V: Eq, W: Eq> Eq for Digraph<N, V, W> {}

impl<N: NodeKey, V, W> Digraph<N, V, W> {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: IndexMap::with_capacity(nodes),
            edges: IndexMap::with_capacity(nodes),
        }
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }

    pub fn edge_count(&self) -> usize { self.edges.values().map(BTreeMap::len).sum() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    // --- Writes ---

    /// Inserts `id`, overwriting any value it already carried.
    pub fn add_node(&mut self, id: N, value: Option<V>) {
        self.edges.entry(id.clone()).or_default();
        self.nodes.insert(id, value);
    }

    /// Inserts `from -> to`, creating missing endpoints without a value.
    /// An existing edge keeps its position and has its weight replaced.
    pub fn add_edge(&mut self, from: N, to: N, weight: Option<W>) {
        self.ensure_node(from.clone());
        self.ensure_node(to.clone());
        tracing::trace!("edge {:?} -> {:?}", from, to);
        self.edges.entry(from).or_default().insert(to, weight);
    }

    /// Adds `id` with no value unless it is already present.
    pub(crate) fn ensure_node(&mut self, id: N) {
        if !self.nodes.contains_key(&id) {
            self.add_node(id, None);
        }
    }

    // --- Reads ---

    /// All identifiers, each exactly once, in insertion order.
    pub fn get_nodes(&self) -> Vec<N> { self.nodes.keys().cloned().collect() }

    pub fn contains_node(&self, id: &N) -> bool { self.nodes.contains_key(id) }

    pub fn contains_edge(&self, from: &N, to: &N) -> bool {
        self.edges.get(from).is_some_and(|succ| succ.contains_key(to))
    }

    /// Returns the stored value. `Ok(None)` means the node exists without one.
    pub fn get_node_value(&self, id: &N) -> GraphResult<Option<&V>> {
        self.nodes
            .get(id)
            .map(Option::as_ref)
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    /// Returns the stored weight. `Ok(None)` means the edge exists without one.
    pub fn get_edge_weight(&self, from: &N, to: &N) -> GraphResult<Option<&W>> {
        self.edges
            .get(from)
            .and_then(|succ| succ.get(to))
            .map(Option::as_ref)
            .ok_or_else(|| GraphError::edge_not_found(from, to))
    }

    /// One-hop targets of `id` in ascending order. Unknown ids have none.
    pub fn successors(&self, id: &N) -> Vec<N> { self.successor_keys(id).cloned().collect() }

    /// One-hop sources reaching `id` in ascending order. Unknown ids have none.
    pub fn predecessors(&self, id: &N) -> Vec<N> {
        let mut preds: Vec<N> = self
            .edges
            .iter()
            .filter(|(_, succ)| succ.contains_key(id))
            .map(|(from, _)| from.clone())
            .collect();
        preds.sort();
        preds
    }

    /// Every edge as `(from, to, weight)`, grouped by source in node
    /// insertion order, targets ascending.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Option<&W>)> + '_ {
        self.edges
            .iter()
            .flat_map(|(from, succ)| succ.iter().map(move |(to, w)| (from, to, w.as_ref())))
    }

    #[inline]
    pub(crate) fn successor_keys<'a>(&'a self, id: &N) -> impl DoubleEndedIterator<Item = &'a N> + 'a {
        self.edges.get(id).into_iter().flat_map(BTreeMap::keys)
    }

    pub(crate) fn node_keys(&self) -> impl Iterator<Item = &N> + '_ { self.nodes.keys() }

    /// The graph-owned copy of `id`, if present.
    pub(crate) fn node_key(&self, id: &N) -> Option<&N> {
        self.nodes.get_key_value(id).map(|(key, _)| key)
    }

    // --- Graph Algorithms ---

    /// Depth-first preorder from `start`, `start` first. Empty if absent.
    pub fn dfs(&self, start: &N) -> Vec<N> { traversal::dfs(self, start) }

    /// Lazy breadth-first order from `start`, `start` first. Empty if absent.
    pub fn bfs(&self, start: &N) -> traversal::Bfs<'_, N, V, W> { traversal::bfs(self, start) }

    /// Kahn ordering of every node, or `CycleDetected`.
    pub fn top_sort(&self) -> GraphResult<Vec<N>> { topology::top_sort(self) }

    /// True when a directed path leads from `from` to `to`. A node always
    /// reaches itself through the empty path.
    pub fn has_path(&self, from: &N, to: &N) -> bool { reachability::has_path(self, from, to) }

    /// One path from `from` to `to`, both endpoints included.
    pub fn find_path(&self, from: &N, to: &N) -> Option<Vec<N>> {
        reachability::find_path(self, from, to)
    }
}
