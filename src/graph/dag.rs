//! dag.rs
//! Wraps a `Digraph` so that edge insertion can never close a cycle.

use super::error::{render_nodes, GraphError, GraphResult};
use super::storage::{Digraph, NodeKey};
use crate::analysis::{reachability, topology, traversal};

/// A directed acyclic graph.
///
/// Reads behave exactly as on the wrapped [`Digraph`]. `add_edge` runs a
/// reachability probe first and refuses any edge whose target already
/// reaches its source, leaving the graph untouched. Self-loops are always
/// refused because every node reaches itself through the empty path.
///
/// # Example
///
/// ```
/// use digraph_core::Dag;
///
/// let mut dag: Dag<&str> = Dag::new();
/// dag.add_edge("A", "B", None).unwrap();
/// dag.add_edge("B", "C", None).unwrap();
/// dag.add_edge("A", "C", None).unwrap();
///
/// assert!(dag.add_edge("C", "A", None).unwrap_err().is_cycle());
/// assert_eq!(dag.top_sort().unwrap(), vec!["A", "B", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct Dag<N, V = (), W = ()> {
    graph: Digraph<N, V, W>,
}

impl<N, V, W> Default for Dag<N, V, W> {
    fn default() -> Self { Self { graph: Digraph::default() } }
}

impl<N: NodeKey, V: PartialEq, W: PartialEq> PartialEq for Dag<N, V, W> {
    fn eq(&self, other: &Self) -> bool { self.graph == other.graph }
}

impl<N: NodeKey, V, W> Dag<N, V, W> {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity(nodes: usize) -> Self { Self { graph: Digraph::with_capacity(nodes) } }

    /// Adopts an existing graph once it has been shown to be acyclic.
    pub fn from_graph(graph: Digraph<N, V, W>) -> GraphResult<Self> {
        topology::top_sort(&graph)?;
        Ok(Self { graph })
    }

    /// Read access to the underlying graph.
    pub fn graph(&self) -> &Digraph<N, V, W> { &self.graph }

    pub fn into_inner(self) -> Digraph<N, V, W> { self.graph }

    // --- Writes ---

    /// Inserts `id`, overwriting any value it already carried. Nodes alone
    /// cannot create a cycle, so this never fails.
    pub fn add_node(&mut self, id: N, value: Option<V>) { self.graph.add_node(id, value) }

    /// Inserts `from -> to` unless `to` already reaches `from`.
    ///
    /// The probe runs before anything is written, so a refused edge does not
    /// create its missing endpoints either.
    pub fn add_edge(&mut self, from: N, to: N, weight: Option<W>) -> GraphResult<()> {
        // Zero-length path: holds even when `from` is not a node yet.
        if from == to {
            tracing::debug!("refusing self-loop on {:?}", from);
            return Err(GraphError::cycle(render_nodes(&[&from, &to], " -> ")));
        }
        // `to` absent means nothing can reach `from` through it.
        if let Some(mut path) = reachability::find_path(&self.graph, &to, &from) {
            // path is to -> ... -> from; the new edge closes it back to `to`.
            path.push(to.clone());
            let closing = render_nodes(&path, " -> ");
            tracing::debug!("refusing edge {:?} -> {:?}: would close {}", from, to, closing);
            return Err(GraphError::cycle(closing));
        }
        self.graph.add_edge(from, to, weight);
        Ok(())
    }

    // --- Reads ---

    pub fn node_count(&self) -> usize { self.graph.node_count() }
    pub fn edge_count(&self) -> usize { self.graph.edge_count() }
    pub fn is_empty(&self) -> bool { self.graph.is_empty() }
    pub fn get_nodes(&self) -> Vec<N> { self.graph.get_nodes() }
    pub fn contains_node(&self, id: &N) -> bool { self.graph.contains_node(id) }
    pub fn contains_edge(&self, from: &N, to: &N) -> bool { self.graph.contains_edge(from, to) }

    pub fn get_node_value(&self, id: &N) -> GraphResult<Option<&V>> { self.graph.get_node_value(id) }

    pub fn get_edge_weight(&self, from: &N, to: &N) -> GraphResult<Option<&W>> {
        self.graph.get_edge_weight(from, to)
    }

    pub fn successors(&self, id: &N) -> Vec<N> { self.graph.successors(id) }
    pub fn predecessors(&self, id: &N) -> Vec<N> { self.graph.predecessors(id) }

    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Option<&W>)> + '_ { self.graph.edges() }

    // --- Graph Algorithms ---

    pub fn dfs(&self, start: &N) -> Vec<N> { traversal::dfs(&self.graph, start) }

    pub fn bfs(&self, start: &N) -> traversal::Bfs<'_, N, V, W> { traversal::bfs(&self.graph, start) }

    /// Kahn ordering. Cannot fail for a graph built through this type, but
    /// keeps the fallible signature shared with [`Digraph::top_sort`].
    pub fn top_sort(&self) -> GraphResult<Vec<N>> { topology::top_sort(&self.graph) }

    pub fn has_path(&self, from: &N, to: &N) -> bool { reachability::has_path(&self.graph, from, to) }

    pub fn find_path(&self, from: &N, to: &N) -> Option<Vec<N>> {
        reachability::find_path(&self.graph, from, to)
    }
}

impl<N: NodeKey, V, W> TryFrom<Digraph<N, V, W>> for Dag<N, V, W> {
    type Error = GraphError;

    fn try_from(graph: Digraph<N, V, W>) -> GraphResult<Self> { Self::from_graph(graph) }
}

impl<N: NodeKey, V, W> From<Dag<N, V, W>> for Digraph<N, V, W> {
    fn from(dag: Dag<N, V, W>) -> Self { dag.graph }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn triangle() -> Dag<&'static str, (), u32> {
        let mut dag = Dag::new();
        dag.add_edge("A", "B", Some(1)).unwrap();
        dag.add_edge("B", "C", Some(2)).unwrap();
        dag.add_edge("A", "C", Some(3)).unwrap();
        dag
    }

    #[test]
    fn test_acyclic_inserts_succeed_and_sort() {
        let dag = triangle();
        assert_eq!(dag.edge_count(), 3);
        assert_eq!(dag.top_sort().unwrap(), vec!["A", "B", "C"]);
        assert_eq!(dag.dfs(&"A"), vec!["A", "B", "C"]);
        assert_eq!(dag.bfs(&"A").collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_closing_edge_refused_without_mutation() {
        let mut dag = triangle();
        let before = dag.clone();

        let err = dag.add_edge("C", "A", Some(99)).unwrap_err();
        assert!(err.is_cycle());
        // Probe finds the direct edge A -> C first; C -> A would close it.
        assert_eq!(err.to_string(), "Cycle detected: \"A\" -> \"C\" -> \"A\"");
        assert_eq!(dag, before);
        assert!(dag.get_edge_weight(&"C", &"A").unwrap_err().is_not_found());
    }

    #[rstest]
    #[case("A")]
    #[case("C")]
    #[case("fresh")] // not yet a node
    fn test_self_loop_refused(#[case] id: &'static str) {
        let mut dag = triangle();
        let before = dag.clone();
        assert!(dag.add_edge(id, id, None).unwrap_err().is_cycle());
        assert_eq!(dag, before);
        assert!(!dag.contains_node(&"fresh"));
    }

    #[test]
    fn test_edge_to_new_nodes_accepted() {
        let mut dag = triangle();
        dag.add_edge("C", "D", None).unwrap();
        dag.add_edge("X", "A", None).unwrap();
        assert_eq!(dag.top_sort().unwrap(), vec!["X", "A", "B", "C", "D"]);
        assert!(dag.add_edge("D", "X", None).is_err());
    }

    #[test]
    fn test_reweighting_existing_edge_allowed() {
        let mut dag = triangle();
        dag.add_edge("A", "C", Some(30)).unwrap();
        assert_eq!(dag.get_edge_weight(&"A", &"C"), Ok(Some(&30)));
        assert_eq!(dag.edge_count(), 3);
    }

    #[test]
    fn test_from_graph_validates() {
        let mut g: Digraph<u8> = Digraph::new();
        g.add_edge(1, 2, None);
        g.add_edge(2, 3, None);
        let dag = Dag::try_from(g.clone()).unwrap();
        assert_eq!(dag.graph(), &g);

        g.add_edge(3, 1, None);
        assert!(Dag::from_graph(g).unwrap_err().is_cycle());
    }

    #[test]
    fn test_into_inner_round_trip() {
        let dag = triangle();
        let g: Digraph<_, _, _> = dag.clone().into();
        assert_eq!(g.successors(&"A"), dag.successors(&"A"));
        assert_eq!(dag.into_inner(), g);
    }

    #[test]
    fn test_node_values_and_predecessors() {
        let mut dag: Dag<u32, String> = Dag::new();
        dag.add_node(1, Some("root".to_string()));
        dag.add_edge(1, 2, None).unwrap();
        dag.add_edge(3, 2, None).unwrap();

        assert_eq!(dag.get_node_value(&1), Ok(Some(&"root".to_string())));
        assert_eq!(dag.get_node_value(&2), Ok(None));
        assert_eq!(dag.predecessors(&2), vec![1, 3]);
        assert!(dag.has_path(&1, &2));
        assert!(!dag.has_path(&2, &1));
    }
}
