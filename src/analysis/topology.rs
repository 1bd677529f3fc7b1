use crate::graph::error::render_nodes;
use crate::graph::{Digraph, GraphError, GraphResult, NodeKey};
use std::collections::{HashMap, VecDeque};

/// Returns a topological order using Kahn's Algorithm.
///
/// Every edge `u -> v` places `u` before `v`. Zero-indegree nodes seed the
/// queue in ascending order and successors are released in ascending order,
/// so the result is deterministic when several orders are valid.
///
/// Fails with `CycleDetected` instead of returning a partial order. This is
/// the cycle oracle for graphs that were not built through [`Dag`](crate::Dag).
pub fn top_sort<N: NodeKey, V, W>(graph: &Digraph<N, V, W>) -> GraphResult<Vec<N>> {
    let count = graph.node_count();
    let mut in_degree: HashMap<&N, usize> = graph.node_keys().map(|n| (n, 0)).collect();
    let mut order = Vec::with_capacity(count);

    // 1. Initialize In-Degrees O(E)
    for (_, to, _) in graph.edges() {
        if let Some(d) = in_degree.get_mut(to) {
            *d += 1;
        }
    }

    // 2. Seed with sources, smallest first
    let mut seeds: Vec<&N> = in_degree.iter().filter_map(|(n, d)| (*d == 0).then_some(*n)).collect();
    seeds.sort();
    let mut queue = VecDeque::from(seeds);

    // 3. Process Queue
    while let Some(node) = queue.pop_front() {
        order.push(node.clone());

        for child in graph.successor_keys(node) {
            if let Some(d) = in_degree.get_mut(child) {
                *d -= 1;
                if *d == 0 {
                    queue.push_back(child);
                }
            }
        }
    }

    // 4. Anything left over sits on or behind a cycle
    if order.len() != count {
        let mut stuck: Vec<N> = in_degree
            .into_iter()
            .filter(|(_, d)| *d > 0)
            .map(|(n, _)| n.clone())
            .collect();
        stuck.sort();
        tracing::debug!(ordered = order.len(), total = count, "topological sort found a cycle");
        return Err(GraphError::cycle(format!("unorderable nodes {}", render_nodes(&stuck, ", "))));
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_diamond_dependency() {
        // Shape: A -> B, A -> C, B+C -> D
        let mut g: Digraph<&str> = Digraph::new();
        g.add_edge("A", "C", None);
        g.add_edge("A", "B", None);
        g.add_edge("C", "D", None);
        g.add_edge("B", "D", None);

        assert_eq!(top_sort(&g).unwrap(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_disconnected_sources_in_ascending_order() {
        let mut g: Digraph<u32> = Digraph::new();
        g.add_node(9, None);
        g.add_edge(5, 6, None);
        g.add_node(1, None);

        assert_eq!(top_sort(&g).unwrap(), vec![1, 5, 9, 6]);
    }

    #[test]
    fn test_every_edge_respected() {
        let mut g: Digraph<u32> = Digraph::new();
        for (u, v) in [(4, 1), (4, 2), (1, 3), (2, 3), (3, 0), (7, 0)] {
            g.add_edge(u, v, None);
        }
        let order = top_sort(&g).unwrap();
        let pos = |id: u32| order.iter().position(|&x| x == id).unwrap();
        for (u, v, _) in g.edges() {
            assert!(pos(*u) < pos(*v), "{} should precede {}", u, v);
        }
        assert_eq!(order.len(), g.node_count());
    }

    #[test]
    fn test_cycle_detection_explicit() {
        // X -> Y -> Z -> X, W feeds the cycle and is still ordered
        let mut g: Digraph<&str> = Digraph::new();
        g.add_edge("W", "X", None);
        g.add_edge("X", "Y", None);
        g.add_edge("Y", "Z", None);
        g.add_edge("Z", "X", None);

        let err = top_sort(&g).unwrap_err();
        assert!(err.is_cycle());
        assert!(err.to_string().contains("\"X\", \"Y\", \"Z\""), "Msg: {}", err);
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let mut g: Digraph<u8> = Digraph::new();
        g.add_edge(1, 1, None);
        assert!(top_sort(&g).unwrap_err().is_cycle());
    }

    #[test]
    fn test_empty_graph_sorts_to_nothing() {
        let g: Digraph<u8> = Digraph::new();
        assert_eq!(top_sort(&g), Ok(vec![]));
    }
}
