use crate::graph::{Digraph, NodeKey};
use std::collections::{HashMap, HashSet};

/// Stack-based DFS probe: is there a directed path `from -> ... -> to`?
///
/// The empty path counts, so `has_path(g, u, u)` is true whenever `u` is a
/// node of `g`. An identifier absent from the graph reaches nothing.
pub fn has_path<N: NodeKey, V, W>(graph: &Digraph<N, V, W>, from: &N, to: &N) -> bool {
    if !graph.contains_node(from) {
        return false;
    }
    let mut visited = HashSet::new();
    let mut stack = vec![from];

    while let Some(node) = stack.pop() {
        if node == to {
            return true;
        }
        if visited.insert(node) {
            stack.extend(graph.successor_keys(node).filter(|n| !visited.contains(n)));
        }
    }
    false
}

/// Same probe as [`has_path`], keeping parent links so the path found can
/// be returned, `from` first and `to` last.
pub fn find_path<N: NodeKey, V, W>(graph: &Digraph<N, V, W>, from: &N, to: &N) -> Option<Vec<N>> {
    if !graph.contains_node(from) {
        return None;
    }
    let mut parent: HashMap<&N, &N> = HashMap::new();
    let mut visited = HashSet::new();
    let mut stack = vec![from];

    while let Some(node) = stack.pop() {
        if node == to {
            let mut path = vec![node.clone()];
            let mut cursor = node;
            while let Some(&prev) = parent.get(cursor) {
                path.push(prev.clone());
                cursor = prev;
            }
            path.reverse();
            return Some(path);
        }
        if !visited.insert(node) {
            continue;
        }
        for next in graph.successor_keys(node) {
            if !visited.contains(next) {
                // Last writer wins, matching the order the stack pops in.
                parent.insert(next, node);
                stack.push(next);
            }
        }
    }
    None
}
