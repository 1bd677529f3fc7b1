//! Depth-first and breadth-first visitors over a [`Digraph`].
//!
//! Both traversals share one contract: the start node is the first element
//! produced when it exists in the graph, and an absent start produces
//! nothing. Successors are always taken in ascending identifier order so the
//! output is reproducible.

use crate::graph::{Digraph, NodeKey};
use std::collections::{HashSet, VecDeque};
use std::iter::FusedIterator;

/// Depth-first preorder of every node reachable from `start`.
///
/// Iterative: successors are pushed in reverse so the smallest is popped
/// first, which yields the same order as the recursive formulation without
/// its recursion depth.
pub fn dfs<N: NodeKey, V, W>(graph: &Digraph<N, V, W>, start: &N) -> Vec<N> {
    let mut order = Vec::new();
    if !graph.contains_node(start) {
        return order;
    }
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node.clone());
        stack.extend(graph.successor_keys(node).rev().filter(|n| !visited.contains(n)));
    }
    order
}

/// Starts a breadth-first traversal from `start`.
pub fn bfs<'a, N: NodeKey, V, W>(graph: &'a Digraph<N, V, W>, start: &N) -> Bfs<'a, N, V, W> {
    Bfs::new(graph, start)
}

/// Lazy breadth-first iterator.
///
/// Single pass: once exhausted it stays exhausted; call [`bfs`] again for a
/// fresh traversal. It holds a shared borrow of the graph, so the graph
/// cannot be mutated while the iterator is alive. Dropping it early is the
/// way to abandon the traversal.
#[derive(Debug)]
pub struct Bfs<'a, N, V, W> {
    graph: &'a Digraph<N, V, W>,
    queue: VecDeque<&'a N>,
    // Marked on enqueue, never on dequeue.
    visited: HashSet<&'a N>,
}

impl<'a, N: NodeKey, V, W> Bfs<'a, N, V, W> {
    fn new(graph: &'a Digraph<N, V, W>, start: &N) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        // Borrow the graph's own key so every reference shares lifetime 'a.
        if let Some(root) = graph.node_key(start) {
            visited.insert(root);
            queue.push_back(root);
        }
        Self { graph, queue, visited }
    }
}

impl<'a, N: NodeKey, V, W> Iterator for Bfs<'a, N, V, W> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.queue.pop_front()?;
        for next in self.graph.successor_keys(node) {
            if self.visited.insert(next) {
                self.queue.push_back(next);
            }
        }
        Some(node.clone())
    }
}

impl<N: NodeKey, V, W> FusedIterator for Bfs<'_, N, V, W> {}
