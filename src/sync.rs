//! Shared handle for using one graph from several threads.
//!
//! Readers (traversal, sorting, probes) hold the shared lock and may run
//! together; writers (`add_node`, `add_edge`) hold the exclusive lock. A
//! guarded insert therefore probes and commits under a single write lock,
//! so no other writer can slip in between the check and the mutation.

use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable, lock-protected handle to a [`Digraph`](crate::Digraph) or
/// [`Dag`](crate::Dag).
#[derive(Debug, Default)]
pub struct SharedGraph<G> {
    inner: Arc<RwLock<G>>,
}

impl<G> Clone for SharedGraph<G> {
    fn clone(&self) -> Self { Self { inner: Arc::clone(&self.inner) } }
}

impl<G> SharedGraph<G> {
    pub fn new(graph: G) -> Self { Self { inner: Arc::new(RwLock::new(graph)) } }

    /// Runs `f` under the shared lock.
    pub fn read<R>(&self, f: impl FnOnce(&G) -> R) -> R { f(&self.inner.read()) }

    /// Runs `f` under the exclusive lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut G) -> R) -> R { f(&mut self.inner.write()) }

    /// Copies the current graph out so long queries can run without the lock.
    pub fn snapshot(&self) -> G
    where
        G: Clone,
    {
        self.inner.read().clone()
    }

    /// Returns the graph if this is the last handle, otherwise gives the
    /// handle back.
    pub fn try_unwrap(self) -> Result<G, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}
