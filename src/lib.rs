pub mod errors;
mod matcher;
pub mod options;
pub mod path;
pub mod route;
pub mod trie;
pub mod types;

pub use errors::{RouterError, RouterResult};
pub use options::{MatchOptions, MatchOptionsBuilder, MatchOptionsError};
pub use route::{Route, RouteHandle, ancestor_chain};
pub use trie::RouteTrie;
pub use types::{RouteParams, RouteResolution, SPLAT_NAMED_KEY, SPLAT_POSITIONAL_KEY};

use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

#[derive(Debug)]
struct RouterInner<T> {
    trie: RouteTrie<T>,
    frozen: OnceLock<Arc<RouteTrie<T>>>,
}

/// Thread-safe build-then-freeze facade over [`RouteTrie`].
///
/// Routes are inserted while the router is mutable; `seal` freezes the
/// trie into a shared snapshot that is safe for concurrent lookups.
/// Inserting after seal and resolving before it are errors, so all
/// writes are serialized before the first read.
#[derive(Debug)]
pub struct Router<T> {
    inner: RwLock<RouterInner<T>>,
}

impl<T: RouteHandle> Router<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RouterInner {
                trie: RouteTrie::new(),
                frozen: OnceLock::new(),
            }),
        }
    }

    pub fn insert(&self, route: Arc<T>) -> RouterResult<()> {
        let mut guard = self.inner.write();

        if guard.frozen.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                path: route.full_path().to_string(),
            });
        }

        guard.trie.insert(route);
        Ok(())
    }

    pub fn insert_all<I>(&self, routes: I) -> RouterResult<()>
    where
        I: IntoIterator<Item = Arc<T>>,
    {
        let mut guard = self.inner.write();

        if guard.frozen.get().is_some() {
            // count is unknown without consuming the iterator
            let count = routes.into_iter().count();
            return Err(RouterError::BulkAddWhileSealed { count });
        }

        guard.trie.insert_all(routes);
        Ok(())
    }

    /// Freezes the trie. Idempotent; later inserts fail.
    pub fn seal(&self) {
        let mut guard = self.inner.write();

        if guard.frozen.get().is_some() {
            return;
        }

        let trie = std::mem::take(&mut guard.trie);
        let _ = guard.frozen.set(Arc::new(trie));
    }

    /// Resolves a pathname against the sealed trie. "No route matches"
    /// is a normal [`RouteResolution`], not an error.
    pub fn resolve(
        &self,
        pathname: &str,
        options: &MatchOptions,
    ) -> RouterResult<RouteResolution<T>> {
        let guard = self.inner.read();

        match guard.frozen.get() {
            Some(trie) => Ok(trie.resolve(pathname, options)),
            None => Err(RouterError::ResolveWhileMutable),
        }
    }

    /// Shared handle to the frozen trie for lock-free concurrent reads.
    pub fn snapshot(&self) -> RouterResult<Arc<RouteTrie<T>>> {
        let guard = self.inner.read();

        match guard.frozen.get() {
            Some(trie) => Ok(trie.clone()),
            None => Err(RouterError::SnapshotUnavailable),
        }
    }
}

impl<T: RouteHandle> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}
