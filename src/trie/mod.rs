mod dump;
mod insert;
mod node;

pub use node::{Registration, TrieNode};

use crate::matcher;
use crate::options::MatchOptions;
use crate::path::{sequence, strip_basepath};
use crate::route::{RouteHandle, ancestor_chain};
use crate::types::RouteResolution;

/// The route trie. Built once by issuing one `insert` per declared
/// route, then treated as read-only: `insert` takes `&mut self`,
/// `resolve` takes `&self`, so the borrow checker enforces the
/// build-then-freeze discipline for single-threaded callers. Wrap the
/// finished trie in an `Arc` (or use [`crate::Router`]) for concurrent
/// lookups.
#[derive(Debug)]
pub struct RouteTrie<T> {
    pub(crate) root: TrieNode<T>,
    route_count: usize,
}

impl<T> Default for RouteTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteTrie<T> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(0),
            route_count: 0,
        }
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.route_count
    }

    pub fn is_empty(&self) -> bool {
        self.route_count == 0
    }

    pub(crate) fn record_registration(&mut self) {
        self.route_count += 1;
    }
}

impl<T: RouteHandle> RouteTrie<T> {
    /// Resolves a request pathname to the best route, or reports no
    /// match. Read-only and never an error: an unresolved pathname is a
    /// first-class [`RouteResolution`] with `found_route` absent.
    #[tracing::instrument(level = "trace", skip(self, options), fields(path = %pathname))]
    pub fn resolve(&self, pathname: &str, options: &MatchOptions) -> RouteResolution<T> {
        let stripped = strip_basepath(&options.basepath, pathname, options.case_sensitive);
        let segments = sequence(stripped);

        let mut candidates =
            matcher::collect_matches(&self.root, &segments, options.case_sensitive);
        matcher::rank(&mut candidates);

        let Some(winner) = candidates.into_iter().next() else {
            return RouteResolution::not_found();
        };
        let found = winner.registration.route.clone();

        RouteResolution {
            matched_routes: ancestor_chain(&found),
            route_params: winner.params,
            found_route: Some(found),
        }
    }
}
