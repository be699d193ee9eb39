use std::collections::HashMap;
use std::sync::Arc;

/// Parameter values bound during a match, keyed by parameter name.
pub type RouteParams = HashMap<String, String>;

/// Positional key a wildcard binds its captured remainder under.
pub const SPLAT_POSITIONAL_KEY: &str = "*";

/// Named key a wildcard binds its captured remainder under.
pub const SPLAT_NAMED_KEY: &str = "_splat";

/// Outcome of resolving a pathname against the trie.
///
/// An unresolved pathname is not an error: `found_route` is `None` and
/// both `matched_routes` and `route_params` are empty.
#[derive(Debug)]
pub struct RouteResolution<T> {
    /// Ancestor chain of the winner, ordered root to leaf (leaf last).
    pub matched_routes: Vec<Arc<T>>,
    /// Parameter bindings of the winner.
    pub route_params: RouteParams,
    /// The winning route, absent when nothing matched.
    pub found_route: Option<Arc<T>>,
}

impl<T> RouteResolution<T> {
    pub(crate) fn not_found() -> Self {
        Self {
            matched_routes: Vec::new(),
            route_params: RouteParams::new(),
            found_route: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found_route.is_some()
    }
}

impl<T> Clone for RouteResolution<T> {
    fn clone(&self) -> Self {
        Self {
            matched_routes: self.matched_routes.clone(),
            route_params: self.route_params.clone(),
            found_route: self.found_route.clone(),
        }
    }
}
