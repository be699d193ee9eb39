use std::sync::Arc;

/// Externally owned route object the trie stores by reference.
///
/// The trie never copies or mutates the route; it stores the handle at
/// the terminal node and hands it back on a match. The parent link is
/// used solely for ancestor-chain assembly; the trie never traverses
/// children.
pub trait RouteHandle {
    /// Declared full path, e.g. `/users/:id/profile`.
    fn full_path(&self) -> &str;

    /// Stable identifier for the route.
    fn route_id(&self) -> &str;

    /// Parent route, `None` at the top of the hierarchy.
    fn parent(&self) -> Option<Arc<Self>>;
}

/// Ancestor chain of `leaf`, ordered root to leaf (leaf last).
pub fn ancestor_chain<T: RouteHandle>(leaf: &Arc<T>) -> Vec<Arc<T>> {
    let mut chain = vec![leaf.clone()];
    let mut cursor = leaf.parent();
    while let Some(parent) = cursor {
        cursor = parent.parent();
        chain.push(parent);
    }
    chain.reverse();
    chain
}

/// Minimal concrete route for consumers without their own route model.
#[derive(Debug)]
pub struct Route {
    id: Box<str>,
    full_path: Box<str>,
    parent: Option<Arc<Route>>,
}

impl Route {
    pub fn new<I, P>(id: I, full_path: P) -> Self
    where
        I: Into<String>,
        P: Into<String>,
    {
        Self {
            id: id.into().into_boxed_str(),
            full_path: full_path.into().into_boxed_str(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Arc<Route>) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl RouteHandle for Route {
    fn full_path(&self) -> &str {
        &self.full_path
    }

    fn route_id(&self) -> &str {
        &self.id
    }

    fn parent(&self) -> Option<Arc<Self>> {
        self.parent.clone()
    }
}
