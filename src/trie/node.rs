use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;
use std::sync::Arc;

/// Terminal route entry. The route handle is externally owned; the trie
/// only stores and returns the reference.
#[derive(Debug)]
pub struct Registration<T> {
    pub route: Arc<T>,
    pub full_path: Box<str>,
    pub route_id: Box<str>,
}

impl<T> Clone for Registration<T> {
    fn clone(&self) -> Self {
        Self {
            route: self.route.clone(),
            full_path: self.full_path.clone(),
            route_id: self.route_id.clone(),
        }
    }
}

#[derive(Debug)]
pub struct TrieNode<T> {
    pub(crate) static_edges: FastHashMap<Box<str>, Box<TrieNode<T>>>,
    // a scanned list, not a map: sibling params with distinct names
    // legally share one depth and all of them must be tried
    pub(crate) param_edges: SmallVec<[(Box<str>, Box<TrieNode<T>>); 2]>,
    pub(crate) wildcard_edge: Option<Box<TrieNode<T>>>,
    pub(crate) registrations: SmallVec<[Registration<T>; 1]>,
    /// Non-slash segments consumed from the root to reach this node.
    pub(crate) depth: usize,
}

impl<T> TrieNode<T> {
    pub(crate) fn new(depth: usize) -> Self {
        Self {
            static_edges: FastHashMap::new(),
            param_edges: SmallVec::new(),
            wildcard_edge: None,
            registrations: SmallVec::new(),
            depth,
        }
    }

    /// Get-or-create the static child keyed by the segment's exact text.
    /// No normalization happens at insert time.
    pub(crate) fn static_child_mut(&mut self, key: &str) -> &mut TrieNode<T> {
        let depth = self.depth + 1;
        self.static_edges
            .entry(Box::from(key))
            .or_insert_with(|| Box::new(TrieNode::new(depth)))
            .as_mut()
    }

    /// Get-or-create the param child for `name`, scanning the existing
    /// entries first so one node never holds two edges with one name.
    pub(crate) fn param_child_mut(&mut self, name: &str) -> &mut TrieNode<T> {
        if let Some(pos) = self.param_edges.iter().position(|(n, _)| n.as_ref() == name) {
            return self.param_edges[pos].1.as_mut();
        }
        let depth = self.depth + 1;
        self.param_edges
            .push((Box::from(name), Box::new(TrieNode::new(depth))));
        let last = self.param_edges.len() - 1;
        self.param_edges[last].1.as_mut()
    }

    /// Get-or-create the single wildcard child; a second wildcard at the
    /// same node reuses the existing one.
    pub(crate) fn wildcard_child_mut(&mut self) -> &mut TrieNode<T> {
        let depth = self.depth + 1;
        self.wildcard_edge
            .get_or_insert_with(|| Box::new(TrieNode::new(depth)))
            .as_mut()
    }

    /// Static lookup for matching. Case folding happens only here, never
    /// at insert time.
    pub(crate) fn static_child(&self, text: &str, case_sensitive: bool) -> Option<&TrieNode<T>> {
        if case_sensitive {
            return self.static_edges.get(text).map(|child| child.as_ref());
        }
        // exact hit short-circuits the scan; between keys differing only
        // by case the first case-folded hit in iteration order wins,
        // which is implementation-defined
        if let Some(child) = self.static_edges.get(text) {
            return Some(child.as_ref());
        }
        let folded = text.to_lowercase();
        self.static_edges
            .iter()
            .find(|(key, _)| key.to_lowercase() == folded)
            .map(|(_, child)| child.as_ref())
    }
}
