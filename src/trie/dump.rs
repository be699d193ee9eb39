use std::fmt::Write;

use super::{RouteTrie, TrieNode};
use crate::route::RouteHandle;

impl<T: RouteHandle> RouteTrie<T> {
    /// Human-readable tree listing for diagnostics. The exact format is
    /// not contract-bearing.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<root> depth=0{}", registration_suffix(&self.root));
        dump_node(&self.root, 1, &mut out);
        out
    }
}

fn dump_node<T: RouteHandle>(node: &TrieNode<T>, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    let mut static_keys: Vec<&str> = node.static_edges.keys().map(|k| k.as_ref()).collect();
    static_keys.sort_unstable();

    for key in static_keys {
        if let Some(child) = node.static_edges.get(key) {
            let _ = writeln!(
                out,
                "{pad}{key} depth={}{}",
                child.depth,
                registration_suffix(child)
            );
            dump_node(child, indent + 1, out);
        }
    }

    for (name, child) in &node.param_edges {
        let _ = writeln!(
            out,
            "{pad}:{name} depth={}{}",
            child.depth,
            registration_suffix(child)
        );
        dump_node(child, indent + 1, out);
    }

    if let Some(child) = &node.wildcard_edge {
        let _ = writeln!(
            out,
            "{pad}* depth={}{}",
            child.depth,
            registration_suffix(child)
        );
        dump_node(child, indent + 1, out);
    }
}

fn registration_suffix<T: RouteHandle>(node: &TrieNode<T>) -> String {
    if node.registrations.is_empty() {
        return String::new();
    }
    let ids: Vec<&str> = node
        .registrations
        .iter()
        .map(|r| r.route_id.as_ref())
        .collect();
    format!(" -> [{}]", ids.join(", "))
}
