use super::params::{CapturedParam, captures_to_map, with_capture_buffer};
use crate::path::{Segment, percent_decode};
use crate::trie::{Registration, TrieNode};
use crate::types::{RouteParams, SPLAT_NAMED_KEY, SPLAT_POSITIONAL_KEY};

/// One full match produced by the backtracking search.
#[derive(Debug)]
pub(crate) struct Candidate<'t, T> {
    pub registration: &'t Registration<T>,
    pub params: RouteParams,
    pub depth: usize,
}

/// Exhaustive backtracking search from the root, collecting every full
/// match. The eventual winner is only known after ranking, so no branch
/// exits early. Recursion depth is bounded by the segment count of the
/// request path.
pub(crate) fn collect_matches<'t, T>(
    root: &'t TrieNode<T>,
    segments: &[Segment],
    case_sensitive: bool,
) -> Vec<Candidate<'t, T>> {
    let mut out = Vec::new();
    with_capture_buffer(|captures| {
        descend(root, segments, 0, captures, case_sensitive, &mut out);
    });
    out
}

fn descend<'t, T>(
    node: &'t TrieNode<T>,
    segments: &[Segment],
    mut pos: usize,
    captures: &mut Vec<CapturedParam>,
    case_sensitive: bool,
    out: &mut Vec<Candidate<'t, T>>,
) {
    // separators never create or descend through a node
    while pos < segments.len() && segments[pos].is_separator() {
        pos += 1;
    }

    if pos >= segments.len() {
        for registration in &node.registrations {
            out.push(Candidate {
                registration,
                params: captures_to_map(captures),
                depth: node.depth,
            });
        }
        return;
    }

    // request segments are concrete text; their sequenced kind is
    // irrelevant here
    let segment = &segments[pos];

    if let Some(child) = node.static_child(&segment.text, case_sensitive) {
        descend(child, segments, pos + 1, captures, case_sensitive, out);
    }

    // every param edge forks the search; binding a non-empty segment
    // never fails
    for (name, child) in &node.param_edges {
        let checkpoint = captures.len();
        captures.push((name.to_string(), percent_decode(&segment.text)));
        descend(child, segments, pos + 1, captures, case_sensitive, out);
        captures.truncate(checkpoint);
    }

    // tried last; all-or-nothing for the remaining segments
    if let Some(child) = &node.wildcard_edge {
        let splat = join_remainder(segments, pos);
        let checkpoint = captures.len();
        captures.push((SPLAT_POSITIONAL_KEY.to_string(), splat.clone()));
        captures.push((SPLAT_NAMED_KEY.to_string(), splat));
        for registration in &child.registrations {
            out.push(Candidate {
                registration,
                params: captures_to_map(captures),
                depth: child.depth,
            });
        }
        captures.truncate(checkpoint);
    }
}

/// Joined, decoded remainder of all not-yet-consumed non-separator
/// segments. Slashes between them are preserved by the join.
fn join_remainder(segments: &[Segment], pos: usize) -> String {
    let parts: Vec<String> = segments[pos..]
        .iter()
        .filter(|segment| !segment.is_separator())
        .map(|segment| percent_decode(&segment.text))
        .collect();
    parts.join("/")
}
