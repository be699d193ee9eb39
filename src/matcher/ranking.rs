use std::cmp::Ordering;

use super::resolver::Candidate;

/// Orders candidates best-first with a stable sort, so ties beyond the
/// ranked criteria keep discovery order (implementation-defined, not a
/// guarantee).
pub(crate) fn rank<T>(candidates: &mut [Candidate<'_, T>]) {
    candidates.sort_by(compare);
}

/// Specificity: greater trie depth first, then greater declared segment
/// granularity, then fewer bound parameters.
fn compare<T>(a: &Candidate<'_, T>, b: &Candidate<'_, T>) -> Ordering {
    b.depth
        .cmp(&a.depth)
        .then_with(|| {
            declared_segment_count(&b.registration.full_path)
                .cmp(&declared_segment_count(&a.registration.full_path))
        })
        .then_with(|| a.params.len().cmp(&b.params.len()))
}

fn declared_segment_count(path: &str) -> usize {
    path.split('/').filter(|part| !part.is_empty()).count()
}
