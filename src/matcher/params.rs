use crate::types::RouteParams;
use std::cell::RefCell;

/// One bound parameter: name and percent-decoded value.
pub(crate) type CapturedParam = (String, String);

thread_local! {
    static CAPTURE_BUF: RefCell<Vec<CapturedParam>> = RefCell::new(Vec::with_capacity(4));
}

/// Runs `f` with a reusable per-thread capture buffer so the
/// backtracking search allocates no scratch per lookup.
pub(crate) fn with_capture_buffer<R>(f: impl FnOnce(&mut Vec<CapturedParam>) -> R) -> R {
    CAPTURE_BUF.with(|cell| {
        let mut buf = cell.borrow_mut();
        buf.clear();
        f(&mut buf)
    })
}

/// Snapshots the current captures into a params map. Called once per
/// produced candidate, keeping allocation linear in result count.
pub(crate) fn captures_to_map(captures: &[CapturedParam]) -> RouteParams {
    let mut map = RouteParams::with_capacity(captures.len());
    for (name, value) in captures {
        map.insert(name.clone(), value.clone());
    }
    map
}
