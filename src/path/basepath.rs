pub const ROOT_PATH: &str = "/";

/// Removes a leading basepath from `path` if present; passes the path
/// through unchanged when the prefix does not apply. Never an error.
///
/// The strip is segment-aligned: `/app` applies to `/app` and
/// `/app/users` but not `/apples`.
pub fn strip_basepath<'p>(basepath: &str, path: &'p str, case_sensitive: bool) -> &'p str {
    if basepath.is_empty() || basepath == ROOT_PATH {
        return path;
    }

    let prefix = basepath.trim_end_matches('/');
    if prefix.is_empty() {
        return path;
    }

    let rest = if case_sensitive {
        match path.strip_prefix(prefix) {
            Some(rest) => rest,
            None => return path,
        }
    } else {
        match folded_prefix_len(path, prefix) {
            Some(len) => &path[len..],
            None => return path,
        }
    };

    match rest.as_bytes().first() {
        None => ROOT_PATH,
        Some(b'/') => rest,
        // prefix ends mid-segment; not a mount point
        Some(_) => path,
    }
}

/// Byte length of the leading run of `path` whose lower-cased chars
/// equal `prefix`'s lower-cased chars. The returned length is always a
/// char boundary of `path`.
fn folded_prefix_len(path: &str, prefix: &str) -> Option<usize> {
    let mut indices = path.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = indices.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(indices.next().map(|(idx, _)| idx).unwrap_or(path.len()))
}
