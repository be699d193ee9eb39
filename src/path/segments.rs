use memchr::memchr;

pub const PARAM_MARKER: char = ':';
pub const WILDCARD_TOKEN: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Literal,
    Parameter,
    Wildcard,
}

/// One unit of a path. Separators are emitted as their own literal
/// segments; both builder and matcher skip them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: Box<str>,
}

impl Segment {
    pub fn is_separator(&self) -> bool {
        self.kind == SegmentKind::Literal && &*self.text == "/"
    }

    /// Parameter name with its marker stripped.
    pub fn param_name(&self) -> &str {
        self.text.strip_prefix(PARAM_MARKER).unwrap_or(&self.text)
    }
}

/// Sequences a path string into typed segments. Deterministic, pure and
/// total: any well-formed path string yields a segment list.
pub fn sequence(path: &str) -> Vec<Segment> {
    let bytes = path.as_bytes();
    let mut segments = Vec::with_capacity(8);
    let mut idx = 0usize;

    while idx < bytes.len() {
        if bytes[idx] == b'/' {
            segments.push(Segment {
                kind: SegmentKind::Literal,
                text: "/".into(),
            });
            idx += 1;
            continue;
        }

        let end = memchr(b'/', &bytes[idx..])
            .map(|offset| idx + offset)
            .unwrap_or(bytes.len());
        let text = &path[idx..end];
        let kind = if text == WILDCARD_TOKEN {
            SegmentKind::Wildcard
        } else if text.starts_with(PARAM_MARKER) {
            SegmentKind::Parameter
        } else {
            SegmentKind::Literal
        };

        segments.push(Segment {
            kind,
            text: text.into(),
        });
        idx = end;
    }

    segments
}
