mod basepath;
mod decode;
mod segments;

pub use basepath::{ROOT_PATH, strip_basepath};
pub use decode::percent_decode;
pub use segments::{Segment, SegmentKind, sequence};
