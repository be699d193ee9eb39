mod params;
mod ranking;
mod resolver;

pub(crate) use ranking::rank;
pub(crate) use resolver::collect_matches;
