use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("router is sealed; cannot insert route at '{path}'")]
    AddWhileSealed { path: String },
    #[error("router is sealed; cannot insert {count} routes")]
    BulkAddWhileSealed { count: usize },
    #[error("router is not sealed; resolve requires a frozen trie")]
    ResolveWhileMutable,
    #[error("readonly snapshot is unavailable before seal")]
    SnapshotUnavailable,
}

pub type RouterResult<T> = Result<T, RouterError>;
