use thiserror::Error;

/// Errors from repository operations (used by trait definitions in
/// storefront-core).
///
/// The cart aggregator never lets these cross into the presentation layer:
/// any retrieval failure degrades to a zero badge count. The variants exist
/// for diagnostics and for callers that do want to distinguish outcomes
/// (e.g., the session provisioning CLI).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}
