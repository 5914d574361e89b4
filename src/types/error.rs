//! Error types for the pathgraph library.

use thiserror::Error;

/// All errors that can occur in the pathgraph library.
///
/// Every failure is a contract violation by the caller, so there is a
/// single kind; the message names the precondition that was violated.
/// An unreachable target in a path query is NOT an error — see
/// [`Graph::shortest_path`](crate::Graph::shortest_path), which returns
/// `Ok(None)` for that case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An argument failed a precondition check. No mutation happened.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Convenience result type for pathgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
