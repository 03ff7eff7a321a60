use gridsearch_core::{GridError, Point};
use thiserror::Error;

/// Why a start/end pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EndpointFault {
    #[error("start is not set")]
    StartUnset,
    #[error("end is not set")]
    EndUnset,
    #[error("start {0} is an obstacle")]
    StartBlocked(Point),
    #[error("end {0} is an obstacle")]
    EndBlocked(Point),
    #[error("start and end are the same cell {0}")]
    SameCell(Point),
}

/// Errors from running a search.
///
/// A search that simply finds no path is not an error; see
/// [`RunOutcome::NoPathFound`](crate::RunOutcome::NoPathFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] EndpointFault),

    /// Path reconstruction asked for on a search that did not succeed.
    #[error("no path to reconstruct: the search did not reach the goal")]
    NoPath,

    #[error("parent chain from {0} never reaches the start")]
    CorruptParentChain(Point),

    #[error("a search is already running on this grid")]
    RunInProgress,

    #[error("no search is running")]
    NoActiveRun,

    #[error("search cancelled")]
    Cancelled,

    #[error("unknown algorithm {0:?}, expected A*, BFS or DFS")]
    UnknownAlgorithm(String),
}
