use gridsearch_core::{Grid, GridError, Point};

use crate::snapshot::StepSnapshot;

/// Progress of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Open set not yet exhausted, goal not yet reached.
    Running,
    /// Goal reached; its parent chain is the path.
    Found,
    /// Open set exhausted without reaching the goal.
    Exhausted,
}

impl SearchStatus {
    /// Whether the search has ended, successfully or not.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// What one call to [`SearchStrategy::step`] did.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    pub status: SearchStatus,
    /// The cell expanded by this step. `None` when the step reached the goal
    /// or found the open set empty.
    pub expanded: Option<Point>,
    /// Present only when the step expanded a cell and emission was requested.
    pub snapshot: Option<StepSnapshot>,
}

impl StepResult {
    pub(crate) fn terminal(status: SearchStatus) -> Self {
        Self {
            status,
            expanded: None,
            snapshot: None,
        }
    }
}

/// A steppable search from one cell to another on a [`Grid`].
///
/// The grid must have fresh adjacency and cleared search state, and `start`
/// and `goal` must be distinct passable cells; the
/// [`RunController`](crate::RunController) guarantees all of this. The
/// strategy keeps its open and closed structures private and records costs
/// and parent links on the grid's cells.
pub trait SearchStrategy {
    /// Display name (`A*`, `BFS`, `DFS`).
    fn name(&self) -> &'static str;

    /// Seed the open set with `start`. Discards any previous run.
    fn initialize(&mut self, grid: &mut Grid, start: Point, goal: Point) -> Result<(), GridError>;

    /// Advance by one expansion.
    ///
    /// `emit` only controls whether a [`StepSnapshot`] is built; the search
    /// itself proceeds identically either way. Stepping a terminal search
    /// returns its status again and does nothing.
    fn step(&mut self, grid: &mut Grid, emit: bool) -> StepResult;

    /// Current status.
    fn outcome(&self) -> SearchStatus;

    /// Whether [`outcome`](Self::outcome) is terminal.
    fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Cells moved to the closed set (A*) or discovered (BFS/DFS), in order.
    fn closed(&self) -> &[Point];
}
