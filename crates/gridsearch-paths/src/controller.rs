//! The [`RunController`]: the single entry point that validates a run,
//! prepares the grid, drives one strategy to completion and reports the
//! result.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gridsearch_core::{Grid, GridConfig, Point};
use log::{debug, trace};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::error::{EndpointFault, SearchError};
use crate::path::reconstruct;
use crate::snapshot::StepSnapshot;
use crate::traits::{SearchStatus, SearchStrategy, StepResult};

/// Start used when the caller supplies none.
pub const DEFAULT_START: Point = Point::new(12, 5);
/// End used when the caller supplies none.
pub const DEFAULT_END: Point = Point::new(3, 6);

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The available search strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "A*", alias = "astar"))]
    AStar,
    #[cfg_attr(feature = "serde", serde(rename = "BFS", alias = "bfs"))]
    Bfs,
    #[cfg_attr(feature = "serde", serde(rename = "DFS", alias = "dfs"))]
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::Bfs, Algorithm::Dfs];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// A fresh strategy of this kind.
    pub fn strategy(self) -> Box<dyn SearchStrategy> {
        match self {
            Self::AStar => Box::new(AStar::new()),
            Self::Bfs => Box::new(Bfs::new()),
            Self::Dfs => Box::new(Dfs::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    /// Accepts `A*`, `BFS` and `DFS` in any case, plus `astar`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A*" | "ASTAR" => Ok(Self::AStar),
            "BFS" => Ok(Self::Bfs),
            "DFS" => Ok(Self::Dfs),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// RunConfig / RunOutcome
// ---------------------------------------------------------------------------

/// What to search for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    pub start: Option<Point>,
    pub end: Option<Point>,
    pub algorithm: Algorithm,
    /// Whether [`RunController::steps`] yields snapshots.
    pub show_steps: bool,
}

impl RunConfig {
    /// A config between two cells, without step snapshots.
    pub fn new(start: Point, end: Point, algorithm: Algorithm) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            algorithm,
            show_steps: false,
        }
    }

    /// Enable or disable step snapshots (builder).
    pub fn with_steps(mut self, show_steps: bool) -> Self {
        self.show_steps = show_steps;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: Some(DEFAULT_START),
            end: Some(DEFAULT_END),
            algorithm: Algorithm::AStar,
            show_steps: true,
        }
    }
}

/// A successful search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Number of unit steps from start to end.
    pub path_length: f64,
    /// Start first, end last.
    pub path: Vec<Point>,
}

/// How a run ended.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunOutcome {
    Found(PathResult),
    NoPathFound,
}

impl RunOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path_length(&self) -> Option<f64> {
        match self {
            Self::Found(r) => Some(r.path_length),
            Self::NoPathFound => None,
        }
    }

    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found(r) => Some(&r.path),
            Self::NoPathFound => None,
        }
    }
}

// ---------------------------------------------------------------------------
// CancelToken
// ---------------------------------------------------------------------------

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// Clones share the flag, so a UI can hold one and cancel a run driven
/// elsewhere. The controller polls it once per step and clears it when a
/// run observes it or ends, so a request made between runs cancels the
/// next one.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    done: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }

    /// Clear the flag, returning whether it was set.
    fn take(&self) -> bool {
        self.done.swap(false, Ordering::Relaxed)
    }
}

// ---------------------------------------------------------------------------
// RunController
// ---------------------------------------------------------------------------

struct ActiveRun {
    strategy: Box<dyn SearchStrategy>,
    goal: Point,
    show_steps: bool,
    expanded: usize,
}

enum RunState {
    Idle,
    Active(ActiveRun),
    /// Cancelled while being stepped; reported by the next `finish`.
    Cancelled,
}

/// Owns a [`Grid`] and runs at most one search on it at a time.
pub struct RunController {
    grid: Grid,
    state: RunState,
    cancel: CancelToken,
}

impl RunController {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            state: RunState::Idle,
            cancel: CancelToken::new(),
        }
    }

    /// Build the grid from `cfg` and wrap it.
    pub fn with_config(cfg: &GridConfig) -> Result<Self, SearchError> {
        Ok(Self::new(Grid::from_config(cfg)?))
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access, refused while a run is active.
    pub fn grid_mut(&mut self) -> Result<&mut Grid, SearchError> {
        if self.is_active() {
            return Err(SearchError::RunInProgress);
        }
        Ok(&mut self.grid)
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Mark or clear an obstacle between runs.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) -> Result<(), SearchError> {
        self.grid_mut()?.set_obstacle(p, obstacle)?;
        Ok(())
    }

    /// Remove every obstacle except the border ring.
    pub fn clear_obstacles(&mut self) -> Result<(), SearchError> {
        self.grid_mut()?.clear_obstacles();
        Ok(())
    }

    /// Whether a run has begun and not yet finished.
    pub fn is_active(&self) -> bool {
        matches!(self.state, RunState::Active(_))
    }

    /// A handle that can cancel the current or next run.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Request cancellation of the active run, or of the next one when
    /// idle.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Drop the active run, if any, without a result.
    pub fn abort(&mut self) {
        if self.is_active() {
            debug!("[run] aborted");
        }
        self.cancel.take();
        self.state = RunState::Idle;
    }

    /// Number of cells expanded so far by the active run.
    pub fn expanded(&self) -> usize {
        match &self.state {
            RunState::Active(run) => run.expanded,
            _ => 0,
        }
    }

    /// Check that `cfg` names two distinct passable cells of this grid.
    pub fn validate(&self, cfg: &RunConfig) -> Result<(Point, Point), SearchError> {
        let start = cfg.start.ok_or(EndpointFault::StartUnset)?;
        let end = cfg.end.ok_or(EndpointFault::EndUnset)?;
        if self.grid.is_obstacle(start)? {
            return Err(EndpointFault::StartBlocked(start).into());
        }
        if self.grid.is_obstacle(end)? {
            return Err(EndpointFault::EndBlocked(end).into());
        }
        if start == end {
            return Err(EndpointFault::SameCell(start).into());
        }
        Ok((start, end))
    }

    /// Validate `cfg` and start a run without expanding anything yet.
    ///
    /// Adjacency is recomputed from the current obstacles and every cell's
    /// search state is cleared first.
    pub fn begin(&mut self, cfg: &RunConfig) -> Result<(), SearchError> {
        if self.is_active() {
            return Err(SearchError::RunInProgress);
        }
        let (start, end) = self.validate(cfg).inspect_err(|e| {
            debug!("[run] rejected: {e}");
        })?;

        self.grid.refresh_adjacency();
        self.grid.reset_search_state();

        let mut strategy = cfg.algorithm.strategy();
        strategy.initialize(&mut self.grid, start, end)?;
        debug!(
            "[run] {} from {start} to {end} on {}x{} grid",
            strategy.name(),
            self.grid.cols(),
            self.grid.rows()
        );
        self.state = RunState::Active(ActiveRun {
            strategy,
            goal: end,
            show_steps: cfg.show_steps,
            expanded: 0,
        });
        Ok(())
    }

    fn advance(
        run: &mut ActiveRun,
        grid: &mut Grid,
        cancel: &CancelToken,
        emit: bool,
    ) -> Result<StepResult, SearchError> {
        if cancel.take() {
            debug!(
                "[run] {} cancelled after {} expansions",
                run.strategy.name(),
                run.expanded
            );
            return Err(SearchError::Cancelled);
        }
        let r = run.strategy.step(grid, emit);
        if let Some(p) = r.expanded {
            run.expanded += 1;
            trace!("[{}] expanded {p}", run.strategy.name());
        }
        Ok(r)
    }

    /// Advance the active run by one step.
    ///
    /// A snapshot is attached when the run was configured with
    /// `show_steps`.
    pub fn step(&mut self) -> Result<StepResult, SearchError> {
        let r = match &mut self.state {
            RunState::Active(run) => {
                let emit = run.show_steps;
                Self::advance(run, &mut self.grid, &self.cancel, emit)
            }
            RunState::Cancelled => Err(SearchError::Cancelled),
            RunState::Idle => Err(SearchError::NoActiveRun),
        };
        if matches!(r, Err(SearchError::Cancelled)) {
            self.state = RunState::Cancelled;
        }
        r
    }

    /// Lazily step the active run, yielding one snapshot per expansion.
    ///
    /// Empty unless the run was configured with `show_steps`. Stops at the
    /// terminal step or on cancellation; call [`finish`](Self::finish)
    /// afterwards for the result.
    pub fn steps(&mut self) -> Steps<'_> {
        Steps { ctl: self }
    }

    /// Drive the active run to its end and report the result.
    pub fn finish(&mut self) -> Result<RunOutcome, SearchError> {
        let mut run = match std::mem::replace(&mut self.state, RunState::Idle) {
            RunState::Active(run) => run,
            RunState::Cancelled => return Err(SearchError::Cancelled),
            RunState::Idle => return Err(SearchError::NoActiveRun),
        };

        while !run.strategy.is_terminal() {
            Self::advance(&mut run, &mut self.grid, &self.cancel, false)?;
        }
        // A request that arrives after the last step is dropped with the run.
        self.cancel.take();

        let status = run.strategy.outcome();
        debug!(
            "[run] {} {} after {} expansions",
            run.strategy.name(),
            if status == SearchStatus::Found {
                "reached goal"
            } else {
                "exhausted open set"
            },
            run.expanded
        );
        match status {
            SearchStatus::Found => {
                let path = reconstruct(&self.grid, run.goal, status)?;
                Ok(RunOutcome::Found(PathResult {
                    path_length: path.length(),
                    path: path.into_vec(),
                }))
            }
            _ => Ok(RunOutcome::NoPathFound),
        }
    }

    /// Validate, prepare and run a search to completion.
    pub fn run(&mut self, cfg: &RunConfig) -> Result<RunOutcome, SearchError> {
        self.begin(cfg)?;
        self.finish()
    }
}

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// Forward-only iterator over the snapshots of the active run.
///
/// Pulling an item advances the search; there is no way to rewind.
pub struct Steps<'a> {
    ctl: &'a mut RunController,
}

impl Iterator for Steps<'_> {
    type Item = StepSnapshot;

    fn next(&mut self) -> Option<StepSnapshot> {
        match &self.ctl.state {
            RunState::Active(run) if run.show_steps && !run.strategy.is_terminal() => {}
            _ => return None,
        }
        // Every non-terminal step expands one cell and carries a snapshot.
        self.ctl.step().ok()?.snapshot
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.ctl.grid.len()))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_uses_display_names() {
        assert_eq!(serde_json::to_string(&Algorithm::AStar).unwrap(), "\"A*\"");
        let a: Algorithm = serde_json::from_str("\"bfs\"").unwrap();
        assert_eq!(a, Algorithm::Bfs);
    }

    #[test]
    fn run_config_fills_defaults() {
        let c: RunConfig = serde_json::from_str(r#"{"algorithm": "DFS"}"#).unwrap();
        assert_eq!(c.algorithm, Algorithm::Dfs);
        assert_eq!(c.start, Some(DEFAULT_START));
        assert!(c.show_steps);
    }

    #[test]
    fn outcome_round_trip() {
        let mut ctl = RunController::new(Grid::new(5, 5).unwrap());
        let out = ctl
            .run(&RunConfig::new(Point::new(1, 1), Point::new(3, 2), Algorithm::Bfs))
            .unwrap();
        let json = serde_json::to_string(&out).unwrap();
        let back: RunOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, out);
        let none = serde_json::to_string(&RunOutcome::NoPathFound).unwrap();
        assert_eq!(none, "\"NoPathFound\"");
    }
}
