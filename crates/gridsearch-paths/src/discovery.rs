//! Uninformed search shared by [`Bfs`](crate::Bfs) and [`Dfs`](crate::Dfs).
//!
//! Cells are marked visited when they are discovered, not when they are
//! taken from the fringe, so no cell is ever queued twice. The only thing
//! that differs between the two searches is the order the [`Fringe`] hands
//! cells back.

use gridsearch_core::{Grid, GridError, Point};

use crate::snapshot::StepSnapshot;
use crate::traits::{SearchStatus, SearchStrategy, StepResult};

/// Container of discovered, not yet expanded flat indices.
pub trait Fringe: Default {
    /// Display name of the search this fringe drives.
    const NAME: &'static str;

    fn put(&mut self, idx: usize);

    /// Next index to expand.
    fn take(&mut self) -> Option<usize>;

    /// Pending indices in storage order.
    fn pending(&self) -> impl Iterator<Item = usize> + '_;

    fn clear(&mut self);
}

/// Steppable discovery-order search. `g` on each reached cell is its depth
/// in the discovery tree.
#[derive(Debug, Default)]
pub struct Discovery<F> {
    goal_idx: usize,
    fringe: F,
    visited: Vec<Point>,
    status: Option<SearchStatus>,
}

impl<F: Fringe> Discovery<F> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: Fringe> SearchStrategy for Discovery<F> {
    fn name(&self) -> &'static str {
        F::NAME
    }

    fn initialize(&mut self, grid: &mut Grid, start: Point, goal: Point) -> Result<(), GridError> {
        let si = grid.index_of(start)?;
        self.goal_idx = grid.index_of(goal)?;
        self.fringe.clear();
        self.visited.clear();

        let cell = grid.cell_mut(si);
        cell.g = 0.0;
        cell.parent = None;
        cell.closed = true;
        self.visited.push(start);
        self.fringe.put(si);
        self.status = Some(SearchStatus::Running);
        Ok(())
    }

    fn step(&mut self, grid: &mut Grid, emit: bool) -> StepResult {
        let status = self.outcome();
        if status.is_terminal() {
            return StepResult::terminal(status);
        }

        let Some(ci) = self.fringe.take() else {
            self.status = Some(SearchStatus::Exhausted);
            return StepResult::terminal(SearchStatus::Exhausted);
        };
        if ci == self.goal_idx {
            self.status = Some(SearchStatus::Found);
            return StepResult::terminal(SearchStatus::Found);
        }

        let cp = grid.point(ci);
        let current_g = grid.cell(ci).g;

        for k in 0..grid.cell(ci).neighbors().len() {
            let np = grid.cell(ci).neighbors()[k];
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            let n = grid.cell_mut(ni);
            if n.closed {
                continue;
            }
            n.closed = true;
            n.parent = Some(cp);
            n.g = current_g + 1.0;
            self.visited.push(np);
            self.fringe.put(ni);
        }

        let snapshot = emit.then(|| StepSnapshot {
            current: cp,
            open: self.fringe.pending().map(|i| grid.point(i)).collect(),
            closed: self.visited.clone(),
        });
        StepResult {
            status: SearchStatus::Running,
            expanded: Some(cp),
            snapshot,
        }
    }

    fn outcome(&self) -> SearchStatus {
        self.status.unwrap_or(SearchStatus::Exhausted)
    }

    fn closed(&self) -> &[Point] {
        &self.visited
    }
}
