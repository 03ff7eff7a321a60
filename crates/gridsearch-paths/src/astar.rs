//! A* search with a Euclidean heuristic and unit step cost.
//!
//! On a 4-connected grid where every step costs 1.0 the straight-line
//! distance is admissible and consistent, so the first time the goal is
//! popped its `g` is optimal and no closed cell ever needs reopening.

use gridsearch_core::{Grid, GridError, Point};

use crate::distance::euclidean;
use crate::frontier::Frontier;
use crate::snapshot::StepSnapshot;
use crate::traits::{SearchStatus, SearchStrategy, StepResult};

/// Cost of moving to any neighbour.
pub const STEP_COST: f64 = 1.0;

/// Steppable A* state.
///
/// The open set orders cells by ascending `f`; among equal `f` the cell that
/// entered the open set first wins, and a cell whose `g` improves keeps its
/// original place in that order.
#[derive(Debug, Default)]
pub struct AStar {
    goal: Point,
    goal_idx: usize,
    open: Frontier<usize>,
    /// First-insertion sequence number per flat index; `None` = unseen.
    seq: Vec<Option<u64>>,
    closed: Vec<Point>,
    status: Option<SearchStatus>,
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heuristic estimate from `p` to the goal.
    #[inline]
    fn estimate(&self, p: Point) -> f64 {
        euclidean(p, self.goal)
    }

    /// Live open-set members, oldest first.
    fn open_members(&self, grid: &Grid) -> Vec<Point> {
        let mut members: Vec<(u64, usize)> = self
            .open
            .iter()
            .filter(|&(&i, _, _)| !grid.cell(i).closed)
            .map(|(&i, _, seq)| (seq, i))
            .collect();
        members.sort_unstable();
        members.dedup_by_key(|&mut (seq, _)| seq);
        members.into_iter().map(|(_, i)| grid.point(i)).collect()
    }
}

impl SearchStrategy for AStar {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn initialize(&mut self, grid: &mut Grid, start: Point, goal: Point) -> Result<(), GridError> {
        let si = grid.index_of(start)?;
        self.goal = goal;
        self.goal_idx = grid.index_of(goal)?;
        self.open.clear();
        self.seq.clear();
        self.seq.resize(grid.len(), None);
        self.closed.clear();

        let h = self.estimate(start);
        let cell = grid.cell_mut(si);
        cell.g = 0.0;
        cell.h = h;
        cell.f = h;
        cell.parent = None;

        let s = self.open.push(si, h);
        self.seq[si] = Some(s);
        self.status = Some(SearchStatus::Running);
        Ok(())
    }

    fn step(&mut self, grid: &mut Grid, emit: bool) -> StepResult {
        let status = self.outcome();
        if status.is_terminal() {
            return StepResult::terminal(status);
        }

        // Pop the best live entry, skipping ones superseded by a better g.
        let ci = loop {
            let Some(ci) = self.open.pop() else {
                self.status = Some(SearchStatus::Exhausted);
                return StepResult::terminal(SearchStatus::Exhausted);
            };
            if !grid.cell(ci).closed {
                break ci;
            }
        };

        if ci == self.goal_idx {
            self.status = Some(SearchStatus::Found);
            return StepResult::terminal(SearchStatus::Found);
        }

        let cp = grid.point(ci);
        grid.cell_mut(ci).closed = true;
        self.closed.push(cp);
        let current_g = grid.cell(ci).g;

        for k in 0..grid.cell(ci).neighbors().len() {
            let np = grid.cell(ci).neighbors()[k];
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if grid.cell(ni).closed {
                continue;
            }
            let tentative_g = current_g + STEP_COST;
            let seen = self.seq[ni];
            if seen.is_some() && tentative_g >= grid.cell(ni).g {
                continue;
            }

            let h = self.estimate(np);
            let n = grid.cell_mut(ni);
            n.g = tentative_g;
            n.h = h;
            n.f = tentative_g + h;
            n.parent = Some(cp);
            let f = n.f;

            match seen {
                Some(s) => self.open.push_with_seq(ni, f, s),
                None => {
                    let s = self.open.push(ni, f);
                    self.seq[ni] = Some(s);
                }
            }
        }

        let snapshot = emit.then(|| StepSnapshot {
            current: cp,
            open: self.open_members(grid),
            closed: self.closed.clone(),
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
        &self.closed
    }
}
