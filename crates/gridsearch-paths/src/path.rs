//! Rebuilding a path from parent links.

use gridsearch_core::{Grid, Point};

use crate::error::SearchError;
use crate::traits::SearchStatus;

/// An ordered path from start to goal, both included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Point>,
}

impl Path {
    /// The cells, start first.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of edges walked.
    #[inline]
    pub fn hops(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Path length with unit step cost.
    #[inline]
    pub fn length(&self) -> f64 {
        self.hops() as f64
    }

    pub fn start(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.cells
    }
}

/// Walk `parent` links back from `goal` to the cell that has none.
///
/// `status` must be [`SearchStatus::Found`]; anything else is a caller bug
/// reported as [`SearchError::NoPath`].
pub fn reconstruct(grid: &Grid, goal: Point, status: SearchStatus) -> Result<Path, SearchError> {
    if status != SearchStatus::Found {
        return Err(SearchError::NoPath);
    }
    let mut cells = vec![goal];
    let mut cur = goal;
    while let Some(prev) = grid.cell_at(cur)?.parent {
        // Parent links form a tree, so a chain can't outnumber the cells.
        if cells.len() >= grid.len() {
            return Err(SearchError::CorruptParentChain(goal));
        }
        cells.push(prev);
        cur = prev;
    }
    cells.reverse();
    Ok(Path { cells })
}
