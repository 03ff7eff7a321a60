//! The [`Cell`] type — one grid position with its obstacle flag and
//! per-run search state.

use crate::geom::Point;

/// One grid position.
///
/// The coordinate never changes. `obstacle` belongs to the grid editor;
/// every other field is scratch state owned by the search currently running
/// and is cleared by [`Cell::reset`] before each run.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pos: Point,
    /// Blocked cell. Read-only to the search algorithms.
    pub obstacle: bool,
    /// Cost from the start. Hop count for BFS/DFS.
    pub g: f64,
    /// Heuristic estimate to the goal (A* only).
    pub h: f64,
    /// `g + h` (A* only).
    pub f: f64,
    /// Predecessor on the best path found so far, by coordinate.
    pub parent: Option<Point>,
    /// A*: expanded. BFS/DFS: visited (already scheduled).
    pub closed: bool,
    pub(crate) neighbors: Vec<Point>,
}

impl Cell {
    /// A passable cell at `pos` with cleared search state.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            obstacle: false,
            g: f64::INFINITY,
            h: 0.0,
            f: f64::INFINITY,
            parent: None,
            closed: false,
            neighbors: Vec::with_capacity(4),
        }
    }

    /// The cell's `(i, j)` coordinate.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Passable neighbours as of the last
    /// [`refresh_adjacency`](crate::Grid::refresh_adjacency).
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    /// Whether the cell can be stepped on.
    #[inline]
    pub fn is_passable(&self) -> bool {
        !self.obstacle
    }

    /// Clear the search state. The obstacle flag and the neighbour list are
    /// left alone.
    pub fn reset(&mut self) {
        self.g = f64::INFINITY;
        self.h = 0.0;
        self.f = f64::INFINITY;
        self.parent = None;
        self.closed = false;
    }
}
