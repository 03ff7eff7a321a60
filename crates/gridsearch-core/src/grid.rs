//! The [`Grid`] type — a fixed `cols x rows` array of [`Cell`]s surrounded
//! by a permanent obstacle ring.
//!
//! Cells are stored row-major in one flat `Vec`; the flat index doubles as
//! the key for every per-run set the search strategies keep.

use std::fmt;

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Smallest accepted dimension: a border ring plus one interior cell.
pub const MIN_DIMENSION: i32 = 3;

/// Largest accepted cell count.
pub const MAX_CELLS: usize = 1_000_000;

/// A 2D grid of [`Cell`]s.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a `cols x rows` grid whose outer ring is marked obstacle.
    pub fn new(cols: i32, rows: i32) -> Result<Self, GridError> {
        if cols < MIN_DIMENSION || rows < MIN_DIMENSION {
            return Err(GridError::Configuration { cols, rows });
        }
        let bounds = Range::new(0, 0, cols, rows);
        if bounds.len() > MAX_CELLS {
            return Err(GridError::Configuration { cols, rows });
        }
        let cells = bounds.iter().map(Cell::new).collect();
        let mut grid = Self { cells, bounds };
        grid.mark_border();
        Ok(grid)
    }

    /// Create a grid from a [`GridConfig`].
    pub fn from_config(cfg: &GridConfig) -> Result<Self, GridError> {
        Self::new(cfg.cols, cfg.rows)
    }

    /// The bounding range `[0, cols) x [0, rows)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.cols() as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.cols() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Like [`idx`](Self::idx), but an out-of-range point is an error.
    pub fn index_of(&self, p: Point) -> Result<usize, GridError> {
        self.idx(p).ok_or(GridError::OutOfBounds {
            point: p,
            cols: self.cols(),
            rows: self.rows(),
        })
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// The cell at `p`.
    pub fn cell_at(&self, p: Point) -> Result<&Cell, GridError> {
        let i = self.index_of(p)?;
        Ok(&self.cells[i])
    }

    /// Mutable access to the cell at `p`.
    pub fn cell_at_mut(&mut self, p: Point) -> Result<&mut Cell, GridError> {
        let i = self.index_of(p)?;
        Ok(&mut self.cells[i])
    }

    /// The cell at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable access to the cell at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Row-major iterator over every cell.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    // -----------------------------------------------------------------------
    // Obstacles
    // -----------------------------------------------------------------------

    /// Mark or clear the obstacle at `p`. Setting the current value again is
    /// a no-op.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) -> Result<(), GridError> {
        let i = self.index_of(p)?;
        self.cells[i].obstacle = obstacle;
        Ok(())
    }

    /// Whether `p` is an obstacle.
    pub fn is_obstacle(&self, p: Point) -> Result<bool, GridError> {
        Ok(self.cell_at(p)?.obstacle)
    }

    /// Remove every obstacle, then restore the border ring.
    pub fn clear_obstacles(&mut self) {
        for c in self.cells.iter_mut() {
            c.obstacle = false;
        }
        self.mark_border();
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.obstacle).count()
    }

    fn mark_border(&mut self) {
        let bounds = self.bounds;
        for c in self.cells.iter_mut() {
            if bounds.on_border(c.pos()) {
                c.obstacle = true;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Search support
    // -----------------------------------------------------------------------

    /// Recompute every cell's neighbour list from the current obstacles.
    ///
    /// Neighbours are cardinal, in the order right, left, down, up; cells
    /// outside the grid or marked obstacle are skipped. Must be called after
    /// any obstacle edit and before a search.
    pub fn refresh_adjacency(&mut self) {
        for i in 0..self.cells.len() {
            let p = self.cells[i].pos();
            let mut nbuf = std::mem::take(&mut self.cells[i].neighbors);
            nbuf.clear();
            for n in p.neighbors_4() {
                if let Some(ni) = self.idx(n) {
                    if !self.cells[ni].obstacle {
                        nbuf.push(n);
                    }
                }
            }
            self.cells[i].neighbors = nbuf;
        }
    }

    /// Cached neighbours of `p` (empty outside the grid).
    pub fn neighbors(&self, p: Point) -> &[Point] {
        match self.idx(p) {
            Some(i) => self.cells[i].neighbors(),
            None => &[],
        }
    }

    /// Clear `g`, `h`, `f`, `parent` and `closed` on every cell.
    pub fn reset_search_state(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset();
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// ASCII rendering with `path` overlaid as `*`.
    pub fn render_with_path(&self, path: &[Point]) -> String {
        let mut marks = vec![false; self.cells.len()];
        for &p in path {
            if let Some(i) = self.idx(p) {
                marks[i] = true;
            }
        }
        self.render(|i, c| {
            if marks[i] {
                '*'
            } else if c.obstacle {
                '#'
            } else {
                '.'
            }
        })
    }

    fn render(&self, glyph: impl Fn(usize, &Cell) -> char) -> String {
        let w = self.cols() as usize;
        let mut s = String::with_capacity(self.cells.len() + self.rows() as usize);
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 && i % w == 0 {
                s.push('\n');
            }
            s.push(glyph(i, c));
        }
        s
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_, c| if c.obstacle { '#' } else { '.' }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_marks_border_ring() {
        let g = Grid::new(5, 4).unwrap();
        assert_eq!(g.len(), 20);
        assert_eq!(g.obstacle_count(), 20 - 6);
        assert!(g.is_obstacle(Point::new(0, 0)).unwrap());
        assert!(g.is_obstacle(Point::new(4, 2)).unwrap());
        assert!(g.is_obstacle(Point::new(2, 3)).unwrap());
        assert!(!g.is_obstacle(Point::new(1, 1)).unwrap());
        assert!(!g.is_obstacle(Point::new(3, 2)).unwrap());
    }

    #[test]
    fn too_small_is_configuration_error() {
        assert_eq!(
            Grid::new(2, 10).unwrap_err(),
            GridError::Configuration { cols: 2, rows: 10 }
        );
        assert!(Grid::new(3, 3).is_ok());
        assert!(matches!(
            Grid::new(3, -1),
            Err(GridError::Configuration { .. })
        ));
    }

    #[test]
    fn too_large_is_configuration_error() {
        assert_eq!(
            Grid::new(100_000, 100_000).unwrap_err(),
            GridError::Configuration {
                cols: 100_000,
                rows: 100_000
            }
        );
        assert_eq!(
            Grid::new(1001, 1000).unwrap_err(),
            GridError::Configuration {
                cols: 1001,
                rows: 1000
            }
        );
        assert_eq!(Grid::new(1000, 1000).unwrap().len(), MAX_CELLS);
    }

    #[test]
    fn from_config_default_is_50x50() {
        let g = Grid::from_config(&GridConfig::default()).unwrap();
        assert_eq!((g.cols(), g.rows()), (50, 50));
    }

    #[test]
    fn cell_identity_matches_index() {
        let g = Grid::new(6, 4).unwrap();
        for (i, c) in g.iter().enumerate() {
            assert_eq!(g.idx(c.pos()), Some(i));
            assert_eq!(g.point(i), c.pos());
        }
    }

    #[test]
    fn out_of_bounds_lookups() {
        let mut g = Grid::new(5, 5).unwrap();
        let p = Point::new(5, 1);
        let err = GridError::OutOfBounds {
            point: p,
            cols: 5,
            rows: 5,
        };
        assert_eq!(g.cell_at(p).unwrap_err(), err);
        assert_eq!(g.set_obstacle(p, true).unwrap_err(), err);
        assert!(g.cell_at(Point::new(-1, 0)).is_err());
        assert!(g.neighbors(p).is_empty());
    }

    #[test]
    fn set_obstacle_is_idempotent() {
        let mut g = Grid::new(5, 5).unwrap();
        let p = Point::new(2, 2);
        g.set_obstacle(p, true).unwrap();
        g.set_obstacle(p, true).unwrap();
        assert!(g.is_obstacle(p).unwrap());
        g.set_obstacle(p, false).unwrap();
        assert!(!g.is_obstacle(p).unwrap());
    }

    #[test]
    fn adjacency_skips_obstacles_in_order() {
        let mut g = Grid::new(5, 5).unwrap();
        g.refresh_adjacency();
        assert_eq!(
            g.neighbors(Point::new(2, 2)),
            &[
                Point::new(3, 2),
                Point::new(1, 2),
                Point::new(2, 3),
                Point::new(2, 1)
            ]
        );
        // Corner of the interior touches the border on two sides.
        assert_eq!(
            g.neighbors(Point::new(1, 1)),
            &[Point::new(2, 1), Point::new(1, 2)]
        );
    }

    #[test]
    fn adjacency_is_stale_until_refreshed() {
        let mut g = Grid::new(5, 5).unwrap();
        g.refresh_adjacency();
        g.set_obstacle(Point::new(3, 2), true).unwrap();
        assert!(g.neighbors(Point::new(2, 2)).contains(&Point::new(3, 2)));
        g.refresh_adjacency();
        assert!(!g.neighbors(Point::new(2, 2)).contains(&Point::new(3, 2)));
    }

    #[test]
    fn adjacency_handles_open_border() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_obstacle(Point::new(0, 0), false).unwrap();
        g.set_obstacle(Point::new(1, 0), false).unwrap();
        g.refresh_adjacency();
        assert_eq!(g.neighbors(Point::new(0, 0)), &[Point::new(1, 0)]);
    }

    #[test]
    fn clear_obstacles_restores_border() {
        let mut g = Grid::new(6, 6).unwrap();
        g.set_obstacle(Point::new(2, 2), true).unwrap();
        g.set_obstacle(Point::new(0, 3), false).unwrap();
        g.clear_obstacles();
        assert!(!g.is_obstacle(Point::new(2, 2)).unwrap());
        assert!(g.is_obstacle(Point::new(0, 3)).unwrap());
        assert_eq!(g.obstacle_count(), 20);
    }

    #[test]
    fn reset_search_state_clears_every_cell() {
        let mut g = Grid::new(4, 4).unwrap();
        {
            let c = g.cell_at_mut(Point::new(1, 2)).unwrap();
            c.g = 2.0;
            c.parent = Some(Point::new(1, 1));
            c.closed = true;
        }
        g.reset_search_state();
        assert!(g.iter().all(|c| c.parent.is_none() && !c.closed && c.g.is_infinite()));
    }

    #[test]
    fn display_and_path_overlay() {
        let mut g = Grid::new(4, 3).unwrap();
        g.set_obstacle(Point::new(2, 1), true).unwrap();
        assert_eq!(g.to_string(), "####\n#.##\n####");
        let s = g.render_with_path(&[Point::new(1, 1)]);
        assert_eq!(s, "####\n#*##\n####");
    }
}
