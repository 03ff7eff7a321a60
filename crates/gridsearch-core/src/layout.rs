//! Grids described as ASCII text.
//!
//! ```text
//! #######
//! #S..#.#
//! #.#...#
//! #...#E#
//! #######
//! ```
//!
//! `#` is an obstacle, `.` is passable, `S` and `E` mark the start and end
//! (both passable, each at most once). Every line must have the same width.
//! Leading and trailing whitespace of the whole text is ignored, but not
//! of individual lines.

use crate::error::GridError;
use crate::geom::Point;
use crate::grid::Grid;

pub const OBSTACLE: char = '#';
pub const FLOOR: char = '.';
pub const START: char = 'S';
pub const END: char = 'E';

/// A parsed text layout.
#[derive(Clone, Debug)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl Layout {
    /// Parse a layout.
    ///
    /// The grid takes its dimensions from the text; cells follow the text
    /// exactly, including the outer ring.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().collect();
        let expected = lines.first().map_or(0, |l| l.chars().count());
        for (line, l) in lines.iter().enumerate() {
            let width = l.chars().count();
            if width != expected {
                return Err(GridError::InconsistentLayout {
                    line,
                    width,
                    expected,
                });
            }
        }

        let mut grid = Grid::new(expected as i32, lines.len() as i32)?;
        let mut start = None;
        let mut end = None;

        for (y, l) in lines.iter().enumerate() {
            for (x, ch) in l.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let obstacle = match ch {
                    OBSTACLE => true,
                    FLOOR => false,
                    START if start.is_none() => {
                        start = Some(pos);
                        false
                    }
                    END if end.is_none() => {
                        end = Some(pos);
                        false
                    }
                    _ => return Err(GridError::InvalidLayoutChar { ch, pos }),
                };
                grid.set_obstacle(pos, obstacle)?;
            }
        }

        Ok(Self { grid, start, end })
    }
}

impl std::str::FromStr for Layout {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
