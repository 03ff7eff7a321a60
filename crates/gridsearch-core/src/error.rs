//! Errors raised while building or addressing a [`Grid`](crate::Grid).

use thiserror::Error;

use crate::geom::Point;

/// Errors from grid construction, coordinate lookups and layout parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Dimensions too small to hold a border ring around interior cells, or
    /// more cells than [`MAX_CELLS`](crate::grid::MAX_CELLS).
    #[error("invalid grid dimensions {cols}x{rows}: both must be at least 3 and the area at most 1000000")]
    Configuration { cols: i32, rows: i32 },

    /// A coordinate outside `[0, cols) x [0, rows)`.
    #[error("cell {point} is outside the {cols}x{rows} grid")]
    OutOfBounds { point: Point, cols: i32, rows: i32 },

    /// Layout lines have different widths.
    #[error("layout line {line} has width {width}, expected {expected}")]
    InconsistentLayout {
        line: usize,
        width: usize,
        expected: usize,
    },

    /// Unknown or repeated character in a layout.
    #[error("layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidLayoutChar { ch: char, pos: Point },
}
