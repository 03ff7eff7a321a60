//! Shared pieces of the terminal demo: argument parsing helpers, random
//! obstacle scattering and colored grid drawing.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use gridsearch_core::{Grid, Point};
use gridsearch_paths::{RunOutcome, StepSnapshot};
use rand::Rng;

// Colours, after the classic visualizer: green open set, red closed set,
// blue path, magenta endpoints.
const COL_WALL: Color = Color::Rgb { r: 90, g: 90, b: 100 };
const COL_FLOOR: Color = Color::Rgb { r: 200, g: 200, b: 200 };
const COL_OPEN: Color = Color::Rgb { r: 0, g: 220, b: 0 };
const COL_CLOSED: Color = Color::Rgb { r: 230, g: 40, b: 40 };
const COL_CURRENT: Color = Color::Rgb { r: 255, g: 210, b: 0 };
const COL_PATH: Color = Color::Rgb { r: 60, g: 90, b: 255 };
const COL_ENDPOINT: Color = Color::Rgb { r: 255, g: 8, b: 127 };

/// Parse an `x,y` coordinate.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

/// Mark each interior cell obstacle with probability `density`, never
/// touching the cells in `keep`. Returns the number of cells marked.
pub fn scatter_obstacles(grid: &mut Grid, density: f64, rng: &mut impl Rng, keep: &[Point]) -> usize {
    let density = density.clamp(0.0, 1.0);
    let bounds = grid.bounds();
    let mut marked = 0;
    for p in bounds.iter() {
        if bounds.on_border(p) || keep.contains(&p) {
            continue;
        }
        if rng.random_bool(density) && grid.set_obstacle(p, true).is_ok() {
            marked += 1;
        }
    }
    marked
}

/// What to draw on top of the bare grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overlay<'a> {
    pub start: Option<Point>,
    pub end: Option<Point>,
    /// Cell being expanded.
    pub current: Option<Point>,
    pub open: &'a [Point],
    pub closed: &'a [Point],
    pub path: &'a [Point],
}

impl<'a> Overlay<'a> {
    /// Overlay for one step snapshot.
    pub fn from_snapshot(snap: &'a StepSnapshot, start: Option<Point>, end: Option<Point>) -> Self {
        Self {
            start,
            end,
            current: Some(snap.current),
            open: &snap.open,
            closed: &snap.closed,
            path: &[],
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    None,
    Closed,
    Open,
    Path,
    Current,
    Endpoint,
}

/// Queue a colored drawing of `grid` into `out`, one text row per grid row.
///
/// Later layers win: closed, open, path, the current cell, then the
/// endpoints.
pub fn draw(out: &mut impl Write, grid: &Grid, overlay: &Overlay<'_>) -> io::Result<()> {
    let mut marks = vec![Mark::None; grid.len()];
    let layers: [(&[Point], Mark); 3] = [
        (overlay.closed, Mark::Closed),
        (overlay.open, Mark::Open),
        (overlay.path, Mark::Path),
    ];
    for (pts, mark) in layers {
        for &p in pts {
            if let Some(i) = grid.idx(p) {
                marks[i] = mark;
            }
        }
    }
    if let Some(i) = overlay.current.and_then(|p| grid.idx(p)) {
        marks[i] = Mark::Current;
    }
    for p in [overlay.start, overlay.end].into_iter().flatten() {
        if let Some(i) = grid.idx(p) {
            marks[i] = Mark::Endpoint;
        }
    }

    let cols = grid.cols() as usize;
    for (i, cell) in grid.iter().enumerate() {
        let (ch, color) = match marks[i] {
            Mark::Endpoint if Some(cell.pos()) == overlay.start => ('S', COL_ENDPOINT),
            Mark::Endpoint => ('E', COL_ENDPOINT),
            Mark::Current => ('@', COL_CURRENT),
            Mark::Path => ('*', COL_PATH),
            Mark::Open => ('o', COL_OPEN),
            Mark::Closed => ('x', COL_CLOSED),
            Mark::None if cell.obstacle => ('#', COL_WALL),
            Mark::None => ('.', COL_FLOOR),
        };
        queue!(out, SetForegroundColor(color), Print(ch))?;
        if (i + 1) % cols == 0 {
            queue!(out, ResetColor, Print("\r\n"))?;
        }
    }
    queue!(out, ResetColor)
}

/// One-line human summary of a run.
pub fn summary(algorithm: &str, outcome: &RunOutcome) -> String {
    match outcome {
        RunOutcome::Found(r) => format!(
            "{algorithm} finished: the path to the end is {:.2} blocks long ({} cells).",
            r.path_length,
            r.path.len()
        ),
        RunOutcome::NoPathFound => {
            format!("{algorithm}: no path could be found with the current obstacle layout.")
        }
    }
}
