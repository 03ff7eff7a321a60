//! **gridsearch-core** — the grid model shared by the search strategies.
//!
//! This crate provides geometry primitives, the obstacle [`Grid`] with its
//! per-cell search state, grid configuration and ASCII layouts.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::Cell;
pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Grid, MAX_CELLS, MIN_DIMENSION};
pub use layout::Layout;
