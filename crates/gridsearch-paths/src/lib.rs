//! Point-to-point search on obstacle grids.
//!
//! Three interchangeable strategies share one steppable interface,
//! [`SearchStrategy`]:
//!
//! - **A\*** with a Euclidean heuristic ([`AStar`])
//! - **Breadth-first search**, shortest in hop count ([`Bfs`])
//! - **Depth-first search**, some path ([`Dfs`])
//!
//! Callers normally go through [`RunController`], which validates the
//! endpoints, prepares the grid, drives the chosen strategy (optionally one
//! [`StepSnapshot`] at a time) and reconstructs the path from the parent
//! links left on the grid's cells.
//!
//! ```
//! use gridsearch_core::{Grid, Point};
//! use gridsearch_paths::{Algorithm, RunConfig, RunController};
//!
//! let mut ctl = RunController::new(Grid::new(5, 5).unwrap());
//! let cfg = RunConfig::new(Point::new(1, 1), Point::new(3, 3), Algorithm::Bfs);
//! let out = ctl.run(&cfg).unwrap();
//! assert_eq!(out.path_length(), Some(4.0));
//! ```

mod astar;
mod bfs;
mod controller;
mod dfs;
mod discovery;
mod distance;
mod error;
mod frontier;
mod path;
mod snapshot;
mod traits;

pub use astar::{AStar, STEP_COST};
pub use bfs::Bfs;
pub use controller::{
    Algorithm, CancelToken, DEFAULT_END, DEFAULT_START, PathResult, RunConfig, RunController,
    RunOutcome, Steps,
};
pub use dfs::Dfs;
pub use discovery::{Discovery, Fringe};
pub use distance::{euclidean, manhattan};
pub use error::{EndpointFault, SearchError};
pub use frontier::Frontier;
pub use path::{Path, reconstruct};
pub use snapshot::StepSnapshot;
pub use traits::{SearchStatus, SearchStrategy, StepResult};
