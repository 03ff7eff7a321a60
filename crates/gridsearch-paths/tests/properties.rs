//! Cross-strategy properties on hand-made and seeded random grids.

use gridsearch_core::{Grid, Layout, Point};
use gridsearch_paths::{
    Algorithm, EndpointFault, RunConfig, RunController, RunOutcome, SearchError, manhattan,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay `path` on `grid` and check it is a walk from `start` to `end`.
fn assert_valid_path(grid: &Grid, path: &[Point], start: Point, end: Point, length: f64) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    assert_eq!((path.len() - 1) as f64, length);
    for p in path {
        assert!(!grid.is_obstacle(*p).unwrap(), "path crosses obstacle at {p}");
    }
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a step", w[0], w[1]);
    }
}

/// A grid with random interior obstacles and two distinct free cells.
fn random_case(rng: &mut StdRng) -> (Grid, Point, Point) {
    let cols = rng.random_range(5..25);
    let rows = rng.random_range(5..25);
    let density = rng.random_range(0.0..0.4);
    let mut grid = Grid::new(cols, rows).unwrap();
    for p in grid.bounds().iter() {
        if rng.random_bool(density) {
            grid.set_obstacle(p, true).unwrap();
        }
    }
    let mut pick = |grid: &mut Grid| {
        let p = Point::new(rng.random_range(1..cols - 1), rng.random_range(1..rows - 1));
        grid.set_obstacle(p, false).unwrap();
        p
    };
    let start = pick(&mut grid);
    let mut end = pick(&mut grid);
    while end == start {
        end = pick(&mut grid);
    }
    (grid, start, end)
}

#[test]
fn open_grid_lengths_are_manhattan() {
    let mut ctl = RunController::new(Grid::new(20, 15).unwrap());
    let pairs = [
        (Point::new(1, 1), Point::new(18, 13)),
        (Point::new(5, 7), Point::new(6, 7)),
        (Point::new(17, 2), Point::new(3, 12)),
    ];
    for (s, e) in pairs {
        for a in [Algorithm::AStar, Algorithm::Bfs] {
            let out = ctl.run(&RunConfig::new(s, e, a)).unwrap();
            assert_eq!(out.path_length(), Some(f64::from(manhattan(s, e))), "{a}");
        }
    }
}

#[test]
fn scenario_five_by_five() {
    let mut ctl = RunController::new(Grid::new(5, 5).unwrap());
    let (s, e) = (Point::new(1, 1), Point::new(3, 3));
    for a in Algorithm::ALL {
        let out = ctl.run(&RunConfig::new(s, e, a)).unwrap();
        let RunOutcome::Found(r) = out else {
            panic!("{a} found no path");
        };
        assert_valid_path(ctl.grid(), &r.path, s, e, r.path_length);
        if a == Algorithm::Dfs {
            assert!(r.path_length >= 4.0);
        } else {
            assert_eq!(r.path_length, 4.0);
        }
    }
}

#[test]
fn scenario_wall_splits_grid() {
    let l = Layout::parse(
        "
#####
#S#.#
#.#.#
#.#E#
#####",
    )
    .unwrap();
    let mut ctl = RunController::new(l.grid);
    for a in Algorithm::ALL {
        let cfg = RunConfig {
            start: l.start,
            end: l.end,
            algorithm: a,
            show_steps: false,
        };
        assert_eq!(ctl.run(&cfg).unwrap(), RunOutcome::NoPathFound, "{a}");
    }
}

#[test]
fn blocked_endpoints_fail_before_searching() {
    let mut ctl = RunController::new(Grid::new(8, 8).unwrap());
    ctl.set_obstacle(Point::new(3, 3), true).unwrap();
    for a in Algorithm::ALL {
        let cfg = RunConfig::new(Point::new(3, 3), Point::new(5, 5), a).with_steps(true);
        assert_eq!(
            ctl.begin(&cfg),
            Err(SearchError::InvalidEndpoint(EndpointFault::StartBlocked(
                Point::new(3, 3)
            )))
        );
        assert!(!ctl.is_active());
        assert_eq!(ctl.steps().count(), 0);
        assert!(ctl.grid().iter().all(|c| c.parent.is_none()));
    }
}

#[test]
fn random_grids_agree_on_reachability_and_bfs_is_shortest() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let (grid, start, end) = random_case(&mut rng);
        let mut ctl = RunController::new(grid);
        let mut lengths = Vec::new();
        for a in Algorithm::ALL {
            let out = ctl.run(&RunConfig::new(start, end, a)).unwrap();
            if let RunOutcome::Found(r) = &out {
                assert_valid_path(ctl.grid(), &r.path, start, end, r.path_length);
                assert!(r.path_length >= f64::from(manhattan(start, end)));
            }
            lengths.push(out.path_length());
        }
        let (astar, bfs, dfs) = (lengths[0], lengths[1], lengths[2]);
        assert_eq!(astar.is_some(), bfs.is_some());
        assert_eq!(bfs.is_some(), dfs.is_some());
        if let (Some(a), Some(b), Some(d)) = (astar, bfs, dfs) {
            assert_eq!(a, b, "A* must be as short as BFS");
            assert!(b <= d);
        }
    }
}

#[test]
fn random_grids_step_bounds_and_repeatability() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let (grid, start, end) = random_case(&mut rng);
        let cells = grid.len();
        let mut ctl = RunController::new(grid);
        for a in Algorithm::ALL {
            let cfg = RunConfig::new(start, end, a);
            let quiet = ctl.run(&cfg).unwrap();

            ctl.begin(&cfg.with_steps(true)).unwrap();
            let mut seen = std::collections::HashSet::new();
            let mut count = 0;
            for snap in ctl.steps() {
                count += 1;
                if a == Algorithm::AStar {
                    assert!(seen.insert(snap.current), "A* expanded {} twice", snap.current);
                }
            }
            assert!(count <= cells);
            assert_eq!(ctl.finish().unwrap(), quiet, "{a}");
        }
    }
}
