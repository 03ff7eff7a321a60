//! Breadth-first search.
//!
//! Level-order expansion makes the first path to the goal the shortest in
//! hop count.

use std::collections::VecDeque;

use crate::discovery::{Discovery, Fringe};

/// Steppable BFS: a [`Discovery`] search over a FIFO queue.
pub type Bfs = Discovery<VecDeque<usize>>;

impl Fringe for VecDeque<usize> {
    const NAME: &'static str = "BFS";

    fn put(&mut self, idx: usize) {
        self.push_back(idx);
    }

    fn take(&mut self) -> Option<usize> {
        self.pop_front()
    }

    fn pending(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().copied()
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{SearchStatus, SearchStrategy};
    use gridsearch_core::{Grid, Layout, Point};
    use std::collections::HashSet;

    fn prepared(text: &str) -> (Grid, Point, Point) {
        let Layout { mut grid, start, end } = Layout::parse(text).unwrap();
        grid.refresh_adjacency();
        grid.reset_search_state();
        (grid, start.unwrap(), end.unwrap())
    }

    fn run(grid: &mut Grid, start: Point, goal: Point) -> Bfs {
        let mut b = Bfs::new();
        b.initialize(grid, start, goal).unwrap();
        while !b.step(grid, false).status.is_terminal() {}
        b
    }

    #[test]
    fn hop_counts_are_level_order() {
        let (mut g, s, e) = prepared(
            "
#######
#S....#
#.....#
#....E#
#######",
        );
        let b = run(&mut g, s, e);
        assert_eq!(b.outcome(), SearchStatus::Found);
        assert_eq!(g.cell_at(e).unwrap().g, 6.0);
        for c in g.iter().filter(|c| c.closed) {
            let manhattan = (c.pos().x - s.x).abs() + (c.pos().y - s.y).abs();
            assert_eq!(c.g, f64::from(manhattan));
        }
    }

    #[test]
    fn discovery_order_follows_neighbor_order() {
        let (mut g, s, e) = prepared(
            "
#####
#...#
#.S.#
#...#
#E###
#####",
        );
        let mut b = Bfs::new();
        b.initialize(&mut g, s, e).unwrap();
        let r = b.step(&mut g, true);
        let snap = r.snapshot.unwrap();
        assert_eq!(snap.current, s);
        // right, left, down, up
        let expected = vec![
            Point::new(3, 2),
            Point::new(1, 2),
            Point::new(2, 3),
            Point::new(2, 1),
        ];
        assert_eq!(snap.open, expected);
        assert_eq!(snap.closed[0], s);
        assert_eq!(&snap.closed[1..], &expected[..]);
    }

    #[test]
    fn never_queues_a_cell_twice() {
        let (mut g, s, e) = prepared(
            "
########
#S.....#
#......#
#......#
#.....E#
########",
        );
        let b = run(&mut g, s, e);
        let unique: HashSet<Point> = b.closed().iter().copied().collect();
        assert_eq!(unique.len(), b.closed().len());
    }

    #[test]
    fn exhausts_when_walled_off() {
        let (mut g, s, e) = prepared(
            "
######
#S.#E#
#..#.#
######",
        );
        let b = run(&mut g, s, e);
        assert_eq!(b.outcome(), SearchStatus::Exhausted);
        assert_eq!(b.closed().len(), 4);
        assert!(!g.cell_at(e).unwrap().closed);
    }
}
