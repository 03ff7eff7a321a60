//! Depth-first search.
//!
//! The most recently discovered cell is expanded next. The path found is
//! some path, not necessarily a shortest one.

use crate::discovery::{Discovery, Fringe};

/// Steppable DFS: a [`Discovery`] search over a LIFO stack.
pub type Dfs = Discovery<Vec<usize>>;

impl Fringe for Vec<usize> {
    const NAME: &'static str = "DFS";

    fn put(&mut self, idx: usize) {
        self.push(idx);
    }

    fn take(&mut self) -> Option<usize> {
        self.pop()
    }

    fn pending(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().copied()
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}
