use gridsearch_core::Point;

/// The state of a search right after one expansion, for visualisation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSnapshot {
    /// The cell just expanded.
    pub current: Point,
    /// Open-set members, oldest first.
    pub open: Vec<Point>,
    /// Closed (A*) or visited (BFS/DFS) members, in the order they joined.
    pub closed: Vec<Point>,
}
