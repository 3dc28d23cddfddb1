//! User-placed block markers: obstacles, start, and goal.

use std::collections::HashMap;

use crate::geom::Point;

/// What a user-placed block means to the pathfinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    /// Makes the covered container unwalkable regardless of its tiles.
    Obstacle,
    /// Marks the search origin container. At most one at a time.
    Start,
    /// Marks the search destination container. At most one at a time.
    Goal,
}

/// The set of user-placed blocks, keyed by container origin.
///
/// Blocks live as long as the current map; callers clear the set on map
/// change or explicit reset.
#[derive(Debug, Clone, Default)]
pub struct BlockSet {
    map: HashMap<Point, BlockKind>,
}

impl BlockSet {
    /// Create an empty block set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a block at `c`. Returns `false` without placing when the
    /// coordinate is already occupied, or when a second [`BlockKind::Start`]
    /// or [`BlockKind::Goal`] would be created.
    pub fn add(&mut self, c: Point, kind: BlockKind) -> bool {
        if kind != BlockKind::Obstacle && self.map.values().any(|&k| k == kind) {
            return false;
        }
        if self.map.contains_key(&c) {
            return false;
        }
        self.map.insert(c, kind);
        true
    }

    /// Remove the block at `c`, if any. Returns whether one was removed.
    pub fn remove(&mut self, c: Point) -> bool {
        self.map.remove(&c).is_some()
    }

    /// Delete all blocks.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// The kind of block at `c`, if any.
    pub fn kind_at(&self, c: Point) -> Option<BlockKind> {
        self.map.get(&c).copied()
    }

    /// Whether an obstacle block covers `c`.
    pub fn obstacle_at(&self, c: Point) -> bool {
        self.kind_at(c) == Some(BlockKind::Obstacle)
    }

    /// The start marker position, if one has been placed.
    pub fn start(&self) -> Option<Point> {
        self.find(BlockKind::Start)
    }

    /// The goal marker position, if one has been placed.
    pub fn goal(&self) -> Option<Point> {
        self.find(BlockKind::Goal)
    }

    fn find(&self, kind: BlockKind) -> Option<Point> {
        self.map
            .iter()
            .find(|&(_, &k)| k == kind)
            .map(|(&c, _)| c)
    }

    /// Number of blocks placed.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no blocks are placed.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(position, kind)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, BlockKind)> + '_ {
        self.map.iter().map(|(&c, &k)| (c, k))
    }
}
