//! Cardinal travel directions on the container grid.

use waygrid_core::Point;

/// One of the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Neighbor generation order. This ordering drives open-list
    /// tie-breaking and must stay fixed for deterministic paths.
    pub const CARDINALS: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Unit tile step for this direction. Scale by the container size to
    /// step between containers.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Left => Point::new(-1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Right => Point::new(1, 0),
        }
    }
}
