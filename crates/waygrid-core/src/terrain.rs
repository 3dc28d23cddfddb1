//! Tile terrain and container-level walkability.
//!
//! Terrain is a dense grid of single-character tile symbols, immutable for
//! the lifetime of a map. The pathfinder never moves tile-by-tile; it moves
//! between *containers*, square `container_size × container_size` tile
//! blocks addressed by their top-left tile coordinate.

use std::fmt;

use crate::blocks::BlockSet;
use crate::geom::Point;

/// The only tile symbol that counts as open floor.
pub const FLOOR: char = '.';
/// Tree tile symbol used by the bundled maps. Blocks movement.
pub const TREE: char = 'T';
/// Void (out-of-map) tile symbol used by the bundled maps. Blocks movement.
pub const VOID: char = '@';

/// Tiles per container side in every observed configuration.
pub const DEFAULT_CONTAINER_SIZE: i32 = 2;

/// A rectangular grid of tile symbols plus the container aggregation size.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    tiles: Vec<char>,
    width: i32,
    height: i32,
    container_size: i32,
}

impl Terrain {
    /// Parse terrain from text rows, one character per tile.
    ///
    /// All rows must have the same non-zero width, and both dimensions must
    /// be a whole number of containers.
    pub fn parse(rows: &[&str], container_size: i32) -> Result<Self, TerrainError> {
        if container_size < 1 {
            return Err(TerrainError::BadContainerSize(container_size));
        }
        if rows.is_empty() || rows[0].is_empty() {
            return Err(TerrainError::Empty);
        }
        let width = rows[0].chars().count();
        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(TerrainError::RaggedRow {
                    row,
                    expected: width,
                    got,
                });
            }
            tiles.extend(line.chars());
        }
        let width = width as i32;
        let height = rows.len() as i32;
        if width % container_size != 0 || height % container_size != 0 {
            return Err(TerrainError::UnalignedDimensions {
                width,
                height,
                container_size,
            });
        }
        Ok(Self {
            tiles,
            width,
            height,
            container_size,
        })
    }

    /// Width in tiles.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Tiles per container side.
    #[inline]
    pub fn container_size(&self) -> i32 {
        self.container_size
    }

    /// The tile symbol at `p`, or `None` if out of bounds.
    pub fn tile(&self, p: Point) -> Option<char> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        Some(self.tiles[(p.y * self.width + p.x) as usize])
    }

    /// Whether the container with top-left corner `c` lies entirely within
    /// the terrain.
    pub fn contains_container(&self, c: Point) -> bool {
        c.x >= 0
            && c.y >= 0
            && c.x + self.container_size <= self.width
            && c.y + self.container_size <= self.height
    }

    /// Whether the container at `c` can be traversed.
    ///
    /// A container is unwalkable when 2 or more of its tiles are non-floor;
    /// a single blocking tile is tolerated. An obstacle block at `c` makes
    /// the container unwalkable regardless of tile contents.
    ///
    /// # Panics
    ///
    /// Panics if the container extends beyond the terrain bounds. Callers
    /// reach containers through bounds-checked adjacency, so an out-of-range
    /// query is a caller bug.
    pub fn walkable(&self, c: Point, blocks: &BlockSet) -> bool {
        assert!(
            self.contains_container(c),
            "container {c} out of terrain bounds {}x{}",
            self.width,
            self.height,
        );
        let mut blocking = 0;
        for dy in 0..self.container_size {
            for dx in 0..self.container_size {
                let idx = ((c.y + dy) * self.width + c.x + dx) as usize;
                if self.tiles[idx] != FLOOR {
                    blocking += 1;
                    if blocking == 2 {
                        return false;
                    }
                }
            }
        }
        !blocks.obstacle_at(c)
    }

    /// Row-major iterator over all container origins.
    pub fn containers(&self) -> impl Iterator<Item = Point> + '_ {
        let cs = self.container_size;
        (0..self.height / cs).flat_map(move |cy| {
            (0..self.width / cs).map(move |cx| Point::new(cx * cs, cy * cs))
        })
    }
}

/// Errors from [`Terrain::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    /// No rows, or an empty first row.
    Empty,
    /// A row's width differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// Container size must be at least 1.
    BadContainerSize(i32),
    /// Terrain dimensions are not a whole number of containers.
    UnalignedDimensions {
        width: i32,
        height: i32,
        container_size: i32,
    },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "terrain: empty grid"),
            Self::RaggedRow { row, expected, got } => {
                write!(f, "terrain: row {row} has width {got}, expected {expected}")
            }
            Self::BadContainerSize(cs) => {
                write!(f, "terrain: container size {cs} must be at least 1")
            }
            Self::UnalignedDimensions {
                width,
                height,
                container_size,
            } => write!(
                f,
                "terrain: {width}x{height} is not a whole number of {container_size}x{container_size} containers"
            ),
        }
    }
}

impl std::error::Error for TerrainError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{BlockKind, BlockSet};

    fn terrain(rows: &[&str]) -> Terrain {
        Terrain::parse(rows, DEFAULT_CONTAINER_SIZE).unwrap()
    }

    #[test]
    fn parse_basics() {
        let t = terrain(&["....", "..T.", "@@..", "...."]);
        assert_eq!(t.size(), Point::new(4, 4));
        assert_eq!(t.container_size(), 2);
        assert_eq!(t.tile(Point::new(2, 1)), Some(TREE));
        assert_eq!(t.tile(Point::new(0, 2)), Some(VOID));
        assert_eq!(t.tile(Point::new(4, 0)), None);
        assert_eq!(t.tile(Point::new(-1, 0)), None);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Terrain::parse(&[], 2), Err(TerrainError::Empty));
        assert_eq!(Terrain::parse(&[""], 2), Err(TerrainError::Empty));
        assert_eq!(
            Terrain::parse(&["....", "..."], 2),
            Err(TerrainError::RaggedRow {
                row: 1,
                expected: 4,
                got: 3
            })
        );
        assert_eq!(
            Terrain::parse(&["..", ".."], 0),
            Err(TerrainError::BadContainerSize(0))
        );
        assert_eq!(
            Terrain::parse(&["...", "...", "..."], 2),
            Err(TerrainError::UnalignedDimensions {
                width: 3,
                height: 3,
                container_size: 2
            })
        );
    }

    #[test]
    fn walkable_tolerates_one_blocking_tile() {
        let blocks = BlockSet::new();
        let t = terrain(&["T...", "....", "T.T.", ".T.."]);
        // One blocking tile: still walkable.
        assert!(t.walkable(Point::new(0, 0), &blocks));
        // Two blocking tiles: unwalkable.
        assert!(!t.walkable(Point::new(0, 2), &blocks));
        // No blocking tiles.
        assert!(t.walkable(Point::new(2, 0), &blocks));
    }

    #[test]
    fn walkable_monotone_in_blocking_tiles() {
        let blocks = BlockSet::new();
        for rows in [
            ["TT..", "....", "....", "...."], // 2 blocking
            ["TT..", "T...", "....", "...."], // 3 blocking
            ["TT..", "TT..", "....", "...."], // 4 blocking
        ] {
            let t = terrain(&rows);
            assert!(!t.walkable(Point::ZERO, &blocks));
        }
    }

    #[test]
    fn void_and_tree_block_alike() {
        let blocks = BlockSet::new();
        let t = terrain(&["T@..", "....", "....", "...."]);
        assert!(!t.walkable(Point::ZERO, &blocks));
    }

    #[test]
    fn obstacle_block_overrides_tiles() {
        let mut blocks = BlockSet::new();
        let t = terrain(&["....", "....", "....", "...."]);
        assert!(t.walkable(Point::ZERO, &blocks));
        blocks.add(Point::ZERO, BlockKind::Obstacle);
        assert!(!t.walkable(Point::ZERO, &blocks));
        // Start/goal markers do not block.
        blocks.clear();
        blocks.add(Point::ZERO, BlockKind::Start);
        assert!(t.walkable(Point::ZERO, &blocks));
    }

    #[test]
    #[should_panic(expected = "out of terrain bounds")]
    fn walkable_out_of_bounds_panics() {
        let blocks = BlockSet::new();
        let t = terrain(&["....", "....", "....", "...."]);
        t.walkable(Point::new(4, 0), &blocks);
    }

    #[test]
    fn containers_row_major() {
        let t = terrain(&["....", "....", "....", "...."]);
        let cs: Vec<Point> = t.containers().collect();
        assert_eq!(
            cs,
            vec![
                Point::new(0, 0),
                Point::new(2, 0),
                Point::new(0, 2),
                Point::new(2, 2)
            ]
        );
    }
}
