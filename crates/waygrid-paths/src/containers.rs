//! Container adjacency over terrain and user blocks.

use waygrid_core::{BlockSet, Point, Terrain};

use crate::direction::Direction;
use crate::traits::ContainerPather;

/// Borrowed view of terrain plus user blocks, presenting the 4-connected
/// container graph to the search engine.
pub struct ContainerGrid<'a> {
    terrain: &'a Terrain,
    blocks: &'a BlockSet,
}

impl<'a> ContainerGrid<'a> {
    /// Create a view over the given terrain and block set.
    pub fn new(terrain: &'a Terrain, blocks: &'a BlockSet) -> Self {
        Self { terrain, blocks }
    }

    /// The underlying terrain.
    pub fn terrain(&self) -> &Terrain {
        self.terrain
    }

    /// The user block set.
    pub fn blocks(&self) -> &BlockSet {
        self.blocks
    }

    /// The adjacent container in direction `dir`, or `None` when the map
    /// edge is in the way. A missing neighbor is a normal absent result,
    /// not an error.
    pub fn adjacent(&self, c: Point, dir: Direction) -> Option<Point> {
        let n = c + dir.delta() * self.terrain.container_size();
        self.terrain.contains_container(n).then_some(n)
    }

    /// Whether the container at `c` can be traversed.
    pub fn walkable(&self, c: Point) -> bool {
        self.terrain.walkable(c, self.blocks)
    }
}

impl ContainerPather for ContainerGrid<'_> {
    fn neighbors(&self, c: Point, buf: &mut Vec<Point>) {
        for dir in Direction::CARDINALS {
            if let Some(n) = self.adjacent(c, dir) {
                buf.push(n);
            }
        }
    }

    fn walkable(&self, c: Point) -> bool {
        ContainerGrid::walkable(self, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygrid_core::DEFAULT_CONTAINER_SIZE;

    fn terrain(rows: &[&str]) -> Terrain {
        Terrain::parse(rows, DEFAULT_CONTAINER_SIZE).unwrap()
    }

    #[test]
    fn adjacent_respects_edges() {
        let t = terrain(&["....", "....", "....", "...."]);
        let blocks = BlockSet::new();
        let g = ContainerGrid::new(&t, &blocks);
        let origin = Point::new(0, 0);
        assert_eq!(g.adjacent(origin, Direction::Up), None);
        assert_eq!(g.adjacent(origin, Direction::Left), None);
        assert_eq!(g.adjacent(origin, Direction::Down), Some(Point::new(0, 2)));
        assert_eq!(g.adjacent(origin, Direction::Right), Some(Point::new(2, 0)));

        let far = Point::new(2, 2);
        assert_eq!(g.adjacent(far, Direction::Down), None);
        assert_eq!(g.adjacent(far, Direction::Right), None);
        assert_eq!(g.adjacent(far, Direction::Up), Some(Point::new(2, 0)));
        assert_eq!(g.adjacent(far, Direction::Left), Some(Point::new(0, 2)));
    }

    #[test]
    fn neighbors_in_tie_break_order() {
        let t = terrain(&[
            "......", "......", "......", "......", "......", "......",
        ]);
        let blocks = BlockSet::new();
        let g = ContainerGrid::new(&t, &blocks);
        let mut buf = Vec::new();
        g.neighbors(Point::new(2, 2), &mut buf);
        // up, left, down, right
        assert_eq!(
            buf,
            vec![
                Point::new(2, 0),
                Point::new(0, 2),
                Point::new(2, 4),
                Point::new(4, 2)
            ]
        );
    }

    #[test]
    fn corner_has_two_neighbors() {
        let t = terrain(&["....", "....", "....", "...."]);
        let blocks = BlockSet::new();
        let g = ContainerGrid::new(&t, &blocks);
        let mut buf = Vec::new();
        g.neighbors(Point::new(2, 2), &mut buf);
        assert_eq!(buf, vec![Point::new(2, 0), Point::new(0, 2)]);
    }
}
