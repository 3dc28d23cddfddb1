use waygrid_core::Point;

/// Graph seam for the search engine.
///
/// Both the direct container grid and the precomputed waypoint graph
/// implement this, so one engine serves both search modes.
pub trait ContainerPather {
    /// Append the neighbors of `c` into `buf`, in tie-break order.
    /// The caller clears `buf` before calling. Neighbors need not be
    /// walkable; the engine filters them (the goal test runs first).
    fn neighbors(&self, c: Point, buf: &mut Vec<Point>);

    /// Whether the container at `c` can be traversed.
    fn walkable(&self, c: Point) -> bool;
}
