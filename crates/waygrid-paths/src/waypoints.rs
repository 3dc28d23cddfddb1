//! Precomputed waypoint connectivity.
//!
//! A *waypoint* is a designated container participating in the long-range
//! connectivity graph. Edges are found by ray-casting: from each waypoint,
//! walk container-by-container along each cardinal axis while the
//! containers stay walkable, and record the first waypoint hit (if any).
//!
//! The graph is built once per map, after the obstacle layout is known.
//! Obstacles placed *afterwards* do not invalidate recorded edges; callers
//! rebuild on map change only, not on every block edit.

use std::collections::{HashMap, HashSet};

use log::debug;
use waygrid_core::Point;

use crate::containers::ContainerGrid;
use crate::direction::Direction;
use crate::traits::ContainerPather;

/// Directed visibility edges between waypoint containers.
///
/// Scanning all four directions from every waypoint makes the edge set
/// effectively bidirectional.
#[derive(Debug, Clone, Default)]
pub struct WaypointGraph {
    edges: HashMap<Point, Vec<Point>>,
}

impl WaypointGraph {
    /// Build the graph for the given seed containers.
    ///
    /// For each seed and each cardinal direction the scan stops silently
    /// (no edge) at the first unwalkable container or the map edge, and
    /// stops with an edge at the first other waypoint.
    pub fn build(grid: &ContainerGrid<'_>, seeds: &[Point]) -> Self {
        let set: HashSet<Point> = seeds.iter().copied().collect();
        let mut edges: HashMap<Point, Vec<Point>> =
            set.iter().map(|&s| (s, Vec::new())).collect();

        for &seed in seeds {
            for dir in Direction::CARDINALS {
                let mut cur = grid.adjacent(seed, dir);
                while let Some(c) = cur {
                    if !grid.walkable(c) {
                        break;
                    }
                    if set.contains(&c) {
                        edges.entry(seed).or_default().push(c);
                        break;
                    }
                    cur = grid.adjacent(c, dir);
                }
            }
        }

        let n_edges: usize = edges.values().map(Vec::len).sum();
        debug!("waypoint graph built: {} waypoints, {} edges", set.len(), n_edges);
        Self { edges }
    }

    /// Whether `c` is a waypoint of this graph.
    pub fn is_waypoint(&self, c: Point) -> bool {
        self.edges.contains_key(&c)
    }

    /// The waypoints directly visible from `c`, in scan order
    /// (up, left, down, right).
    ///
    /// # Panics
    ///
    /// Panics when `c` is not a waypoint; only call on confirmed
    /// waypoints.
    pub fn neighbors(&self, c: Point) -> &[Point] {
        match self.edges.get(&c) {
            Some(v) => v,
            None => panic!("waypoint adjacency queried for non-waypoint container {c}"),
        }
    }

    /// Iterate over all waypoints in unspecified order.
    pub fn waypoints(&self) -> impl Iterator<Item = Point> + '_ {
        self.edges.keys().copied()
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Adapter exposing a [`WaypointGraph`] through the [`ContainerPather`]
/// seam, so the search engine can run over waypoint edges.
pub struct WaypointPather<'a> {
    graph: &'a WaypointGraph,
}

impl<'a> WaypointPather<'a> {
    /// Wrap a graph for searching.
    pub fn new(graph: &'a WaypointGraph) -> Self {
        Self { graph }
    }
}

impl ContainerPather for WaypointPather<'_> {
    fn neighbors(&self, c: Point, buf: &mut Vec<Point>) {
        buf.extend_from_slice(self.graph.neighbors(c));
    }

    /// Edges recorded at build time stay traversable; membership is the
    /// only check.
    fn walkable(&self, c: Point) -> bool {
        self.graph.is_waypoint(c)
    }
}
