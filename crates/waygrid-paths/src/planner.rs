//! High-level path planning: direct tile mode and hierarchical waypoint
//! mode, plus dispatch from user-placed start/goal markers.

use std::collections::HashSet;

use log::{debug, trace};
use waygrid_core::Point;

use crate::containers::ContainerGrid;
use crate::heuristic::Weights;
use crate::search::{PathNode, Search, SearchResult};
use crate::waypoints::{WaypointGraph, WaypointPather};

/// Which graph a path request runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Direct search over container adjacency.
    Tile,
    /// Hierarchical search routed through the waypoint graph.
    Waypoint,
}

/// Path planner owning a reusable [`Search`] engine.
#[derive(Default)]
pub struct Planner {
    search: Search,
}

impl Planner {
    /// Create a planner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct container-to-container search from `start` to `goal`.
    pub fn tile_path(
        &mut self,
        grid: &ContainerGrid<'_>,
        start: Point,
        goal: Point,
        weights: Weights,
    ) -> SearchResult {
        trace!("tile path {start} -> {goal}");
        self.search.run(grid, start, goal, |c| c == goal, weights)
    }

    /// Hierarchical search from `start` to `goal` through the waypoint
    /// graph: anchor both endpoints to their nearest waypoints with
    /// uniform-cost sub-searches, run the weighted search between the
    /// anchors, then splice the three segments.
    ///
    /// Any failing phase makes the overall path empty; the diagnostic sets
    /// of all phases are unioned either way.
    pub fn waypoint_path(
        &mut self,
        grid: &ContainerGrid<'_>,
        graph: &WaypointGraph,
        start: Point,
        goal: Point,
        weights: Weights,
    ) -> SearchResult {
        trace!("waypoint path {start} -> {goal}");
        let mut diag = Diagnostics::default();

        // Nearest waypoint from each endpoint, heuristics disabled.
        // Immediate when the endpoint itself is a waypoint.
        let from_start = self
            .search
            .run(grid, start, start, |c| graph.is_waypoint(c), Weights::DISABLED);
        diag.absorb(&from_start);
        let from_goal = self
            .search
            .run(grid, goal, goal, |c| graph.is_waypoint(c), Weights::DISABLED);
        diag.absorb(&from_goal);

        let (Some(w_start), Some(w_goal)) = (
            from_start.path.last().map(|n| n.pos),
            from_goal.path.last().map(|n| n.pos),
        ) else {
            debug!("waypoint path: no waypoint reachable from an endpoint");
            return diag.into_result(Vec::new());
        };

        let pather = WaypointPather::new(graph);
        let across = self
            .search
            .run(&pather, w_start, w_goal, |c| c == w_goal, weights);
        diag.absorb(&across);
        if !across.found() {
            debug!("waypoint path: anchors {w_start} and {w_goal} not connected");
            return diag.into_result(Vec::new());
        }

        // Splice start->Wstart, Wstart->Wgoal, Wgoal->goal, dropping the
        // duplicated junction nodes; the goal-side segment reverses into
        // forward order.
        let mut route: Vec<Point> = from_start.path.iter().map(|n| n.pos).collect();
        route.extend(across.path.iter().skip(1).map(|n| n.pos));
        route.extend(from_goal.path.iter().rev().skip(1).map(|n| n.pos));

        let path = route
            .into_iter()
            .enumerate()
            .map(|(i, pos)| PathNode {
                pos,
                cost: i as i32,
            })
            .collect();
        diag.into_result(path)
    }

    /// Locate the start and goal marker blocks and run a search in the
    /// given mode. Returns `None` when either marker is missing.
    pub fn path_between_markers(
        &mut self,
        grid: &ContainerGrid<'_>,
        graph: &WaypointGraph,
        mode: Mode,
        weights: Weights,
    ) -> Option<SearchResult> {
        let start = grid.blocks().start()?;
        let goal = grid.blocks().goal()?;
        Some(match mode {
            Mode::Tile => self.tile_path(grid, start, goal, weights),
            Mode::Waypoint => self.waypoint_path(grid, graph, start, goal, weights),
        })
    }
}

/// Order-preserving union of per-phase diagnostic sets.
#[derive(Default)]
struct Diagnostics {
    closed: Vec<Point>,
    frontier: Vec<Point>,
    closed_seen: HashSet<Point>,
    frontier_seen: HashSet<Point>,
}

impl Diagnostics {
    fn absorb(&mut self, r: &SearchResult) {
        for &c in &r.closed {
            if self.closed_seen.insert(c) {
                self.closed.push(c);
            }
        }
        for &c in &r.frontier {
            if self.frontier_seen.insert(c) {
                self.frontier.push(c);
            }
        }
    }

    fn into_result(self, path: Vec<PathNode>) -> SearchResult {
        SearchResult {
            path,
            closed: self.closed,
            frontier: self.frontier,
        }
    }
}
