//! Pathfinding over container grids.
//!
//! This crate searches terrain at the granularity of *containers*
//! (aggregated tile blocks from `waygrid-core`), in two modes:
//!
//! - **Tile mode** — best-first search directly over container adjacency
//!   ([`Planner::tile_path`])
//! - **Waypoint mode** — hierarchical search that routes through a
//!   precomputed [`WaypointGraph`] ([`Planner::waypoint_path`])
//!
//! The engine itself ([`Search`]) is generic over the [`ContainerPather`]
//! seam, so both modes share one implementation. Every query returns a
//! [`SearchResult`] carrying the path plus the explored/frontier sets for
//! visualization; "no route" is an empty path, never an error.

mod containers;
mod direction;
mod distance;
mod heuristic;
mod planner;
mod search;
mod traits;
mod waypoints;

pub use containers::ContainerGrid;
pub use direction::Direction;
pub use distance::{euclidean, manhattan};
pub use heuristic::{WEIGHT_LIMIT, Weights};
pub use planner::{Mode, Planner};
pub use search::{PathNode, Search, SearchResult};
pub use traits::ContainerPather;
pub use waypoints::{WaypointGraph, WaypointPather};
