//! Core types for container-grid pathfinding.
//!
//! A *container* is a square block of `container_size × container_size`
//! terrain tiles treated as one pathfinding node, addressed by the tile
//! coordinate of its top-left corner. This crate provides:
//!
//! - [`Point`] — integer tile coordinates
//! - [`Terrain`] — the tile grid and container-level walkability
//! - [`BlockSet`] — user-placed obstacle/start/goal markers
//!
//! The search algorithms themselves live in the `waygrid-paths` crate.

pub mod blocks;
pub mod geom;
pub mod terrain;

pub use blocks::{BlockKind, BlockSet};
pub use geom::Point;
pub use terrain::{DEFAULT_CONTAINER_SIZE, FLOOR, TREE, Terrain, TerrainError, VOID};
