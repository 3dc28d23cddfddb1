//! Generic best-first search over container graphs.
//!
//! One engine serves both modes: with weights enabled it is A*; with
//! [`Weights::DISABLED`] the total cost reduces to the hop count and the
//! search degenerates to uniform-cost (BFS-equivalent on unit edges).
//!
//! Nodes live in an arena with index-based parent links; coordinates are
//! resolved through a hash index, never by reference identity. The open
//! list is kept sorted ascending by total cost with *stable* insertion
//! (a new entry goes after existing equal-cost entries), so equal-cost
//! ties break by insertion order and results are deterministic.

use std::collections::HashMap;

use waygrid_core::Point;

use crate::heuristic::Weights;
use crate::traits::ContainerPather;

const NO_PARENT: usize = usize::MAX;

/// A path entry: container position plus hop count from the path start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Outcome of one search invocation.
///
/// An empty `path` is the normal "no route" result, not a fault. The
/// diagnostic sets are filled in on success and failure alike so callers
/// can visualize a fruitless search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// Containers from start to goal inclusive; empty when unreachable.
    pub path: Vec<PathNode>,
    /// Fully expanded containers, in expansion order.
    pub closed: Vec<Point>,
    /// Discovered-but-unexpanded containers left when the search ended,
    /// in cost order.
    pub frontier: Vec<Point>,
}

impl SearchResult {
    /// Whether a route was found.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Membership {
    Open,
    Closed,
}

/// Arena node. Parents are arena indices, not references.
struct Node {
    pos: Point,
    parent: usize,
    start_distance: i32,
    total_cost: f64,
    membership: Membership,
}

/// Best-first search engine.
///
/// Owns all per-invocation state (node arena, open/closed lists,
/// coordinate index, neighbor scratch buffer) and resets it wholesale at
/// the start of each [`run`](Self::run); `&mut self` keeps at most one
/// search in flight.
pub struct Search {
    nodes: Vec<Node>,
    open: Vec<usize>,
    closed: Vec<usize>,
    index: HashMap<Point, usize>,
    nbuf: Vec<Point>,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    /// Create a new engine.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            open: Vec::new(),
            closed: Vec::new(),
            index: HashMap::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Search from `start` until `is_goal` accepts a container.
    ///
    /// `target` anchors the heuristic; it is ignored when `weights` is
    /// [`Weights::DISABLED`] (pass `start` for goal-predicate-only
    /// searches such as nearest-waypoint lookups).
    ///
    /// If `is_goal(start)` holds, the single-element path `[start]` is
    /// returned without expanding anything. The goal test runs on each
    /// generated neighbor *before* its walkability check, so a goal on an
    /// otherwise unwalkable container is still reachable.
    pub fn run<P: ContainerPather>(
        &mut self,
        pather: &P,
        start: Point,
        target: Point,
        is_goal: impl Fn(Point) -> bool,
        weights: Weights,
    ) -> SearchResult {
        self.reset();

        if is_goal(start) {
            return SearchResult {
                path: vec![PathNode {
                    pos: start,
                    cost: 0,
                }],
                ..SearchResult::default()
            };
        }

        let si = self.push_node(start, NO_PARENT, 0, weights.estimate(start, target));
        self.open.push(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut goal_idx = None;

        'search: while !self.open.is_empty() {
            // Lowest total cost is at the front.
            let ci = self.open.remove(0);
            self.nodes[ci].membership = Membership::Closed;
            self.closed.push(ci);

            nbuf.clear();
            pather.neighbors(self.nodes[ci].pos, &mut nbuf);

            for &np in nbuf.iter() {
                if is_goal(np) {
                    let nd = self.nodes[ci].start_distance + 1;
                    goal_idx = Some(self.push_node(np, ci, nd, f64::from(nd)));
                    break 'search;
                }
                if !pather.walkable(np) {
                    continue;
                }

                let nd = self.nodes[ci].start_distance + 1;
                match self.index.get(&np) {
                    Some(&ni) => {
                        // Known container: relax only on a strictly
                        // shorter route, wherever the entry lives.
                        if self.nodes[ni].start_distance <= nd {
                            continue;
                        }
                        self.detach(ni);
                        let n = &mut self.nodes[ni];
                        n.parent = ci;
                        n.start_distance = nd;
                        n.total_cost = f64::from(nd) + weights.estimate(np, target);
                        n.membership = Membership::Open;
                        self.insert_open(ni);
                    }
                    None => {
                        let cost = f64::from(nd) + weights.estimate(np, target);
                        let ni = self.push_node(np, ci, nd, cost);
                        self.insert_open(ni);
                    }
                }
            }
        }

        self.nbuf = nbuf;

        SearchResult {
            path: goal_idx.map_or_else(Vec::new, |gi| self.compose(gi)),
            closed: self.closed.iter().map(|&i| self.nodes[i].pos).collect(),
            frontier: self.open.iter().map(|&i| self.nodes[i].pos).collect(),
        }
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.closed.clear();
        self.index.clear();
    }

    fn push_node(&mut self, pos: Point, parent: usize, start_distance: i32, total_cost: f64) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            pos,
            parent,
            start_distance,
            total_cost,
            membership: Membership::Open,
        });
        self.index.insert(pos, idx);
        idx
    }

    /// Remove a stale entry from whichever list currently holds it.
    fn detach(&mut self, ni: usize) {
        let list = match self.nodes[ni].membership {
            Membership::Open => &mut self.open,
            Membership::Closed => &mut self.closed,
        };
        if let Some(at) = list.iter().position(|&i| i == ni) {
            list.remove(at);
        }
    }

    /// Stable ordered insert: after all entries of equal or lower cost.
    fn insert_open(&mut self, ni: usize) {
        let cost = self.nodes[ni].total_cost;
        let at = self
            .open
            .partition_point(|&i| self.nodes[i].total_cost <= cost);
        self.open.insert(at, ni);
    }

    /// Materialize the path by walking parent indices back from the goal.
    fn compose(&self, goal_idx: usize) -> Vec<PathNode> {
        let mut rev = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            rev.push(self.nodes[ci].pos);
            ci = self.nodes[ci].parent;
        }
        rev.reverse();
        rev.into_iter()
            .enumerate()
            .map(|(i, pos)| PathNode {
                pos,
                cost: i as i32,
            })
            .collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(2, 4),
            cost: 3,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
