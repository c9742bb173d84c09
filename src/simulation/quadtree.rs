//! # Region Quadtree (2D)
//!
//! This module implements a **region quadtree** that prunes the naive
//! `O(N²)` pairwise collision scan down to near-linear work by rejecting
//! spatially distant pairs.
//!
//! ## Core Concepts
//!
//! - The fixed rectangular domain is recursively subdivided into 4 regions
//!   (quadrants).
//! - Each region becomes a node of the quadtree.
//! - A node holds bodies directly until its count exceeds [`MAX_OBJECTS`];
//!   it then splits into four equal children (never past [`MAX_LEVELS`])
//!   and pushes down every body whose bounding square fits entirely inside
//!   one child.
//! - A body that straddles a midpoint stays in the node's direct list, so
//!   every node's direct list holds exactly the bodies that cannot be
//!   assigned to one child.
//!
//! The tree stores body **slot indices** into the system's body list, never
//! references; it is rebuilt from scratch every frame and holds no state
//! across frames.
//!
//! Retrieval descends only into the one child that unambiguously contains
//! the query body and appends every direct list along that lineage. The
//! result is a candidate superset of true neighbors within the branch, but
//! a body fully inside a *sibling* quadrant is never returned. That recall
//! gap at shared boundaries is a deliberate property of this design.

use crate::simulation::states::{Aabb, Body};

/// Direct-object capacity before a node attempts to split.
pub const MAX_OBJECTS: usize = 10;
/// Maximum nesting depth; nodes at this depth never split.
pub const MAX_LEVELS: usize = 5;

/// A single quadtree node.
///
/// Each node covers a rectangular region that holds:
/// - a direct list of body slot indices (bodies not assignable to a child)
/// - either no children or exactly four, one per quadrant
pub struct QuadtreeNode {
    pub bounds: Aabb,
    pub depth: usize,
    pub objects: Vec<usize>,          // slot indices into the body collection
    pub children: Option<[usize; 4]>, // indices into Quadtree::nodes
}

/// A complete quadtree built over the body collection for one frame.
///
/// Owns a pool of all nodes (`nodes`) and the index of the root (`root`).
pub struct Quadtree {
    pub nodes: Vec<QuadtreeNode>,
    pub root: usize,
}

impl Quadtree {
    /// Create an empty tree whose root covers `bounds`.
    pub fn new(bounds: Aabb) -> Self {
        let nodes = vec![QuadtreeNode {
            bounds,
            depth: 0,
            objects: Vec::new(),
            children: None,
        }];
        Self { nodes, root: 0 }
    }

    /// Drop all children and direct objects, leaving a single empty root.
    ///
    /// Must be called once per frame before repopulating so that no slot
    /// index from a previous frame leaks into the new frame's queries.
    pub fn clear(&mut self) {
        let bounds = self.nodes[self.root].bounds;
        self.nodes.clear();
        self.nodes.push(QuadtreeNode {
            bounds,
            depth: 0,
            objects: Vec::new(),
            children: None,
        });
        self.root = 0;
    }

    /// Insert the body at slot `body_idx`, descending into the one child
    /// whose quadrant fully contains its bounding square. Straddling bodies
    /// stay in the current node's direct list.
    pub fn insert(&mut self, bodies: &[Body], body_idx: usize) {
        self.insert_at(self.root, bodies, body_idx);
    }

    /// Collect candidate neighbors for the body at slot `body_idx` into
    /// `out`: the direct lists of every node on the body's quadrant
    /// lineage, deepest node first. `out` is appended to, not cleared.
    pub fn retrieve(&self, out: &mut Vec<usize>, bodies: &[Body], body_idx: usize) {
        self.retrieve_for(out, &bodies[body_idx]);
    }

    /// Same as [`Quadtree::retrieve`] but for an arbitrary probe body that
    /// need not be stored in the tree.
    pub fn retrieve_for(&self, out: &mut Vec<usize>, body: &Body) {
        self.retrieve_at(self.root, out, body);
    }

    // helpers ==============================================================================

    fn insert_at(&mut self, node_idx: usize, bodies: &[Body], body_idx: usize) {
        // Snapshot by value so no borrow is live across the recursion
        let bounds = self.nodes[node_idx].bounds;

        if let Some(children) = self.nodes[node_idx].children {
            if let Some(q) = quadrant_index(&bounds, &bodies[body_idx]) {
                self.insert_at(children[q], bodies, body_idx);
                return;
            }
        }

        self.nodes[node_idx].objects.push(body_idx);

        // Split once the direct list overflows, unless the depth cap is hit
        if self.nodes[node_idx].objects.len() > MAX_OBJECTS
            && self.nodes[node_idx].depth < MAX_LEVELS
        {
            let children = match self.nodes[node_idx].children {
                Some(c) => c,
                None => self.split(node_idx),
            };

            // Redistribute: push every resolvable body into its child,
            // keep only straddling bodies behind
            let held = std::mem::take(&mut self.nodes[node_idx].objects);
            for obj in held {
                match quadrant_index(&bounds, &bodies[obj]) {
                    Some(q) => self.insert_at(children[q], bodies, obj),
                    None => self.nodes[node_idx].objects.push(obj),
                }
            }
        }
    }

    /// Create four equally-sized children covering the node's bounds and
    /// return their pool indices.
    fn split(&mut self, node_idx: usize) -> [usize; 4] {
        let bounds = self.nodes[node_idx].bounds;
        let depth = self.nodes[node_idx].depth;
        let half_w = bounds.width / 2.0;
        let half_h = bounds.height / 2.0;

        let mut children = [0usize; 4];
        for (q, child) in children.iter_mut().enumerate() {
            let cx = if q & 1 == 0 { bounds.x } else { bounds.x + half_w };
            let cy = if q & 2 == 0 { bounds.y } else { bounds.y + half_h };
            let new_idx = self.nodes.len();
            self.nodes.push(QuadtreeNode {
                bounds: Aabb {
                    x: cx,
                    y: cy,
                    width: half_w,
                    height: half_h,
                },
                depth: depth + 1,
                objects: Vec::new(),
                children: None,
            });
            *child = new_idx;
        }

        self.nodes[node_idx].children = Some(children);
        children
    }

    fn retrieve_at(&self, node_idx: usize, out: &mut Vec<usize>, body: &Body) {
        let node = &self.nodes[node_idx];
        if let Some(children) = node.children {
            if let Some(q) = quadrant_index(&node.bounds, body) {
                self.retrieve_at(children[q], out, body);
            }
        }
        out.extend_from_slice(&node.objects);
    }
}

// helpers ===========================================================================

/// Compute the quadrant index for a body within a node's bounds, or `None`
/// if its bounding square straddles a midpoint.
///
/// The index is encoded using 2 bits:
/// - Bit 0 (value 1): X axis — 0 for left, 1 for right of the vertical midpoint
/// - Bit 1 (value 2): Y axis — 0 for below, 1 for above the horizontal midpoint
///
/// This encoding matches the layout of `children[0..4]` in the nodes. A
/// body is assigned to a quadrant only when its whole bounding square is
/// strictly on one side of both midpoints; touching a midpoint counts as
/// straddling.
fn quadrant_index(bounds: &Aabb, body: &Body) -> Option<usize> {
    let mid_x = bounds.x + bounds.width / 2.0;
    let mid_y = bounds.y + bounds.height / 2.0;

    let mut idx = 0;

    if body.x.x + body.radius < mid_x {
        // left half: bit 0 stays clear
    } else if body.x.x - body.radius > mid_x {
        idx |= 1;
    } else {
        return None;
    }

    if body.x.y + body.radius < mid_y {
        // lower half: bit 1 stays clear
    } else if body.x.y - body.radius > mid_y {
        idx |= 2;
    } else {
        return None;
    }

    Some(idx)
}
