//! The chunk pool: which chunks a world actually contains.
//!
//! A pool is built once per scan, handed to the caller, and consumed by
//! popping coordinates out of it. The bounding box is fixed at build
//! time; popping shrinks the membership, never the box.

use std::collections::HashSet;

/// Coordinates of a chunk in the world grid.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

/// Caller-supplied exclusion predicate over chunk coordinates.
///
/// The pool builder skips any coordinate for which this returns true.
pub trait ChunkMask {
    fn is_masked(&self, x: i32, z: i32) -> bool;
}

impl<F: Fn(i32, i32) -> bool> ChunkMask for F {
    fn is_masked(&self, x: i32, z: i32) -> bool {
        self(x, z)
    }
}

/// Mask that excludes nothing.
pub struct NoMask;

impl ChunkMask for NoMask {
    fn is_masked(&self, _x: i32, _z: i32) -> bool {
        false
    }
}

/// Inclusive extent of a non-empty bounding box.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Extent {
    pub min_x: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_z: i32,
}

/// Minimal axis-aligned rectangle covering a set of chunk coordinates.
///
/// Starts empty and grows by union; it never shrinks.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct BoundingBox {
    extent: Option<Extent>,
}

impl BoundingBox {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.extent.is_none()
    }

    /// The covered rectangle, or None while no coordinate has been added.
    pub fn extent(&self) -> Option<Extent> {
        self.extent
    }

    /// Grow the box to cover (x, z).
    pub fn union(&mut self, x: i32, z: i32) {
        self.extent = Some(match self.extent {
            None => Extent {
                min_x: x,
                min_z: z,
                max_x: x,
                max_z: z,
            },
            Some(e) => Extent {
                min_x: e.min_x.min(x),
                min_z: e.min_z.min(z),
                max_x: e.max_x.max(x),
                max_z: e.max_z.max(z),
            },
        });
    }
}

/// Mutable set of present, unmasked chunk coordinates.
#[derive(Debug, Default)]
pub struct ChunkPool {
    chunks: HashSet<ChunkPos>,
    bounds: BoundingBox,
}

impl ChunkPool {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a discovered chunk and widen the bounding box to it.
    pub(crate) fn insert(&mut self, x: i32, z: i32) {
        self.chunks.insert(ChunkPos::new(x, z));
        self.bounds.union(x, z);
    }

    /// Remove (x, z) from the pool; returns whether it was present.
    ///
    /// Idempotent: a second pop of the same coordinate returns false.
    /// The bounding box is unaffected.
    pub fn pop(&mut self, x: i32, z: i32) -> bool {
        self.chunks.remove(&ChunkPos::new(x, z))
    }

    /// Number of chunks still in the pool.
    pub fn remaining(&self) -> usize {
        self.chunks.len()
    }

    /// Box covering every coordinate ever inserted, popped or not.
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Current membership, in no particular order.
    pub fn positions(&self) -> impl Iterator<Item = ChunkPos> + '_ {
        self.chunks.iter().copied()
    }
}
