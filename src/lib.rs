//! mc-region-pool: read-only access to Minecraft-style region files.
//!
//! Two entry points, both on [`World`]:
//! - [`World::open_chunk`] locates one chunk inside its region container
//!   and returns a decompressing stream over its payload bytes. Payload
//!   contents (NBT) are opaque to this crate.
//! - [`World::chunk_pool`] scans the whole `region/` directory and
//!   collects every present chunk coordinate, minus a caller-supplied
//!   mask, together with the bounding box of everything discovered.

pub mod chunk;
pub mod error;
pub mod pool;
pub mod region;
pub mod world;

pub use chunk::ChunkStream;
pub use error::WorldError;
pub use pool::{BoundingBox, ChunkMask, ChunkPool, ChunkPos, Extent, NoMask};
pub use region::{ChunkLocation, RegionFile, RegionPos};
pub use world::World;
