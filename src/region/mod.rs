//! Region container files group 32x32 chunks into one on-disk file.
//!
//! Binary layout:
//! - Bytes 0-4095: location table (1024 entries × 4 bytes, big-endian)
//! - Bytes 4096+: chunk payload blocks at 4 KB sector granularity
//!
//! Each payload block is a 4-byte big-endian length followed by a 1-byte
//! compression tag and the compressed chunk bytes.

mod location;

pub use location::{ChunkLocation, RegionFile};

/// Size of one sector in bytes (4 KB).
pub const SECTOR_SIZE: u64 = 4096;

/// Number of chunks per region dimension.
pub const REGION_SIZE: i32 = 32;

/// Number of location entries in a region file.
pub const REGION_CHUNKS: usize = (REGION_SIZE * REGION_SIZE) as usize;

/// Convert a chunk coordinate to its region coordinate.
///
/// Arithmetic shift, so negative coordinates floor towards the region
/// that actually holds them (chunk -1 lives in region -1, not 0).
#[inline]
pub fn chunk_to_region(chunk_coord: i32) -> i32 {
    chunk_coord >> 5
}

/// Convert a chunk coordinate to its local region coordinate (0-31).
#[inline]
pub fn chunk_to_local(chunk_coord: i32) -> i32 {
    chunk_coord & 31
}

/// Calculate the location-table slot for a chunk within a region (0-1023).
#[inline]
pub fn local_to_slot(local_x: i32, local_z: i32) -> usize {
    (local_x + local_z * REGION_SIZE) as usize
}

/// Slot for a chunk given its world coordinates.
#[inline]
pub fn chunk_to_slot(x: i32, z: i32) -> usize {
    local_to_slot(chunk_to_local(x), chunk_to_local(z))
}

/// Region file coordinates (parsed from filenames like "r.0.-1.mca").
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct RegionPos {
    pub x: i32,
    pub z: i32,
}

impl RegionPos {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Region holding the given chunk coordinates.
    pub fn of_chunk(chunk_x: i32, chunk_z: i32) -> Self {
        Self {
            x: chunk_to_region(chunk_x),
            z: chunk_to_region(chunk_z),
        }
    }

    /// Parse a region position from a filename (e.g. "r.0.-1.mca").
    ///
    /// Requires exactly four dotted fields with an "r" prefix and numeric
    /// coordinates. The extension is not inspected so both current
    /// (".mca") and legacy (".mcr") files parse.
    pub fn from_filename(name: &str) -> Option<Self> {
        let parts: Vec<&str> = name.split('.').collect();
        if parts.len() == 4 && parts[0] == "r" {
            let x = parts[1].parse().ok()?;
            let z = parts[2].parse().ok()?;
            Some(Self { x, z })
        } else {
            None
        }
    }

    /// Convert local chunk coordinates to world chunk coordinates.
    pub fn local_to_world(&self, local_x: i32, local_z: i32) -> (i32, i32) {
        (
            self.x * REGION_SIZE + local_x,
            self.z * REGION_SIZE + local_z,
        )
    }

    /// Current-format filename for this region.
    pub fn mca_name(&self) -> String {
        format!("r.{}.{}.mca", self.x, self.z)
    }

    /// Legacy filename for this region.
    pub fn mcr_name(&self) -> String {
        format!("r.{}.{}.mcr", self.x, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_coord_floors_negatives() {
        assert_eq!(chunk_to_region(0), 0);
        assert_eq!(chunk_to_region(31), 0);
        assert_eq!(chunk_to_region(32), 1);
        // Arithmetic shift, not truncating division
        assert_eq!(chunk_to_region(-1), -1);
        assert_eq!(chunk_to_region(-32), -1);
        assert_eq!(chunk_to_region(-33), -2);
    }

    #[test]
    fn test_local_coord_wraps() {
        assert_eq!(chunk_to_local(0), 0);
        assert_eq!(chunk_to_local(33), 1);
        assert_eq!(chunk_to_local(-1), 31);
    }

    #[test]
    fn test_slot_index() {
        assert_eq!(chunk_to_slot(0, 0), 0);
        assert_eq!(chunk_to_slot(31, 0), 31);
        assert_eq!(chunk_to_slot(0, 1), 32);
        assert_eq!(chunk_to_slot(31, 31), REGION_CHUNKS - 1);
        // (-1, -1) is local (31, 31)
        assert_eq!(chunk_to_slot(-1, -1), REGION_CHUNKS - 1);
    }

    #[test]
    fn test_filename_parse() {
        assert_eq!(
            RegionPos::from_filename("r.2.-3.mca"),
            Some(RegionPos::new(2, -3))
        );
        assert_eq!(
            RegionPos::from_filename("r.0.-1.mcr"),
            Some(RegionPos::new(0, -1))
        );
        assert_eq!(RegionPos::from_filename("foo.bar"), None);
        assert_eq!(RegionPos::from_filename("r.a.b.mca"), None);
        assert_eq!(RegionPos::from_filename("r.1.2.3.mca"), None);
        assert_eq!(RegionPos::from_filename("level.dat"), None);
    }

    #[test]
    fn test_local_to_world() {
        let region = RegionPos::new(1, -1);
        assert_eq!(region.local_to_world(0, 0), (32, -32));
        assert_eq!(region.local_to_world(31, 31), (63, -1));
    }

    #[test]
    fn test_region_names() {
        let region = RegionPos::of_chunk(-1, 40);
        assert_eq!(region, RegionPos::new(-1, 1));
        assert_eq!(region.mca_name(), "r.-1.1.mca");
        assert_eq!(region.mcr_name(), "r.-1.1.mcr");
    }
}
