//! Location-table access for an open region file.

use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::WorldError;
use crate::region::{SECTOR_SIZE, chunk_to_slot};

/// A raw 32-bit location-table entry.
///
/// Packs a sector offset in the upper 24 bits and a sector count in the
/// low 8 bits. A zero value means the chunk is absent; absent entries
/// must never be turned into a file offset.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct ChunkLocation(u32);

impl ChunkLocation {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    /// Whether this entry marks a missing chunk.
    #[inline]
    pub fn is_absent(self) -> bool {
        self.0 == 0
    }

    /// Byte offset of the chunk's payload block from the file start.
    #[inline]
    pub fn offset(self) -> u64 {
        SECTOR_SIZE * u64::from(self.0 >> 8)
    }

    /// Number of 4 KB sectors allocated to the chunk.
    #[inline]
    pub fn sector_count(self) -> u32 {
        self.0 & 0xFF
    }
}

/// An open region container, positioned by explicit seeks.
pub struct RegionFile {
    file: File,
    path: PathBuf,
}

impl RegionFile {
    /// Open a region file for reading.
    pub fn open(path: &Path) -> Result<Self, WorldError> {
        let file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => WorldError::NotFound {
                path: path.to_path_buf(),
            },
            _ => WorldError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the location entry for the chunk at world coordinates (x, z).
    ///
    /// Short reads are a format violation, not an end-of-table condition:
    /// the table occupies a fixed 4 KB at the start of the file.
    pub fn read_location(&mut self, x: i32, z: i32) -> Result<ChunkLocation, WorldError> {
        let slot = chunk_to_slot(x, z);
        self.seek_to(4 * slot as u64)?;
        let mut entry = [0u8; 4];
        self.read_bytes(&mut entry)?;
        Ok(ChunkLocation::new(u32::from_be_bytes(entry)))
    }

    pub(crate) fn seek_to(&mut self, offset: u64) -> Result<(), WorldError> {
        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|source| self.io_error(source))?;
        Ok(())
    }

    pub(crate) fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), WorldError> {
        self.file
            .read_exact(buf)
            .map_err(|source| self.io_error(source))
    }

    /// Give up the wrapper and hand the raw handle to the caller.
    pub(crate) fn into_inner(self) -> File {
        self.file
    }

    fn io_error(&self, source: std::io::Error) -> WorldError {
        WorldError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
