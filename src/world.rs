//! World-level entry points: open one chunk, or scan them all.

use std::fs;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::chunk::{ChunkStream, compression, zlib_header_valid};
use crate::error::WorldError;
use crate::pool::{ChunkMask, ChunkPool};
use crate::region::{REGION_SIZE, RegionFile, RegionPos, chunk_to_slot};

/// A world directory containing a `region` subdirectory.
///
/// Purely a path holder; nothing is opened or validated until a chunk is
/// requested or a scan starts.
pub struct World {
    root: PathBuf,
}

impl World {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory holding this world's region files.
    pub fn region_dir(&self) -> PathBuf {
        self.root.join("region")
    }

    /// Path of the region file that should hold chunk (x, z).
    ///
    /// Prefers the current ".mca" name if it exists on disk, otherwise
    /// falls back to the legacy ".mcr" name. If neither exists the
    /// returned path fails at open time.
    pub fn region_path(&self, x: i32, z: i32) -> PathBuf {
        let region = RegionPos::of_chunk(x, z);
        let dir = self.region_dir();
        let mca = dir.join(region.mca_name());
        if mca.exists() {
            mca
        } else {
            dir.join(region.mcr_name())
        }
    }

    /// Open a decompressing stream over the payload of chunk (x, z).
    ///
    /// The returned stream exclusively owns the region file handle;
    /// dropping the stream closes the file. On any failure the handle is
    /// closed before the error is returned.
    pub fn open_chunk(&self, x: i32, z: i32) -> Result<ChunkStream, WorldError> {
        let path = self.region_path(x, z);
        let region_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut region = RegionFile::open(&path)?;

        let location = region.read_location(x, z)?;
        if location.is_absent() {
            return Err(WorldError::ChunkMissing {
                x,
                z,
                region: region_name,
                slot: chunk_to_slot(x, z),
            });
        }

        region.seek_to(location.offset())?;

        // Length prefix of the payload block. Parsed but not used to
        // bound the decompression read, matching how these files have
        // always been consumed.
        let mut length = [0u8; 4];
        region.read_bytes(&mut length)?;
        let _payload_len = u32::from_be_bytes(length);

        let mut tag = [0u8; 1];
        region.read_bytes(&mut tag)?;
        match tag[0] {
            compression::ZLIB => {}
            compression::GZIP => {
                log::warn!("chunk {x},{z} in {region_name} uses legacy gzip compression");
                return Err(WorldError::UnsupportedCompression {
                    tag: tag[0],
                    x,
                    z,
                    region: region_name,
                });
            }
            other => {
                return Err(WorldError::UnsupportedCompression {
                    tag: other,
                    x,
                    z,
                    region: region_name,
                });
            }
        }

        // Check the zlib header up front so garbage payloads fail at open
        // rather than on the first read, then rewind so the decoder sees
        // the whole stream.
        let mut header = [0u8; 2];
        match region.read_bytes(&mut header) {
            Ok(()) => {}
            Err(WorldError::Io { source, .. }) if source.kind() == ErrorKind::UnexpectedEof => {
                return Err(WorldError::CorruptChunk {
                    x,
                    z,
                    region: region_name,
                    reason: "truncated zlib header".to_string(),
                });
            }
            Err(err) => return Err(err),
        }
        if !zlib_header_valid(header[0], header[1]) {
            return Err(WorldError::CorruptChunk {
                x,
                z,
                region: region_name,
                reason: format!("invalid zlib header {:02x}{:02x}", header[0], header[1]),
            });
        }
        region.seek_to(location.offset() + 5)?;

        Ok(ChunkStream::new(region.into_inner()))
    }

    /// Scan every region file under `region/` and collect the coordinates
    /// of all present chunks the mask does not exclude.
    ///
    /// Filenames that don't parse as region names are skipped. A region
    /// file with a truncated location table yields the entries it has;
    /// any other read failure aborts the scan. One region file is open at
    /// a time.
    pub fn chunk_pool(&self, mask: &impl ChunkMask) -> Result<ChunkPool, WorldError> {
        let dir = self.region_dir();
        let entries = fs::read_dir(&dir).map_err(|source| match source.kind() {
            ErrorKind::NotFound => WorldError::NotFound { path: dir.clone() },
            _ => WorldError::Io {
                path: dir.clone(),
                source,
            },
        })?;

        let mut pool = ChunkPool::new();
        for entry in entries {
            let entry = entry.map_err(|source| WorldError::Io {
                path: dir.clone(),
                source,
            })?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(region) = RegionPos::from_filename(name) else {
                log::debug!("skipping non-region file {name}");
                continue;
            };

            log::debug!("scanning {name}");
            self.pool_region_chunks(&dir.join(name), mask, &mut pool, region)?;
        }

        Ok(pool)
    }

    /// Stream one region file's location table into the pool.
    fn pool_region_chunks(
        &self,
        path: &Path,
        mask: &impl ChunkMask,
        pool: &mut ChunkPool,
        region: RegionPos,
    ) -> Result<(), WorldError> {
        let file = RegionFile::open(path)?.into_inner();
        let mut table = BufReader::new(file);

        for cz in 0..REGION_SIZE {
            for cx in 0..REGION_SIZE {
                let mut entry = [0u8; 4];
                match table.read_exact(&mut entry) {
                    Ok(()) => {}
                    // Truncated table: the remaining slots are absent
                    Err(err) if err.kind() == ErrorKind::UnexpectedEof => return Ok(()),
                    Err(source) => {
                        return Err(WorldError::Io {
                            path: path.to_path_buf(),
                            source,
                        });
                    }
                }

                if u32::from_be_bytes(entry) != 0 {
                    let (x, z) = region.local_to_world(cx, cz);
                    if !mask.is_masked(x, z) {
                        pool.insert(x, z);
                    }
                }
            }
        }

        Ok(())
    }
}
