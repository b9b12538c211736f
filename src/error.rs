//! Error taxonomy for region reads and world scans.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorldError {
    #[error("region file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("chunk missing: {x},{z} in {region}, slot {slot}")]
    ChunkMissing {
        x: i32,
        z: i32,
        region: String,
        slot: usize,
    },

    #[error("unsupported compression tag {tag} for chunk {x},{z} in {region}")]
    UnsupportedCompression {
        tag: u8,
        x: i32,
        z: i32,
        region: String,
    },

    #[error("corrupt chunk {x},{z} in {region}: {reason}")]
    CorruptChunk {
        x: i32,
        z: i32,
        region: String,
        reason: String,
    },
}
