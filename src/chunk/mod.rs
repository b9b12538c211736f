//! Decompressing access to a single chunk's payload.
//!
//! A chunk payload block inside a region file is framed as a 4-byte
//! big-endian length, a 1-byte compression tag, and the compressed bytes.
//! Only zlib (tag 2) payloads are decoded here.

use std::fs::File;
use std::io::Read;

use flate2::read::ZlibDecoder;

/// Compression tags used in region payload blocks.
pub mod compression {
    /// Legacy gzip payloads, written by very old worlds. Not decoded.
    pub const GZIP: u8 = 1;
    /// Zlib/deflate, the format every surviving world uses.
    pub const ZLIB: u8 = 2;
}

/// A readable stream of decompressed chunk bytes.
///
/// The stream exclusively owns the underlying region file handle: the
/// decoder consumes the `File` at construction and no alias to it
/// survives, so dropping the stream is the only way the handle closes.
/// The zlib checksum is verified as the final bytes are read.
#[derive(Debug)]
pub struct ChunkStream {
    decoder: ZlibDecoder<File>,
}

impl ChunkStream {
    /// Wrap a region file positioned at the start of a zlib payload.
    pub(crate) fn new(file: File) -> Self {
        Self {
            decoder: ZlibDecoder::new(file),
        }
    }
}

impl Read for ChunkStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.decoder.read(buf)
    }
}

/// Check the two-byte zlib stream header.
///
/// CMF low nibble must be 8 (deflate) and the CMF/FLG pair must be a
/// multiple of 31.
pub(crate) fn zlib_header_valid(cmf: u8, flg: u8) -> bool {
    cmf & 0x0F == 8 && (u16::from(cmf) << 8 | u16::from(flg)) % 31 == 0
}
