use std::io::{Cursor, Write};

use flate2::{
    write::{GzEncoder, ZlibEncoder},
    Compression,
};

use crate::{CompressionScheme, SECTOR_SIZE};

mod files;

/// Builds the raw bytes of a region file for tests. Locations are written in
/// the order they're given, starting at chunk (0, 0).
pub struct Builder {
    header: Vec<u8>,
    sectors: Vec<u8>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            header: Vec::new(),
            sectors: Vec::new(),
        }
    }

    /// Add a raw location entry to the header.
    pub fn location(mut self, offset: u32, sectors: u8) -> Self {
        self.header.extend_from_slice(&offset.to_be_bytes()[1..4]);
        self.header.push(sectors);
        self
    }

    /// Add a location entry for a missing chunk.
    pub fn missing(self) -> Self {
        self.location(0, 0)
    }

    /// Compress `data` with the given scheme, append it in the next free
    /// sectors and add its location to the header.
    pub fn chunk(mut self, scheme: CompressionScheme, data: &[u8]) -> Self {
        let compressed = compress(scheme, data);
        let offset = 2 + self.sectors.len() / SECTOR_SIZE;

        let mut chunk = vec![];
        chunk.extend_from_slice(&(compressed.len() as u32 + 1).to_be_bytes());
        chunk.push(scheme as u8);
        chunk.extend_from_slice(&compressed);

        let sectors = (chunk.len() + SECTOR_SIZE - 1) / SECTOR_SIZE;
        chunk.resize(sectors * SECTOR_SIZE, 0);
        self.sectors.extend_from_slice(&chunk);

        self.location(offset as u32, sectors as u8)
    }

    /// Append raw bytes after the header, for building broken chunks.
    pub fn raw_sector(mut self, bytes: &[u8]) -> Self {
        let mut sector = bytes.to_vec();
        sector.resize(SECTOR_SIZE, 0);
        self.sectors.extend_from_slice(&sector);
        self
    }

    pub fn build(mut self) -> Cursor<Vec<u8>> {
        self.header.resize(2 * SECTOR_SIZE, 0);
        self.header.extend_from_slice(&self.sectors);
        Cursor::new(self.header)
    }
}

fn compress(scheme: CompressionScheme, data: &[u8]) -> Vec<u8> {
    match scheme {
        CompressionScheme::Gzip => {
            let mut enc = GzEncoder::new(vec![], Compression::fast());
            enc.write_all(data).unwrap();
            enc.finish().unwrap()
        }
        CompressionScheme::Zlib => {
            let mut enc = ZlibEncoder::new(vec![], Compression::fast());
            enc.write_all(data).unwrap();
            enc.finish().unwrap()
        }
        CompressionScheme::Uncompressed => data.to_vec(),
    }
}
