use std::convert::TryFrom;
use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};
use flate2::read::{GzDecoder, ZlibDecoder};
use log::debug;
use num_enum::TryFromPrimitive;

use crate::{Error, Result};

/// the size in bytes of a 'sector' in a region file. Sectors are Minecraft's size unit
/// for chunks. For example, a chunk might be `3 * SECTOR_SIZE` bytes. The
/// actual compressed bytes of a chunk may be smaller and the exact value is
/// tracking in the chunk header.
pub const SECTOR_SIZE: usize = 4096;

/// the size of the region file header. The first sector holds the chunk
/// locations, the second their timestamps.
pub const REGION_HEADER_SIZE: usize = 2 * SECTOR_SIZE;

/// size of header for each chunk in the region file. This header proceeds the
/// compressed chunk data.
pub const CHUNK_HEADER_SIZE: usize = 5;

/// A region holds a square of chunks this many chunks wide.
pub const REGION_WIDTH: usize = 32;

/// A Minecraft Region, opened for reading.
pub struct Region<S> {
    stream: S,
}

impl<S> Region<S>
where
    S: Read + Seek,
{
    /// Load a region from an existing stream. Will assume a seek of zero is the
    /// start of the region. This does not load all region data into memory.
    /// Chunks are read from the underlying stream when needed.
    pub fn from_stream(mut stream: S) -> Result<Self> {
        let len = stream.seek(SeekFrom::End(0))?;
        if len < REGION_HEADER_SIZE as u64 {
            return Err(Error::InsufficientData);
        }

        Ok(Self { stream })
    }

    /// Get the location of the chunk at chunk coordinates x, z within this
    /// region. These should both be 0..32. `None` if the chunk has never been
    /// generated.
    pub fn location(&mut self, x: usize, z: usize) -> Result<Option<ChunkLocation>> {
        if x >= REGION_WIDTH || z >= REGION_WIDTH {
            return Err(Error::InvalidOffset(x, z));
        }

        self.stream.seek(SeekFrom::Start(header_pos(x, z)))?;

        let mut buf = [0u8; 4];
        self.stream.read_exact(&mut buf[..])?;

        Ok(parse_location(buf))
    }

    /// Whether the chunk at chunk coordinates x, z is present.
    pub fn has_chunk(&mut self, x: usize, z: usize) -> Result<bool> {
        Ok(self.location(x, z)?.is_some())
    }

    /// Coordinates of every chunk present in the region, in the order the
    /// header lists them.
    pub fn present_chunks(&mut self) -> Result<Vec<(usize, usize)>> {
        self.stream.rewind()?;

        let mut table = vec![0u8; SECTOR_SIZE];
        self.stream.read_exact(&mut table)?;

        let mut present = vec![];
        for z in 0..REGION_WIDTH {
            for x in 0..REGION_WIDTH {
                let pos = header_pos(x, z) as usize;
                let mut buf = [0u8; 4];
                buf.copy_from_slice(&table[pos..pos + 4]);

                if parse_location(buf).is_some() {
                    present.push((x, z));
                }
            }
        }

        Ok(present)
    }

    /// Read the chunk located at the chunk coordindates x, z. These should
    /// both be 0..32. The chunk data returned is uncompressed NBT. `None` if
    /// the chunk is not present.
    pub fn read_chunk(&mut self, x: usize, z: usize) -> Result<Option<Vec<u8>>> {
        let loc = match self.location(x, z)? {
            Some(loc) => loc,
            None => return Ok(None),
        };

        debug!(
            "reading chunk ({}, {}) from sector {} ({} sectors)",
            x, z, loc.offset, loc.sectors
        );

        self.stream
            .seek(SeekFrom::Start(loc.offset * SECTOR_SIZE as u64))?;

        let mut buf = [0u8; CHUNK_HEADER_SIZE];
        self.stream.read_exact(&mut buf)?;
        let metadata = ChunkMeta::new(&buf)?;

        let mut compressed = vec![];
        (&mut self.stream)
            .take(metadata.compressed_len as u64)
            .read_to_end(&mut compressed)?;

        if compressed.len() != metadata.compressed_len as usize {
            return Err(Error::InsufficientData);
        }

        let mut data = vec![];
        match metadata.compression_scheme {
            CompressionScheme::Gzip => {
                GzDecoder::new(compressed.as_slice()).read_to_end(&mut data)?;
            }
            CompressionScheme::Zlib => {
                ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut data)?;
            }
            CompressionScheme::Uncompressed => data = compressed,
        }

        Ok(Some(data))
    }
}

/// Various compression schemes that NBT data is typically compressed with.
#[derive(Debug, Clone, Copy, PartialEq, TryFromPrimitive)]
#[repr(u8)]
pub enum CompressionScheme {
    Gzip = 1,
    Zlib = 2,
    Uncompressed = 3,
}

fn header_pos(x: usize, z: usize) -> u64 {
    (4 * ((x % REGION_WIDTH) + (z % REGION_WIDTH) * REGION_WIDTH)) as u64
}

fn parse_location(buf: [u8; 4]) -> Option<ChunkLocation> {
    let mut offset = 0u64;
    offset |= (buf[0] as u64) << 16;
    offset |= (buf[1] as u64) << 8;
    offset |= buf[2] as u64;
    let sectors = buf[3] as u64;

    if offset == 0 && sectors == 0 {
        None
    } else {
        Some(ChunkLocation { offset, sectors })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkLocation {
    /// The offset, in units of 4kiB sectors, into the region file this chunk is
    /// located at. Offset 0 is the start of the file.
    pub offset: u64,

    /// The number of 4 kiB sectors that this chunk occupies in the region file.
    pub sectors: u64,
}

/// Encodes how the NBT-Data is compressed
#[derive(Debug)]
struct ChunkMeta {
    pub compressed_len: u32,
    pub compression_scheme: CompressionScheme,
}

impl ChunkMeta {
    fn new(data: &[u8]) -> Result<Self> {
        if data.len() < CHUNK_HEADER_SIZE {
            return Err(Error::InsufficientData);
        }

        let mut buf = &data[..CHUNK_HEADER_SIZE];
        let len = buf.read_u32::<BigEndian>()?;
        let scheme = buf.read_u8()?;

        // this len include the compression byte.
        if len == 0 {
            return Err(Error::InsufficientData);
        }

        // Chunks too large for the region are stored in a separate file and
        // flagged with the high bit, we don't follow those.
        let scheme = CompressionScheme::try_from(scheme).map_err(|_| Error::InvalidChunkMeta)?;

        Ok(Self {
            compressed_len: len - 1,
            compression_scheme: scheme,
        })
    }
}
