//! Pulling written books out of a Minecraft world.
//!
//! Books are found in the inventories of players, and in the items of
//! containers such as chests stored in the world's region files. Books with
//! the same text are only kept once, so copies of a book are not extracted
//! twice.

use std::io::Read;

use flate2::read::GzDecoder;

pub mod books;
pub mod output;
pub mod world;

#[cfg(test)]
mod test;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decompress `data` if it is GZip compressed, otherwise return it as is.
/// Player data is compressed, but hand-made NBT files often aren't.
pub fn maybe_gunzip(data: Vec<u8>) -> std::io::Result<Vec<u8>> {
    if !data.starts_with(&GZIP_MAGIC) {
        return Ok(data);
    }

    let mut out = vec![];
    GzDecoder::new(data.as_slice()).read_to_end(&mut out)?;
    Ok(out)
}
