//! Finding books in the files of a world directory.
use std::fs::File;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use nbtregion::Region;

use crate::{
    books::{books_in_chunk, books_in_player, WrittenBook},
    maybe_gunzip, Result,
};

/// Player data files, `playerdata/*.dat`, sorted by path. A world that no
/// player has joined yet has no player data, which is not an error.
pub fn player_files(world: &Path) -> Result<Vec<PathBuf>> {
    let dir = world.join("playerdata");
    if !dir.is_dir() {
        debug!("no player data in {}", world.display());
        return Ok(vec![]);
    }

    Ok(nbtregion::list_files(&dir, "dat")?)
}

/// Region files of the overworld, `region/*.mca`, sorted by path.
pub fn region_files(world: &Path) -> Result<Vec<PathBuf>> {
    let dir = world.join("region");
    if !dir.is_dir() {
        debug!("no regions in {}", world.display());
        return Ok(vec![]);
    }

    Ok(nbtregion::list_region_files(&dir)?)
}

/// Books held by the player whose data is in `path`.
pub fn books_in_player_file(path: &Path) -> Result<Vec<WrittenBook>> {
    let data = maybe_gunzip(std::fs::read(path)?)?;
    let root = nbtree::from_bytes(&data)?;
    Ok(books_in_player(&root))
}

/// Books in every chunk of the region file at `path`.
pub fn books_in_region_file(path: &Path) -> Result<Vec<WrittenBook>> {
    let mut region = Region::from_stream(File::open(path)?)?;
    books_in_region(&mut region)
}

/// Books in every chunk of a region. A chunk that can't be read or decoded
/// is logged and skipped, the rest of the region is still searched.
pub fn books_in_region<S>(region: &mut Region<S>) -> Result<Vec<WrittenBook>>
where
    S: std::io::Read + std::io::Seek,
{
    let mut books = vec![];

    for (x, z) in region.present_chunks()? {
        let data = match region.read_chunk(x, z) {
            Ok(Some(data)) => data,
            Ok(None) => continue,
            Err(e) => {
                warn!("skipping chunk ({}, {}): {}", x, z, e);
                continue;
            }
        };

        match nbtree::from_bytes(&data) {
            Ok(root) => books.extend(books_in_chunk(&root)),
            Err(e) => warn!("skipping chunk ({}, {}): {}", x, z, e),
        }
    }

    Ok(books)
}
