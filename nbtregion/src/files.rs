use std::path::{Path, PathBuf};

use crate::Result;

/// List the region files (`*.mca`) directly inside `region_dir`, sorted by
/// path so that every run visits them in the same order.
pub fn list_region_files(region_dir: &Path) -> Result<Vec<PathBuf>> {
    list_files(region_dir, "mca")
}

/// List the files directly inside `dir` with the given extension, sorted by
/// path. World directories keep other data the same way, eg player data in
/// `playerdata/*.dat`.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().map_or(false, |ext| ext == extension))
        .collect();

    paths.sort();
    Ok(paths)
}

/// The region coordinates encoded in a region file's name, eg `r.-1.2.mca`
/// is region (-1, 2).
pub fn region_coords(path: &Path) -> Option<(isize, isize)> {
    let name = path.file_name()?.to_str()?;
    let mut parts = name.strip_prefix("r.")?.strip_suffix(".mca")?.split('.');

    let x = parts.next()?.parse().ok()?;
    let z = parts.next()?.parse().ok()?;

    match parts.next() {
        Some(_) => None,
        None => Some((x, z)),
    }
}
