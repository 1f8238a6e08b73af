use std::path::{Path, PathBuf};

use crate::{list_files, list_region_files, region_coords};

#[test]
fn coords_from_file_name() {
    assert_eq!(region_coords(Path::new("r.0.0.mca")), Some((0, 0)));
    assert_eq!(region_coords(Path::new("world/region/r.-1.20.mca")), Some((-1, 20)));
    assert_eq!(region_coords(Path::new("r.0.mca")), None);
    assert_eq!(region_coords(Path::new("r.0.0.0.mca")), None);
    assert_eq!(region_coords(Path::new("r.a.0.mca")), None);
    assert_eq!(region_coords(Path::new("r.0.0.mcr")), None);
}

#[test]
fn lists_only_region_files_sorted() {
    let dir = std::env::temp_dir().join(format!("nbtregion-list-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    for name in ["r.1.0.mca", "r.0.0.mca", "notes.txt", "r.0.0.mca.bak"] {
        std::fs::write(dir.join(name), b"").unwrap();
    }
    std::fs::create_dir_all(dir.join("sub.mca")).unwrap();

    let found = list_region_files(&dir).unwrap();
    let expected: Vec<PathBuf> = vec![dir.join("r.0.0.mca"), dir.join("r.1.0.mca")];

    std::fs::remove_dir_all(&dir).unwrap();
    assert_eq!(found, expected);
}

#[test]
fn lists_files_by_extension() {
    let dir = std::env::temp_dir().join(format!("nbtregion-ext-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    for name in ["b.dat", "a.dat", "a.dat_old", "r.0.0.mca"] {
        std::fs::write(dir.join(name), b"").unwrap();
    }

    let found = list_files(&dir, "dat").unwrap();
    let expected: Vec<PathBuf> = vec![dir.join("a.dat"), dir.join("b.dat")];

    std::fs::remove_dir_all(&dir).unwrap();
    assert_eq!(found, expected);
}
