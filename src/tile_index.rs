//! Breadth-first discovery of the dataset root and of the tiles below it
//!
//! Entries of every directory are visited in lexicographic file-name order, so the tile order is
//! the same on every filesystem. Symbolic links to directories are not followed.

use crate::error::DatasetError;

use std::collections::VecDeque;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Subfolders identifying the dataset root
pub const DATASET_MARKERS: [&str; 2] = ["bs_as", "cordoba_capital"];

/// Tile file extensions, compared case-insensitively
pub const TILE_EXTENSIONS: [&str; 2] = ["tif", "tiff"];

struct Entry {
    name: OsString,
    path: PathBuf,
    is_dir: bool,
}

fn sorted_entries(dir: &Path) -> Result<Vec<Entry>, DatasetError> {
    let mut entries = fs::read_dir(dir)
        .and_then(|read_dir| {
            read_dir
                .map(|entry| {
                    let entry = entry?;
                    Ok(Entry {
                        name: entry.file_name(),
                        path: entry.path(),
                        is_dir: entry.file_type()?.is_dir(),
                    })
                })
                .collect::<std::io::Result<Vec<_>>>()
        })
        .map_err(|err| DatasetError::io(dir, err))?;
    entries.sort_unstable_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// First directory, in breadth-first order starting from `root` itself, which has both
/// [DATASET_MARKERS] among its immediate children
pub fn locate_dataset_root(root: &Path) -> Result<PathBuf, DatasetError> {
    let mut queue = VecDeque::from([root.to_path_buf()]);
    while let Some(dir) = queue.pop_front() {
        log::debug!("looking for dataset markers in {}", dir.display());
        let entries = sorted_entries(&dir)?;
        let has_marker = |marker: &str| entries.iter().any(|entry| entry.name == marker);
        if DATASET_MARKERS.iter().all(|&marker| has_marker(marker)) {
            return Ok(dir);
        }
        queue.extend(
            entries
                .into_iter()
                .filter(|entry| entry.is_dir)
                .map(|entry| entry.path),
        );
    }
    Err(DatasetError::DatasetLayout(root.to_path_buf()))
}

/// Does the path have a `.tif` or `.tiff` extension, in any case
pub fn is_tile_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TILE_EXTENSIONS
                .iter()
                .any(|tile_ext| ext.eq_ignore_ascii_case(tile_ext))
        })
}

/// All tile files below `dataset_root` in breadth-first order
pub fn enumerate_tiles(dataset_root: &Path) -> Result<Vec<PathBuf>, DatasetError> {
    let mut tiles = vec![];
    let mut queue = VecDeque::from([dataset_root.to_path_buf()]);
    while let Some(dir) = queue.pop_front() {
        for entry in sorted_entries(&dir)? {
            if entry.is_dir {
                queue.push_back(entry.path);
            } else if is_tile_path(&entry.path) {
                tiles.push(entry.path);
            }
        }
    }
    Ok(tiles)
}
