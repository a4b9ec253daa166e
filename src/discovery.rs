// src/discovery.rs
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::paths::normalize;

/// Finds the source files to check under `targets`.
///
/// Targets are files or directories, relative to `root` unless absolute.
/// Returned paths are absolute, deduplicated and sorted.
#[must_use]
pub fn discover(root: &Path, targets: &[PathBuf], config: &ScanConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for target in targets {
        let target = normalize(&root.join(target));
        if target.is_file() {
            files.push(target);
            continue;
        }
        files.extend(walk_filesystem(&target, config));
    }

    files.sort();
    files.dedup();
    debug!(count = files.len(), "discovered source files");
    files
}

fn walk_filesystem(dir: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let walker = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy(), config));

    let (paths, error_count) = accumulate_walker(walker, config);
    if error_count > 0 {
        warn!("encountered {error_count} errors during file walk of {}", dir.display());
    }
    paths
}

fn accumulate_walker<I>(walker: I, config: &ScanConfig) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && has_source_extension(entry.path(), config) {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}

fn should_prune(name: &str, config: &ScanConfig) -> bool {
    config.prune_dirs.iter().any(|d| d == name)
}

fn has_source_extension(path: &Path, config: &ScanConfig) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| config.extensions.iter().any(|x| x == ext))
}
