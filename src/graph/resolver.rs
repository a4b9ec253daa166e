// src/graph/resolver.rs
//! Node-style specifier resolution for the command-line host.

use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ResolverConfig;
use crate::hierarchy::Resolve;
use crate::paths::normalize;

/// Resolves relative paths, configured aliases and `node_modules` packages.
#[derive(Debug, Clone)]
pub struct NodeResolver {
    extensions: Vec<String>,
    /// Longest prefix first so `@@` wins over `@`.
    aliases: Vec<(String, PathBuf)>,
}

#[derive(Deserialize)]
struct PackageManifest {
    main: Option<String>,
}

impl NodeResolver {
    /// Alias directories are taken relative to `root`.
    #[must_use]
    pub fn new(root: &Path, config: &ResolverConfig) -> Self {
        let mut aliases: Vec<_> = config
            .aliases
            .iter()
            .map(|(prefix, dir)| (prefix.clone(), normalize(&root.join(dir))))
            .collect();
        aliases.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self {
            extensions: config.extensions.clone(),
            aliases,
        }
    }

    /// Resolves `specifier` as written in `from` to a file path.
    #[must_use]
    pub fn resolve_specifier(&self, specifier: &str, from: &Path) -> Option<PathBuf> {
        let dir = from.parent()?;

        if is_relative(specifier) {
            return self.check_path(&normalize(&dir.join(specifier)));
        }
        if Path::new(specifier).is_absolute() {
            return self.check_path(&normalize(Path::new(specifier)));
        }
        if let Some(found) = self.resolve_alias(specifier) {
            return Some(found);
        }
        self.resolve_package(dir, specifier)
    }

    fn resolve_alias(&self, specifier: &str) -> Option<PathBuf> {
        self.aliases.iter().find_map(|(prefix, target)| {
            let rest = specifier.strip_prefix(prefix.as_str())?;
            if !rest.is_empty() && !rest.starts_with('/') {
                return None;
            }
            self.check_path(&normalize(&target.join(rest.trim_start_matches('/'))))
        })
    }

    /// Walks up from `dir` looking in every `node_modules` on the way.
    fn resolve_package(&self, dir: &Path, specifier: &str) -> Option<PathBuf> {
        dir.ancestors()
            .filter(|d| d.file_name().map_or(true, |n| n != "node_modules"))
            .find_map(|d| self.check_path(&d.join("node_modules").join(specifier)))
    }

    fn check_path(&self, path: &Path) -> Option<PathBuf> {
        self.check_file(path).or_else(|| self.check_dir(path))
    }

    fn check_file(&self, path: &Path) -> Option<PathBuf> {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        self.extensions.iter().find_map(|ext| {
            let p = with_appended_extension(path, ext);
            p.is_file().then_some(p)
        })
    }

    fn check_dir(&self, path: &Path) -> Option<PathBuf> {
        if !path.is_dir() {
            return None;
        }
        if let Some(main) = read_main(path) {
            let entry = normalize(&path.join(main));
            if let Some(found) = self.check_file(&entry) {
                return Some(found);
            }
        }
        self.check_file(&path.join("index"))
    }
}

impl Resolve for NodeResolver {
    fn resolve(&self, specifier: &str, from: &Path) -> Option<PathBuf> {
        self.resolve_specifier(specifier, from)
    }
}

fn is_relative(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
}

/// `Button` -> `Button.js`, keeping any dots already in the name.
fn with_appended_extension(path: &Path, ext: &str) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_os_string();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

fn read_main(dir: &Path) -> Option<String> {
    let content = fs::read_to_string(dir.join("package.json")).ok()?;
    serde_json::from_str::<PackageManifest>(&content).ok()?.main
}
