use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::hierarchy::{LevelSpec, ModuleMode};

/// Options of the hierarchy rule. Keys follow the rule's camelCase option names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HierarchyConfig {
    /// Ordered levels, lowest first. A group shares one priority.
    pub levels: Vec<LevelSpec>,
    /// Regexes over resolved absolute paths that are never checked.
    pub excludes: Vec<String>,
    /// Regexes with one capture group naming the level. Overrides the
    /// name heuristic when non-empty.
    pub path_patterns: Vec<String>,
    pub module: ModuleMode,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            excludes: default_excludes(),
            path_patterns: Vec::new(),
            module: ModuleMode::default(),
        }
    }
}

fn default_levels() -> Vec<LevelSpec> {
    ["atoms", "molecules", "=organisms", "templates", "pages"]
        .into_iter()
        .map(LevelSpec::from)
        .collect()
}

fn default_excludes() -> Vec<String> {
    vec![r"node_modules/\w".into()]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Extensions tried, in order, when a specifier omits one.
    pub extensions: Vec<String>,
    /// Specifier prefix -> directory, relative to the project root.
    pub aliases: BTreeMap<String, PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            extensions: ["js", "jsx", "ts", "tsx", "mjs", "cjs", "json"]
                .into_iter()
                .map(String::from)
                .collect(),
            aliases: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extensions of files that get checked.
    pub extensions: Vec<String>,
    /// Directory names never descended into.
    pub prune_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: ["js", "jsx", "ts", "tsx", "mjs", "cjs"]
                .into_iter()
                .map(String::from)
                .collect(),
            prune_dirs: ["node_modules", ".git", "target", "dist", "build", "coverage"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Contents of `atomlint.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hierarchy: HierarchyConfig,
    pub resolver: ResolverConfig,
    pub scan: ScanConfig,
}
