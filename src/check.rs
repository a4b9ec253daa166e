// src/check.rs
//! Runs the hierarchy rule over a set of files.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::Config;
use crate::discovery;
use crate::error::Result;
use crate::graph::{extract, NodeResolver, Span};
use crate::hierarchy::{Diagnostic, Rule};

/// Violations found in one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub level: String,
    pub diagnostics: Vec<Diagnostic<Span>>,
}

/// Result of checking a set of files.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Files with at least one violation, sorted by path.
    pub files: Vec<FileReport>,
    pub files_scanned: usize,
    /// Files that belong to a level and were actually checked.
    pub files_checked: usize,
}

impl CheckReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.files.iter().map(|f| f.diagnostics.len()).sum()
    }
}

/// Discovers files under `targets` and checks them.
///
/// # Errors
/// Returns error if the rule configuration is invalid.
pub fn run(config: &Config, root: &Path, targets: &[PathBuf]) -> Result<CheckReport> {
    let rule = Rule::with_root(&config.hierarchy, root.to_path_buf())?;
    let resolver = NodeResolver::new(root, &config.resolver);
    let files = discovery::discover(root, targets, &config.scan);
    Ok(check_files(&rule, &resolver, &files))
}

/// Checks `files` in parallel. Unreadable files are logged and skipped.
#[must_use]
pub fn check_files(rule: &Rule, resolver: &NodeResolver, files: &[PathBuf]) -> CheckReport {
    let results: Vec<Option<FileReport>> = files
        .par_iter()
        .map(|path| check_file(rule, resolver, path))
        .collect();

    let files_checked = results.iter().filter(|r| r.is_some()).count();
    let mut reports: Vec<FileReport> = results
        .into_iter()
        .flatten()
        .filter(|r| !r.diagnostics.is_empty())
        .collect();
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    CheckReport {
        files: reports,
        files_scanned: files.len(),
        files_checked,
    }
}

/// Checks one file. `None` when the file is outside the hierarchy or unreadable.
#[must_use]
pub fn check_file(rule: &Rule, resolver: &NodeResolver, path: &Path) -> Option<FileReport> {
    let check = rule.for_file(path)?;

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), "skipping unreadable file: {e}");
            return None;
        }
    };

    let references = extract(path, &content);
    debug!(
        path = %path.display(),
        level = check.level(),
        references = references.len(),
        "checking file"
    );

    Some(FileReport {
        path: path.to_path_buf(),
        level: check.level().to_string(),
        diagnostics: check.check_all(references, resolver),
    })
}
