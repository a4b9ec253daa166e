// src/cli/handlers.rs
//! Command handlers.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::check;
use crate::config::Config;
use crate::discovery;
use crate::error::AtomlintError;
use crate::exit::AtomlintExit;
use crate::graph::NodeResolver;
use crate::hierarchy::Rule;
use crate::paths::normalize;
use crate::report;

/// Loaded configuration, compiled rule and project root for one invocation.
pub struct Session {
    pub root: PathBuf,
    pub config: Config,
    pub rule: Rule,
}

impl Session {
    /// # Errors
    /// Returns error if the config cannot be loaded or compiled.
    pub fn open(config_path: Option<&Path>) -> Result<Self> {
        let root = std::env::current_dir().context("cannot determine working directory")?;
        let config = Config::load(config_path)?;
        let rule =
            Rule::with_root(&config.hierarchy, root.clone()).map_err(AtomlintError::Config)?;
        Ok(Self { root, config, rule })
    }
}

/// Runs the check and prints the report.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_check(session: &Session, paths: &[PathBuf], json: bool) -> Result<AtomlintExit> {
    let files = discovery::discover(&session.root, paths, &session.config.scan);
    let resolver = NodeResolver::new(&session.root, &session.config.resolver);
    let result = check::check_files(&session.rule, &resolver, &files);

    if json {
        println!("{}", report::render_json(&result, &session.root)?);
    } else {
        report::print_report(&result, &session.root);
    }

    if result.is_clean() {
        Ok(AtomlintExit::Success)
    } else {
        Ok(AtomlintExit::CheckFailed)
    }
}

/// # Errors
/// Does not fail.
pub fn handle_levels(session: &Session) -> Result<AtomlintExit> {
    report::print_levels(&session.rule);
    Ok(AtomlintExit::Success)
}

/// # Errors
/// Does not fail.
pub fn handle_classify(session: &Session, paths: &[PathBuf]) -> Result<AtomlintExit> {
    for path in paths {
        let absolute = normalize(&session.root.join(path));
        report::print_classification(&session.rule, &absolute, &session.root);
    }
    Ok(AtomlintExit::Success)
}
