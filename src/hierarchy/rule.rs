// src/hierarchy/rule.rs
//! The per-file, per-reference decision.
//!
//! A [`Rule`] is compiled once from configuration and is immutable; a
//! [`FileCheck`] binds it to one source file and judges that file's
//! references one at a time.

use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::allowance::{allowed_levels, AllowedLevels};
use super::classifier::{compile_insensitive, Classifier};
use super::diagnostic::level_message;
use super::module::{validate, FileModule, ModuleMode, ModuleVerdict};
use super::registry::LevelRegistry;
use super::types::{AllowReason, Diagnostic, Outcome, Reference, SkipReason, ViolationKind};
use crate::config::HierarchyConfig;
use crate::error::{AtomlintError, ConfigError};
use crate::paths::to_slash;

/// Turns an import specifier into an absolute file path.
///
/// Resolution is the host's business; the rule only consumes its answer.
pub trait Resolve {
    fn resolve(&self, specifier: &str, from: &Path) -> Option<PathBuf>;
}

impl<F> Resolve for F
where
    F: Fn(&str, &Path) -> Option<PathBuf>,
{
    fn resolve(&self, specifier: &str, from: &Path) -> Option<PathBuf> {
        self(specifier, from)
    }
}

/// Compiled hierarchy rule.
#[derive(Debug, Clone)]
pub struct Rule {
    registry: LevelRegistry,
    classifier: Classifier,
    excludes: Vec<Regex>,
    module_mode: ModuleMode,
}

impl Rule {
    /// Compiles the rule with path patterns relative to the working directory.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the working
    /// directory cannot be determined.
    pub fn new(config: &HierarchyConfig) -> crate::error::Result<Self> {
        let root = std::env::current_dir().map_err(|source| AtomlintError::Io {
            source,
            path: PathBuf::from("."),
        })?;
        Ok(Self::with_root(config, root)?)
    }

    /// Compiles the rule with path patterns relative to `root`.
    ///
    /// # Errors
    /// Returns error if the levels, excludes or path patterns are invalid.
    pub fn with_root(config: &HierarchyConfig, root: PathBuf) -> Result<Self, ConfigError> {
        let registry = LevelRegistry::build(&config.levels)?;
        let classifier = Classifier::new(&config.path_patterns, &registry, root)?;
        let excludes = config
            .excludes
            .iter()
            .map(|p| compile_insensitive(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            registry,
            classifier,
            excludes,
            module_mode: config.module,
        })
    }

    #[must_use]
    pub fn registry(&self) -> &LevelRegistry {
        &self.registry
    }

    #[must_use]
    pub fn module_mode(&self) -> ModuleMode {
        self.module_mode
    }

    /// Level of `path`, counting names outside the registry as unclassified.
    #[must_use]
    pub fn classify(&self, path: &Path) -> Option<String> {
        self.classifier
            .classify(path)
            .filter(|level| self.registry.contains(level))
    }

    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let s = to_slash(path);
        self.excludes.iter().any(|re| re.is_match(&s))
    }

    /// Module membership of `path` under this rule's level names.
    #[must_use]
    pub fn module_of(&self, path: &Path) -> FileModule {
        FileModule::of(path, &self.registry)
    }

    /// Prepares checks for one source file.
    ///
    /// Returns `None` when the file is excluded or unclassified; none of its
    /// references are subject to the rule then.
    #[must_use]
    pub fn for_file(&self, path: &Path) -> Option<FileCheck<'_>> {
        if self.is_excluded(path) {
            trace!(path = %path.display(), "source excluded");
            return None;
        }
        let Some(level) = self.classify(path) else {
            trace!(path = %path.display(), "source unclassified");
            return None;
        };
        let allowed = allowed_levels(&level, &self.registry)?;

        Some(FileCheck {
            rule: self,
            path: path.to_path_buf(),
            level,
            allowed,
            module: self.module_of(path),
        })
    }
}

/// A [`Rule`] bound to one classified source file.
#[derive(Debug)]
pub struct FileCheck<'r> {
    rule: &'r Rule,
    path: PathBuf,
    level: String,
    allowed: AllowedLevels,
    module: FileModule,
}

impl FileCheck<'_> {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    #[must_use]
    pub fn allowed(&self) -> &AllowedLevels {
        &self.allowed
    }

    /// Judges a single reference.
    pub fn check<L, R>(&self, reference: Reference<L>, resolver: &R) -> Outcome<L>
    where
        R: Resolve + ?Sized,
    {
        if reference.specifier.is_empty() {
            return Outcome::Skipped(SkipReason::EmptySpecifier);
        }

        let Some(target) = resolver.resolve(&reference.specifier, &self.path) else {
            trace!(specifier = %reference.specifier, "unresolved");
            return Outcome::Skipped(SkipReason::Unresolved);
        };
        if self.rule.is_excluded(&target) {
            trace!(target = %target.display(), "target excluded");
            return Outcome::Skipped(SkipReason::Excluded);
        }
        let Some(target_level) = self.rule.classify(&target) else {
            trace!(target = %target.display(), "target unclassified");
            return Outcome::Skipped(SkipReason::Unclassified);
        };

        let mode = self.rule.module_mode;
        if mode.is_enabled() {
            let target_module = self.rule.module_of(&target);
            match validate(&self.module, &target_module, mode) {
                ModuleVerdict::Allow => return Outcome::Allowed(AllowReason::SameModule),
                ModuleVerdict::Deny(violation) => {
                    let message = violation.message(reference.kind, mode);
                    return self.report(violation.kind(), message, reference.location);
                }
                ModuleVerdict::NotApplicable => {}
            }
        }

        if self.allowed.contains(&target_level) {
            return Outcome::Allowed(AllowReason::AllowedLevel);
        }

        let message = level_message(reference.kind, &target_level, &self.level, &self.allowed);
        self.report(ViolationKind::Level, message, reference.location)
    }

    /// Checks every reference and keeps the violations, in input order.
    pub fn check_all<L, R, I>(&self, references: I, resolver: &R) -> Vec<Diagnostic<L>>
    where
        R: Resolve + ?Sized,
        I: IntoIterator<Item = Reference<L>>,
    {
        references
            .into_iter()
            .filter_map(|r| self.check(r, resolver).into_diagnostic())
            .collect()
    }

    fn report<L>(&self, kind: ViolationKind, message: String, location: L) -> Outcome<L> {
        debug!(path = %self.path.display(), kind = kind.label(), %message, "violation");
        Outcome::Violation(Diagnostic {
            kind,
            message,
            location,
        })
    }
}
