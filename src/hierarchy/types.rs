// src/hierarchy/types.rs
//! Core types shared by the hierarchy rule and its hosts.

use serde::Serialize;
use std::fmt;

/// How a reference was written. Only affects message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Import,
    Require,
}

impl ReferenceKind {
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Require => "require",
        }
    }

    #[must_use]
    pub fn past_participle(self) -> &'static str {
        match self {
            Self::Import => "imported",
            Self::Require => "required",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// An outbound reference found by the host in a source file.
///
/// `L` is the host's location handle. The rule never inspects it and hands
/// it back unchanged on any diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<L> {
    pub specifier: String,
    pub kind: ReferenceKind,
    pub location: L,
}

impl<L> Reference<L> {
    pub fn import(specifier: impl Into<String>, location: L) -> Self {
        Self {
            specifier: specifier.into(),
            kind: ReferenceKind::Import,
            location,
        }
    }

    pub fn require(specifier: impl Into<String>, location: L) -> Self {
        Self {
            specifier: specifier.into(),
            kind: ReferenceKind::Require,
            location,
        }
    }
}

/// Which policy a diagnostic comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// Same- or higher-level reference.
    Level,
    /// A file inside a module directory whose name lacks the module prefix.
    InvalidModuleName,
    /// Strict mode: a non-root module file referencing its own module.
    StrictSiblingAccess,
    /// A non-root child of a module referenced from outside that module.
    CrossModuleChildAccess,
}

impl ViolationKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Level => "LEVEL",
            Self::InvalidModuleName => "INVALID_MODULE_NAME",
            Self::StrictSiblingAccess => "STRICT_SIBLING_ACCESS",
            Self::CrossModuleChildAccess => "CROSS_MODULE_CHILD_ACCESS",
        }
    }
}

/// One reported policy violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<L> {
    pub kind: ViolationKind,
    pub message: String,
    pub location: L,
}

/// Why a reference was not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptySpecifier,
    Unresolved,
    Excluded,
    Unclassified,
}

/// Why a checked reference passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
    /// The module rules accepted a reference within one module.
    SameModule,
    /// The target's level is in the source level's allowed set.
    AllowedLevel,
}

/// Result of checking a single reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<L> {
    Skipped(SkipReason),
    Allowed(AllowReason),
    Violation(Diagnostic<L>),
}

impl<L> Outcome<L> {
    #[must_use]
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation(_))
    }

    #[must_use]
    pub fn into_diagnostic(self) -> Option<Diagnostic<L>> {
        match self {
            Self::Violation(d) => Some(d),
            _ => None,
        }
    }
}
