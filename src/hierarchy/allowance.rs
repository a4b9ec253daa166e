// src/hierarchy/allowance.rs
//! Which levels a level may reference, and how that is phrased.

use super::registry::{Level, LevelRegistry};
use super::types::ReferenceKind;

/// Levels a file of some base level may reference, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedLevels {
    names: Vec<String>,
}

impl AllowedLevels {
    #[must_use]
    pub fn contains(&self, level: &str) -> bool {
        self.names.iter().any(|n| n == level)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// See [`render_capability`].
    #[must_use]
    pub fn render(&self, kind: ReferenceKind) -> String {
        render_capability(&self.names, kind)
    }
}

/// Computes the allowed set for `base`. `None` when `base` is not registered.
#[must_use]
pub fn allowed_levels(base: &str, registry: &LevelRegistry) -> Option<AllowedLevels> {
    let base = registry.get(base)?;
    let names = registry
        .iter()
        .filter(|candidate| may_reference(base, candidate))
        .map(|l| l.name.clone())
        .collect();
    Some(AllowedLevels { names })
}

/// Strictly lower priority always passes; equal priority only with
/// `allow_same_level` on the base.
fn may_reference(base: &Level, target: &Level) -> bool {
    if base.allow_same_level {
        target.priority <= base.priority
    } else {
        target.priority < base.priority
    }
}

/// Renders the capability sentence fragment used in level diagnostics.
///
/// The wording is part of the output contract: `cannot <verb> any other
/// components`, `can contain only X`, or `can contain A, B and C`.
#[must_use]
pub fn render_capability(allowed: &[String], kind: ReferenceKind) -> String {
    match allowed {
        [] => format!("cannot {} any other components", kind.verb()),
        [only] => format!("can contain only {only}"),
        [init @ .., last] => format!("can contain {} and {last}", init.join(", ")),
    }
}
