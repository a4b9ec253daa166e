// src/hierarchy/registry.rs
//! The ordered level hierarchy built from the `levels` option.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::marker::{parse_entry, MarkerTable};
use crate::error::ConfigError;

/// One position of the configured `levels` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelSpec {
    Single(String),
    Group(Vec<String>),
}

impl LevelSpec {
    fn raw_names(&self) -> &[String] {
        match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::Group(g) => g,
        }
    }
}

impl From<&str> for LevelSpec {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<&str>> for LevelSpec {
    fn from(value: Vec<&str>) -> Self {
        Self::Group(value.into_iter().map(ToString::to_string).collect())
    }
}

/// A named layer of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub name: String,
    /// Zero-based position of the level's entry; lower is more fundamental.
    pub priority: usize,
    pub allow_same_level: bool,
}

/// Every configured level in declaration order.
#[derive(Debug, Clone)]
pub struct LevelRegistry {
    levels: Vec<Level>,
}

impl LevelRegistry {
    /// Builds the registry with the default `=` marker.
    ///
    /// # Errors
    /// Returns error if the spec names no level, repeats a name, or has an
    /// entry that is empty after its markers.
    pub fn build(spec: &[LevelSpec]) -> Result<Self, ConfigError> {
        Self::build_with_markers(spec, &MarkerTable::default())
    }

    /// Builds the registry with a custom marker alphabet.
    ///
    /// # Errors
    /// See [`LevelRegistry::build`].
    pub fn build_with_markers(
        spec: &[LevelSpec],
        markers: &MarkerTable,
    ) -> Result<Self, ConfigError> {
        let mut levels = Vec::new();
        let mut seen = HashSet::new();

        for (priority, position) in spec.iter().enumerate() {
            for raw in position.raw_names() {
                let entry = parse_entry(raw, markers)?;
                if !seen.insert(entry.name.clone()) {
                    return Err(ConfigError::DuplicateLevel(entry.name));
                }
                levels.push(Level {
                    name: entry.name,
                    priority,
                    allow_same_level: entry.options.allow_same_level,
                });
            }
        }

        if levels.is_empty() {
            return Err(ConfigError::EmptyLevels);
        }

        Ok(Self { levels })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Level> {
        self.levels.iter().find(|l| l.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Levels in ascending priority, declaration order within a group.
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(|l| l.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
