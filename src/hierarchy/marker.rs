// src/hierarchy/marker.rs
//! Option markers on level entries.
//!
//! A level entry such as `"=organisms"` carries its options as leading
//! marker characters. The marker alphabet lives in a [`MarkerTable`] so new
//! flags can be introduced without touching the parser.

use crate::error::ConfigError;

/// A boolean option a marker can switch on for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFlag {
    /// Files of the level may reference levels with the same priority.
    AllowSameLevel,
}

/// Options parsed from the marker prefix of one entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelOptions {
    pub allow_same_level: bool,
}

impl LevelOptions {
    fn set(&mut self, flag: LevelFlag) {
        match flag {
            LevelFlag::AllowSameLevel => self.allow_same_level = true,
        }
    }
}

/// A level name with its marker options stripped off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEntry {
    pub name: String,
    pub options: LevelOptions,
}

/// Mapping of marker characters to the flags they set.
#[derive(Debug, Clone)]
pub struct MarkerTable {
    markers: Vec<(char, LevelFlag)>,
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self {
            markers: vec![('=', LevelFlag::AllowSameLevel)],
        }
    }
}

impl MarkerTable {
    /// An empty table; every character is part of the name.
    #[must_use]
    pub fn empty() -> Self {
        Self { markers: Vec::new() }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: char, flag: LevelFlag) -> Self {
        self.markers.retain(|(c, _)| *c != marker);
        self.markers.push((marker, flag));
        self
    }

    fn flag_for(&self, c: char) -> Option<LevelFlag> {
        self.markers
            .iter()
            .find_map(|(marker, flag)| (*marker == c).then_some(*flag))
    }
}

/// Parses a raw level entry, stripping every leading marker character.
///
/// # Errors
/// Returns [`ConfigError::EmptyLevelName`] when nothing is left after the markers.
pub fn parse_entry(raw: &str, table: &MarkerTable) -> Result<LevelEntry, ConfigError> {
    let mut options = LevelOptions::default();
    let mut rest = raw;

    while let Some(c) = rest.chars().next() {
        let Some(flag) = table.flag_for(c) else {
            break;
        };
        options.set(flag);
        rest = &rest[c.len_utf8()..];
    }

    if rest.is_empty() {
        return Err(ConfigError::EmptyLevelName(raw.to_string()));
    }

    Ok(LevelEntry {
        name: rest.to_string(),
        options,
    })
}
