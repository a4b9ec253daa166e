// src/hierarchy/diagnostic.rs
//! Diagnostic text for level violations.

use super::allowance::AllowedLevels;
use super::types::ReferenceKind;

/// Uppercases the first character.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `Do not {verb} {target} from {source}. {subject} {capability}.`
#[must_use]
pub fn level_message(
    kind: ReferenceKind,
    target_level: &str,
    source_level: &str,
    allowed: &AllowedLevels,
) -> String {
    format!(
        "Do not {verb} {target_level} from {source_level}. {subject} {capability}.",
        verb = kind.verb(),
        subject = capitalize(source_level),
        capability = allowed.render(kind),
    )
}
