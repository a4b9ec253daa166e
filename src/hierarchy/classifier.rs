// src/hierarchy/classifier.rs
//! Maps a file path to a level name.

use regex::{Regex, RegexBuilder};
use std::path::{Path, PathBuf};

use super::registry::LevelRegistry;
use crate::error::ConfigError;
use crate::paths::{relative_to, to_slash};

/// Path classification strategy, fixed when the rule is built.
#[derive(Debug, Clone)]
pub enum Classifier {
    Patterns(PatternClassifier),
    Heuristic(HeuristicClassifier),
}

impl Classifier {
    /// Uses `patterns` when any are given, otherwise the registry heuristic.
    ///
    /// # Errors
    /// Returns error if a pattern fails to compile or has no capture group.
    pub fn new(
        patterns: &[String],
        registry: &LevelRegistry,
        root: PathBuf,
    ) -> Result<Self, ConfigError> {
        if patterns.is_empty() {
            return Ok(Self::Heuristic(HeuristicClassifier::from_registry(registry)));
        }
        PatternClassifier::new(patterns, root).map(Self::Patterns)
    }

    /// Returns the level name for `path`, or `None` when it is unclassified.
    #[must_use]
    pub fn classify(&self, path: &Path) -> Option<String> {
        match self {
            Self::Patterns(p) => p.classify(path),
            Self::Heuristic(h) => h.classify(path),
        }
    }
}

/// Classifies by the first capture group of the first matching pattern.
#[derive(Debug, Clone)]
pub struct PatternClassifier {
    patterns: Vec<Regex>,
    root: PathBuf,
}

impl PatternClassifier {
    /// Compiles `patterns` case-insensitively. Paths are matched relative to `root`.
    ///
    /// # Errors
    /// Returns error if a pattern is invalid or lacks a capture group.
    pub fn new(patterns: &[String], root: PathBuf) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|p| compile_level_pattern(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns, root })
    }

    #[must_use]
    pub fn classify(&self, path: &Path) -> Option<String> {
        let relative = to_slash(&relative_to(path, &self.root));
        self.patterns.iter().find_map(|re| {
            re.captures(&relative)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
    }
}

fn compile_level_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    let re = compile_insensitive(pattern)?;
    // captures_len counts the implicit whole-match group
    if re.captures_len() < 2 {
        return Err(ConfigError::MissingCaptureGroup(pattern.to_string()));
    }
    Ok(re)
}

/// Compiles a case-insensitive regex, mapping failures to [`ConfigError`].
///
/// # Errors
/// Returns error if the pattern does not compile.
pub fn compile_insensitive(pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Classifies by the level name that occurs furthest to the right in the path.
///
/// The deepest matching directory is taken as the most specific one, so a
/// parent folder that happens to share a level's name does not win. Ties
/// keep the candidate declared first.
#[derive(Debug, Clone)]
pub struct HeuristicClassifier {
    candidates: Vec<String>,
}

impl HeuristicClassifier {
    #[must_use]
    pub fn from_registry(registry: &LevelRegistry) -> Self {
        Self {
            candidates: registry.names().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub fn classify(&self, path: &Path) -> Option<String> {
        let haystack = to_slash(path);
        let mut best: Option<(&str, usize)> = None;

        for candidate in &self.candidates {
            let Some(idx) = haystack.rfind(candidate.as_str()) else {
                continue;
            };
            if best.map_or(true, |(_, best_idx)| idx > best_idx) {
                best = Some((candidate.as_str(), idx));
            }
        }

        best.map(|(name, _)| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::registry::LevelSpec;

    fn default_registry() -> LevelRegistry {
        let spec: Vec<LevelSpec> = ["atoms", "molecules", "=organisms", "templates", "pages"]
            .into_iter()
            .map(Into::into)
            .collect();
        LevelRegistry::build(&spec).unwrap()
    }

    #[test]
    fn heuristic_picks_rightmost_level() {
        let h = HeuristicClassifier::from_registry(&default_registry());
        assert_eq!(
            h.classify(Path::new("/pages/app/components/atoms/Button.js")),
            Some("atoms".into())
        );
        assert_eq!(
            h.classify(Path::new("/atoms/app/components/molecules/Field.js")),
            Some("molecules".into())
        );
    }

    #[test]
    fn heuristic_unclassified_without_any_level() {
        let h = HeuristicClassifier::from_registry(&default_registry());
        assert_eq!(h.classify(Path::new("/app/components/modals/A.js")), None);
    }

    #[test]
    fn heuristic_accepts_match_at_start() {
        let h = HeuristicClassifier::from_registry(&default_registry());
        assert_eq!(h.classify(Path::new("atoms/Button.js")), Some("atoms".into()));
    }

    #[test]
    fn heuristic_is_idempotent_on_level_names() {
        let registry = default_registry();
        let h = HeuristicClassifier::from_registry(&registry);
        for name in registry.names() {
            assert_eq!(h.classify(Path::new(name)).as_deref(), Some(name));
        }
    }

    #[test]
    fn heuristic_tie_keeps_first_declared() {
        let spec: Vec<LevelSpec> = vec!["item".into(), "items".into()];
        let registry = LevelRegistry::build(&spec).unwrap();
        let h = HeuristicClassifier::from_registry(&registry);
        // Both last occurrences start at the same index.
        assert_eq!(h.classify(Path::new("/src/items/A.js")), Some("item".into()));
    }

    #[test]
    fn patterns_use_first_capture_relative_to_root() {
        let p = PatternClassifier::new(
            &["components/(\\w+)/".into(), "routes/(\\w+)/".into()],
            PathBuf::from("/proj"),
        )
        .unwrap();
        assert_eq!(
            p.classify(Path::new("/proj/routes/pages/Index.js")),
            Some("pages".into())
        );
        assert_eq!(
            p.classify(Path::new("/proj/components/organisms/A.js")),
            Some("organisms".into())
        );
        assert_eq!(p.classify(Path::new("/proj/lib/util.js")), None);
    }

    #[test]
    fn patterns_are_case_insensitive() {
        let p = PatternClassifier::new(&["Routes/(\\w+)/".into()], PathBuf::from("/proj")).unwrap();
        assert_eq!(
            p.classify(Path::new("/proj/routes/pages/Index.js")),
            Some("pages".into())
        );
    }

    #[test]
    fn patterns_see_relative_path_only() {
        // The root itself contains "routes/", which must not be matched.
        let p = PatternClassifier::new(&["^routes/(\\w+)/".into()], PathBuf::from("/routes/x"))
            .unwrap();
        assert_eq!(p.classify(Path::new("/routes/x/lib/A.js")), None);
    }

    #[test]
    fn pattern_without_group_is_rejected() {
        let err = PatternClassifier::new(&["routes/".into()], PathBuf::from("/")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCaptureGroup(_)));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = PatternClassifier::new(&["(".into()], PathBuf::from("/")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn classifier_selects_strategy() {
        let registry = default_registry();
        let heuristic = Classifier::new(&[], &registry, PathBuf::from("/")).unwrap();
        assert!(matches!(heuristic, Classifier::Heuristic(_)));

        let patterns =
            Classifier::new(&["x/(\\w+)".into()], &registry, PathBuf::from("/")).unwrap();
        assert!(matches!(patterns, Classifier::Patterns(_)));
    }
}
