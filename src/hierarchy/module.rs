// src/hierarchy/module.rs
//! Module containment rules.
//!
//! A "module" is not declared anywhere. It is inferred from naming alone: a
//! file whose parent directory starts with an uppercase ASCII letter, and
//! whose parent is not itself a level name, belongs to the module named
//! after that directory. The file whose stem equals the module name is the
//! module root; every other file in the directory is a child and must carry
//! the module name as a prefix.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::registry::LevelRegistry;
use super::types::{ReferenceKind, ViolationKind};
use crate::error::ConfigError;

/// Strictness of the module rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawModuleMode", into = "RawModuleMode")]
pub enum ModuleMode {
    /// Only the module root may reference its children.
    Strict,
    /// Any file of a module may reference its siblings.
    #[default]
    Loose,
    Off,
}

impl ModuleMode {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != Self::Off
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Loose => "loose",
            Self::Off => "off",
        }
    }
}

/// `module` accepts a mode string or `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawModuleMode {
    Flag(bool),
    Name(String),
}

impl TryFrom<RawModuleMode> for ModuleMode {
    type Error = ConfigError;

    fn try_from(raw: RawModuleMode) -> Result<Self, Self::Error> {
        match raw {
            RawModuleMode::Flag(false) => Ok(Self::Off),
            RawModuleMode::Flag(true) => Err(ConfigError::InvalidModuleMode("true".into())),
            RawModuleMode::Name(name) => match name.as_str() {
                "strict" => Ok(Self::Strict),
                "loose" => Ok(Self::Loose),
                "off" => Ok(Self::Off),
                _ => Err(ConfigError::InvalidModuleMode(format!("\"{name}\""))),
            },
        }
    }
}

impl From<ModuleMode> for RawModuleMode {
    fn from(mode: ModuleMode) -> Self {
        Self::Name(mode.as_str().to_string())
    }
}

/// Where a file sits with respect to modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileModule {
    /// Name of the containing module, if the parent directory forms one.
    pub module: Option<String>,
    /// File stem.
    pub name: String,
}

impl FileModule {
    /// Infers module membership of `path`. Shared by sources and targets.
    #[must_use]
    pub fn of(path: &Path, registry: &LevelRegistry) -> Self {
        let name = stem(path);
        let module = path
            .parent()
            .map(stem)
            .filter(|dir| is_module_dir(dir, registry));
        Self { module, name }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.module.as_deref() == Some(self.name.as_str())
    }

    /// A file outside any module is always well named.
    #[must_use]
    pub fn is_well_named(&self) -> bool {
        self.module
            .as_deref()
            .map_or(true, |module| self.name.starts_with(module))
    }
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_module_dir(dir: &str, registry: &LevelRegistry) -> bool {
    dir.starts_with(|c: char| c.is_ascii_uppercase()) && !registry.contains(dir)
}

/// A broken module rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleViolation {
    InvalidModuleName {
        name: String,
        module: String,
    },
    StrictSiblingAccess {
        source_name: String,
        module: String,
    },
    CrossModuleChildAccess {
        target_name: String,
        target_module: String,
        source_name: String,
        source_module: Option<String>,
    },
}

impl ModuleViolation {
    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::InvalidModuleName { .. } => ViolationKind::InvalidModuleName,
            Self::StrictSiblingAccess { .. } => ViolationKind::StrictSiblingAccess,
            Self::CrossModuleChildAccess { .. } => ViolationKind::CrossModuleChildAccess,
        }
    }

    #[must_use]
    pub fn message(&self, kind: ReferenceKind, mode: ModuleMode) -> String {
        let verb = kind.verb();
        let verbed = kind.past_participle();
        match self {
            Self::InvalidModuleName { name, module } => format!(
                "Invalid module found. {name} is not a part of {module}, \
                 {name} should have the name starts with {module}"
            ),
            Self::StrictSiblingAccess { source_name, module } => format!(
                "In \"strict\" mode, Only the root module \"{module}\" can {verb} its children. \
                 \"{source_name}\" is not root module. \
                 The module children components cannot {verb} each other."
            ),
            Self::CrossModuleChildAccess {
                target_name,
                target_module,
                source_module: None,
                ..
            } => format!(
                "Do not {verb} a module children. \
                 {target_name} must be {verbed} by {target_module} and its children"
            ),
            Self::CrossModuleChildAccess {
                target_name,
                target_module,
                ..
            } if mode == ModuleMode::Strict => format!(
                "Invalid module import. {target_name} must be {verbed} by {target_module}"
            ),
            Self::CrossModuleChildAccess {
                target_name,
                target_module,
                source_name,
                source_module: Some(source_module),
            } => format!(
                "Do not {verb} the other module children. \
                 {target_name} must be {verbed} by \"{target_module}\" and its children, \
                 but found in {source_name} that belongs to \"{source_module}\"."
            ),
        }
    }
}

/// Tri-state result of the module rules for one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleVerdict {
    /// Explicitly allowed; the level check is skipped.
    Allow,
    /// Explicitly rejected.
    Deny(ModuleViolation),
    /// Module rules say nothing; defer to the level check.
    NotApplicable,
}

/// Applies the module rules to a `source -> target` reference.
#[must_use]
pub fn validate(
    source: &FileModule,
    target: &FileModule,
    mode: ModuleMode,
) -> ModuleVerdict {
    if mode == ModuleMode::Off {
        return ModuleVerdict::NotApplicable;
    }

    if let Some(violation) = naming_violation(source) {
        return ModuleVerdict::Deny(violation);
    }

    let Some(target_module) = target.module.as_deref() else {
        return ModuleVerdict::NotApplicable;
    };

    if let Some(violation) = naming_violation(target) {
        return ModuleVerdict::Deny(violation);
    }

    if source.module.as_deref() == Some(target_module) {
        if mode == ModuleMode::Strict && !source.is_root() {
            return ModuleVerdict::Deny(ModuleViolation::StrictSiblingAccess {
                source_name: source.name.clone(),
                module: target_module.to_string(),
            });
        }
        return ModuleVerdict::Allow;
    }

    if target.is_root() {
        return ModuleVerdict::NotApplicable;
    }

    ModuleVerdict::Deny(ModuleViolation::CrossModuleChildAccess {
        target_name: target.name.clone(),
        target_module: target_module.to_string(),
        source_name: source.name.clone(),
        source_module: source.module.clone(),
    })
}

fn naming_violation(file: &FileModule) -> Option<ModuleViolation> {
    if file.is_well_named() {
        return None;
    }
    file.module
        .as_ref()
        .map(|module| ModuleViolation::InvalidModuleName {
            name: file.name.clone(),
            module: module.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::registry::LevelSpec;

    fn registry() -> LevelRegistry {
        let spec: Vec<LevelSpec> = vec!["atoms".into(), "molecules".into(), "Pages".into()];
        LevelRegistry::build(&spec).unwrap()
    }

    fn file(path: &str) -> FileModule {
        FileModule::of(Path::new(path), &registry())
    }

    #[test]
    fn membership_from_capitalized_parent() {
        let f = file("/c/molecules/ModuleComponent/ModuleComponentChild.js");
        assert_eq!(f.module.as_deref(), Some("ModuleComponent"));
        assert_eq!(f.name, "ModuleComponentChild");
        assert!(!f.is_root());
        assert!(f.is_well_named());

        let root = file("/c/molecules/ModuleComponent/ModuleComponent.js");
        assert!(root.is_root());
    }

    #[test]
    fn lowercase_or_level_parent_is_not_a_module() {
        assert_eq!(file("/c/molecules/Component.js").module, None);
        assert_eq!(file("/c/Pages/Index.js").module, None);
    }

    #[test]
    fn loose_allows_same_module() {
        let verdict = validate(
            &file("/c/molecules/Card/CardHeader.js"),
            &file("/c/molecules/Card/CardBody.js"),
            ModuleMode::Loose,
        );
        assert_eq!(verdict, ModuleVerdict::Allow);
    }

    #[test]
    fn strict_allows_root_only() {
        let root = validate(
            &file("/c/molecules/Card/Card.js"),
            &file("/c/molecules/Card/CardBody.js"),
            ModuleMode::Strict,
        );
        assert_eq!(root, ModuleVerdict::Allow);

        let sibling = validate(
            &file("/c/molecules/Card/CardHeader.js"),
            &file("/c/molecules/Card/CardBody.js"),
            ModuleMode::Strict,
        );
        assert_eq!(
            sibling,
            ModuleVerdict::Deny(ModuleViolation::StrictSiblingAccess {
                source_name: "CardHeader".into(),
                module: "Card".into(),
            })
        );
    }

    #[test]
    fn misnamed_source_fails_before_target_is_seen() {
        let verdict = validate(
            &file("/c/molecules/Card/Header.js"),
            &file("/c/atoms/Button.js"),
            ModuleMode::Loose,
        );
        assert_eq!(
            verdict,
            ModuleVerdict::Deny(ModuleViolation::InvalidModuleName {
                name: "Header".into(),
                module: "Card".into(),
            })
        );
    }

    #[test]
    fn misnamed_target_fails() {
        let verdict = validate(
            &file("/c/organisms/Form.js"),
            &file("/c/molecules/Card/Body.js"),
            ModuleMode::Loose,
        );
        assert!(matches!(
            verdict,
            ModuleVerdict::Deny(ModuleViolation::InvalidModuleName { ref name, .. }) if name == "Body"
        ));
    }

    #[test]
    fn target_outside_modules_is_not_applicable() {
        let verdict = validate(
            &file("/c/molecules/Card/CardBody.js"),
            &file("/c/atoms/Button.js"),
            ModuleMode::Strict,
        );
        assert_eq!(verdict, ModuleVerdict::NotApplicable);
    }

    #[test]
    fn other_module_root_is_not_applicable() {
        let verdict = validate(
            &file("/c/molecules/Card/CardBody.js"),
            &file("/c/molecules/Badge/Badge.js"),
            ModuleMode::Loose,
        );
        assert_eq!(verdict, ModuleVerdict::NotApplicable);
    }

    #[test]
    fn other_module_child_is_denied() {
        let verdict = validate(
            &file("/c/molecules/Card/CardBody.js"),
            &file("/c/molecules/Badge/BadgeIcon.js"),
            ModuleMode::Loose,
        );
        let ModuleVerdict::Deny(violation) = verdict else {
            panic!("expected denial, got {verdict:?}");
        };
        assert_eq!(
            violation.message(ReferenceKind::Import, ModuleMode::Loose),
            "Do not import the other module children. BadgeIcon must be imported by \
             \"Badge\" and its children, but found in CardBody that belongs to \"Card\"."
        );
        assert_eq!(
            violation.message(ReferenceKind::Require, ModuleMode::Strict),
            "Invalid module import. BadgeIcon must be required by Badge"
        );
    }

    #[test]
    fn child_access_from_outside_any_module() {
        let verdict = validate(
            &file("/c/organisms/Form.js"),
            &file("/c/molecules/Badge/BadgeIcon.js"),
            ModuleMode::Loose,
        );
        let ModuleVerdict::Deny(violation) = verdict else {
            panic!("expected denial, got {verdict:?}");
        };
        assert_eq!(violation.kind(), ViolationKind::CrossModuleChildAccess);
        assert_eq!(
            violation.message(ReferenceKind::Require, ModuleMode::Loose),
            "Do not require a module children. BadgeIcon must be required by Badge and its children"
        );
    }

    #[test]
    fn off_mode_never_applies() {
        let verdict = validate(
            &file("/c/molecules/Card/Header.js"),
            &file("/c/molecules/Badge/BadgeIcon.js"),
            ModuleMode::Off,
        );
        assert_eq!(verdict, ModuleVerdict::NotApplicable);
    }

    #[test]
    fn strict_sibling_message() {
        let violation = ModuleViolation::StrictSiblingAccess {
            source_name: "ModuleComponentChild".into(),
            module: "ModuleComponent".into(),
        };
        assert_eq!(
            violation.message(ReferenceKind::Import, ModuleMode::Strict),
            "In \"strict\" mode, Only the root module \"ModuleComponent\" can import its children. \
             \"ModuleComponentChild\" is not root module. \
             The module children components cannot import each other."
        );
    }

    #[test]
    fn invalid_name_message() {
        let violation = ModuleViolation::InvalidModuleName {
            name: "Header".into(),
            module: "Card".into(),
        };
        assert_eq!(
            violation.message(ReferenceKind::Import, ModuleMode::Loose),
            "Invalid module found. Header is not a part of Card, Header should have the name starts with Card"
        );
    }

    #[test]
    fn mode_parses_strings_and_false() {
        #[derive(Deserialize)]
        struct Wrap {
            module: ModuleMode,
        }
        let parse = |s: &str| serde_json::from_str::<Wrap>(s).map(|w| w.module);
        assert_eq!(parse(r#"{"module":"strict"}"#).unwrap(), ModuleMode::Strict);
        assert_eq!(parse(r#"{"module":"loose"}"#).unwrap(), ModuleMode::Loose);
        assert_eq!(parse(r#"{"module":"off"}"#).unwrap(), ModuleMode::Off);
        assert_eq!(parse(r#"{"module":false}"#).unwrap(), ModuleMode::Off);
        assert!(parse(r#"{"module":true}"#).is_err());
        assert!(parse(r#"{"module":"lax"}"#).is_err());
    }
}
