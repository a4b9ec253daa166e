// tests/rule_scenarios.rs - Rule decisions with stub resolvers
use atomlint_core::config::HierarchyConfig;
use atomlint_core::hierarchy::{
    AllowReason, LevelSpec, ModuleMode, Outcome, Reference, Rule, SkipReason, ViolationKind,
};
use std::path::{Path, PathBuf};

fn rule(config: &HierarchyConfig) -> Rule {
    Rule::with_root(config, PathBuf::from("/proj")).unwrap()
}

fn to(target: &'static str) -> impl Fn(&str, &Path) -> Option<PathBuf> {
    move |_: &str, _: &Path| Some(PathBuf::from(target))
}

fn check(rule: &Rule, source: &str, target: &'static str) -> Outcome<u32> {
    let file = rule.for_file(Path::new(source)).expect("source is classified");
    file.check(Reference::require("./dep", 1), &to(target))
}

fn message(outcome: Outcome<u32>) -> String {
    outcome.into_diagnostic().expect("expected a violation").message
}

#[test]
fn atoms_cannot_require_atoms() {
    let r = rule(&HierarchyConfig::default());
    let out = check(&r, "/proj/src/atoms/Button.js", "/proj/src/atoms/Icon.js");
    assert_eq!(
        message(out),
        "Do not require atoms from atoms. Atoms cannot require any other components."
    );
}

#[test]
fn molecules_may_require_atoms() {
    let r = rule(&HierarchyConfig::default());
    let out = check(&r, "/proj/src/molecules/Card.js", "/proj/src/atoms/Button.js");
    assert_eq!(out, Outcome::Allowed(AllowReason::AllowedLevel));
}

#[test]
fn molecules_cannot_require_organisms() {
    let r = rule(&HierarchyConfig::default());
    let out = check(&r, "/proj/src/molecules/Card.js", "/proj/src/organisms/Header.js");
    assert_eq!(
        message(out),
        "Do not require organisms from molecules. Molecules can contain only atoms."
    );
}

#[test]
fn grouped_level_with_marker_reaches_its_sibling() {
    let config = HierarchyConfig {
        levels: vec![
            LevelSpec::from("atoms"),
            LevelSpec::from(vec!["molecules", "=concretes"]),
            LevelSpec::from("organisms"),
        ],
        ..HierarchyConfig::default()
    };
    let r = rule(&config);

    let out = check(&r, "/proj/src/concretes/Price.js", "/proj/src/molecules/Card.js");
    assert_eq!(out, Outcome::Allowed(AllowReason::AllowedLevel));

    // molecules carries no marker, so the reverse direction fails
    let out = check(&r, "/proj/src/molecules/Card.js", "/proj/src/concretes/Price.js");
    assert!(out.is_violation());
}

#[test]
fn module_root_may_require_own_child() {
    let r = rule(&HierarchyConfig::default());
    let out = check(
        &r,
        "/proj/src/molecules/ModuleComponent/ModuleComponent.js",
        "/proj/src/molecules/ModuleComponent/ModuleComponentChild.js",
    );
    assert_eq!(out, Outcome::Allowed(AllowReason::SameModule));
}

#[test]
fn other_module_root_falls_through_to_level_check() {
    let r = rule(&HierarchyConfig::default());

    let organisms = check(
        &r,
        "/proj/src/organisms/ModuleComponent/ModuleComponentChild.js",
        "/proj/src/organisms/ModuleComponentOther/ModuleComponentOther.js",
    );
    assert_eq!(organisms, Outcome::Allowed(AllowReason::AllowedLevel));

    let molecules = check(
        &r,
        "/proj/src/molecules/ModuleComponent/ModuleComponentChild.js",
        "/proj/src/molecules/ModuleComponentOther/ModuleComponentOther.js",
    );
    let diagnostic = molecules.into_diagnostic().unwrap();
    assert_eq!(diagnostic.kind, ViolationKind::Level);
}

#[test]
fn other_module_child_is_rejected() {
    let r = rule(&HierarchyConfig::default());
    let out = check(
        &r,
        "/proj/src/organisms/Header/Header.js",
        "/proj/src/organisms/Footer/FooterLinks.js",
    );
    let diagnostic = out.into_diagnostic().unwrap();
    assert_eq!(diagnostic.kind, ViolationKind::CrossModuleChildAccess);
    assert_eq!(
        diagnostic.message,
        "Do not require the other module children. \
         FooterLinks must be required by \"Footer\" and its children, \
         but found in Header that belongs to \"Header\"."
    );
}

#[test]
fn strict_mode_rejects_sibling_children() {
    let config = HierarchyConfig {
        module: ModuleMode::Strict,
        ..HierarchyConfig::default()
    };
    let r = rule(&config);
    let out = check(
        &r,
        "/proj/src/molecules/ModuleComponent/ModuleComponentChild.js",
        "/proj/src/molecules/ModuleComponent/ModuleComponentOtherChild.js",
    );
    let diagnostic = out.into_diagnostic().unwrap();
    assert_eq!(diagnostic.kind, ViolationKind::StrictSiblingAccess);
    assert_eq!(
        diagnostic.message,
        "In \"strict\" mode, Only the root module \"ModuleComponent\" can require its children. \
         \"ModuleComponentChild\" is not root module. \
         The module children components cannot require each other."
    );
}

#[test]
fn loose_mode_allows_sibling_children() {
    let r = rule(&HierarchyConfig::default());
    let out = check(
        &r,
        "/proj/src/molecules/ModuleComponent/ModuleComponentChild.js",
        "/proj/src/molecules/ModuleComponent/ModuleComponentOtherChild.js",
    );
    assert_eq!(out, Outcome::Allowed(AllowReason::SameModule));
}

#[test]
fn module_off_leaves_only_level_check() {
    let config = HierarchyConfig {
        module: ModuleMode::Off,
        ..HierarchyConfig::default()
    };
    let r = rule(&config);
    let out = check(
        &r,
        "/proj/src/molecules/ModuleComponent/ModuleComponent.js",
        "/proj/src/molecules/ModuleComponent/ModuleComponentChild.js",
    );
    assert_eq!(out.into_diagnostic().unwrap().kind, ViolationKind::Level);
}

#[test]
fn misnamed_module_member_is_reported() {
    let r = rule(&HierarchyConfig::default());
    let out = check(
        &r,
        "/proj/src/organisms/Header/Logo.js",
        "/proj/src/atoms/Icon.js",
    );
    let diagnostic = out.into_diagnostic().unwrap();
    assert_eq!(diagnostic.kind, ViolationKind::InvalidModuleName);
    assert!(diagnostic.message.starts_with("Invalid module found. Logo is not a part of Header"));
}

#[test]
fn excluded_target_never_reports() {
    let r = rule(&HierarchyConfig::default());
    let out = check(
        &r,
        "/proj/src/atoms/Button.js",
        "/proj/node_modules/organisms/index.js",
    );
    assert_eq!(out, Outcome::Skipped(SkipReason::Excluded));
}

#[test]
fn unresolved_and_empty_specifiers_are_skipped() {
    let r = rule(&HierarchyConfig::default());
    let file = r.for_file(Path::new("/proj/src/atoms/Button.js")).unwrap();
    let unresolved = |_: &str, _: &Path| -> Option<PathBuf> { None };

    assert_eq!(
        file.check(Reference::import("react", 1), &unresolved),
        Outcome::Skipped(SkipReason::Unresolved)
    );
    assert_eq!(
        file.check(Reference::import("", 2), &to("/proj/src/atoms/Icon.js")),
        Outcome::Skipped(SkipReason::EmptySpecifier)
    );
}

#[test]
fn unclassified_target_is_skipped() {
    let r = rule(&HierarchyConfig::default());
    let out = check(&r, "/proj/src/atoms/Button.js", "/proj/src/utils/format.js");
    assert_eq!(out, Outcome::Skipped(SkipReason::Unclassified));
}

#[test]
fn unclassified_source_has_no_checks() {
    let r = rule(&HierarchyConfig::default());
    assert!(r.for_file(Path::new("/proj/src/utils/format.js")).is_none());
}

#[test]
fn path_patterns_replace_the_heuristic() {
    let config = HierarchyConfig {
        path_patterns: vec![r"^components/(\w+)/".into()],
        ..HierarchyConfig::default()
    };
    let r = rule(&config);

    assert_eq!(
        r.classify(Path::new("/proj/components/molecules/Card.js")).as_deref(),
        Some("molecules")
    );
    // outside the pattern, level names in the path no longer count
    assert!(r.classify(Path::new("/proj/src/atoms/Button.js")).is_none());
}

#[test]
fn import_wording_uses_import_verb() {
    let r = rule(&HierarchyConfig::default());
    let file = r.for_file(Path::new("/proj/src/atoms/Button.js")).unwrap();
    let out = file.check(Reference::import("./Icon", 3), &to("/proj/src/atoms/Icon.js"));
    let diagnostic = out.into_diagnostic().unwrap();
    assert_eq!(diagnostic.location, 3);
    assert_eq!(
        diagnostic.message,
        "Do not import atoms from atoms. Atoms cannot import any other components."
    );
}
