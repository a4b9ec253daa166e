// src/report.rs
//! Console and JSON output for check results.

use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::check::CheckReport;
use crate::hierarchy::{allowed_levels, ReferenceKind, Rule, ViolationKind};
use crate::paths::{relative_to, to_slash};

#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub kind: ViolationKind,
    pub message: String,
}

/// Flattens a report into serializable records, paths relative to `root`.
#[must_use]
pub fn to_json_records(report: &CheckReport, root: &Path) -> Vec<JsonDiagnostic> {
    report
        .files
        .iter()
        .flat_map(|file| {
            let name = display_path(&file.path, root);
            file.diagnostics.iter().map(move |d| JsonDiagnostic {
                file: name.clone(),
                line: d.location.line,
                column: d.location.column,
                kind: d.kind,
                message: d.message.clone(),
            })
        })
        .collect()
}

/// Renders the report as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_json(report: &CheckReport, root: &Path) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_json_records(report, root))
}

/// Prints violations grouped by file, then a summary line.
pub fn print_report(report: &CheckReport, root: &Path) {
    for file in &report.files {
        println!(
            "\n{} {}",
            display_path(&file.path, root).bold(),
            format!("({})", file.level).dimmed()
        );
        for d in &file.diagnostics {
            println!(
                "  {:>4}:{:<3} {}  {}",
                d.location.line,
                d.location.column,
                d.kind.label().red(),
                d.message
            );
        }
    }
    print_summary(report);
}

fn print_summary(report: &CheckReport) {
    let count = report.violation_count();
    let status = if count == 0 {
        "✓ hierarchy respected".green().to_string()
    } else {
        format!("✗ {count} violation(s)").red().bold().to_string()
    };
    println!(
        "\n{} {} files scanned | {} in hierarchy | {}",
        "ATOMLINT".cyan().bold(),
        report.files_scanned,
        report.files_checked,
        status
    );
}

/// Prints every level with its priority and what it may contain.
pub fn print_levels(rule: &Rule) {
    println!("{}", "LEVELS".cyan().bold());
    for level in rule.registry().iter() {
        let capability = allowed_levels(&level.name, rule.registry())
            .map(|a| a.render(ReferenceKind::Import))
            .unwrap_or_default();
        let same = if level.allow_same_level {
            " =".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:>2} {}{}  {}",
            level.priority,
            level.name.bold(),
            same,
            capability.dimmed()
        );
    }
    println!("  module mode: {}", rule.module_mode().as_str());
}

/// Prints the level and module membership of one path.
pub fn print_classification(rule: &Rule, path: &Path, root: &Path) {
    let level = rule
        .classify(path)
        .map_or_else(|| "unclassified".dimmed().to_string(), |l| l.green().to_string());
    let module = rule.module_of(path);
    let membership = match module.module.as_deref() {
        Some(m) if module.is_root() => format!("root of module {m}"),
        Some(m) if module.is_well_named() => format!("child of module {m}"),
        Some(m) => format!("misnamed member of module {m}").red().to_string(),
        None => "no module".to_string(),
    };
    println!("{}  {}  {}", display_path(path, root), level, membership.dimmed());
}

fn display_path(path: &Path, root: &Path) -> String {
    if path.starts_with(root) {
        to_slash(&relative_to(path, root))
    } else {
        to_slash(path)
    }
}
