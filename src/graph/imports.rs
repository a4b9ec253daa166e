// src/graph/imports.rs
//! Extraction of `import` and `require` references from JS/TS sources.

use serde::Serialize;
use std::path::Path;
use tracing::error;
use tree_sitter::{Language, Parser, Query, QueryCursor};

use crate::hierarchy::{Reference, ReferenceKind};

/// 1-based source position of a reference's specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

const REFERENCE_QUERY: &str = r#"
    (import_statement source: (string) @import)
    (call_expression
      function: (identifier) @func
      arguments: (arguments . (string) @require)
      (#eq? @func "require"))
"#;

/// Picks the grammar for a file extension. JSX may appear in plain `.js`
/// files, so everything but `.ts` goes through the TSX grammar.
fn grammar_for(ext: &str) -> Option<Language> {
    match ext {
        "ts" | "mts" | "cts" => Some(tree_sitter_typescript::language_typescript()),
        "tsx" | "js" | "jsx" | "mjs" | "cjs" => Some(tree_sitter_typescript::language_tsx()),
        _ => None,
    }
}

/// Extracts the references of a source file in document order.
///
/// # Arguments
/// * `path` - File path (used for grammar selection).
/// * `content` - Source code.
#[must_use]
pub fn extract(path: &Path, content: &str) -> Vec<Reference<Span>> {
    let Some(grammar) = path
        .extension()
        .and_then(|s| s.to_str())
        .and_then(grammar_for)
    else {
        return Vec::new();
    };

    let Some(query) = compile_query(grammar) else {
        return Vec::new();
    };

    let mut refs = run_query(content, grammar, &query);
    refs.sort_by_key(|r| r.location);
    refs
}

fn run_query(source: &str, lang: Language, query: &Query) -> Vec<Reference<Span>> {
    let mut parser = Parser::new();
    if parser.set_language(lang).is_err() {
        return Vec::new();
    }

    let Some(tree) = parser.parse(source, None) else {
        return Vec::new();
    };

    let names = query.capture_names();
    let mut cursor = QueryCursor::new();
    let matches = cursor.matches(query, tree.root_node(), source.as_bytes());
    let mut refs = Vec::new();

    for m in matches {
        for capture in m.captures {
            let kind = match names.get(capture.index as usize).map(String::as_str) {
                Some("import") => ReferenceKind::Import,
                Some("require") => ReferenceKind::Require,
                _ => continue,
            };
            let Ok(text) = capture.node.utf8_text(source.as_bytes()) else {
                continue;
            };
            let start = capture.node.start_position();
            refs.push(Reference {
                specifier: clean_text(text),
                kind,
                location: Span {
                    line: start.row + 1,
                    column: start.column + 1,
                },
            });
        }
    }

    refs
}

fn clean_text(text: &str) -> String {
    text.trim_matches(|c| c == '"' || c == '\'' || c == '`')
        .to_string()
}

fn compile_query(lang: Language) -> Option<Query> {
    match Query::new(lang, REFERENCE_QUERY) {
        Ok(q) => Some(q),
        Err(e) => {
            error!("invalid reference query: {e}");
            None
        }
    }
}
