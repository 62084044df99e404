//! Helpers shared by the code-generating formats.

use std::collections::HashSet;

use nbe_project::Project;

use crate::error::{FormatError, FormatResult};

/// Lowercase name with every character outside `[a-z0-9_]` replaced by `_`.
pub fn identifier(name: &str) -> String {
    let ident: String = name
        .trim()
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if ident.is_empty() {
        "node".to_string()
    } else {
        ident
    }
}

/// One identifier per node, in order. A sanitized name already taken by an
/// earlier node gets the first free `_N` suffix.
pub fn node_identifiers(project: &Project) -> Vec<String> {
    let mut taken = HashSet::new();
    project
        .nodes
        .iter()
        .map(|node| {
            let base = identifier(&node.name);
            let mut ident = base.clone();
            let mut suffix = 2;
            while !taken.insert(ident.clone()) {
                ident = format!("{}_{}", base, suffix);
                suffix += 1;
            }
            ident
        })
        .collect()
}

/// Text safe to place after a line comment marker: control characters,
/// line breaks included, become spaces.
pub fn comment_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Double-quoted string literal valid in both Lua and C++.
pub fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn ensure_exportable(project: &Project) -> FormatResult<()> {
    if project.nodes.is_empty() {
        return Err(FormatError::Unknown(
            "Project has no nodes to export".to_string(),
        ));
    }
    Ok(())
}

pub fn render_error(err: std::fmt::Error) -> FormatError {
    FormatError::Unknown(format!("Failed to generate code: {}", err))
}
