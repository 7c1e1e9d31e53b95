use anyhow::Result;
use colored::{ColoredString, Colorize};

use tsym_common::uri::uri_to_relative_path;
use tsym_index::{Declaration, DeclarationKind};

/// Rewrite every location's file path relative to `root`.
pub fn relativize(declarations: &mut [Declaration], root: &str) {
    for declaration in declarations {
        declaration.location.file_path =
            uri_to_relative_path(&declaration.location.file_path, root);
    }
}

pub fn render_json(declarations: &[Declaration], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(declarations)?
    } else {
        serde_json::to_string(declarations)?
    };
    Ok(json)
}

/// One line per declaration: `kind path file:line:col`, 1-based for humans.
pub fn render_text(declarations: &[Declaration], color: bool) -> String {
    let width = declarations
        .iter()
        .map(|d| d.kind.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (index, declaration) in declarations.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let kind = format!("{:<width$}", declaration.kind.as_str());
        let start = declaration.location.range.start;
        let location = format!(
            "{}:{}:{}",
            declaration.location.file_path,
            start.line + 1,
            start.character + 1
        );

        if color {
            out.push_str(&format!(
                "{} {} {}",
                paint_kind(declaration.kind, &kind),
                declaration.path.bold(),
                location.dimmed()
            ));
        } else {
            out.push_str(&format!("{kind} {} {location}", declaration.path));
        }
    }
    out
}

fn paint_kind(kind: DeclarationKind, text: &str) -> ColoredString {
    match kind {
        DeclarationKind::Class | DeclarationKind::Interface => text.yellow(),
        DeclarationKind::Function | DeclarationKind::Method => text.blue(),
        DeclarationKind::Variable => text.green(),
        DeclarationKind::Enum => text.magenta(),
        DeclarationKind::Property => text.cyan(),
    }
}
