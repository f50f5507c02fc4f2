//! Declaration rendering for macro entries.
//!
//! Produces one empty-bodied PHP function declaration per entry: the
//! doc comment (verbatim, re-indented), a `public` / `public static`
//! header, the parameter list, and an optional return type. No
//! executable code is reproduced; only the signature is a contract.

use crate::model::{MacroEntry, ParameterSpec};

use super::literal;
use super::types::StubVariant;

/// Renders one entry as an indented declaration block.
///
/// `level` is the nesting depth in four-space indents (two inside a
/// namespace and class block). The result always ends with a newline.
#[must_use]
pub fn render_entry(entry: &MacroEntry, variant: StubVariant, level: usize) -> String {
    let pad = "    ".repeat(level);
    let mut out = String::new();

    if let Some(doc) = &entry.doc_comment {
        out.push_str(&reindent_doc(doc, &pad));
    }

    out.push_str(&pad);
    out.push_str("public ");
    if variant.is_static() {
        out.push_str("static ");
    }
    out.push_str("function ");
    out.push_str(&entry.name);
    out.push('(');
    let parameters: Vec<String> = entry.parameters.iter().map(render_parameter).collect();
    out.push_str(&parameters.join(", "));
    out.push(')');
    if let Some(return_type) = &entry.return_type {
        out.push_str(": ");
        out.push_str(return_type);
    }
    out.push_str(" {\n");
    out.push_str(&pad);
    out.push_str("}\n");
    out
}

/// Renders a single parameter.
///
/// An unrenderable default is dropped for that parameter alone; the
/// parameter then reads as required while its siblings are unaffected.
fn render_parameter(parameter: &ParameterSpec) -> String {
    let mut out = String::new();
    if let Some(hint) = &parameter.type_hint {
        out.push_str(hint);
        out.push(' ');
    }
    if parameter.variadic {
        out.push_str("...");
    }
    out.push('$');
    out.push_str(&parameter.name);
    if parameter.variadic {
        // A variadic never carries a default.
        return out;
    }
    if let Some(default) = &parameter.default {
        match literal::render(default) {
            Ok(text) => {
                out.push_str(" = ");
                out.push_str(&text);
            }
            Err(_) => {
                tracing::debug!(
                    parameter = %parameter.name,
                    "dropping unrenderable default value"
                );
            }
        }
    }
    out
}

/// Re-indents a doc comment block to the target level.
///
/// Continuation lines beginning with `*` get the conventional one-space
/// offset so the comment stays aligned under its opening `/**`.
fn reindent_doc(doc: &str, pad: &str) -> String {
    let mut out = String::new();
    for (index, line) in doc.lines().enumerate() {
        let trimmed = line.trim();
        out.push_str(pad);
        if index > 0 && trimmed.starts_with('*') {
            out.push(' ');
        }
        out.push_str(trimmed);
        out.push('\n');
    }
    out
}
