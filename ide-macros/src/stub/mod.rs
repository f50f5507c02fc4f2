//! Stub emitter for `ide-macros`.
//!
//! Consumes an ordered class list plus a [`MetadataProvider`] and
//! produces the PHP stub text for one variant: a `<?php` header
//! followed by namespace blocks, each wrapping one class block of
//! empty-bodied function declarations. Output is deterministic:
//! identical inputs yield byte-identical artifacts.

pub mod literal;
pub mod signature;
mod types;
pub mod variant;
pub mod writer;

pub use types::{ArtifactPlan, StubOutput, StubVariant};

use crate::error::IdeMacrosError;
use crate::manifest::MetadataProvider;
use crate::model::{ClassIdentifier, MacroEntry};

/// Generates and writes every planned artifact in order.
///
/// Classes are resolved once per artifact against the provider; the
/// read-only inputs are safe to reuse across artifacts.
///
/// # Errors
///
/// Returns [`IdeMacrosError::Io`] when an artifact cannot be written;
/// generation stops at the failing artifact.
pub fn generate(
    classes: &[ClassIdentifier],
    provider: &dyn MetadataProvider,
    plans: &[ArtifactPlan],
) -> Result<StubOutput, IdeMacrosError> {
    let mut output = StubOutput::new();
    for plan in plans {
        let content = generate_to_string(classes, provider, plan.variant);
        let path = writer::write_stub(&plan.path, &content)?;
        output.add_file(path);
    }
    Ok(output)
}

/// Generates one artifact's content as a string without touching disk.
///
/// Useful for testing and golden file generation.
#[must_use]
pub fn generate_to_string(
    classes: &[ClassIdentifier],
    provider: &dyn MetadataProvider,
    variant: StubVariant,
) -> String {
    let mut content = String::from("<?php\n");
    for class in classes {
        let Some(entries) = provider.resolve(class) else {
            tracing::debug!(class = %class.fqcn(), "class not applicable, skipping");
            continue;
        };
        if let Some(block) = render_class_block(class, &entries, variant) {
            content.push('\n');
            content.push_str(&block);
        }
    }
    content
}

/// Renders one namespace-wrapped class block, or `None` when every
/// entry is filtered out — empty containers are never emitted.
fn render_class_block(
    class: &ClassIdentifier,
    entries: &[MacroEntry],
    stub_variant: StubVariant,
) -> Option<String> {
    let kept: Vec<&MacroEntry> = entries
        .iter()
        .filter(|entry| variant::includes_entry(entry, stub_variant))
        .collect();
    if kept.is_empty() {
        return None;
    }

    let mut block = if class.namespace.is_empty() {
        String::from("namespace {\n")
    } else {
        format!("namespace {} {{\n", class.namespace)
    };
    block.push_str(&format!("    class {} {{\n", class.short_name));
    for (index, entry) in kept.iter().enumerate() {
        if index > 0 {
            block.push('\n');
        }
        block.push_str(&signature::render_entry(entry, stub_variant, 2));
    }
    block.push_str("    }\n}\n");
    Some(block)
}
