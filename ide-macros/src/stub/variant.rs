//! Variant classification for macro entries.
//!
//! Macros default to the static declaration style; a doc-comment marker
//! overrides the classification. Marker detection is a plain substring
//! search, not a parser: the marker grammar is trivial and fixed.

use crate::model::MacroEntry;

use super::types::StubVariant;

/// Doc-comment marker forcing the instantiated declaration style.
const INSTANTIATED_MARKER: &str = "@instantiated";
/// Doc-comment marker forcing the static declaration style.
const STATIC_MARKER: &str = "@static";

/// Mixin lifecycle hooks, never emitted as callable macros.
const RESERVED_NAMES: [&str; 2] = ["__construct", "__destruct"];

/// Variant override parsed from a doc comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantHint {
    /// No marker present; the entry defaults to static.
    None,
    /// The doc comment carries `@instantiated`.
    ForceInstantiated,
    /// The doc comment carries `@static`.
    ForceStatic,
}

impl VariantHint {
    /// Parses the variant hint from an optional doc comment.
    ///
    /// `@instantiated` takes precedence when both markers appear; the
    /// dual-marker case is still excluded from the instantiated
    /// artifact by [`includes_entry`].
    #[must_use]
    pub fn parse(doc_comment: Option<&str>) -> Self {
        let Some(doc) = doc_comment else {
            return Self::None;
        };
        if doc.contains(INSTANTIATED_MARKER) {
            Self::ForceInstantiated
        } else if doc.contains(STATIC_MARKER) {
            Self::ForceStatic
        } else {
            Self::None
        }
    }
}

/// Decides whether `entry` belongs in an artifact of the given variant.
///
/// Reserved lifecycle names are excluded everywhere. Unannotated and
/// `@static` entries render only in the static artifact; `@instantiated`
/// entries render only in the instantiated artifact. An entry carrying
/// both markers renders in neither.
#[must_use]
pub fn includes_entry(entry: &MacroEntry, variant: StubVariant) -> bool {
    if RESERVED_NAMES.contains(&entry.name.as_str()) {
        return false;
    }
    let doc = entry.doc_comment.as_deref();
    match variant {
        StubVariant::Static => !matches!(VariantHint::parse(doc), VariantHint::ForceInstantiated),
        StubVariant::Instantiated => {
            matches!(VariantHint::parse(doc), VariantHint::ForceInstantiated)
                && !doc.is_some_and(|text| text.contains(STATIC_MARKER))
        }
    }
}
