//! Macro manifest wire schema and the metadata provider boundary.
//!
//! The generator never touches a live runtime. Instead the host
//! environment dumps a **macro manifest**: a JSON document listing, for
//! each class, the macro tables it exposes (keyed by the property name
//! they were found under, such as `macros` or `globalMacros`) and the
//! introspected signature of each registered callable. Plain functions,
//! bound method pairs, and invokable objects all collapse into one
//! [`CallableSignature`] on the host side, so nothing downstream
//! branches on callable kind.

use std::collections::{BTreeMap, HashMap};

use camino::Utf8Path;
use serde::Deserialize;

use crate::error::IdeMacrosError;
use crate::fs_helpers;
use crate::model::{ClassIdentifier, MacroEntry, ParameterSpec};

/// Top-level macro manifest document.
#[derive(Debug, Clone, Deserialize)]
pub struct MacroManifest {
    /// Class records, in no particular order; the generator's input
    /// class list decides output order.
    pub classes: Vec<ClassRecord>,
}

/// Manifest record for a single class.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassRecord {
    /// Fully-qualified class name (leading backslash tolerated).
    pub name: String,
    /// Macro tables keyed by the property name they were found under.
    /// Entry order within each table is the macro table's insertion
    /// order and is preserved.
    #[serde(default)]
    pub tables: BTreeMap<String, Vec<MacroRecord>>,
}

/// Manifest record for a single registered macro.
#[derive(Debug, Clone, Deserialize)]
pub struct MacroRecord {
    /// Macro name as registered on the class.
    pub name: String,
    /// Introspected signature; absent when the underlying callable
    /// could not be introspected (unsupported runtime construct).
    #[serde(default)]
    pub signature: Option<CallableSignature>,
}

/// The one signature abstraction all callable shapes collapse into.
#[derive(Debug, Clone, Deserialize)]
pub struct CallableSignature {
    /// Ordered parameter list.
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// Declared return type name, if any.
    #[serde(default)]
    pub return_type: Option<String>,
    /// Raw doc comment block, if the callable carried one.
    #[serde(default)]
    pub doc_comment: Option<String>,
}

/// Loads and parses a macro manifest from disk.
///
/// # Errors
///
/// Returns [`IdeMacrosError::ManifestRead`] when the file cannot be
/// opened or read and [`IdeMacrosError::ManifestJson`] when it is not a
/// valid manifest document.
pub fn load(path: &Utf8Path) -> Result<MacroManifest, IdeMacrosError> {
    let json = fs_helpers::read_file(path).map_err(|io_err| IdeMacrosError::ManifestRead {
        path: path.to_path_buf(),
        source: io_err,
    })?;
    serde_json::from_str(&json).map_err(|json_err| IdeMacrosError::ManifestJson {
        path: path.to_path_buf(),
        source: json_err,
    })
}

/// Boundary contract between the generator and the host runtime's
/// introspection facilities.
pub trait MetadataProvider {
    /// Resolves the macro entries registered on a class.
    ///
    /// Returns `None` when the class is not applicable: unknown to the
    /// provider, or exposing no recognised macro-table property. An
    /// empty `Vec` means "class exists but has no macros registered"
    /// and is filtered out by the generator, not treated as an error.
    fn resolve(&self, class: &ClassIdentifier) -> Option<Vec<MacroEntry>>;
}

/// [`MetadataProvider`] backed by a loaded [`MacroManifest`].
#[derive(Debug)]
pub struct ManifestProvider<'a> {
    by_name: HashMap<String, &'a ClassRecord>,
    field_names: &'a [String],
}

impl<'a> ManifestProvider<'a> {
    /// Builds a provider over `manifest`, probing each class's tables
    /// with `field_names` in order; the first matching table wins.
    #[must_use]
    pub fn new(manifest: &'a MacroManifest, field_names: &'a [String]) -> Self {
        let by_name = manifest
            .classes
            .iter()
            .map(|record| (record.name.trim_start_matches('\\').to_owned(), record))
            .collect();
        Self {
            by_name,
            field_names,
        }
    }
}

impl MetadataProvider for ManifestProvider<'_> {
    fn resolve(&self, class: &ClassIdentifier) -> Option<Vec<MacroEntry>> {
        let record = self.by_name.get(&class.fqcn())?;
        let table = self
            .field_names
            .iter()
            .find_map(|field| record.tables.get(field))?;
        let entries = table
            .iter()
            .filter_map(|macro_record| resolve_entry(&record.name, macro_record))
            .collect();
        Some(entries)
    }
}

/// Resolves one macro record, skipping unintrospectable callables.
fn resolve_entry(class_name: &str, record: &MacroRecord) -> Option<MacroEntry> {
    let Some(signature) = &record.signature else {
        tracing::debug!(
            class = class_name,
            macro_name = %record.name,
            "skipping macro with unintrospectable callable"
        );
        return None;
    };
    Some(MacroEntry {
        name: record.name.clone(),
        parameters: signature.parameters.clone(),
        doc_comment: signature.doc_comment.clone(),
        return_type: signature.return_type.clone(),
    })
}
