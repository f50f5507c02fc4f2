//! Domain model for macro stub generation.
//!
//! These types describe what the generator consumes: which classes to
//! probe, and the externally visible signature of each registered macro.
//! Parameter and default-value types double as the manifest wire schema,
//! so they carry serde derives.

use serde::{Deserialize, Serialize};

/// A fully-qualified class name, decomposed into namespace and short name.
///
/// Input order of identifiers is preserved all the way to the artifact;
/// the generator never sorts classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassIdentifier {
    /// Namespace portion, empty for classes in the global namespace.
    pub namespace: String,
    /// Class name without its namespace.
    pub short_name: String,
}

impl ClassIdentifier {
    /// Parses a fully-qualified PHP class name.
    ///
    /// A leading backslash is tolerated and dropped, matching how class
    /// lists are conventionally written (`\Illuminate\Support\Str`).
    ///
    /// # Examples
    ///
    /// ```
    /// use ide_macros::model::ClassIdentifier;
    ///
    /// let class = ClassIdentifier::parse("\\Illuminate\\Support\\Collection");
    /// assert_eq!(class.namespace, "Illuminate\\Support");
    /// assert_eq!(class.short_name, "Collection");
    ///
    /// let global = ClassIdentifier::parse("Redirect");
    /// assert_eq!(global.namespace, "");
    /// assert_eq!(global.short_name, "Redirect");
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let trimmed = name.trim_start_matches('\\');
        match trimmed.rsplit_once('\\') {
            Some((namespace, short_name)) => Self {
                namespace: namespace.to_owned(),
                short_name: short_name.to_owned(),
            },
            None => Self {
                namespace: String::new(),
                short_name: trimmed.to_owned(),
            },
        }
    }

    /// Returns the fully-qualified name without a leading backslash.
    #[must_use]
    pub fn fqcn(&self) -> String {
        if self.namespace.is_empty() {
            self.short_name.clone()
        } else {
            format!("{}\\{}", self.namespace, self.short_name)
        }
    }
}

/// One registered macro, resolved to its externally visible signature.
///
/// Entries keep the insertion order of the class's macro table.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroEntry {
    /// Macro name, unique within its class's macro table.
    pub name: String,
    /// Ordered parameter list.
    pub parameters: Vec<ParameterSpec>,
    /// Raw doc comment block, if the callable carried one.
    pub doc_comment: Option<String>,
    /// Declared return type name, if any.
    pub return_type: Option<String>,
}

/// Externally visible description of a single parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name without the `$` sigil.
    pub name: String,
    /// Type annotation, if declared.
    #[serde(default)]
    pub type_hint: Option<String>,
    /// Whether this is the spread parameter (at most one, always last).
    #[serde(default)]
    pub variadic: bool,
    /// Default value, if the parameter is optional.
    #[serde(default)]
    pub default: Option<DefaultValue>,
}

/// A runtime default value awaiting literal rendering.
///
/// Anything outside this enumerated set of kinds is represented as
/// [`DefaultValue::Opaque`] and degrades to "no default" at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    /// The `null` value.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered array, plain or associative.
    Array(Vec<ArrayEntry>),
    /// An unrenderable value (object instance, closure, resource);
    /// carries the runtime type name for diagnostics.
    Opaque(String),
}

/// One element of an array default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayEntry {
    /// Explicit key for associative entries; `None` for list entries.
    #[serde(default)]
    pub key: Option<ArrayKey>,
    /// Element value.
    pub value: DefaultValue,
}

/// Key of an associative array entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayKey {
    /// Integer key.
    Int(i64),
    /// String key.
    Str(String),
}
