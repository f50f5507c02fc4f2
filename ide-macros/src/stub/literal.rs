//! Default-value literal renderer.
//!
//! Converts opaque runtime default values into PHP literal text that
//! parses back to the identical value. Every supported value kind is
//! handled explicitly; anything else is the controlled
//! [`Unrenderable`] failure, which the signature renderer degrades to
//! "no default" for that one parameter.

use thiserror::Error;

use crate::model::{ArrayEntry, ArrayKey, DefaultValue};

/// A default value that cannot be expressed as a literal.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("default value cannot be rendered as a literal")]
pub struct Unrenderable;

/// Renders a default value as PHP literal text.
///
/// # Examples
///
/// ```
/// use ide_macros::model::DefaultValue;
/// use ide_macros::stub::literal::render;
///
/// assert_eq!(render(&DefaultValue::Int(5)), Ok("5".to_owned()));
/// assert_eq!(render(&DefaultValue::Str("ok".to_owned())), Ok("'ok'".to_owned()));
/// assert_eq!(render(&DefaultValue::Bool(false)), Ok("false".to_owned()));
/// ```
///
/// # Errors
///
/// Returns [`Unrenderable`] for opaque values (objects, closures) and
/// non-finite floats.
pub fn render(value: &DefaultValue) -> Result<String, Unrenderable> {
    match value {
        DefaultValue::Null => Ok("null".to_owned()),
        DefaultValue::Bool(flag) => Ok(if *flag { "true" } else { "false" }.to_owned()),
        DefaultValue::Int(number) => Ok(number.to_string()),
        DefaultValue::Float(number) => render_float(*number),
        DefaultValue::Str(text) => Ok(render_str(text)),
        DefaultValue::Array(entries) => render_array(entries),
        DefaultValue::Opaque(_) => Err(Unrenderable),
    }
}

/// Renders a float using the shortest representation that round-trips.
///
/// Rust's `Debug` formatting always includes a decimal point or an
/// exponent, both of which PHP parses as float literals, so `5.0` never
/// degrades to the integer literal `5`. Non-finite values have no PHP
/// literal form and are unrenderable.
fn render_float(number: f64) -> Result<String, Unrenderable> {
    if !number.is_finite() {
        return Err(Unrenderable);
    }
    Ok(format!("{number:?}"))
}

/// Renders a string literal, single-quoted where possible.
///
/// Single-quoted PHP strings only support `\\` and `\'` escapes, so any
/// string containing control characters switches to a double-quoted
/// literal with full escaping.
fn render_str(text: &str) -> String {
    if text.chars().any(char::is_control) {
        render_double_quoted(text)
    } else {
        let mut out = String::with_capacity(text.len() + 2);
        out.push('\'');
        for ch in text.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                _ => out.push(ch),
            }
        }
        out.push('\'');
        out
    }
}

fn render_double_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            '\u{0C}' => out.push_str("\\f"),
            _ if ch.is_control() && ch.is_ascii() => {
                out.push_str(&format!("\\x{:02X}", u32::from(ch)));
            }
            _ if ch.is_control() => {
                out.push_str(&format!("\\u{{{:X}}}", u32::from(ch)));
            }
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Renders an array literal, preserving element order and keys.
fn render_array(entries: &[ArrayEntry]) -> Result<String, Unrenderable> {
    let mut rendered = Vec::with_capacity(entries.len());
    for entry in entries {
        let value = render(&entry.value)?;
        match &entry.key {
            Some(key) => rendered.push(format!("{} => {value}", render_key(key))),
            None => rendered.push(value),
        }
    }
    Ok(format!("[{}]", rendered.join(", ")))
}

fn render_key(key: &ArrayKey) -> String {
    match key {
        ArrayKey::Int(number) => number.to_string(),
        ArrayKey::Str(text) => render_str(text),
    }
}
