// Author: Alexander Starov
// License: MIT

use std::fs;
use std::path::Path;

use serde::ser::{Serialize, Serializer};
use serde_json::json;

use crate::ast::{Document, Value};
use crate::FplError;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Object(entries) => serializer.collect_map(entries),
        }
    }
}

/// Serializes as a map of block name to a map of properties.
impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Integral numbers within this magnitude are exported as JSON integers.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Convert a single FPL value to its JSON equivalent.
///
/// Strings and booleans map directly. Numbers without a fractional part, up to
/// 2^53 - 1 in magnitude, become JSON integers so they deserialize into integer
/// fields; the rest stay floats.
/// Arrays and objects become nested JSON structures.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::String(s) => json!(s),
        Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => json!(*n as i64),
        Value::Number(n) => json!(n),
        Value::Boolean(b) => json!(b),
        Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(value_to_json).collect())
        }
        Value::Object(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}

/// Convert a whole document to a JSON object keyed by block name.
///
/// # Examples
/// ```
/// let doc = fpl_cfg::parse("@app { name: \"demo\" }").unwrap();
/// let json = fpl_cfg::export::document_to_json(&doc);
/// assert_eq!(json["app"]["name"], "demo");
/// ```
pub fn document_to_json(doc: &Document) -> serde_json::Value {
    let blocks = doc
        .iter()
        .map(|(name, props)| {
            let props = props
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect::<serde_json::Map<_, _>>();
            (name.clone(), serde_json::Value::Object(props))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(blocks)
}

/// Read, parse, and convert an FPL file in one call.
///
/// # Errors
/// Returns error if the file can't be read or contains invalid FPL.
pub fn export_file<P: AsRef<Path>>(path: P) -> Result<serde_json::Value, FplError> {
    let input = fs::read_to_string(&path).map_err(|e| FplError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.as_ref().to_string_lossy().to_string(),
        hint: None,
        code: Some(302),
    })?;

    let doc = crate::parse(&input)?;
    Ok(document_to_json(&doc))
}
