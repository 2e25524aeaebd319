//! Navigation helpers over the generic value tree.

use serde_json::Value;

use crate::schema::Category;

/// The entity list for a category, or an empty slice when the section or
/// list is absent or has the wrong shape.
pub fn entities(tree: &Value, category: Category) -> &[Value] {
    let mut node = tree;
    for key in category.path() {
        match node.get(key) {
            Some(next) => node = next,
            None => return &[],
        }
    }
    node.as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// Mutable access to a category's entity list, if it exists and is a list.
pub fn entities_mut(tree: &mut Value, category: Category) -> Option<&mut Vec<Value>> {
    let mut node = tree;
    for key in category.path() {
        node = node.get_mut(key)?;
    }
    node.as_array_mut()
}

/// Render a scalar as text. Strings are taken verbatim; null, sequences, and
/// mappings have no text form.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// A strictly positive integer that fits the 32-bit registers it feeds.
pub fn positive_u32(value: &Value) -> Option<u32> {
    value
        .as_u64()
        .filter(|&n| n > 0)
        .and_then(|n| u32::try_from(n).ok())
}
