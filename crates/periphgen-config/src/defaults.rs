//! Default application for optional entity fields.
//!
//! Every entity of every category gets each field from its category's
//! defaults table that it does not already carry. A field that is present,
//! even as null, is left alone, which makes the pass idempotent. No
//! validation happens here; malformed entities are defaulted all the same.

use std::fmt;

use serde_json::Value;

use crate::schema::{Category, DefaultValue};
use crate::tree::{entities_mut, scalar_text};

/// Record of one field filled in from the defaults table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedDefault {
    pub category: Category,
    /// Pin identifier or instance name, or the category placeholder.
    pub entity: String,
    pub field: &'static str,
    pub value: DefaultValue,
}

impl fmt::Display for AppliedDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "applied default {}='{}' to {}",
            self.field, self.value, self.entity
        )
    }
}

/// A defaulted document tree plus the record of what was filled.
#[derive(Debug, Clone)]
pub struct Defaulted {
    pub tree: Value,
    pub applied: Vec<AppliedDefault>,
}

/// Fill absent optional fields, returning a new tree.
pub fn apply_defaults(tree: &Value) -> Defaulted {
    let mut tree = tree.clone();
    let mut applied = Vec::new();

    for category in Category::ALL {
        let Some(list) = entities_mut(&mut tree, category) else {
            continue;
        };
        for entity in list.iter_mut() {
            let Some(fields) = entity.as_object_mut() else {
                continue;
            };
            let label = fields
                .get(category.identity_field())
                .and_then(scalar_text)
                .unwrap_or_else(|| category.placeholder().to_string());

            for default in category.defaults() {
                if fields.contains_key(default.field) {
                    continue;
                }
                fields.insert(default.field.to_string(), default.value.to_value());
                applied.push(AppliedDefault {
                    category,
                    entity: label.clone(),
                    field: default.field,
                    value: default.value,
                });
            }
        }
    }

    Defaulted { tree, applied }
}
