use std::collections::{HashMap, HashSet};

use crate::model::{DynamicField, FieldConfigMap};

/// Reserved table action column — never rendered in forms.
pub const ACTION_KEY: &str = "action";

/// Compute the field keys to render.
///
/// Candidates are the static schema keys (minus `action`) followed by the
/// dynamic field names. An empty column config shows everything.
/// Otherwise a field survives when its static config marks it required,
/// or when the column config leaves it unset or set to `true`.
///
/// Only a *static* required flag forces visibility. A dynamic field's
/// `is_required` drives its validation rule and nothing else.
pub fn visible_fields(
    field_config: &FieldConfigMap,
    dynamic_fields: &[DynamicField],
    column_config: &HashMap<String, bool>,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for key in field_config.keys() {
        if key == ACTION_KEY {
            continue;
        }
        if seen.insert(key.as_str()) {
            candidates.push(key.clone());
        }
    }
    for field in dynamic_fields {
        if seen.insert(field.field_name.as_str()) {
            candidates.push(field.field_name.clone());
        }
    }

    if column_config.is_empty() {
        return candidates;
    }

    candidates.retain(|key| {
        if key == ACTION_KEY {
            return false;
        }
        if field_config.get(key).is_some_and(|cfg| cfg.required) {
            return true;
        }
        column_config.get(key).copied().unwrap_or(true)
    });
    candidates
}
