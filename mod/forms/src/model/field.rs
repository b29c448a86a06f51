use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A page's static field schema, keyed by field key.
///
/// Insertion order is preserved — it is the tie-break order when fields
/// share the same display order.
pub type FieldConfigMap = IndexMap<String, FieldConfig>;

/// Declared type of a field, parsed from its wire string.
///
/// Widget selection matches on this closed enum; anything unrecognized
/// falls through to `Other` and renders as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
    Integer,
    Float,
    Checkbox,
    Boolean,
    Date,
    DateTime,
    Select,
    Selection,
    /// Unrecognized type string.
    Other,
}

impl FieldType {
    /// Map a declared type string to its enum variant.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "text" => Self::Text,
            "number" => Self::Number,
            "integer" => Self::Integer,
            "float" => Self::Float,
            "checkbox" => Self::Checkbox,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "select" => Self::Select,
            "selection" => Self::Selection,
            _ => Self::Other,
        }
    }
}

/// Static field configuration — one entry of a page's fixed schema.
///
/// The `action` key is reserved for the table action column and is never
/// rendered in forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Display label.
    pub title: String,

    /// Required fields are always visible, regardless of column config.
    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,

    /// Declared type string (see [`FieldType`]).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    /// Raw option payload for choice fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    /// Explicit display position within the form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<f64>,

    /// Fallback ordering value when no display order is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,
}

impl FieldConfig {
    /// A minimal config with just a label — the common case in page schemas.
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            required: false,
            readonly: None,
            field_type: None,
            options: None,
            help_text: None,
            default_value: None,
            display_order: None,
            sort_order: None,
        }
    }
}
