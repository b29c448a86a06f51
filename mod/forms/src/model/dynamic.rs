use serde::{Deserialize, Serialize};

/// DynamicField — a tenant-defined extension field layered onto a base
/// entity form.
///
/// `field_name` is unique across the service. `form_name` names the form
/// schema the field extends; `page_name` assigns it to a tab within that
/// form (unset means the default basic page).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DynamicField {
    /// Internal ID.
    #[serde(default)]
    pub id: String,

    /// Unique field key.
    pub field_name: String,

    /// Display label.
    pub field_label: String,

    /// Declared type string (see [`super::FieldType`]).
    pub field_type: String,

    /// Affects the field's validation rule, not its visibility.
    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub is_readonly: bool,

    /// Raw option payload — may be a JSON-encoded string or an inline
    /// object/array. Parsed leniently at widget-selection time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_options: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    /// Explicit display position; unset sorts into the dynamic default slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<f64>,

    /// Form schema this field extends.
    #[serde(default)]
    pub form_name: String,

    /// Tab page within the form; unset means the default basic page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}
