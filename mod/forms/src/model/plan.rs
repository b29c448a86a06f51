use serde::{Deserialize, Serialize};

use super::schema::ModalOptions;

/// One selectable option of a choice widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectOption {
    pub label: String,
    /// Option value — string or number, kept as supplied.
    pub value: serde_json::Value,
}

/// Concrete input widget for one resolved field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    /// Single-line text input.
    Input,
    /// Multiline text input.
    Textarea,
    /// Numeric input, optionally seeded with a parsed default.
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<f64>,
    },
    /// On/off toggle.
    Switch {
        #[serde(default)]
        checked: bool,
    },
    /// Date picker.
    Date,
    /// Date-and-time picker.
    Datetime,
    /// Single-choice select.
    Select { options: Vec<SelectOption> },
}

/// Which widget property the field's value binds to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Binding {
    /// Ordinary inputs bind to the widget's value.
    Value,
    /// Toggles bind to the widget's checked state.
    Checked,
}

/// A fully resolved form field, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub key: String,
    pub label: String,
    pub widget: Widget,

    /// When true, a non-empty validation rule is attached.
    pub required: bool,

    #[serde(default)]
    pub readonly: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    pub bind: Binding,

    /// True when the field comes from a tenant-defined dynamic field.
    #[serde(default)]
    pub dynamic: bool,
}

/// One rendered tab of the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormTab {
    pub key: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    pub fields: Vec<FormField>,
}

/// The resolver output — everything the front end needs to draw the
/// tabbed modal form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormPlan {
    /// Form schema name.
    pub form_name: String,

    pub modal: ModalOptions,

    /// Tabs in display order. Groups that resolved to zero fields are
    /// not present.
    pub tabs: Vec<FormTab>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_serializes_tagged() {
        let w = Widget::Select {
            options: vec![SelectOption {
                label: "Red".into(),
                value: serde_json::json!("r"),
            }],
        };
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["kind"], "select");
        assert_eq!(json["options"][0]["label"], "Red");

        let json = serde_json::to_value(Widget::Number { default: Some(3.0) }).unwrap();
        assert_eq!(json["kind"], "number");
        assert_eq!(json["default"], 3.0);

        let json = serde_json::to_value(Widget::Datetime).unwrap();
        assert_eq!(json["kind"], "datetime");
    }

    #[test]
    fn binding_wire_form() {
        assert_eq!(serde_json::to_string(&Binding::Checked).unwrap(), "\"checked\"");
        assert_eq!(serde_json::to_string(&Binding::Value).unwrap(), "\"value\"");
    }
}
