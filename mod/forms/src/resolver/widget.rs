use serde_json::Value;

use crate::model::{
    Binding, DynamicField, FieldConfigMap, FieldType, FormField, SelectOption, Widget,
};

/// Resolve one field key to a renderable form field.
///
/// Dynamic configuration takes precedence over static when both exist
/// under the same key. Returns `None` when neither side knows the key —
/// the field is silently skipped.
pub fn resolve_field(
    key: &str,
    field_config: &FieldConfigMap,
    dynamic_fields: &[DynamicField],
) -> Option<FormField> {
    if let Some(field) = dynamic_fields.iter().find(|d| d.field_name == key) {
        return Some(dynamic_widget(field));
    }
    field_config.get(key).map(|cfg| static_widget(key, cfg))
}

/// Widget selection for a dynamic field, by declared type.
fn dynamic_widget(field: &DynamicField) -> FormField {
    let (widget, bind) = match FieldType::parse(&field.field_type) {
        FieldType::Text => (Widget::Textarea, Binding::Value),
        FieldType::Number | FieldType::Integer | FieldType::Float => (
            Widget::Number {
                default: numeric_default(field.default_value.as_ref()),
            },
            Binding::Value,
        ),
        FieldType::Checkbox | FieldType::Boolean => (
            Widget::Switch {
                checked: default_is_true(field.default_value.as_ref()),
            },
            Binding::Checked,
        ),
        FieldType::Date => (Widget::Date, Binding::Value),
        FieldType::DateTime => (Widget::Datetime, Binding::Value),
        FieldType::Select | FieldType::Selection => {
            let options = parse_select_options(field.field_options.as_ref());
            if options.is_empty() {
                // No usable options — fail open to free text.
                (Widget::Input, Binding::Value)
            } else {
                (Widget::Select { options }, Binding::Value)
            }
        }
        FieldType::Other => (Widget::Input, Binding::Value),
    };

    FormField {
        key: field.field_name.clone(),
        label: field.field_label.clone(),
        widget,
        required: field.is_required,
        readonly: field.is_readonly,
        help_text: field.help_text.clone(),
        bind,
        dynamic: true,
    }
}

/// Widget selection for a static field, by field key.
fn static_widget(key: &str, cfg: &crate::model::FieldConfig) -> FormField {
    let (widget, bind) = match key {
        "is_enabled" => (
            Widget::Switch {
                checked: default_is_true(cfg.default_value.as_ref()),
            },
            Binding::Checked,
        ),
        "sort_order" => (
            Widget::Number {
                default: numeric_default(cfg.default_value.as_ref()),
            },
            Binding::Value,
        ),
        "description" => (Widget::Textarea, Binding::Value),
        _ => (Widget::Input, Binding::Value),
    };

    FormField {
        key: key.to_string(),
        label: cfg.title.clone(),
        widget,
        required: cfg.required,
        readonly: cfg.readonly.unwrap_or(false),
        help_text: cfg.help_text.clone(),
        bind,
        dynamic: false,
    }
}

/// Parse a raw option payload into select options.
///
/// The payload may be a JSON-encoded string or an inline value. A value
/// with an `options` array uses that array; a bare array is used
/// directly; anything else — including unparseable text — yields no
/// options. Never errors.
fn parse_select_options(raw: Option<&Value>) -> Vec<SelectOption> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let decoded = match raw.as_str() {
        Some(text) => match serde_json::from_str::<Value>(text) {
            Ok(value) => value,
            Err(_) => return Vec::new(),
        },
        None => raw.clone(),
    };

    let entries = if let Some(options) = decoded.get("options").and_then(Value::as_array) {
        options
    } else if let Some(array) = decoded.as_array() {
        array
    } else {
        return Vec::new();
    };

    entries.iter().filter_map(option_from_value).collect()
}

/// Build one option: label from `label`/`name`/the value, value from
/// `value`/`id`. Bare strings and numbers stand for both.
fn option_from_value(entry: &Value) -> Option<SelectOption> {
    if let Some(obj) = entry.as_object() {
        let value = obj.get("value").or_else(|| obj.get("id"))?.clone();
        let label = obj
            .get("label")
            .or_else(|| obj.get("name"))
            .map(value_label)
            .unwrap_or_else(|| value_label(&value));
        return Some(SelectOption { label, value });
    }
    if entry.is_string() || entry.is_number() {
        return Some(SelectOption {
            label: value_label(entry),
            value: entry.clone(),
        });
    }
    None
}

fn value_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse a default into a number seed: JSON numbers directly, numeric
/// strings leniently.
fn numeric_default(default: Option<&Value>) -> Option<f64> {
    match default? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A toggle starts checked when the default is boolean true or the
/// string "true".
fn default_is_true(default: Option<&Value>) -> bool {
    match default {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldConfig;
    use serde_json::json;

    fn dynamic(field_type: &str) -> DynamicField {
        serde_json::from_value(json!({
            "fieldName": "extra",
            "fieldLabel": "扩展字段",
            "fieldType": field_type,
        }))
        .unwrap()
    }

    #[test]
    fn select_with_options_object_string() {
        let mut field = dynamic("select");
        field.field_options = Some(json!(r#"{"options":[{"label":"Red","value":"r"}]}"#));
        let resolved = dynamic_widget(&field);
        assert_eq!(
            resolved.widget,
            Widget::Select {
                options: vec![SelectOption {
                    label: "Red".into(),
                    value: json!("r"),
                }],
            }
        );
    }

    #[test]
    fn select_with_bad_json_falls_back_to_input() {
        let mut field = dynamic("select");
        field.field_options = Some(json!("not json"));
        let resolved = dynamic_widget(&field);
        assert_eq!(resolved.widget, Widget::Input);
        assert_eq!(resolved.bind, Binding::Value);
    }

    #[test]
    fn select_with_inline_array() {
        let mut field = dynamic("selection");
        field.field_options = Some(json!([
            {"name": "Steel", "id": 1},
            {"value": "alu"},
            "raw",
        ]));
        let resolved = dynamic_widget(&field);
        let Widget::Select { options } = resolved.widget else {
            panic!("expected select widget");
        };
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, "Steel");
        assert_eq!(options[0].value, json!(1));
        assert_eq!(options[1].label, "alu");
        assert_eq!(options[2].label, "raw");
        assert_eq!(options[2].value, json!("raw"));
    }

    #[test]
    fn select_with_empty_options_falls_back_to_input() {
        let mut field = dynamic("select");
        field.field_options = Some(json!({"options": []}));
        assert_eq!(dynamic_widget(&field).widget, Widget::Input);

        field.field_options = Some(json!({"choices": ["a"]}));
        assert_eq!(dynamic_widget(&field).widget, Widget::Input);

        field.field_options = None;
        assert_eq!(dynamic_widget(&field).widget, Widget::Input);
    }

    #[test]
    fn numeric_types_seed_parsed_default() {
        for ty in ["number", "integer", "float"] {
            let mut field = dynamic(ty);
            field.default_value = Some(json!("42"));
            assert_eq!(
                dynamic_widget(&field).widget,
                Widget::Number { default: Some(42.0) }
            );
        }

        let mut field = dynamic("number");
        field.default_value = Some(json!(3.5));
        assert_eq!(
            dynamic_widget(&field).widget,
            Widget::Number { default: Some(3.5) }
        );

        field.default_value = Some(json!("many"));
        assert_eq!(dynamic_widget(&field).widget, Widget::Number { default: None });
    }

    #[test]
    fn boolean_types_bind_checked() {
        for (default, checked) in [
            (json!(true), true),
            (json!("true"), true),
            (json!("yes"), false),
            (json!(false), false),
        ] {
            let mut field = dynamic("checkbox");
            field.default_value = Some(default);
            let resolved = dynamic_widget(&field);
            assert_eq!(resolved.widget, Widget::Switch { checked });
            assert_eq!(resolved.bind, Binding::Checked);
        }
    }

    #[test]
    fn date_and_datetime_pickers() {
        assert_eq!(dynamic_widget(&dynamic("date")).widget, Widget::Date);
        assert_eq!(dynamic_widget(&dynamic("datetime")).widget, Widget::Datetime);
    }

    #[test]
    fn text_is_multiline_and_unknown_is_input() {
        assert_eq!(dynamic_widget(&dynamic("text")).widget, Widget::Textarea);
        assert_eq!(dynamic_widget(&dynamic("markdown")).widget, Widget::Input);
    }

    #[test]
    fn static_widgets_by_key() {
        let cfg = FieldConfig::titled("字段");
        assert_eq!(
            static_widget("is_enabled", &cfg).widget,
            Widget::Switch { checked: false }
        );
        assert_eq!(static_widget("is_enabled", &cfg).bind, Binding::Checked);
        assert_eq!(
            static_widget("sort_order", &cfg).widget,
            Widget::Number { default: None }
        );
        assert_eq!(static_widget("description", &cfg).widget, Widget::Textarea);
        assert_eq!(static_widget("name", &cfg).widget, Widget::Input);
        assert_eq!(static_widget("name", &cfg).bind, Binding::Value);
    }

    #[test]
    fn dynamic_config_wins_over_static() {
        let mut field_config = FieldConfigMap::new();
        field_config.insert("color".into(), FieldConfig {
            required: true,
            ..FieldConfig::titled("静态颜色")
        });
        let mut field = dynamic("text");
        field.field_name = "color".into();
        field.field_label = "动态颜色".into();

        let resolved = resolve_field("color", &field_config, &[field]).unwrap();
        assert_eq!(resolved.label, "动态颜色");
        assert!(resolved.dynamic);
        assert!(!resolved.required);
    }

    #[test]
    fn unknown_key_is_skipped() {
        assert!(resolve_field("ghost", &FieldConfigMap::new(), &[]).is_none());
    }

    #[test]
    fn required_flag_carries_through() {
        let mut field = dynamic("text");
        field.is_required = true;
        assert!(dynamic_widget(&field).required);

        let mut field_config = FieldConfigMap::new();
        field_config.insert("name".into(), FieldConfig {
            required: true,
            ..FieldConfig::titled("名称")
        });
        let resolved = resolve_field("name", &field_config, &[]).unwrap();
        assert!(resolved.required);
    }
}
