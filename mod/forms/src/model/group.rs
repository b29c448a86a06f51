use serde::{Deserialize, Serialize};

/// FieldGroup — a named subset of fields rendered together as one tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroup {
    /// Stable group key. The `basic` group also collects dynamic fields
    /// assigned to the default page.
    pub key: String,

    /// Tab title.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Declared member field keys, in declared order.
    #[serde(default)]
    pub fields: Vec<String>,
}

impl FieldGroup {
    pub fn new(key: &str, title: &str, fields: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            icon: None,
            fields: fields.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_json_roundtrip() {
        let g = FieldGroup {
            icon: Some("info-circle".into()),
            ..FieldGroup::new("basic", "基本信息", &["name", "code"])
        };
        let json = serde_json::to_string(&g).unwrap();
        let back: FieldGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
        assert_eq!(back.fields, ["name", "code"]);
    }
}
