use serde::{Deserialize, Serialize};

use super::field::FieldConfigMap;
use super::group::FieldGroup;

/// Modal display options echoed to the front end with each render plan.
///
/// Only the data-shaped options live here; `visible`/`loading` state and
/// the Ok/Cancel callbacks stay with the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModalOptions {
    #[serde(default)]
    pub title: String,

    #[serde(default = "default_ok_text")]
    pub ok_text: String,

    #[serde(default = "default_cancel_text")]
    pub cancel_text: String,

    /// Modal width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Form layout ("vertical" or "horizontal").
    #[serde(default = "default_layout")]
    pub layout: String,
}

fn default_ok_text() -> String {
    "确定".to_string()
}

fn default_cancel_text() -> String {
    "取消".to_string()
}

fn default_width() -> u32 {
    720
}

fn default_layout() -> String {
    "vertical".to_string()
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            ok_text: default_ok_text(),
            cancel_text: default_cancel_text(),
            width: default_width(),
            layout: default_layout(),
        }
    }
}

/// FormSchema — a page's fixed field schema plus its tab groups and
/// modal display options. Primary key is `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    /// Form name (e.g. "supplier", "customer").
    pub name: String,

    /// Static field schema, keyed by field key. The `action` key is
    /// reserved and never rendered.
    #[serde(default)]
    pub field_config: FieldConfigMap,

    /// Tab groups, in display order.
    #[serde(default)]
    pub groups: Vec<FieldGroup>,

    #[serde(default)]
    pub modal: ModalOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}
