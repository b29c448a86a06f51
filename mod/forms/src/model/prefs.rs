use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// ColumnPrefs — one user's column preferences for one form.
///
/// An empty `column_config` means "show all fields". Fields missing from
/// `column_setting_order` fall back to their schema display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnPrefs {
    #[serde(default)]
    pub user: String,

    /// Form schema name the preferences apply to.
    #[serde(default)]
    pub form_name: String,

    /// Field key → show/hide.
    #[serde(default)]
    pub column_config: HashMap<String, bool>,

    /// User-customized display order.
    #[serde(default)]
    pub column_setting_order: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}

impl ColumnPrefs {
    /// Empty preferences for a (user, form) pair — everything visible,
    /// schema ordering.
    pub fn empty(user: &str, form_name: &str) -> Self {
        Self {
            user: user.to_string(),
            form_name: form_name.to_string(),
            ..Self::default()
        }
    }
}
