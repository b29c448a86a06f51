use std::collections::HashSet;

use crate::model::{DynamicField, FieldGroup};

/// Audit columns shown in list views only — never inside form tabs.
pub const GROUP_DENYLIST: [&str; 4] = [
    "created_at",
    "updated_at",
    "created_by_name",
    "updated_by_name",
];

/// Default page for dynamic fields that carry no page assignment.
pub const DEFAULT_PAGE_NAME: &str = "基本信息";

/// Key of the group that collects default-page dynamic fields.
pub const BASIC_GROUP_KEY: &str = "basic";

/// Partition the visible fields into tab groups.
///
/// A field lands in a group when declared in the group's field list,
/// visible, and not an audit column. The basic group additionally picks
/// up dynamic fields assigned to the default page (or to no page),
/// deduplicated by key. Groups that end up empty are dropped — no empty
/// tab is rendered.
pub fn partition_groups<'a>(
    groups: &'a [FieldGroup],
    visible: &[String],
    dynamic_fields: &[DynamicField],
) -> Vec<(&'a FieldGroup, Vec<String>)> {
    let visible_set: HashSet<&str> = visible.iter().map(String::as_str).collect();

    groups
        .iter()
        .filter_map(|group| {
            let mut keys: Vec<String> = group
                .fields
                .iter()
                .filter(|key| {
                    visible_set.contains(key.as_str())
                        && !GROUP_DENYLIST.contains(&key.as_str())
                })
                .cloned()
                .collect();

            if group.key == BASIC_GROUP_KEY {
                for field in dynamic_fields {
                    if !on_default_page(field) {
                        continue;
                    }
                    if !visible_set.contains(field.field_name.as_str()) {
                        continue;
                    }
                    if !keys.contains(&field.field_name) {
                        keys.push(field.field_name.clone());
                    }
                }
            }

            if keys.is_empty() {
                None
            } else {
                Some((group, keys))
            }
        })
        .collect()
}

/// Whether a dynamic field belongs on the default basic page.
fn on_default_page(field: &DynamicField) -> bool {
    match field.page_name.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(page) => page == DEFAULT_PAGE_NAME,
    }
}
