//! The form resolver — pure computation from schema + dynamic fields +
//! user preferences to a concrete render plan.
//!
//! No I/O and no state: the same inputs always produce the same plan.

pub mod groups;
pub mod ordering;
pub mod visibility;
pub mod widget;

pub use groups::{BASIC_GROUP_KEY, DEFAULT_PAGE_NAME, GROUP_DENYLIST, partition_groups};
pub use ordering::{DYNAMIC_DEFAULT_ORDER, order_fields};
pub use visibility::{ACTION_KEY, visible_fields};
pub use widget::resolve_field;

use crate::model::{ColumnPrefs, DynamicField, FormPlan, FormSchema, FormTab};

/// Resolve a full render plan.
///
/// Pipeline: visible set → tab partition → per-tab ordering → widget
/// selection. Tabs whose every member lacks a config are dropped along
/// with groups emptied by the visibility filter.
pub fn resolve_form(
    schema: &FormSchema,
    dynamic_fields: &[DynamicField],
    prefs: &ColumnPrefs,
) -> FormPlan {
    let visible = visible_fields(&schema.field_config, dynamic_fields, &prefs.column_config);

    let tabs = partition_groups(&schema.groups, &visible, dynamic_fields)
        .into_iter()
        .filter_map(|(group, keys)| {
            let ordered = order_fields(
                &keys,
                &prefs.column_setting_order,
                &schema.field_config,
                dynamic_fields,
            );
            let fields: Vec<_> = ordered
                .iter()
                .filter_map(|key| resolve_field(key, &schema.field_config, dynamic_fields))
                .collect();
            if fields.is_empty() {
                return None;
            }
            Some(FormTab {
                key: group.key.clone(),
                title: group.title.clone(),
                icon: group.icon.clone(),
                fields,
            })
        })
        .collect();

    FormPlan {
        form_name: schema.name.clone(),
        modal: schema.modal.clone(),
        tabs,
    }
}
