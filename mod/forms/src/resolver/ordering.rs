use std::collections::{HashMap, HashSet};

use crate::model::{DynamicField, FieldConfigMap};

/// Order value for dynamic fields that carry no explicit display order.
/// Sorts between the conventional description (4) and sort-order (5) slots.
pub const DYNAMIC_DEFAULT_ORDER: f64 = 4.5;

/// Effective sort key for one field.
///
/// A dynamic field's own `display_order` wins; otherwise the static
/// config's `display_order`, then its `sort_order`. Dynamic fields with
/// no order anywhere take [`DYNAMIC_DEFAULT_ORDER`]; static fields fall
/// back to 0.
fn effective_order(
    key: &str,
    field_config: &FieldConfigMap,
    dynamic_by_name: &HashMap<&str, &DynamicField>,
) -> f64 {
    let dynamic = dynamic_by_name.get(key);
    if let Some(order) = dynamic.and_then(|d| d.display_order) {
        return order;
    }
    if let Some(cfg) = field_config.get(key) {
        if let Some(order) = cfg.display_order {
            return order;
        }
        if let Some(order) = cfg.sort_order {
            return order;
        }
    }
    if dynamic.is_some() {
        DYNAMIC_DEFAULT_ORDER
    } else {
        0.0
    }
}

/// Order a set of field keys for rendering.
///
/// With a non-empty explicit order, its members come first (in that
/// order, restricted to `keys`); the remainder follows sorted ascending
/// by effective order. With no explicit order, everything is sorted by
/// effective order. The sort is stable, so ties keep their input order.
pub fn order_fields(
    keys: &[String],
    explicit_order: &[String],
    field_config: &FieldConfigMap,
    dynamic_fields: &[DynamicField],
) -> Vec<String> {
    let dynamic_by_name: HashMap<&str, &DynamicField> = dynamic_fields
        .iter()
        .map(|d| (d.field_name.as_str(), d))
        .collect();

    let sort_by_order = |mut subset: Vec<String>| {
        subset.sort_by(|a, b| {
            effective_order(a, field_config, &dynamic_by_name)
                .total_cmp(&effective_order(b, field_config, &dynamic_by_name))
        });
        subset
    };

    if explicit_order.is_empty() {
        return sort_by_order(keys.to_vec());
    }

    let present: HashSet<&str> = keys.iter().map(String::as_str).collect();
    let mut emitted = HashSet::new();
    let mut ordered = Vec::with_capacity(keys.len());

    for key in explicit_order {
        if present.contains(key.as_str()) && emitted.insert(key.as_str()) {
            ordered.push(key.clone());
        }
    }

    let rest: Vec<String> = keys
        .iter()
        .filter(|k| !emitted.contains(k.as_str()))
        .cloned()
        .collect();
    ordered.extend(sort_by_order(rest));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldConfig;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn config_with_orders(entries: &[(&str, Option<f64>, Option<f64>)]) -> FieldConfigMap {
        let mut map = FieldConfigMap::new();
        for (key, display_order, sort_order) in entries.iter().copied() {
            map.insert(key.to_string(), FieldConfig {
                display_order,
                sort_order,
                ..FieldConfig::titled(key)
            });
        }
        map
    }

    fn dynamic(name: &str, display_order: Option<f64>) -> DynamicField {
        let mut f: DynamicField = serde_json::from_value(serde_json::json!({
            "fieldName": name,
            "fieldLabel": name,
            "fieldType": "text",
        }))
        .unwrap();
        f.display_order = display_order;
        f
    }

    #[test]
    fn explicit_order_comes_first_then_rest_by_order() {
        // c has the lowest display order but sorts after the explicit pair.
        let config = config_with_orders(&[
            ("a", Some(10.0), None),
            ("b", Some(20.0), None),
            ("c", Some(1.0), None),
        ]);
        let ordered = order_fields(&keys(&["a", "b", "c"]), &keys(&["b", "a"]), &config, &[]);
        assert_eq!(ordered, ["b", "a", "c"]);
    }

    #[test]
    fn explicit_entries_missing_from_input_are_skipped() {
        let config = config_with_orders(&[("a", None, None), ("b", None, None)]);
        let ordered = order_fields(&keys(&["a", "b"]), &keys(&["ghost", "b"]), &config, &[]);
        assert_eq!(ordered, ["b", "a"]);
    }

    #[test]
    fn no_explicit_order_sorts_by_effective_order() {
        let config = config_with_orders(&[
            ("name", Some(1.0), None),
            ("description", Some(4.0), None),
            ("sort_order", None, Some(5.0)),
        ]);
        let dynamics = [dynamic("color", None)];
        let ordered = order_fields(
            &keys(&["sort_order", "color", "description", "name"]),
            &[],
            &config,
            &dynamics,
        );
        // color slots at 4.5, between description (4) and sort_order (5).
        assert_eq!(ordered, ["name", "description", "color", "sort_order"]);
    }

    #[test]
    fn dynamic_display_order_wins() {
        let config = config_with_orders(&[("name", Some(1.0), None)]);
        let dynamics = [dynamic("color", Some(0.5))];
        let ordered = order_fields(&keys(&["name", "color"]), &[], &config, &dynamics);
        assert_eq!(ordered, ["color", "name"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let config = config_with_orders(&[
            ("a", None, None),
            ("b", None, None),
            ("c", None, None),
        ]);
        let ordered = order_fields(&keys(&["c", "a", "b"]), &[], &config, &[]);
        assert_eq!(ordered, ["c", "a", "b"]);
    }

    #[test]
    fn ordering_is_idempotent() {
        let config = config_with_orders(&[
            ("a", Some(3.0), None),
            ("b", None, Some(2.0)),
            ("c", None, None),
        ]);
        let dynamics = [dynamic("d", None)];
        let explicit = keys(&["b"]);
        let input = keys(&["a", "b", "c", "d"]);

        let once = order_fields(&input, &explicit, &config, &dynamics);
        let twice = order_fields(&once, &explicit, &config, &dynamics);
        assert_eq!(once, twice);
    }
}
