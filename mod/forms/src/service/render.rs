use tracing::debug;

use formbase_core::ServiceError;

use super::FormsService;
use crate::model::{ColumnPrefs, FormPlan};
use crate::resolver;

impl FormsService {
    /// Resolve the render plan for one form, as seen by one user.
    ///
    /// Loads the form schema, its dynamic fields, and the user's column
    /// preferences, then runs the pure resolver. An empty user gets the
    /// default view (no preferences applied).
    pub fn render(&self, form_name: &str, user: Option<&str>) -> Result<FormPlan, ServiceError> {
        let schema = self.get_schema(form_name)?;
        let dynamic_fields = self.fields_for_form(form_name)?;
        let prefs = match user {
            Some(user) if !user.is_empty() => self.get_prefs(user, form_name)?,
            _ => ColumnPrefs::empty("", form_name),
        };

        let plan = resolver::resolve_form(&schema, &dynamic_fields, &prefs);
        debug!(
            "rendered form '{}' for user '{}': {} tabs, {} dynamic fields",
            form_name,
            user.unwrap_or(""),
            plan.tabs.len(),
            dynamic_fields.len(),
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::service;
    use crate::model::{
        ColumnPrefs, DynamicField, FieldConfig, FieldConfigMap, FieldGroup, FormSchema,
        ModalOptions, Widget,
    };
    use formbase_core::ServiceError;

    fn seed_supplier(svc: &super::FormsService) {
        let mut field_config = FieldConfigMap::new();
        field_config.insert("name".into(), FieldConfig {
            required: true,
            display_order: Some(1.0),
            ..FieldConfig::titled("名称")
        });
        field_config.insert("description".into(), FieldConfig {
            display_order: Some(4.0),
            ..FieldConfig::titled("描述")
        });
        svc.create_schema(FormSchema {
            name: "supplier".into(),
            field_config,
            groups: vec![FieldGroup::new("basic", "基本信息", &["name", "description"])],
            modal: ModalOptions::default(),
            create_at: None,
            update_at: None,
        })
        .unwrap();

        let grade: DynamicField = serde_json::from_value(serde_json::json!({
            "fieldName": "grade",
            "fieldLabel": "供应商等级",
            "fieldType": "select",
            "fieldOptions": r#"{"options":[{"label":"A","value":"a"}]}"#,
            "formName": "supplier",
        }))
        .unwrap();
        svc.create_field(grade).unwrap();
    }

    #[test]
    fn render_assembles_all_inputs() {
        let svc = service();
        seed_supplier(&svc);

        let mut prefs = ColumnPrefs::empty("u1", "supplier");
        prefs.column_config.insert("description".into(), false);
        svc.put_prefs(prefs).unwrap();

        let plan = svc.render("supplier", Some("u1")).unwrap();
        assert_eq!(plan.tabs.len(), 1);
        let keys: Vec<&str> = plan.tabs[0].fields.iter().map(|f| f.key.as_str()).collect();
        // description hidden by prefs; dynamic grade joins the basic tab.
        assert_eq!(keys, ["name", "grade"]);
        assert!(matches!(
            plan.tabs[0].fields[1].widget,
            Widget::Select { .. }
        ));
    }

    #[test]
    fn render_without_user_uses_defaults() {
        let svc = service();
        seed_supplier(&svc);

        let plan = svc.render("supplier", None).unwrap();
        let keys: Vec<&str> = plan.tabs[0].fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["name", "description", "grade"]);
    }

    #[test]
    fn render_unknown_form_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.render("ghost", None),
            Err(ServiceError::NotFound(_))
        ));
    }
}
