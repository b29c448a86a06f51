use formbase_core::{ListParams, ListResult, ServiceError, new_id, now_rfc3339};
use formbase_sql::Value;

use super::FormsService;
use crate::model::DynamicField;

impl FormsService {
    pub fn create_field(&self, mut field: DynamicField) -> Result<DynamicField, ServiceError> {
        if field.field_name.trim().is_empty() {
            return Err(ServiceError::Validation("fieldName must not be empty".into()));
        }
        if field.form_name.trim().is_empty() {
            return Err(ServiceError::Validation("formName must not be empty".into()));
        }

        let now = now_rfc3339();
        field.id = new_id();
        field.create_at = Some(now.clone());
        field.update_at = Some(now.clone());

        self.insert_record(
            "dynamic_fields",
            &field.id,
            &field,
            &[
                ("field_name", Value::Text(field.field_name.clone())),
                ("form_name", Value::Text(field.form_name.clone())),
                ("page_name", page_index(&field)),
                ("create_at", Value::Text(now.clone())),
                ("update_at", Value::Text(now)),
            ],
        )?;

        Ok(field)
    }

    pub fn get_field(&self, field_name: &str) -> Result<DynamicField, ServiceError> {
        self.find_field(field_name)?
            .ok_or_else(|| ServiceError::NotFound(format!("dynamic field '{}'", field_name)))
    }

    /// List dynamic fields, optionally restricted to one form.
    pub fn list_fields(
        &self,
        form_name: Option<&str>,
        params: &ListParams,
    ) -> Result<ListResult<DynamicField>, ServiceError> {
        let limit = params.limit.min(500);
        let filters: Vec<(&str, Value)> = match form_name {
            Some(form) => vec![("form_name", Value::Text(form.to_string()))],
            None => Vec::new(),
        };
        self.list_records("dynamic_fields", &filters, limit, params.offset)
    }

    /// All dynamic fields of one form, in creation order — the resolver
    /// input shape.
    pub fn fields_for_form(&self, form_name: &str) -> Result<Vec<DynamicField>, ServiceError> {
        let rows = self.sql
            .query(
                "SELECT data FROM dynamic_fields WHERE form_name = ?1 ORDER BY create_at ASC, rowid ASC",
                &[Value::Text(form_name.to_string())],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let mut fields = Vec::with_capacity(rows.len());
        for row in &rows {
            let data = row.get_str("data")
                .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
            fields.push(
                serde_json::from_str(data).map_err(|e| ServiceError::Internal(e.to_string()))?,
            );
        }
        Ok(fields)
    }

    pub fn update_field(
        &self,
        field_name: &str,
        patch: serde_json::Value,
    ) -> Result<DynamicField, ServiceError> {
        let current = self.get_field(field_name)?;
        let updated: DynamicField = Self::apply_patch(&current, patch, &["fieldName"])?;

        self.update_record(
            "dynamic_fields",
            &current.id,
            &updated,
            &[
                ("form_name", Value::Text(updated.form_name.clone())),
                ("page_name", page_index(&updated)),
                (
                    "update_at",
                    Value::Text(updated.update_at.clone().unwrap_or_default()),
                ),
            ],
        )?;

        Ok(updated)
    }

    pub fn delete_field(&self, field_name: &str) -> Result<(), ServiceError> {
        let current = self.get_field(field_name)?;
        self.delete_record("dynamic_fields", &current.id)
    }

    fn find_field(&self, field_name: &str) -> Result<Option<DynamicField>, ServiceError> {
        let rows = self.sql
            .query(
                "SELECT data FROM dynamic_fields WHERE field_name = ?1",
                &[Value::Text(field_name.to_string())],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let Some(row) = rows.first() else {
            return Ok(None);
        };
        let data = row.get_str("data")
            .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
        serde_json::from_str(data)
            .map(Some)
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }
}

/// Indexed page column — NULL when the field sits on the default page.
fn page_index(field: &DynamicField) -> Value {
    match field.page_name.as_deref() {
        Some(page) if !page.trim().is_empty() => Value::Text(page.trim().to_string()),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::service;
    use crate::model::DynamicField;
    use formbase_core::{ListParams, ServiceError};

    fn field(name: &str, form: &str) -> DynamicField {
        serde_json::from_value(serde_json::json!({
            "fieldName": name,
            "fieldLabel": name,
            "fieldType": "text",
            "formName": form,
        }))
        .unwrap()
    }

    #[test]
    fn create_assigns_id_and_timestamps() {
        let svc = service();
        let created = svc.create_field(field("color", "supplier")).unwrap();
        assert_eq!(created.id.len(), 32);
        assert!(created.create_at.is_some());

        let fetched = svc.get_field("color").unwrap();
        assert_eq!(fetched.field_label, "color");
    }

    #[test]
    fn field_name_is_unique() {
        let svc = service();
        svc.create_field(field("color", "supplier")).unwrap();
        assert!(matches!(
            svc.create_field(field("color", "customer")),
            Err(ServiceError::Conflict(_))
        ));
    }

    #[test]
    fn list_filters_by_form() {
        let svc = service();
        svc.create_field(field("color", "supplier")).unwrap();
        svc.create_field(field("grade", "supplier")).unwrap();
        svc.create_field(field("region", "customer")).unwrap();

        let all = svc.list_fields(None, &ListParams::default()).unwrap();
        assert_eq!(all.total, 3);

        let supplier = svc
            .list_fields(Some("supplier"), &ListParams::default())
            .unwrap();
        assert_eq!(supplier.total, 2);

        let names: Vec<String> = svc
            .fields_for_form("supplier")
            .unwrap()
            .into_iter()
            .map(|f| f.field_name)
            .collect();
        assert_eq!(names, ["color", "grade"]);
    }

    #[test]
    fn update_keeps_field_name() {
        let svc = service();
        svc.create_field(field("color", "supplier")).unwrap();

        let updated = svc
            .update_field(
                "color",
                serde_json::json!({
                    "fieldName": "renamed",
                    "fieldLabel": "颜色",
                    "pageName": "规格参数",
                }),
            )
            .unwrap();
        assert_eq!(updated.field_name, "color");
        assert_eq!(updated.field_label, "颜色");
        assert_eq!(updated.page_name.as_deref(), Some("规格参数"));
    }

    #[test]
    fn delete_unknown_field_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.delete_field("ghost"),
            Err(ServiceError::NotFound(_))
        ));
    }
}
