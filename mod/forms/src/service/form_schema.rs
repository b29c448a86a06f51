use formbase_core::{ListParams, ListResult, ServiceError, now_rfc3339};
use formbase_sql::Value;

use super::FormsService;
use crate::model::FormSchema;

impl FormsService {
    pub fn create_schema(&self, mut schema: FormSchema) -> Result<FormSchema, ServiceError> {
        if schema.name.trim().is_empty() {
            return Err(ServiceError::Validation("form name must not be empty".into()));
        }

        let now = now_rfc3339();
        schema.create_at = Some(now.clone());
        schema.update_at = Some(now.clone());

        self.insert_record(
            "form_schemas",
            &schema.name,
            &schema,
            &[
                ("name", Value::Text(schema.name.clone())),
                ("create_at", Value::Text(now.clone())),
                ("update_at", Value::Text(now)),
            ],
        )?;

        Ok(schema)
    }

    pub fn get_schema(&self, name: &str) -> Result<FormSchema, ServiceError> {
        self.get_record("form_schemas", name)
    }

    pub fn list_schemas(&self, params: &ListParams) -> Result<ListResult<FormSchema>, ServiceError> {
        let limit = params.limit.min(500);
        self.list_records("form_schemas", &[], limit, params.offset)
    }

    pub fn update_schema(
        &self,
        name: &str,
        patch: serde_json::Value,
    ) -> Result<FormSchema, ServiceError> {
        let current: FormSchema = self.get_record("form_schemas", name)?;
        let updated: FormSchema = Self::apply_patch(&current, patch, &["name"])?;

        self.update_record(
            "form_schemas",
            name,
            &updated,
            &[(
                "update_at",
                Value::Text(updated.update_at.clone().unwrap_or_default()),
            )],
        )?;

        Ok(updated)
    }

    pub fn delete_schema(&self, name: &str) -> Result<(), ServiceError> {
        self.delete_record("form_schemas", name)
    }
}
