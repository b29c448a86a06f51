use formbase_core::{ServiceError, now_rfc3339};
use formbase_sql::Value;

use super::FormsService;
use crate::model::ColumnPrefs;

impl FormsService {
    /// Get one user's preferences for one form. A user who never saved
    /// any gets the empty preferences (everything visible, schema order).
    pub fn get_prefs(&self, user: &str, form_name: &str) -> Result<ColumnPrefs, ServiceError> {
        let id = prefs_key(user, form_name);
        match self.get_record("column_prefs", &id) {
            Ok(prefs) => Ok(prefs),
            Err(ServiceError::NotFound(_)) => Ok(ColumnPrefs::empty(user, form_name)),
            Err(e) => Err(e),
        }
    }

    /// Save one user's preferences for one form, replacing any previous
    /// ones.
    pub fn put_prefs(&self, mut prefs: ColumnPrefs) -> Result<ColumnPrefs, ServiceError> {
        if prefs.user.trim().is_empty() {
            return Err(ServiceError::Validation("user must not be empty".into()));
        }
        if prefs.form_name.trim().is_empty() {
            return Err(ServiceError::Validation("formName must not be empty".into()));
        }

        let now = now_rfc3339();
        prefs.update_at = Some(now.clone());

        let id = prefs_key(&prefs.user, &prefs.form_name);
        let json = serde_json::to_string(&prefs)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        // Upsert: a PUT either creates or overwrites.
        self.sql
            .exec(
                "INSERT INTO column_prefs (id, data, user, form_name, create_at, update_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)
                 ON CONFLICT(id) DO UPDATE SET data = ?2, update_at = ?5",
                &[
                    Value::Text(id),
                    Value::Text(json),
                    Value::Text(prefs.user.clone()),
                    Value::Text(prefs.form_name.clone()),
                    Value::Text(now),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        Ok(prefs)
    }
}

/// Composite key for preferences: "{user}/{form}".
fn prefs_key(user: &str, form_name: &str) -> String {
    format!("{}/{}", user, form_name)
}
