use formbase_core::ServiceError;
use formbase_sql::SQLStore;

/// SQL DDL statements to initialize the forms database schema.
///
/// Each table stores the full JSON document in a `data` TEXT column,
/// with indexed columns extracted for efficient filtering and uniqueness.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS form_schemas (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        name TEXT UNIQUE,
        create_at TEXT,
        update_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS dynamic_fields (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        field_name TEXT UNIQUE,
        form_name TEXT,
        page_name TEXT,
        create_at TEXT,
        update_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS column_prefs (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        user TEXT,
        form_name TEXT,
        create_at TEXT,
        update_at TEXT,
        UNIQUE(user, form_name)
    )",
    // Indexes
    "CREATE INDEX IF NOT EXISTS idx_dyn_form ON dynamic_fields(form_name)",
    "CREATE INDEX IF NOT EXISTS idx_dyn_page ON dynamic_fields(page_name)",
    "CREATE INDEX IF NOT EXISTS idx_prefs_user ON column_prefs(user)",
];

pub fn init_schema(sql: &dyn SQLStore) -> Result<(), ServiceError> {
    for stmt in SCHEMA {
        sql.exec(stmt, &[])
            .map_err(|e| ServiceError::Storage(format!("schema init failed: {}", e)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use formbase_sql::SqliteStore;

    #[test]
    fn init_is_idempotent() {
        let sql = SqliteStore::open_in_memory().unwrap();
        init_schema(&sql).unwrap();
        init_schema(&sql).unwrap();
    }
}
