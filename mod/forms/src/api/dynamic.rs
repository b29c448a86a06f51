use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use serde::Deserialize;

use formbase_core::{ListParams, ListResult};

use super::{ApiError, AppState, ok_json};
use crate::model::DynamicField;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/fields", post(create_field).get(list_fields))
        .route(
            "/fields/{name}",
            get(get_field).patch(update_field).delete(delete_field),
        )
}

#[derive(Deserialize)]
struct ListFieldsQuery {
    /// Restrict to fields of one form.
    form: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl ListFieldsQuery {
    fn params(&self) -> ListParams {
        let mut params = ListParams::default();
        if let Some(limit) = self.limit {
            params.limit = limit;
        }
        if let Some(offset) = self.offset {
            params.offset = offset;
        }
        params
    }
}

async fn create_field(
    State(svc): State<AppState>,
    Json(body): Json<DynamicField>,
) -> Result<Json<DynamicField>, ApiError> {
    ok_json(svc.create_field(body))
}

async fn get_field(
    State(svc): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DynamicField>, ApiError> {
    ok_json(svc.get_field(&name))
}

async fn list_fields(
    State(svc): State<AppState>,
    Query(query): Query<ListFieldsQuery>,
) -> Result<Json<ListResult<DynamicField>>, ApiError> {
    ok_json(svc.list_fields(query.form.as_deref(), &query.params()))
}

async fn update_field(
    State(svc): State<AppState>,
    Path(name): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<DynamicField>, ApiError> {
    ok_json(svc.update_field(&name, patch))
}

async fn delete_field(
    State(svc): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    svc.delete_field(&name).map_err(ApiError::from)?;
    Ok(Json(serde_json::json!({"ok": true})))
}
