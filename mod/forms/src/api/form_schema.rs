use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use formbase_core::{ListParams, ListResult};

use super::{ApiError, AppState, ok_json};
use crate::model::FormSchema;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/schemas", post(create_schema).get(list_schemas))
        .route(
            "/schemas/{name}",
            get(get_schema).patch(update_schema).delete(delete_schema),
        )
}

async fn create_schema(
    State(svc): State<AppState>,
    Json(body): Json<FormSchema>,
) -> Result<Json<FormSchema>, ApiError> {
    ok_json(svc.create_schema(body))
}

async fn get_schema(
    State(svc): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<FormSchema>, ApiError> {
    ok_json(svc.get_schema(&name))
}

async fn list_schemas(
    State(svc): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResult<FormSchema>>, ApiError> {
    ok_json(svc.list_schemas(&params))
}

async fn update_schema(
    State(svc): State<AppState>,
    Path(name): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<FormSchema>, ApiError> {
    ok_json(svc.update_schema(&name, patch))
}

async fn delete_schema(
    State(svc): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    svc.delete_schema(&name).map_err(ApiError::from)?;
    Ok(Json(serde_json::json!({"ok": true})))
}
