use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use super::{ApiError, AppState, ok_json};
use crate::model::ColumnPrefs;

pub fn routes() -> Router<AppState> {
    Router::new().route("/prefs/{user}/{form}", get(get_prefs).put(put_prefs))
}

async fn get_prefs(
    State(svc): State<AppState>,
    Path((user, form)): Path<(String, String)>,
) -> Result<Json<ColumnPrefs>, ApiError> {
    ok_json(svc.get_prefs(&user, &form))
}

async fn put_prefs(
    State(svc): State<AppState>,
    Path((user, form)): Path<(String, String)>,
    Json(mut body): Json<ColumnPrefs>,
) -> Result<Json<ColumnPrefs>, ApiError> {
    // The path owns the identity; the body carries only the preferences.
    body.user = user;
    body.form_name = form;
    ok_json(svc.put_prefs(body))
}
