use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use super::{ApiError, AppState, ok_json};
use crate::model::FormPlan;

pub fn routes() -> Router<AppState> {
    Router::new().route("/render/{form}", get(render_form))
}

#[derive(Deserialize)]
struct RenderQuery {
    /// User whose column preferences apply; omit for the default view.
    user: Option<String>,
}

async fn render_form(
    State(svc): State<AppState>,
    Path(form): Path<String>,
    Query(query): Query<RenderQuery>,
) -> Result<Json<FormPlan>, ApiError> {
    ok_json(svc.render(&form, query.user.as_deref()))
}
