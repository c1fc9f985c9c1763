use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use panels::{PanelEntry, PanelId};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::{state::AppState, ws};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/styles.css", get(styles))
        .route("/static/app.js", get(app_script))
        .route("/api/panels", get(list_panels))
        .route("/api/panels/:id", get(panel_detail))
        .route("/ws/session", get(ws::session_socket))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct PanelSummary {
    id: PanelId,
    title: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

async fn index() -> Html<&'static str> {
    Html(ui::index_html())
}

async fn styles() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        ui::styles_css(),
    )
}

async fn app_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        ui::app_js(),
    )
}

async fn list_panels() -> Json<Vec<PanelSummary>> {
    Json(
        panels::entries()
            .map(|entry| PanelSummary {
                id: entry.id,
                title: entry.title,
            })
            .collect(),
    )
}

async fn panel_detail(
    Path(id): Path<String>,
) -> Result<Json<&'static PanelEntry>, (StatusCode, Json<ErrorResponse>)> {
    panels::lookup(&id).map(Json).map_err(|err| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
    })
}
