//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::resolve::LookupError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/next", get(next_bus))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the lookup form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if the request wants HTML (browser form submit) or JSON.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Run one lookup.
///
/// Every lookup outcome, including match and network failures, is a 200
/// response; only a missing pattern or a malformed query string is a client
/// error.
async fn next_bus(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: Result<Query<NextBusRequest>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(req) = req.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;
    let query = req.to_query().map_err(|name| AppError::BadRequest {
        message: format!("Missing {name} pattern"),
    })?;

    let result = state.nextbus.resolve(&query, Utc::now()).await;
    match &result {
        Err(LookupError::Transport(e)) => warn!(error = %e, "NexTrip request failed"),
        Err(LookupError::Unknown(e)) => warn!(error = %e, "unexpected NexTrip data"),
        _ => {}
    }

    let response = NextBusResponse::from_result(&result, req.verbose);

    if accepts_html(&headers) {
        let template = ResultTemplate {
            route: query.route,
            stop: query.stop,
            direction: query.direction,
            view: ResultView::from_response(&response),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(response).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
