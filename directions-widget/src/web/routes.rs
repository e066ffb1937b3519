//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::domain::DomainError;
use crate::routing::{RouteProvider, RoutingError};
use crate::state::DirectionsState;
use crate::view::ViewError;

use super::dto::*;
use super::render::{inputs_html, instructions_html};
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/directions", get(directions))
        .route("/render/instructions", post(render_instructions))
        .route("/render/inputs", post(render_inputs))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Routes between two points.
async fn directions(
    State(state): State<AppState>,
    Query(query): Query<DirectionsQuery>,
) -> Result<Json<DirectionsResult>, AppError> {
    let request = query.to_request()?;
    let routes = state.routes.directions(&request).await?;

    tracing::debug!(routes = routes.len(), profile = %request.profile, "directions found");
    Ok(Json(DirectionsResult { routes }))
}

/// Instructions panel for a posted snapshot.
async fn render_instructions(Json(snapshot): Json<DirectionsState>) -> Html<String> {
    Html(instructions_html(snapshot))
}

/// Inputs panel for a posted snapshot.
async fn render_inputs(Json(snapshot): Json<DirectionsState>) -> Result<Html<String>, AppError> {
    Ok(Html(inputs_html(snapshot)?))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Routing { status: StatusCode, message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<RoutingError> for AppError {
    fn from(e: RoutingError) -> Self {
        AppError::Routing {
            status: StatusCode::from_u16(e.status()).unwrap_or(StatusCode::BAD_GATEWAY),
            message: e.to_string(),
        }
    }
}

impl From<ViewError> for AppError {
    fn from(e: ViewError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Routing { status, message } => (status, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::warn!(%status, "{message}");
        } else {
            tracing::debug!(%status, "{message}");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
