mod briefs;

use std::{any::Any, path::Path, sync::Arc};

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use briefgen_llm::BriefGenerator;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

/// Body returned for any failure the handler did not anticipate.
pub(crate) const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<BriefGenerator>,
}

/// Failure body: `{"success": false, "error": "..."}`.
///
/// `code` only selects the HTTP status and never reaches the client.
#[derive(Debug, Serialize)]
pub struct ApiError {
    success: bool,
    error: String,
    #[serde(skip)]
    code: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    llm: &'static str,
}

impl ApiError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
            code,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.code {
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = %detail, "unexpected error while handling request");
    ApiError::new("internal_error", UNEXPECTED_ERROR).into_response()
}

/// Wraps a router in the request-id, tracing, CORS and panic layers.
fn with_boundary_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(request_id))
            .layer(TraceLayer::new_for_http())
            .layer(build_cors())
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

/// Builds the application router.
///
/// When `static_dir` is set, requests matching no API route are served from
/// that directory, so `/` returns its `index.html`.
pub fn build_app(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(health))
        .route("/api/generate-brief", post(briefs::generate_brief))
        .route("/api/generate-brief/", post(briefs::generate_brief));

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    with_boundary_layers(router.with_state(state))
}

async fn health(State(state): State<AppState>) -> Json<HealthData> {
    Json(HealthData {
        status: "ok",
        llm: if state.generator.is_live() {
            "live"
        } else {
            "stub"
        },
    })
}
