use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Request, State};
use axum::middleware::{self, Next};
use axum::routing::{get, post};
use axum::{Json, Router};
use fmtcheck::{ValidationConfig, ValidationRequest, ValidationResult, Validator};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::logging::LoggingMiddleware;

/// Name reported by the health check.
pub const SERVICE_NAME: &str = "fmtcheck";

/// Options for [`serve`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub verbose: u8,
    pub max_body_bytes: usize,
}

#[derive(Clone)]
struct AppState {
    validator: Arc<Validator>,
}

/// Build the HTTP router.
///
/// `max_body_bytes` bounds both the request body and the text handed to the
/// validators.
#[must_use]
pub fn router(max_body_bytes: usize, verbose: u8) -> Router {
    let validator = Validator::new(ValidationConfig::default().with_max_input_bytes(max_body_bytes));
    let state = AppState {
        validator: Arc::new(validator),
    };
    let logging = LoggingMiddleware::new(verbose, max_body_bytes);

    Router::new()
        .route("/health", get(health))
        .route("/validate", post(validate))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(move |request: Request, next: Next| {
            let logging = logging.clone();
            async move { logging.handle(request, next).await }
        }))
}

/// Bind and serve until the process is stopped.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app = router(config.max_body_bytes, config.verbose);
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("fmtcheck listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true, "service": SERVICE_NAME }))
}

async fn validate(
    State(state): State<AppState>,
    Json(request): Json<ValidationRequest>,
) -> Json<ValidationResult> {
    let result = state.validator.validate_request(&request);
    debug!(
        format = %request.format.trim(),
        ok = result.ok,
        errors = result.errors_count(),
        "validated"
    );
    Json(result)
}
