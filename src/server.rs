//! HTTP transport
//!
//! A thin axum layer over the engine; no derivation logic lives here.
//! Endpoints:
//! - `POST /api/mood-analysis` - analyze text and return the full bundle
//! - `GET /api/health` - liveness probe
//! - `GET /api/example` - fixed request/response pair for documentation
//!
//! Missing or empty text maps to 400, every other failure to 500 with the
//! error's message. All routes allow cross-origin callers.

use crate::engine::{Modulation, MoodEngine};
use crate::error::BloomError;
use crate::types::ParameterBundle;
use crate::SERVICE_NAME;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

/// Analysis request body. Only `text` is required; the modulation inputs
/// default to a zero streak and midpoint scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub streak_days: u32,
    #[serde(default = "midpoint")]
    pub community_mood: f64,
    #[serde(default = "midpoint")]
    pub trading_activity: f64,
}

fn midpoint() -> f64 {
    0.5
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub data: ParameterBundle,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The fixed request served by `/api/example`
pub fn example_request() -> AnalyzeRequest {
    AnalyzeRequest {
        text: "I'm feeling really happy today!".to_string(),
        streak_days: 5,
        community_mood: 0.8,
        trading_activity: 0.7,
    }
}

/// Build the application router around a shared engine
pub fn router(engine: Arc<MoodEngine>) -> Router {
    Router::new()
        .route("/api/mood-analysis", post(analyze_handler))
        .route("/api/health", get(health_handler))
        .route("/api/example", get(example_handler))
        .layer(CorsLayer::permissive())
        .with_state(engine)
}

/// Bind and serve until the process exits
pub async fn serve(engine: Arc<MoodEngine>, host: &str, port: u16) -> std::io::Result<()> {
    let app = router(engine);
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;

    info!("{} listening on {}", SERVICE_NAME, listener.local_addr()?);
    info!("  Analyze: POST http://{host}:{port}/api/mood-analysis");
    info!("  Health:  GET  http://{host}:{port}/api/health");
    info!("  Example: GET  http://{host}:{port}/api/example");

    axum::serve(listener, app).await
}

async fn analyze_handler(
    State(engine): State<Arc<MoodEngine>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.text.trim().is_empty() {
        return Err(error_response(BloomError::InvalidInput));
    }

    let modulation = Modulation {
        streak_days: request.streak_days,
        community_mood: request.community_mood,
        trading_activity: request.trading_activity,
    };

    let data = engine
        .analyze(&request.text, modulation)
        .map_err(error_response)?;

    debug!(
        emotion = %data.current_emotion,
        confidence = data.confidence,
        "mood analyzed"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        data,
    }))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
    }))
}

async fn example_handler(
    State(engine): State<Arc<MoodEngine>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let request = example_request();
    let modulation = Modulation {
        streak_days: request.streak_days,
        community_mood: request.community_mood,
        trading_activity: request.trading_activity,
    };

    let response = engine
        .analyze(&request.text, modulation)
        .map_err(error_response)?;

    Ok(Json(serde_json::json!({
        "example_request": request,
        "example_response": response,
    })))
}

fn error_response(error: BloomError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match error {
        BloomError::InvalidInput => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}
