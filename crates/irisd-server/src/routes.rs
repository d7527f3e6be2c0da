//! HTTP routes and handlers

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .fallback(fallback)
        .with_state(state)
}

/// Inference request body
#[derive(Debug, Deserialize)]
struct PredictRequest {
    /// A single sample as a flat vector of feature values
    features: Vec<f64>,
}

/// Inference response body
#[derive(Debug, Serialize)]
struct PredictResponse {
    prediction: i64,
}

/// Synchronous inference on one sample.
///
/// The body is read raw and parsed with serde_json directly, so a missing
/// or wrong content-type header never rejects a request; every failure
/// between parsing and prediction funnels into a structured 400.
async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictResponse>, ApiError> {
    let classifier = state.classifier().ok_or(ApiError::ModelUnavailable)?;

    let req: PredictRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    // Reshape the flat vector into a single-row matrix. The model, not the
    // handler, decides whether the feature count fits; a mismatch comes
    // back as a prediction error and maps to 400 like any other bad input.
    let n_features = req.features.len();
    let matrix = Array2::from_shape_vec((1, n_features), req.features)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let labels = classifier
        .predict(&matrix)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let prediction = labels
        .first()
        .copied()
        .ok_or_else(|| ApiError::InvalidInput("classifier returned no prediction".to_string()))?;

    debug!("Predicted class {} for {} features", prediction, n_features);

    Ok(Json(PredictResponse { prediction }))
}

/// Liveness probe. Always 200; `model_loaded` is the only readiness signal.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "model_loaded": state.model_loaded(),
    }))
}

async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Error boundary for the inference handler
#[derive(Debug)]
pub enum ApiError {
    /// No model is loaded; inference is unavailable
    ModelUnavailable,
    /// Bad request body, bad shape, or a prediction failure caused by the
    /// caller's payload
    InvalidInput(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::ModelUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "Model not loaded".to_string())
            }
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
