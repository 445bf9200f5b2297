use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus whether the planner can reach a generator.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let available = state.advice.generator_available();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "volau-api",
        "generator": {
            "available": available,
            "model": available.then_some(state.config.gemini_model.as_str())
        }
    }))
}
