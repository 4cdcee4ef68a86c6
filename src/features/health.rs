use crate::AppState;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

// liveness only, never touches the database
pub fn health_router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
