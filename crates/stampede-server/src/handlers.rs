use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Map, Value};

use crate::error::AppError;
use crate::state::AppState;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let service = state.service.clone();
    let effective = tokio::task::spawn_blocking(move || service.effective())
        .await
        .map_err(|err| AppError::internal(err.to_string()))??;
    Ok(Json(Value::Object(effective)))
}

pub async fn update_config(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<Value>, AppError> {
    let _guard = state.write_lock.lock().await;
    let service = state.service.clone();
    let effective = tokio::task::spawn_blocking(move || service.apply_update(body))
        .await
        .map_err(|err| AppError::internal(err.to_string()))??;
    Ok(Json(Value::Object(effective)))
}

pub async fn delete_config(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let _guard = state.write_lock.lock().await;
    let service = state.service.clone();
    tokio::task::spawn_blocking(move || service.remove(&key))
        .await
        .map_err(|err| AppError::internal(err.to_string()))??;
    Ok(StatusCode::NO_CONTENT)
}
