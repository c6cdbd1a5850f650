//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    GetResponse, HealthResponse, KeyResponse, LenResponse, MessageResponse, SetRequest,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache handle
    pub cache: SharedCache<String, String>,
}

impl AppState {
    /// Creates a new AppState around the given cache handle.
    pub fn new(cache: SharedCache<String, String>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(SharedCache::new(config.max_entries, config.ttl()))
    }
}

/// Handler for PUT /set
///
/// Stores a key-value pair, restarting its TTL if the key already exists.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<KeyResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.cache.add(req.key.clone(), req.value).await;

    Ok(Json(KeyResponse::stored(req.key)))
}

/// Handler for GET /get/:key
///
/// Missing and expired keys are both reported as not found.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state
        .cache
        .get(key.as_str())
        .await
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for DELETE /del/:key
pub async fn remove_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<KeyResponse> {
    state.cache.remove(key.as_str()).await;
    Json(KeyResponse::removed(key))
}

/// Handler for POST /remove-oldest
pub async fn remove_oldest_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    let mut cache = state.cache.lock().await;
    cache.remove_oldest();
    Json(MessageResponse::new("Oldest entry removed", cache.len()))
}

/// Handler for POST /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.cache.clear().await;
    Json(MessageResponse::new("Cache cleared", 0))
}

/// Handler for GET /len
pub async fn len_handler(State(state): State<AppState>) -> Json<LenResponse> {
    let cache = state.cache.lock().await;

    Json(LenResponse::new(cache.len(), cache.max_entries(), cache.ttl()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
