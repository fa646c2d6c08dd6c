use crate::config::AssetsConfig;
use crate::server::routes::{items, points};

use axum::{
    Json, Router,
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode, header::USER_AGENT},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use base64::Engine as _;
use rand::RngCore;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Shared handler state: the pooled store connection and the asset
/// resolution config. Cheap to clone; handlers stay stateless.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub assets: AssetsConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, assets: AssetsConfig) -> Self {
        Self { pool, assets }
    }
}

async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Ecopoints API" }))
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn access_log(req: Request, next: Next) -> Response {
    // Capture request metadata before moving `req` into the handler stack.
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let request_id = req
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    // Always reflect `x-request-id` for easier correlation, even if the
    // client didn't send one.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status().as_u16();
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    if resp.status().is_server_error() {
        error!(
            status,
            request_id,
            method = %method,
            path,
            latency_ms,
            user_agent,
            "request"
        );
    } else if resp.status().is_client_error() {
        warn!(
            status,
            request_id,
            method = %method,
            path,
            latency_ms,
            user_agent,
            "request"
        );
    } else {
        info!(
            status,
            request_id,
            method = %method,
            path,
            latency_ms,
            user_agent,
            "request"
        );
    }

    resp
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .merge(items::router())
        .merge(points::router())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
        .layer(CorsLayer::permissive())
}
