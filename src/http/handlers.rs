//! Inbound request handlers.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::proxy::{body_policy, BodyPolicy, ProxyError, ProxyTarget};

/// Registration payload for `POST /registry`.
#[derive(Debug, Deserialize)]
pub struct ServiceRegistration {
    pub application: String,
    pub url: String,
}

/// `POST /registry` — register a service, overwriting any previous entry.
pub async fn register_service(
    State(state): State<AppState>,
    Json(request): Json<ServiceRegistration>,
) -> impl IntoResponse {
    let reply = format!("Registered: {}:{}", request.application, request.url);
    state.registry.register(request.application, request.url);
    (StatusCode::OK, reply)
}

/// Any-method `/{service}/{endpoint}` — resolve and forward one request.
pub async fn proxy_request(
    State(state): State<AppState>,
    Path((service, endpoint)): Path<(String, String)>,
    method: Method,
    body: Bytes,
) -> Response {
    let start = Instant::now();
    let method_str = method.to_string();

    match proxy(&state, method, &service, &endpoint, body).await {
        Ok(bytes) => {
            metrics::record_request(&method_str, 200, &service, start);
            (StatusCode::OK, bytes).into_response()
        }
        Err(err) => {
            tracing::warn!(
                method = %method_str,
                service = %service,
                endpoint = %endpoint,
                error = %err,
                "Proxy request failed"
            );
            let response = err.into_response();
            metrics::record_request(&method_str, response.status().as_u16(), &service, start);
            response
        }
    }
}

/// The linear decision tree for one proxied call:
/// resolve → parse target → body check → forward.
async fn proxy(
    state: &AppState,
    method: Method,
    service: &str,
    endpoint: &str,
    body: Bytes,
) -> Result<Bytes, ProxyError> {
    let resolved = state
        .registry
        .resolve(service, endpoint)
        .ok_or(ProxyError::NotRegistered)?;

    let target = ProxyTarget::parse(&resolved)?;

    let body = match body_policy(&method) {
        BodyPolicy::Required if body.is_empty() => return Err(ProxyError::MissingBody),
        BodyPolicy::Required => Some(body),
        BodyPolicy::NoBody => None,
    };

    tracing::info!(method = %method, target = %target, "Forwarding request");

    state.forwarder.forward(method, &target, body).await
}
