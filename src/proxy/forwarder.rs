//! Outbound request forwarding.
//!
//! # Responsibilities
//! - Decide whether a method requires a request body
//! - Issue the single outbound HTTP attempt against a parsed target
//! - Collect and relay the upstream body
//!
//! # Design Decisions
//! - One forwarding attempt; resilience (retry, backoff, circuit breaking)
//!   is the caller's concern
//! - The upstream status code and headers are dropped: a completed forward
//!   relays the body alone, and the handler answers 200
//! - No timeout is applied; a backend that never answers hangs only the
//!   one inbound request awaiting it

use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::proxy::error::ProxyError;
use crate::proxy::target::ProxyTarget;

/// Whether a method carries a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPolicy {
    /// Forwarded without a payload (GET, DELETE, everything else).
    NoBody,
    /// A body must be present before the outbound call (POST, PUT, PATCH).
    Required,
}

/// Look up the body rule for an HTTP method. The single place the
/// body-required set is defined.
pub fn body_policy(method: &Method) -> BodyPolicy {
    match method.as_str() {
        "POST" | "PUT" | "PATCH" => BodyPolicy::Required,
        _ => BodyPolicy::NoBody,
    }
}

/// Outbound HTTP client wrapper.
#[derive(Clone)]
pub struct Forwarder {
    client: Client<HttpConnector, Body>,
}

impl Forwarder {
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client }
    }

    /// Forward one request to the target, mirroring the inbound method.
    ///
    /// A present body is sent verbatim with `Content-Type: application/json`;
    /// the gateway is payload-agnostic and never re-serializes. The whole
    /// upstream body is buffered before being relayed, matching the
    /// original relay behavior.
    pub async fn forward(
        &self,
        method: Method,
        target: &ProxyTarget,
        body: Option<Bytes>,
    ) -> Result<Bytes, ProxyError> {
        let builder = Request::builder().method(method).uri(target.uri());
        let request = match body {
            Some(bytes) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(bytes)),
            None => builder.body(Body::empty()),
        }
        .map_err(|e| ProxyError::Forwarding(e.to_string()))?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| ProxyError::Forwarding(e.to_string()))?;

        // Upstream status intentionally ignored; only the body is relayed.
        let body = Body::new(response.into_body());
        axum::body::to_bytes(body, usize::MAX)
            .await
            .map_err(|e| ProxyError::Forwarding(e.to_string()))
    }
}

impl Default for Forwarder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_required_set_is_post_put_patch() {
        assert_eq!(body_policy(&Method::POST), BodyPolicy::Required);
        assert_eq!(body_policy(&Method::PUT), BodyPolicy::Required);
        assert_eq!(body_policy(&Method::PATCH), BodyPolicy::Required);
    }

    #[test]
    fn other_methods_forward_without_a_body() {
        assert_eq!(body_policy(&Method::GET), BodyPolicy::NoBody);
        assert_eq!(body_policy(&Method::DELETE), BodyPolicy::NoBody);
        assert_eq!(body_policy(&Method::HEAD), BodyPolicy::NoBody);
    }
}
