//! Observability subsystem.
//!
//! # Responsibilities
//! - Structured logging via tracing (logging.rs)
//! - Request metrics and Prometheus exposition (metrics.rs)

pub mod logging;
pub mod metrics;
