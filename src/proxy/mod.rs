//! Proxy subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound {method, service, endpoint, body?}
//!     → registry resolve (unknown service → NotRegistered)
//!     → target.rs (parse resolved URL, default port → InvalidTargetUrl)
//!     → forwarder.rs body policy (required but absent → MissingBody)
//!     → forwarder.rs outbound call (transport failure → Forwarding)
//!     → relay upstream body to the caller
//! ```
//!
//! # Design Decisions
//! - Every outcome is a variant of one closed error type; no handler path
//!   can leak an unhandled fault
//! - Strict linear decision tree, single forwarding attempt, no retries
//! - Stateless per call; all shared state lives in the registry

pub mod error;
pub mod forwarder;
pub mod target;

pub use error::ProxyError;
pub use forwarder::{body_policy, BodyPolicy, Forwarder};
pub use target::ProxyTarget;
