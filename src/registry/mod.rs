//! Service registry subsystem.
//!
//! # Data Flow
//! ```text
//! POST /registry {application, url}
//!     → store.rs (insert or overwrite entry)
//!
//! Proxy request for {service}/{endpoint}
//!     → store.rs resolve(service, endpoint)
//!     → Some(target url) or None (unknown service)
//! ```
//!
//! # Design Decisions
//! - Single owner of the name → base URL table; the raw map is never exposed
//! - Last write wins on re-registration (no versioning, no history)
//! - Entries never expire; the table lives and dies with the process
//! - Concurrent register/resolve without an external lock

pub mod store;

pub use store::ServiceRegistry;
