//! HTTP surface subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, dispatch)
//!     → handlers.rs registration (POST /registry)
//!       or handlers.rs proxy ({service}/{endpoint})
//!     → plain-text or relayed-body response
//! ```

pub mod handlers;
pub mod server;

pub use server::HttpServer;
