//! In-memory service registry.
//!
//! # Responsibilities
//! - Store logical service name → base URL mappings
//! - Resolve a (service, endpoint) pair into a full target URL
//!
//! # Design Decisions
//! - DashMap gives safe concurrent access; each entry is replaced as a
//!   whole pair, so readers never observe a partial write
//! - No validation at registration time; malformed URLs surface when a
//!   proxy attempt tries to parse the resolved target

use dashmap::DashMap;

/// Process-wide table of registered services.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    entries: DashMap<String, String>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Register a service, overwriting any previous entry for the same name.
    ///
    /// Duplicate names are not an error: overwrite is the defined semantics.
    pub fn register(&self, application: impl Into<String>, url: impl Into<String>) {
        let application = application.into();
        let url = url.into();
        tracing::info!(application = %application, url = %url, "Service registered");
        self.entries.insert(application, url);
    }

    /// Resolve a service and endpoint into a full target URL.
    ///
    /// Returns `None` when the service is unknown, the sole error condition.
    ///
    /// Join rule: a single `/` is inserted between the stored base URL and
    /// the endpoint segment, with no further normalization. A base URL that
    /// already ends in `/` therefore produces `//` in the target; callers
    /// get exactly the path they registered plus the endpoint they asked for.
    pub fn resolve(&self, application: &str, endpoint: &str) -> Option<String> {
        self.entries
            .get(application)
            .map(|base| format!("{}/{}", base.value(), endpoint))
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
