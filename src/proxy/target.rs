//! Resolved target parsing.
//!
//! # Responsibilities
//! - Parse the registry's resolved URL string into host, port, and path
//! - Apply the default upstream port when the URL names none
//!
//! # Design Decisions
//! - Validation happens here, at resolution time, not at registration
//! - A URL without a host has nothing to forward to and is rejected the
//!   same way as one that does not parse

use url::Url;

use crate::proxy::error::ProxyError;

/// Port used when a registered base URL does not name one.
pub const DEFAULT_UPSTREAM_PORT: u16 = 8080;

/// The outbound request descriptor for one proxied call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyTarget {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl ProxyTarget {
    /// Parse a resolved URL string into a forwarding target.
    pub fn parse(resolved: &str) -> Result<Self, ProxyError> {
        let url = Url::parse(resolved).map_err(|_| ProxyError::InvalidTargetUrl)?;
        let host = url
            .host_str()
            .ok_or(ProxyError::InvalidTargetUrl)?
            .to_string();
        let port = url.port().unwrap_or(DEFAULT_UPSTREAM_PORT);
        let path = url.path().to_string();

        Ok(Self { host, port, path })
    }

    /// Full outbound URI for this target.
    pub fn uri(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

impl std::fmt::Display for ProxyTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}{}", self.host, self.port, self.path)
    }
}
