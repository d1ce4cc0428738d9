//! Site configuration.
//!
//! Defaults, then `ORDER_VIEWS_*` environment variables, then command-line
//! flags (applied by the binary).

use std::env;
use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str =
    "https://dz0w9fwc0k.execute-api.us-east-1.amazonaws.com/prod";
pub const DEFAULT_DETAIL_PAGE: &str = "details.html";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

pub const ENV_API_BASE_URL: &str = "ORDER_VIEWS_API_BASE_URL";
pub const ENV_DETAIL_PAGE: &str = "ORDER_VIEWS_DETAIL_PAGE";
pub const ENV_ACCEPT_ENVELOPE: &str = "ORDER_VIEWS_ACCEPT_ENVELOPE";
pub const ENV_BIND_ADDR: &str = "ORDER_VIEWS_BIND_ADDR";

/// Characters the HTTP router reads as parameters or wildcards.
const ROUTE_RESERVED: &[char] = &['*', ':', '{', '}'];

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API base URL: {0}")]
    InvalidApiBaseUrl(String),

    #[error("Detail page path must not be empty")]
    EmptyDetailPage,

    #[error("Invalid detail page: {0}")]
    InvalidDetailPage(String),

    #[error("Invalid bind address: {0}")]
    InvalidBindAddr(String),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Root of the order-management API; `/orders` is appended to it.
    pub api_base_url: String,
    /// Target of the list page's detail links.
    pub detail_page: String,
    /// Accept the legacy `{ "body": [...] }` list response.
    pub accept_envelope: bool,
    /// Listen address for `serve`.
    pub bind_addr: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            detail_page: DEFAULT_DETAIL_PAGE.to_string(),
            accept_envelope: true,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

/// Path part of a relative detail page, or `None` for an absolute link.
pub fn detail_page_path(detail_page: &str) -> Option<&str> {
    if detail_page.contains("://") {
        return None;
    }
    detail_page.split(['?', '#']).next()
}

/// Whether `path` can be mounted as a literal route.
pub fn is_routable(path: &str) -> bool {
    !path.contains(ROUTE_RESERVED)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source. Unset or unparsable
    /// values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            api_base_url: non_empty(ENV_API_BASE_URL).unwrap_or(defaults.api_base_url),
            detail_page: non_empty(ENV_DETAIL_PAGE).unwrap_or(defaults.detail_page),
            accept_envelope: lookup(ENV_ACCEPT_ENVELOPE)
                .and_then(|v| parse_bool(v.trim()))
                .unwrap_or(defaults.accept_envelope),
            bind_addr: non_empty(ENV_BIND_ADDR).unwrap_or(defaults.bind_addr),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base_url)
            .map_err(|e| ConfigError::InvalidApiBaseUrl(format!("{}: {e}", self.api_base_url)))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiBaseUrl(self.api_base_url.clone()));
        }
        if self.detail_page.trim().is_empty() {
            return Err(ConfigError::EmptyDetailPage);
        }
        if let Some(path) = detail_page_path(&self.detail_page) {
            if !is_routable(path) {
                return Err(ConfigError::InvalidDetailPage(self.detail_page.clone()));
            }
        }
        self.bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddr(format!("{}: {e}", self.bind_addr)))?;
        Ok(())
    }
}
