//! Configuration constants and URL helpers for the catalog step library.

use std::time::Duration;

use url::Url;

use crate::error::{Result, StepError};

/// Path of the grouped product catalog endpoint, relative to an API base URL.
pub const PRODUCTS_GROUPED_PATH: &str = "/products/grouped/";

/// Base URL of the production (live) API.
pub const PRODUCTION_BASE_URL: &str = "https://api.bando.cool/api/v1";

/// Base URL of the development sandbox API.
pub const SANDBOX_BASE_URL: &str = "https://apidev.bando.cool/api/v1";

/// Timeout for a GET without query parameters, in seconds.
pub const PLAIN_GET_TIMEOUT_SECS: u64 = 30;

/// Timeout for a GET with query parameters, in seconds.
///
/// Filtered aggregation queries are larger and slower than the plain listing.
pub const PARAMS_GET_TIMEOUT_SECS: u64 = 60;

/// Characters of response body quoted in a status mismatch failure.
pub const STATUS_BODY_EXCERPT_CHARS: usize = 800;

/// Characters of response body quoted in JSON shape and error payload failures.
pub const JSON_BODY_EXCERPT_CHARS: usize = 500;

/// Environment variables holding the optional bearer token, in lookup order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["BANDO_API_TOKEN", "BANDO_TOKEN"];

/// Query parameter carrying the comma-separated product type filter.
pub const PRODUCT_TYPE_PARAM: &str = "product_type";

/// User agent string identifying this crate.
pub const USER_AGENT: &str = concat!("bando-catalog-steps/", env!("CARGO_PKG_VERSION"));

/// Known API deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Environment {
    /// Development sandbox.
    Sandbox,
    /// Production (live).
    #[default]
    Production,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Timeout for a GET, depending on whether it carries query parameters.
pub fn get_timeout(with_params: bool) -> Duration {
    if with_params {
        Duration::from_secs(PARAMS_GET_TIMEOUT_SECS)
    } else {
        Duration::from_secs(PLAIN_GET_TIMEOUT_SECS)
    }
}

/// Strip trailing slashes from a base URL.
///
/// # Examples
/// ```
/// use bando_catalog_steps::config::normalize_base_url;
///
/// assert_eq!(normalize_base_url("https://api.bando.cool/api/v1/"), "https://api.bando.cool/api/v1");
/// assert_eq!(normalize_base_url("http://localhost:8080"), "http://localhost:8080");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Resolve `path` against a base URL.
///
/// Trailing slashes on the base and leading slashes are stripped from `path` so it is always appended to the
/// base URL's own path instead of replacing it.
///
/// # Examples
/// ```
/// use bando_catalog_steps::config::join_url;
///
/// let url = join_url("https://api.bando.cool/api/v1", "/products/grouped/").unwrap();
/// assert_eq!(url.as_str(), "https://api.bando.cool/api/v1/products/grouped/");
/// ```
pub fn join_url(base_url: &str, path: &str) -> Result<Url> {
    let invalid = |source| StepError::InvalidUrl {
        base: base_url.to_string(),
        path: path.to_string(),
        source,
    };

    let base = Url::parse(&format!("{}/", normalize_base_url(base_url))).map_err(invalid)?;
    base.join(path.trim_start_matches('/')).map_err(invalid)
}

/// Read the bearer token from the first non-empty recognized variable.
pub fn bearer_token_from_env() -> Option<String> {
    token_from(|name| std::env::var(name).ok())
}

/// Token lookup over an arbitrary variable source.
pub(crate) fn token_from<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
}
