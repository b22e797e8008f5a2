//! Bando Catalog Steps - Gherkin step library for the `/products/grouped/` endpoint.
//!
//! This crate turns human-readable scenario steps into HTTP calls against a
//! configurable base URL and into structural assertions over the JSON that
//! comes back. It tolerates minor variation in the response schema: it never
//! models the catalog, it only inspects a few fixed paths.
//!
//! # Example
//!
//! ```
//! use bando_catalog_steps::config;
//!
//! let url = config::join_url("https://api.bando.cool/api/v1/", "/products/grouped/").unwrap();
//! assert_eq!(url.as_str(), "https://api.bando.cool/api/v1/products/grouped/");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, environments, URL and token helpers
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client and response snapshots
//! - [`context`]: Per-scenario state, setup and request steps
//! - [`table`]: Query parameter tables
//! - [`json`]: Type-checked accessors over untyped JSON
//! - [`matching`]: Country and category matching over product trees
//! - [`assertions`]: Assertion steps
//! - [`suite`]: Standard check suite
//! - [`summary`]: Catalog summary for humans
//! - [`cli`]: Command-line interface

pub mod assertions;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod json;
pub mod matching;
pub mod suite;
pub mod summary;
pub mod table;

pub use config::Environment;
pub use context::ScenarioContext;
pub use error::{Result, StepError};
pub use http::ApiResponse;
