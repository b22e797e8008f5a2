//! Error types for the catalog step library.
//!
//! Every failing step surfaces exactly one `StepError`. Messages are written
//! for the person reading a failed scenario report, so they carry the index,
//! key or body excerpt needed to locate the problem.

use thiserror::Error;

/// Main error type for step operations.
#[derive(Debug, Error)]
pub enum StepError {
    /// A request step ran before a base URL was configured.
    #[error("No API base URL configured. Set one before sending requests.")]
    MissingBaseUrl,

    /// The base URL and path do not form a valid URL.
    #[error("Cannot resolve path '{path}' against base URL '{base}': {source}")]
    InvalidUrl {
        base: String,
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP transport or timeout failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// An assertion ran before any request was sent.
    #[error("No response available in context.")]
    NoResponse,

    /// The response body does not parse as JSON.
    #[error("Response is not valid JSON: {reason}\nBody: {body}")]
    InvalidJson { reason: String, body: String },

    /// Status code differs from the expected one.
    #[error("Expected HTTP {expected}, got {actual}. Body: {body}")]
    StatusMismatch {
        expected: u16,
        actual: u16,
        body: String,
    },

    /// A JSON value that should be an object is something else.
    #[error("Expected {what} to be an object, got: {actual}")]
    NotAnObject { what: String, actual: &'static str },

    /// Required key missing from a JSON object.
    #[error("Expected key \"{0}\" in JSON body.")]
    MissingKey(String),

    /// Key present but not mapped to a list.
    #[error("Expected \"{key}\" to be a list, got: {actual}")]
    NotAList { key: String, actual: &'static str },

    /// A list that must have a first element is empty.
    #[error("Expected at least one {0}, got empty list.")]
    EmptyList(String),

    /// A product element lacks a required field.
    #[error("Missing \"{field}\" on products[{index}]")]
    MissingProductField { field: String, index: usize },

    /// The first variant lacks a required field.
    #[error("Missing \"{0}\" on products[0].brands[0].variants[0]")]
    MissingVariantField(String),

    /// The first variant's `price` is absent or not an object.
    #[error("Expected \"price\" to be an object on the first variant.")]
    PriceNotObject,

    /// The first variant's price lacks a required field.
    #[error("Missing \"{0}\" inside price of the first variant.")]
    MissingPriceField(String),

    /// No level of a product's subtree lists the requested country.
    #[error(
        "products[{index}] does not indicate support for \"{country}\" via \"country\"/\"countries\"/\"supportedCountries\"."
    )]
    CountryMismatch { index: usize, country: String },

    /// No level of a product's subtree matches a requested product type.
    #[error("products[{index}] does not match requested product_type: {expected:?}")]
    ProductTypeMismatch { index: usize, expected: Vec<String> },

    /// Body carries none of the recognized error keys.
    #[error("Expected an error payload. Got: {0}")]
    MissingErrorPayload(String),

    /// A query parameter table lacks the `key` or `value` column.
    #[error("Invalid query parameter table: {0}")]
    InvalidQueryTable(String),

    /// A `KEY=VALUE` argument without `=`.
    #[error("Expected KEY=VALUE, got '{0}'")]
    InvalidKeyValue(String),

    /// One or more checks of a suite run failed.
    #[error("{failed} of {total} checks failed")]
    ChecksFailed { failed: usize, total: usize },
}

/// Result type alias for step operations.
pub type Result<T> = std::result::Result<T, StepError>;
