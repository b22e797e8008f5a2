//! Assertions over the current response.
//!
//! Every assertion returns `Err` with a descriptive message instead of a
//! boolean, so a failing step aborts its scenario.

use serde_json::{Map, Value};

use crate::config::{JSON_BODY_EXCERPT_CHARS, PRODUCT_TYPE_PARAM, STATUS_BODY_EXCERPT_CHARS};
use crate::context::ScenarioContext;
use crate::error::{Result, StepError};
use crate::json::{ensure_list, ensure_object, excerpt, first_or_fail, has_key};
use crate::matching::{any_level_matches, contains_country, matches_category, split_filter};

/// Top-level key holding the product groups.
const PRODUCTS: &str = "products";

/// Keys that mark a body as an error payload.
const ERROR_KEYS: [&str; 3] = ["error", "message", "detail"];

impl ScenarioContext {
    /// Parse the current response body as JSON.
    pub fn json_body(&self) -> Result<Value> {
        self.response()?.json()
    }

    /// The response status equals `expected`.
    pub fn assert_status(&self, expected: u16) -> Result<()> {
        let response = self.response()?;
        if response.status() == expected {
            return Ok(());
        }
        Err(StepError::StatusMismatch {
            expected,
            actual: response.status(),
            body: excerpt(response.body(), STATUS_BODY_EXCERPT_CHARS),
        })
    }

    /// The body is an object whose `key` holds a list.
    pub fn assert_attribute_is_list(&self, key: &str) -> Result<()> {
        let body = self.json_body()?;
        ensure_list(body_object(&body)?, key)?;
        Ok(())
    }

    /// The body's `products` is a list, possibly empty.
    pub fn assert_products_is_list(&self) -> Result<()> {
        self.assert_attribute_is_list(PRODUCTS)
    }

    /// The body's `products` is a list with at least one element.
    pub fn assert_products_nonempty(&self) -> Result<()> {
        let body = self.json_body()?;
        let products = ensure_list(body_object(&body)?, PRODUCTS)?;
        first_or_fail(products, "product")?;
        Ok(())
    }

    /// Every product carries `field`. Reports the first offending index.
    pub fn assert_each_product_has(&self, field: &str) -> Result<()> {
        let body = self.json_body()?;
        let products = ensure_list(body_object(&body)?, PRODUCTS)?;

        match products.iter().position(|p| !has_key(p, field)) {
            Some(index) => Err(StepError::MissingProductField {
                field: field.to_string(),
                index,
            }),
            None => Ok(()),
        }
    }

    /// `products[0].brands[0].variants[0]` carries `field`.
    pub fn assert_first_variant_has(&self, field: &str) -> Result<()> {
        let body = self.json_body()?;
        let variant = first_variant(&body)?;
        if variant.contains_key(field) {
            Ok(())
        } else {
            Err(StepError::MissingVariantField(field.to_string()))
        }
    }

    /// `products[0].brands[0].variants[0].price` carries `fiatCurrency` and
    /// `fiatValue`.
    pub fn assert_first_variant_price_fields(&self) -> Result<()> {
        let body = self.json_body()?;
        let price = first_variant(&body)?
            .get("price")
            .and_then(Value::as_object)
            .ok_or(StepError::PriceNotObject)?;

        for field in ["fiatCurrency", "fiatValue"] {
            if !price.contains_key(field) {
                return Err(StepError::MissingPriceField(field.to_string()));
            }
        }
        Ok(())
    }

    /// Every product lists `country` at product, brand or variant level.
    pub fn assert_products_support_country(&self, country: &str) -> Result<()> {
        let body = self.json_body()?;
        let products = ensure_list(body_object(&body)?, PRODUCTS)?;

        match products
            .iter()
            .position(|p| !any_level_matches(p, |entry| contains_country(entry, country)))
        {
            Some(index) => Err(StepError::CountryMismatch {
                index,
                country: country.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Every product aligns with one of the requested product types.
    ///
    /// Passes without looking at the response when the scenario never set a
    /// `product_type` query parameter: there is no filter to verify.
    pub fn assert_products_match_product_type(&self) -> Result<()> {
        let requested = match self.query_param(PRODUCT_TYPE_PARAM) {
            Some(requested) if !requested.is_empty() => requested,
            _ => {
                tracing::debug!("No product_type requested, nothing to verify");
                return Ok(());
            }
        };
        let expected = split_filter(requested);

        let body = self.json_body()?;
        let products = ensure_list(body_object(&body)?, PRODUCTS)?;

        match products
            .iter()
            .position(|p| !any_level_matches(p, |entry| matches_category(entry, &expected)))
        {
            Some(index) => Err(StepError::ProductTypeMismatch { index, expected }),
            None => Ok(()),
        }
    }

    /// The body is an object with at least one recognized error key.
    ///
    /// `errors` only counts when it holds a list or an object.
    pub fn assert_error_payload(&self) -> Result<()> {
        let body = self.json_body()?;

        let has_error = body.as_object().is_some_and(|object| {
            ERROR_KEYS.iter().any(|key| object.contains_key(*key))
                || matches!(object.get("errors"), Some(Value::Array(_) | Value::Object(_)))
        });
        if has_error {
            return Ok(());
        }
        Err(StepError::MissingErrorPayload(excerpt(
            &body.to_string(),
            JSON_BODY_EXCERPT_CHARS,
        )))
    }
}

fn body_object(body: &Value) -> Result<&Map<String, Value>> {
    ensure_object(body, "JSON body")
}

/// Descend `products[0] -> brands[0] -> variants[0]`, failing at the first
/// level that is missing, not a list, or empty.
fn first_variant(body: &Value) -> Result<&Map<String, Value>> {
    let product = first_or_fail(ensure_list(body_object(body)?, PRODUCTS)?, "product")?;
    let product = ensure_object(product, "products[0]")?;

    let brand = first_or_fail(ensure_list(product, "brands")?, "brand")?;
    let brand = ensure_object(brand, "products[0].brands[0]")?;

    let variant = first_or_fail(ensure_list(brand, "variants")?, "variant")?;
    ensure_object(variant, "products[0].brands[0].variants[0]")
}
