//! Then step definitions
//!
//! Steps that verify the current response, plus test-only steps that inspect
//! what the mock catalog API received.

use cucumber::then;

use crate::helpers::mock_api::{header_value, last_request, query_value};
use crate::world::{check, CatalogWorld};

// =============================================================================
// Response assertions
// =============================================================================

#[then(regex = r"^the response status code should be (\d+)$")]
fn assert_status(world: &mut CatalogWorld, code: u16) {
    check(world.ctx.assert_status(code));
}

#[then(regex = r#"^the JSON body should contain the attribute "([^"]+)" as a list$"#)]
fn assert_attribute_is_list(world: &mut CatalogWorld, key: String) {
    check(world.ctx.assert_attribute_is_list(&key));
}

#[then(r#"the JSON body should contain "products" as a list"#)]
fn assert_products_is_list(world: &mut CatalogWorld) {
    check(world.ctx.assert_products_is_list());
}

#[then(r#"the JSON body should contain the attribute "products" as a non-empty list"#)]
fn assert_products_nonempty(world: &mut CatalogWorld) {
    check(world.ctx.assert_products_nonempty());
}

#[then(regex = r#"^each element in "products" should include "([^"]+)"$"#)]
fn assert_each_product_has(world: &mut CatalogWorld, field: String) {
    check(world.ctx.assert_each_product_has(&field));
}

#[then(r#"each "products[0].brands[0].variants[0]" should include "sku""#)]
fn assert_first_variant_has_sku(world: &mut CatalogWorld) {
    check(world.ctx.assert_first_variant_has("sku"));
}

#[then(r#""products[0].brands[0].variants[0].price" should include "fiatCurrency" and "fiatValue""#)]
fn assert_first_variant_price_fields(world: &mut CatalogWorld) {
    check(world.ctx.assert_first_variant_price_fields());
}

#[then(
    regex = r#"^all returned elements should correspond to the country "([^"]+)" or appear in "supportedCountries"$"#
)]
fn assert_country(world: &mut CatalogWorld, country: String) {
    check(world.ctx.assert_products_support_country(&country));
}

#[then(r#"if "product_type" is specified, the groups or variants should match the requested product_type"#)]
fn assert_product_type(world: &mut CatalogWorld) {
    check(world.ctx.assert_products_match_product_type());
}

#[then("the JSON body should include an error object with a descriptive message")]
fn assert_error_object(world: &mut CatalogWorld) {
    check(world.ctx.assert_error_payload());
}

// =============================================================================
// Mock catalog API inspection
// =============================================================================

#[then(regex = r#"^the catalog API received the query parameter "([^"]+)" with value "([^"]*)"$"#)]
async fn assert_received_query(world: &mut CatalogWorld, key: String, expected: String) {
    let request = last_request(world.started_mock()).await;
    assert_eq!(
        query_value(&request, &key).as_deref(),
        Some(expected.as_str()),
        "Unexpected query parameter \"{key}\" on {}",
        request.url
    );
}

#[then("the catalog API received no query string")]
async fn assert_received_no_query(world: &mut CatalogWorld) {
    let request = last_request(world.started_mock()).await;
    assert!(
        request.url.query().is_none(),
        "Expected no query string, got {}",
        request.url
    );
}

#[then(regex = r#"^the catalog API received the header "([^"]+)" with value "([^"]*)"$"#)]
async fn assert_received_header(world: &mut CatalogWorld, name: String, expected: String) {
    let request = last_request(world.started_mock()).await;
    assert_eq!(
        header_value(&request, &name).as_deref(),
        Some(expected.as_str()),
        "Unexpected header \"{name}\""
    );
}

#[then(regex = r#"^the catalog API received no "([^"]+)" header$"#)]
async fn assert_received_no_header(world: &mut CatalogWorld, name: String) {
    let request = last_request(world.started_mock()).await;
    assert_eq!(header_value(&request, &name), None, "Unexpected header \"{name}\"");
}
