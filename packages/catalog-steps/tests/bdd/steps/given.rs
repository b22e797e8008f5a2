//! Given step definitions
//!
//! Steps that set up the request context, plus test-only steps that stand up
//! the mock catalog API.

use cucumber::{gherkin::Step, given};

use bando_catalog_steps::config::TOKEN_ENV_VARS;
use bando_catalog_steps::table::query_rows;

use crate::helpers::mock_api::answer_get;
use crate::world::{check, CatalogWorld};

// =============================================================================
// Background steps
// =============================================================================

#[given(regex = r#"^the API base URL is "([^"]+)"$"#)]
fn set_base_url(world: &mut CatalogWorld, base_url: String) {
    check(world.ctx.set_base_url(&base_url));
}

#[given(regex = r#"^I send the header "([^"]+)" with value "([^"]*)"$"#)]
fn add_header(world: &mut CatalogWorld, name: String, value: String) {
    world.ctx.add_header(&name, &value);
}

#[given(r#"if I have a valid token I send the header "Authorization" with value "Bearer <BANDO_API_TOKEN>""#)]
fn optional_auth_header(world: &mut CatalogWorld) {
    world.ctx.add_optional_auth_header();
}

#[given("I prepare the query parameters:")]
fn prepare_query_params(world: &mut CatalogWorld, step: &Step) {
    let table = step
        .table
        .as_ref()
        .expect("\"I prepare the query parameters:\" needs a key | value table");
    match query_rows(&table.rows) {
        Ok(rows) => world.ctx.set_query(rows),
        Err(e) => panic!("{e}"),
    }
}

// =============================================================================
// Mock catalog API steps
// =============================================================================

#[given(regex = r#"^the catalog API answers GET "([^"]+)" with status (\d+) and body:$"#)]
async fn mock_answers_get(world: &mut CatalogWorld, route: String, status: u16, step: &Step) {
    let body = step.docstring.as_deref().unwrap_or_default().trim().to_string();
    let server = world.mock_server().await;
    answer_get(server, &route, status, &body).await;
}

#[given(regex = r#"^the API base URL is the mock catalog API at "([^"]*)"$"#)]
async fn set_mock_base_url(world: &mut CatalogWorld, suffix: String) {
    let base_url = format!("{}{}", world.mock_server().await.uri(), suffix);
    check(world.ctx.set_base_url(&base_url));
}

#[given(regex = r#"^the environment variable "([^"]+)" is "([^"]*)"$"#)]
fn set_env_var(_world: &mut CatalogWorld, name: String, value: String) {
    std::env::set_var(name, value);
}

#[given("no API token is set in the environment")]
fn clear_token_env(_world: &mut CatalogWorld) {
    for name in TOKEN_ENV_VARS {
        std::env::remove_var(name);
    }
}
