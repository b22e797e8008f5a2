//! When step definitions
//!
//! Steps that send requests to the API under test.

use cucumber::when;

use crate::world::CatalogWorld;

#[when(regex = r#"^I send a GET request to "([^"]+)"$"#)]
async fn send_get(world: &mut CatalogWorld, path: String) {
    if let Err(e) = world.ctx.get(&path).await {
        panic!("{e}");
    }
}

#[when(regex = r#"^I send a GET request to "([^"]+)" with those parameters$"#)]
async fn send_get_with_params(world: &mut CatalogWorld, path: String) {
    if let Err(e) = world.ctx.get_with_params(&path).await {
        panic!("{e}");
    }
}
