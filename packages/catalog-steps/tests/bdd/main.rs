//! BDD Test Runner for the catalog step library
//!
//! Runs the Gherkin scenarios under `tests/features` against a mock catalog
//! API. Set `BANDO_LIVE_API=1` to run the repository's `features/` directory
//! against the real API instead.
//!
//! # Usage
//!
//! ```bash
//! cargo test --test bdd -- --nocapture
//! BANDO_LIVE_API=1 cargo test --test bdd
//! ```

// Allow panic/expect in test code - these are appropriate for test setup
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod helpers;
mod steps;

use cucumber::World;
use std::path::Path;

/// Environment variable switching the runner to the live suite.
const LIVE_ENV: &str = "BANDO_LIVE_API";

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .init();

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let features_dir = if std::env::var_os(LIVE_ENV).is_some() {
        manifest_dir
            .parent() // packages/
            .and_then(|p| p.parent()) // project root
            .map(|p| p.join("features"))
            .expect("Could not find features directory")
    } else {
        manifest_dir.join("tests").join("features")
    };

    if !features_dir.exists() {
        panic!("Features directory not found: {}", features_dir.display());
    }

    world::CatalogWorld::cucumber()
        .max_concurrent_scenarios(1) // Scenarios touch process environment variables
        .with_default_cli()
        .run_and_exit(features_dir)
        .await;
}
