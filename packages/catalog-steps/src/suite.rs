//! The standard catalog check suite.
//!
//! Runs the same assertions the Gherkin steps bind, in scenario order, but
//! keeps going after a failure so a single run reports every problem.

use crate::context::ScenarioContext;
use crate::error::{Result, StepError};

/// Result of one named check.
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: String,
    pub result: Result<()>,
}

impl CheckOutcome {
    fn new(name: impl Into<String>, result: Result<()>) -> Self {
        Self {
            name: name.into(),
            result,
        }
    }

    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// What the suite expects from the current response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteOptions {
    pub expected_status: u16,
    pub country: Option<String>,
}

impl Default for SuiteOptions {
    fn default() -> Self {
        Self {
            expected_status: 200,
            country: None,
        }
    }
}

/// Run every applicable check against the context's current response.
///
/// A 2xx expectation runs the catalog shape checks; anything else runs the
/// error payload check.
pub fn run_catalog_checks(ctx: &ScenarioContext, options: &SuiteOptions) -> Vec<CheckOutcome> {
    let mut outcomes = vec![CheckOutcome::new(
        format!("status is {}", options.expected_status),
        ctx.assert_status(options.expected_status),
    )];

    if !(200..300).contains(&options.expected_status) {
        outcomes.push(CheckOutcome::new(
            "body is an error object",
            ctx.assert_error_payload(),
        ));
        return outcomes;
    }

    outcomes.extend([
        CheckOutcome::new("products is a list", ctx.assert_products_is_list()),
        CheckOutcome::new("products is non-empty", ctx.assert_products_nonempty()),
        CheckOutcome::new(
            "each product has productType",
            ctx.assert_each_product_has("productType"),
        ),
        CheckOutcome::new("first variant has sku", ctx.assert_first_variant_has("sku")),
        CheckOutcome::new(
            "first variant price has fiatCurrency and fiatValue",
            ctx.assert_first_variant_price_fields(),
        ),
    ]);

    if let Some(country) = &options.country {
        outcomes.push(CheckOutcome::new(
            format!("products support country {country}"),
            ctx.assert_products_support_country(country),
        ));
    }

    outcomes.push(CheckOutcome::new(
        "products match requested product_type",
        ctx.assert_products_match_product_type(),
    ));

    outcomes
}

/// Collapse a suite run into `Ok` or `ChecksFailed`.
pub fn verdict(outcomes: &[CheckOutcome]) -> Result<()> {
    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed == 0 {
        Ok(())
    } else {
        Err(StepError::ChecksFailed {
            failed,
            total: outcomes.len(),
        })
    }
}
