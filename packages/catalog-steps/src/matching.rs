//! Country and category matching over product trees.
//!
//! A grouped product nests `brands`, which nest `variants`. A matcher is
//! asked about each level in turn and the first level that answers `true`
//! settles the product. Later levels are never inspected once an earlier one
//! matched, so a mismatch deeper in the tree can go unnoticed.

use std::collections::HashSet;

use serde_json::Value;

use crate::json::{children, scalar_text};

/// Fields that list supported countries.
const COUNTRY_LIST_FIELDS: [&str; 2] = ["supportedCountries", "countries"];

/// Field naming a single country.
const COUNTRY_FIELD: &str = "country";

/// Whether `entry` lists `country_code` in any recognized country field.
///
/// Comparison is case-insensitive. An entry without any country field cannot
/// prove support and yields `false`.
pub fn contains_country(entry: &Value, country_code: &str) -> bool {
    let mut candidates = Vec::new();

    for field in COUNTRY_LIST_FIELDS {
        if let Some(list) = entry.get(field).and_then(Value::as_array) {
            candidates.extend(list.iter().map(|c| scalar_text(c).to_uppercase()));
        }
    }
    if let Some(country) = entry.get(COUNTRY_FIELD).and_then(Value::as_str) {
        candidates.push(country.to_uppercase());
    }

    let wanted = country_code.to_uppercase();
    candidates.iter().any(|c| *c == wanted)
}

/// Whether `entry` aligns with any of `expected` categories.
///
/// Looks at `category` (string) and `categories` (list). An entry exposing
/// neither cannot be disproved and yields `true`.
pub fn matches_category(entry: &Value, expected: &[String]) -> bool {
    let mut categories = HashSet::new();

    if let Some(category) = entry.get("category").and_then(Value::as_str) {
        categories.insert(category.trim().to_lowercase());
    }
    if let Some(list) = entry.get("categories").and_then(Value::as_array) {
        categories.extend(list.iter().map(|c| scalar_text(c).trim().to_lowercase()));
    }

    if categories.is_empty() {
        return true;
    }

    expected
        .iter()
        .any(|want| categories.contains(&want.trim().to_lowercase()))
}

/// Apply `matcher` to the product, then each brand, then each brand's
/// variants, stopping at the first level that matches.
pub fn any_level_matches<F>(product: &Value, matcher: F) -> bool
where
    F: Fn(&Value) -> bool,
{
    if matcher(product) {
        return true;
    }

    children(product, "brands").iter().any(|brand| {
        matcher(brand) || children(brand, "variants").iter().any(&matcher)
    })
}

/// Split a comma-separated filter into trimmed, non-empty entries.
///
/// # Examples
/// ```
/// use bando_catalog_steps::matching::split_filter;
///
/// assert_eq!(split_filter(" esim, gift_card ,,"), vec!["esim", "gift_card"]);
/// ```
pub fn split_filter(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
