//! Human-readable summary of a grouped catalog response.
//!
//! Deserializes only the fields it prints and tolerates everything else
//! being absent.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::config::JSON_BODY_EXCERPT_CHARS;
use crate::error::{Result, StepError};
use crate::json::excerpt;

#[derive(Debug, Default, Deserialize)]
struct GroupedCatalog {
    #[serde(default)]
    products: Vec<ProductGroup>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductGroup {
    #[serde(default)]
    product_type: Option<String>,
    #[serde(default)]
    brands: Vec<Brand>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Brand {
    #[serde(default)]
    brand_name: Option<String>,
    #[serde(default)]
    brand_slug: Option<String>,
    #[serde(default)]
    order: Option<i64>,
    #[serde(default)]
    variants: Vec<Value>,
}

/// One product group: its type, brands in display order and variant total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub product_type: String,
    pub brands: Vec<String>,
    pub variant_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogSummary {
    pub groups: Vec<GroupSummary>,
}

impl CatalogSummary {
    /// Summarize a parsed `/products/grouped/` body.
    pub fn from_body(body: &Value) -> Result<Self> {
        let catalog = GroupedCatalog::deserialize(body).map_err(|e| StepError::InvalidJson {
            reason: e.to_string(),
            body: excerpt(&body.to_string(), JSON_BODY_EXCERPT_CHARS),
        })?;

        let groups = catalog
            .products
            .into_iter()
            .map(|group| {
                let mut brands = group.brands;
                // Unordered brands sort last.
                brands.sort_by_key(|b| (b.order.is_none(), b.order));

                GroupSummary {
                    product_type: group.product_type.unwrap_or_else(|| "(untyped)".to_string()),
                    variant_count: brands.iter().map(|b| b.variants.len()).sum(),
                    brands: brands
                        .into_iter()
                        .map(|b| {
                            b.brand_name
                                .or(b.brand_slug)
                                .unwrap_or_else(|| "(unnamed)".to_string())
                        })
                        .collect(),
                }
            })
            .collect();

        Ok(Self { groups })
    }

    pub fn variant_count(&self) -> usize {
        self.groups.iter().map(|g| g.variant_count).sum()
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(
                f,
                "{}: {} brands, {} variants",
                group.product_type,
                group.brands.len(),
                group.variant_count
            )?;
            for brand in &group.brands {
                writeln!(f, "  - {brand}")?;
            }
        }
        Ok(())
    }
}
