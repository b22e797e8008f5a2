//! Conversion of `key | value` data tables into query rows.

use crate::error::{Result, StepError};

/// Convert table rows into trimmed `(key, value)` pairs.
///
/// The first row is the header and must name a `key` and a `value` column,
/// in any position. Rows shorter than either column index are rejected.
///
/// Table format:
/// ```text
/// | key          | value |
/// | country      | US    |
/// | product_type | esim  |
/// ```
pub fn query_rows(rows: &[Vec<String>]) -> Result<Vec<(String, String)>> {
    let Some((header, data)) = rows.split_first() else {
        return Err(StepError::InvalidQueryTable("table is empty".to_string()));
    };

    let column = |name: &str| {
        header
            .iter()
            .position(|cell| cell.trim() == name)
            .ok_or_else(|| StepError::InvalidQueryTable(format!("missing \"{name}\" column")))
    };
    let key_col = column("key")?;
    let value_col = column("value")?;

    data.iter()
        .enumerate()
        .map(|(i, row)| {
            match (row.get(key_col), row.get(value_col)) {
                (Some(key), Some(value)) => {
                    Ok((key.trim().to_string(), value.trim().to_string()))
                }
                _ => Err(StepError::InvalidQueryTable(format!(
                    "row {} has {} cells",
                    i + 1,
                    row.len()
                ))),
            }
        })
        .collect()
}

/// Split a `KEY=VALUE` argument at the first `=`.
///
/// # Examples
/// ```
/// use bando_catalog_steps::table::parse_key_value;
///
/// let (k, v) = parse_key_value("pageSize=5").unwrap();
/// assert_eq!((k.as_str(), v.as_str()), ("pageSize", "5"));
/// ```
pub fn parse_key_value(raw: &str) -> Result<(String, String)> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| StepError::InvalidKeyValue(raw.to_string()))
}
