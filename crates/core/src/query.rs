//! Range query parameters
//!
//! A [`Query`] names optional exclusive bounds, a direction, a result cap and
//! whether values should be returned along with keys. It deserializes from the
//! loose JSON shape callers send:
//!
//! ```text
//! {"gt": "a", "lt": "d", "reverse": true, "limit": "2", "values": true}
//! ```
//!
//! `limit` accepts a number or a string and keeps its leading decimal digits.
//! Anything unparseable, negative or absent becomes 0, which means unbounded.
//!
//! `gt` and `lt` accept a string, number or boolean and keep its text form.
//! A falsy bound (`""`, `0`, `false`, `null`) is no bound at all.

use crate::record::is_falsy;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Listing parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// Exclusive lower bound (logical key)
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_bound"
    )]
    pub gt: Option<String>,
    /// Exclusive upper bound (logical key)
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_bound"
    )]
    pub lt: Option<String>,
    /// Descending order when set
    pub reverse: bool,
    /// Maximum results, 0 for no limit
    #[serde(deserialize_with = "deserialize_limit")]
    pub limit: usize,
    /// Return `{key, value}` items instead of bare keys
    pub values: bool,
}

impl Query {
    /// Unbounded ascending key listing
    pub fn new() -> Self {
        Query::default()
    }

    /// Keys strictly greater than `key`
    pub fn greater_than(mut self, key: impl Into<String>) -> Self {
        self.gt = Some(key.into());
        self
    }

    /// Keys strictly less than `key`
    pub fn less_than(mut self, key: impl Into<String>) -> Self {
        self.lt = Some(key.into());
        self
    }

    /// Lower bound, `None` when unset or empty
    pub fn lower_bound(&self) -> Option<&str> {
        self.gt.as_deref().filter(|k| !k.is_empty())
    }

    /// Upper bound, `None` when unset or empty
    pub fn upper_bound(&self) -> Option<&str> {
        self.lt.as_deref().filter(|k| !k.is_empty())
    }

    /// Descending order
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Cap the number of results, 0 for no limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Return values alongside keys
    pub fn with_values(mut self) -> Self {
        self.values = true;
        self
    }
}

/// Parse a limit the lenient way: leading digits of a string, else 0
///
/// ```
/// use starfire_core::query::parse_limit;
///
/// assert_eq!(parse_limit("25"), 25);
/// assert_eq!(parse_limit(" 3rows"), 3);
/// assert_eq!(parse_limit("all"), 0);
/// assert_eq!(parse_limit("-4"), 0);
/// ```
pub fn parse_limit(raw: &str) -> usize {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

fn limit_from_value(value: &Value) -> usize {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                usize::try_from(u).unwrap_or(usize::MAX)
            } else if let Some(f) = n.as_f64() {
                if f.is_finite() && f >= 1.0 {
                    f.trunc() as usize
                } else {
                    0
                }
            } else {
                0
            }
        }
        Value::String(s) => parse_limit(s),
        _ => 0,
    }
}

fn deserialize_limit<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(limit_from_value(&raw))
}

fn deserialize_bound<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    if is_falsy(&raw) {
        return Ok(None);
    }
    match raw {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        })),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!(
            "range bound must be a string or number, got {}",
            other
        ))),
    }
}
