//! Ordered collection queries
//!
//! A [`CollectionQuery`] is the data form of the chain
//! `query(collection).where(field, op, value).orderBy(field, dir).limit(n)`.
//! Backends receive it whole in [`DocumentStore::fetch`](crate::DocumentStore::fetch).
//!
//! ## Comparison rules
//!
//! Values compare only against values of the same JSON type:
//! strings by UTF-8 bytes, numbers numerically, booleans `false < true`.
//! A filter comparing mismatched types never matches. Documents missing
//! the ordered field are excluded from ordered results.

use serde_json::Value;
use std::cmp::Ordering;

/// Comparison operator of a field filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `==`
    Eq,
    /// `>=`
    Ge,
    /// `>`
    Gt,
}

impl FilterOp {
    /// Operator symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Lt => "<",
            FilterOp::Le => "<=",
            FilterOp::Eq => "==",
            FilterOp::Ge => ">=",
            FilterOp::Gt => ">",
        }
    }

    /// Whether `ordering` (field compared to operand) satisfies this operator
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            FilterOp::Lt => ordering == Ordering::Less,
            FilterOp::Le => ordering != Ordering::Greater,
            FilterOp::Eq => ordering == Ordering::Equal,
            FilterOp::Ge => ordering != Ordering::Less,
            FilterOp::Gt => ordering == Ordering::Greater,
        }
    }
}

impl std::fmt::Display for FilterOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl Direction {
    /// `"asc"` or `"desc"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// `field op value`
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Top-level field name
    pub field: String,
    /// Comparison operator
    pub op: FilterOp,
    /// Right-hand operand
    pub value: Value,
}

impl Filter {
    /// Whether `candidate` (the document's field value) passes
    pub fn matches(&self, candidate: Option<&Value>) -> bool {
        candidate
            .and_then(|v| compare_values(v, &self.value))
            .map_or(false, |ord| self.op.accepts(ord))
    }
}

/// Sort order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Top-level field name
    pub field: String,
    /// Direction
    pub direction: Direction,
}

/// A complete query against one collection
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionQuery {
    /// Collection path
    pub collection: String,
    /// Conjunction of field filters
    pub filters: Vec<Filter>,
    /// Sort order, ascending id when absent
    pub order_by: Option<OrderBy>,
    /// Maximum number of results, unbounded when absent
    pub limit: Option<usize>,
}

impl CollectionQuery {
    /// Unfiltered, unordered query
    pub fn new(collection: impl Into<String>) -> Self {
        CollectionQuery {
            collection: collection.into(),
            filters: Vec::new(),
            order_by: None,
            limit: None,
        }
    }

    /// Add a filter
    pub fn filter(mut self, field: impl Into<String>, op: FilterOp, value: Value) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            op,
            value,
        });
        self
    }

    /// Set the sort order
    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
            direction,
        });
        self
    }

    /// Cap the result count
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }
}

/// Compare two JSON values of the same type
///
/// Returns `None` for mismatched types, arrays and objects.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.as_bytes().cmp(y.as_bytes())),
        _ => None,
    }
}
