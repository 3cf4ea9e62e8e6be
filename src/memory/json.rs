//! Filtering and sorting for JSON object records.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::{RecordFilter, SortableRecord};

/// Inclusive integer range on one field of a JSON object record.
///
/// Records without the field, or with a non-integer value, do not match.
///
/// ```
/// use paging_window::{FieldRange, RecordFilter};
/// use serde_json::json;
///
/// let range = FieldRange::new("price", 100, 300);
/// assert!(range.matches(&json!({"name": "Apple", "price": 112})));
/// assert!(!range.matches(&json!({"name": "Banana", "price": 60})));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRange {
    field: String,
    low: i64,
    high: i64,
}

impl FieldRange {
    /// Creates a range matching `low <= record[field] <= high`.
    #[must_use]
    pub fn new(field: impl Into<String>, low: i64, high: i64) -> Self {
        Self {
            field: field.into(),
            low,
            high,
        }
    }

    /// Returns the filtered field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the inclusive `(low, high)` bounds.
    #[must_use]
    pub const fn bounds(&self) -> (i64, i64) {
        (self.low, self.high)
    }
}

impl RecordFilter<Value> for FieldRange {
    fn matches(&self, record: &Value) -> bool {
        record
            .get(&self.field)
            .and_then(Value::as_i64)
            .is_some_and(|value| (self.low..=self.high).contains(&value))
    }
}

impl SortableRecord for Value {
    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        compare_values(self.get(column), other.get(column))
    }
}

/// Orders missing and null first, then booleans, numbers, strings and
/// everything else.
fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (Some(Value::Bool(lhs)), Some(Value::Bool(rhs))) => lhs.cmp(rhs),
        (Some(Value::Number(lhs)), Some(Value::Number(rhs))) => compare_numbers(lhs, rhs),
        (Some(Value::String(lhs)), Some(Value::String(rhs))) => lhs.cmp(rhs),
        _ => rank(left).cmp(&rank(right)),
    }
}

fn compare_numbers(lhs: &Number, rhs: &Number) -> Ordering {
    match (lhs.as_i64(), rhs.as_i64()) {
        (Some(lhs_int), Some(rhs_int)) => lhs_int.cmp(&rhs_int),
        _ => lhs
            .as_f64()
            .partial_cmp(&rhs.as_f64())
            .unwrap_or(Ordering::Equal),
    }
}

const fn rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_) | Value::Object(_)) => 4,
    }
}
