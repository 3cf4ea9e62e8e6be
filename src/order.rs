//! Sort directives passed through to record fetchers.
//!
//! An [`Order`] names a column and a [`Direction`]. The pager never inspects
//! orders; it hands them to the fetcher verbatim on every page request.

use serde::{Deserialize, Serialize};

/// Sort direction of a single [`Order`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Smallest value first.
    #[default]
    #[serde(rename = "ASC")]
    Ascending,
    /// Largest value first.
    #[serde(rename = "DESC")]
    Descending,
}

impl Direction {
    /// Returns the SQL-style keyword for this direction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    /// Returns true for [`Direction::Descending`].
    #[must_use]
    pub const fn is_descending(&self) -> bool {
        matches!(self, Self::Descending)
    }
}

/// A sort directive: column name plus direction.
///
/// # Example
///
/// ```
/// use paging_window::{Direction, Order};
///
/// let order = Order::descending("price");
/// assert_eq!(order.column_name(), "price");
/// assert_eq!(order.direction(), Direction::Descending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    direction: Direction,
    column_name: String,
}

impl Order {
    /// Creates a sort directive.
    #[must_use]
    pub fn new(direction: Direction, column_name: impl Into<String>) -> Self {
        Self {
            direction,
            column_name: column_name.into(),
        }
    }

    /// Creates an ascending sort directive.
    #[must_use]
    pub fn ascending(column_name: impl Into<String>) -> Self {
        Self::new(Direction::Ascending, column_name)
    }

    /// Creates a descending sort directive.
    #[must_use]
    pub fn descending(column_name: impl Into<String>) -> Self {
        Self::new(Direction::Descending, column_name)
    }

    /// Returns the sort direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the column the records are sorted by.
    #[must_use]
    pub fn column_name(&self) -> &str {
        &self.column_name
    }
}
