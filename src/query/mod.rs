//! Query-string parsing for paging parameters.
//!
//! These helpers read `limit`, `page`, `sort` and `range` from a URL query
//! string. They accept an absolute URL, a path with a query, or a bare
//! `?query`. Malformed values are ignored in favour of the defaults.
//!
//! The `sort` value is a run of `[+-]column` tokens, for example
//! `-price+name`. Because `+` decodes to a space inside a query string, a
//! space also marks an ascending column.

use std::borrow::Cow;

use url::form_urlencoded;

use crate::memory::FieldRange;
use crate::order::{Direction, Order};
use crate::pager::Setting;

/// Records per page when the query string has no `limit`.
pub const DEFAULT_QUERY_LIMIT: usize = 30;

/// Limit and page read from a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Records per page.
    pub limit: usize,
    /// Requested page (1-based; not validated here).
    pub page: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_QUERY_LIMIT,
            page: 1,
        }
    }
}

/// Limit, page and sort directives read from a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Records per page.
    pub limit: usize,
    /// Requested page (1-based; not validated here).
    pub page: i64,
    /// Sort directives in the order given.
    pub sort: Vec<Order>,
}

impl Default for Query {
    fn default() -> Self {
        let pagination = Pagination::default();
        Self {
            limit: pagination.limit,
            page: pagination.page,
            sort: Vec::new(),
        }
    }
}

impl Query {
    /// Converts the query into a pager [`Setting`] with `condition`.
    #[must_use]
    pub fn into_setting<C>(self, condition: C) -> Setting<C> {
        Setting::new(condition)
            .with_limit(self.limit)
            .with_active_page(self.page)
            .with_orders(self.sort)
    }
}

/// Parses `limit`, `page` and `sort` from `query_str`.
///
/// ```
/// use paging_window::{Order, parse_query};
///
/// let query = parse_query("https://example.com/fruits?limit=10&page=5&sort=-price");
/// assert_eq!(query.limit, 10);
/// assert_eq!(query.page, 5);
/// assert_eq!(query.sort, vec![Order::descending("price")]);
/// ```
#[must_use]
pub fn parse_query(query_str: &str) -> Query {
    let pagination = parse_pagination(query_str);
    Query {
        limit: pagination.limit,
        page: pagination.page,
        sort: parse_sort(query_str),
    }
}

/// Parses `limit` and `page` from `query_str`.
#[must_use]
pub fn parse_pagination(query_str: &str) -> Pagination {
    let mut pagination = Pagination::default();

    if let Some(limit) = query_value(query_str, "limit").and_then(|value| value.parse().ok()) {
        pagination.limit = limit;
    }
    if let Some(page) = query_value(query_str, "page").and_then(|value| value.parse().ok()) {
        pagination.page = page;
    }

    pagination
}

/// Parses the `sort` value of `query_str` into orders.
#[must_use]
pub fn parse_sort(query_str: &str) -> Vec<Order> {
    query_value(query_str, "sort").map_or_else(Vec::new, |sort| parse_orders(&sort))
}

/// Parses a decoded sort expression such as `-col_first+col_second`.
///
/// Parsing stops at the first empty column name. An expression that does not
/// start with a sign yields no orders.
///
/// ```
/// use paging_window::{Order, parse_orders};
///
/// assert_eq!(
///     parse_orders("-price+name"),
///     vec![Order::descending("price"), Order::ascending("name")]
/// );
/// assert!(parse_orders("price").is_empty());
/// ```
#[must_use]
pub fn parse_orders(sort: &str) -> Vec<Order> {
    let mut orders = Vec::new();
    let mut rest = sort;

    loop {
        let mut chars = rest.chars();
        let direction = match chars.next() {
            Some('+' | ' ') => Direction::Ascending,
            Some('-') => Direction::Descending,
            _ => break,
        };

        let tail = chars.as_str();
        let (column, remainder) = tail
            .find(is_sort_sign)
            .map_or((tail, ""), |index| tail.split_at(index));
        if column.is_empty() {
            break;
        }

        orders.push(Order::new(direction, column));
        if remainder.is_empty() {
            break;
        }
        rest = remainder;
    }

    orders
}

/// Parses `range=<field>:<low>,<high>` from `query_str`.
///
/// Returns `None` when the parameter is missing or malformed.
///
/// ```
/// use paging_window::parse_range;
///
/// let range = parse_range("/fruits?range=price:100,300").expect("range should parse");
/// assert_eq!(range.field(), "price");
/// assert_eq!(range.bounds(), (100, 300));
/// ```
#[must_use]
pub fn parse_range(query_str: &str) -> Option<FieldRange> {
    let value = query_value(query_str, "range")?;
    let parsed = parse_range_value(&value);
    if parsed.is_none() {
        tracing::debug!("ignoring malformed range parameter `{value}`");
    }
    parsed
}

fn parse_range_value(value: &str) -> Option<FieldRange> {
    let (field, bounds) = value.split_once(':')?;
    let (low, high) = bounds.split_once(',')?;
    if field.is_empty() {
        return None;
    }
    Some(FieldRange::new(
        field,
        low.trim().parse().ok()?,
        high.trim().parse().ok()?,
    ))
}

const fn is_sort_sign(c: char) -> bool {
    matches!(c, '+' | '-' | ' ')
}

/// Returns the first decoded value of `key` unless it is empty.
fn query_value(query_str: &str, key: &str) -> Option<String> {
    let raw = query_str.split_once('?').map_or("", |(_, after)| after);
    let without_fragment = raw.split_once('#').map_or(raw, |(before, _)| before);

    form_urlencoded::parse(without_fragment.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .map(Cow::into_owned)
}
