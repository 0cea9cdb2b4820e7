//! Shared query types and helpers used across all domain modules.

pub mod amount;
pub mod reference;
pub mod serde_util;

pub use amount::{from_subunit, to_subunit};
pub use reference::generate_reference;

use serde::{Deserialize, Serialize};

// ─── Pagination ──────────────────────────────────────────────────────────────

/// Page-based list query (`perPage`, `page`, optional date window).
///
/// Dates are passed through verbatim; Paystack accepts `YYYY-MM-DD` or a full
/// ISO-8601 timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }
}

// ─── CursorPagination ────────────────────────────────────────────────────────

/// Cursor-based list query. Only honoured where Paystack supports cursors
/// (terminals, banks).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cursor: Option<bool>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

impl CursorPagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Continue after `cursor`. Sets `use_cursor` as Paystack requires.
    pub fn with_next(mut self, cursor: impl Into<String>) -> Self {
        self.use_cursor = Some(true);
        self.next = Some(cursor.into());
        self
    }

    /// Step back before `cursor`. Sets `use_cursor` as Paystack requires.
    pub fn with_previous(mut self, cursor: impl Into<String>) -> Self {
        self.use_cursor = Some(true);
        self.previous = Some(cursor.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pagination_serializes_to_empty_query() {
        assert_eq!(serde_urlencoded::to_string(Pagination::new()).unwrap(), "");
        assert_eq!(
            serde_urlencoded::to_string(CursorPagination::new()).unwrap(),
            ""
        );
    }

    #[test]
    fn test_pagination_query() {
        let q = Pagination::new()
            .with_per_page(20)
            .with_page(2)
            .with_from("2024-01-01");
        assert_eq!(
            serde_urlencoded::to_string(&q).unwrap(),
            "perPage=20&page=2&from=2024-01-01"
        );
    }

    #[test]
    fn test_cursor_builders_enable_cursor_mode() {
        let q = CursorPagination::new().with_per_page(10).with_next("abc");
        assert_eq!(q.use_cursor, Some(true));
        assert_eq!(
            serde_urlencoded::to_string(&q).unwrap(),
            "use_cursor=true&perPage=10&next=abc"
        );
    }
}
