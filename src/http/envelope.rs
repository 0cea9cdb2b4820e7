//! The `{status, message, data, meta}` envelope every Paystack response uses.

use crate::error::ApiError;
use crate::shared::serde_util::{opt_string_lenient, opt_u64_lenient};
use serde::{Deserialize, Serialize};

/// Raw response envelope.
///
/// `message` is optional on the wire for a handful of endpoints, so it
/// defaults to the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T, M = Meta> {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<M>,
}

impl<T, M> Envelope<T, M> {
    /// Take `data`, failing with `fallback` when the response carried none.
    ///
    /// `message` is not used here: on a `status: true` envelope it is the
    /// success text, not an error.
    pub fn into_data(self, fallback: &str) -> Result<T, ApiError> {
        self.data.ok_or_else(|| ApiError::resolve(None, None, fallback))
    }
}

impl<T> Envelope<Vec<T>, Meta> {
    /// Convert a list response. Missing `data` is an empty page.
    pub fn into_paginated(self) -> Paginated<T> {
        Paginated {
            data: self.data.unwrap_or_default(),
            meta: self.meta.unwrap_or_default(),
        }
    }
}

// ─── Meta ────────────────────────────────────────────────────────────────────

/// Pagination metadata attached to list responses.
///
/// Page-based endpoints fill `total`/`page`/`page_count`; cursor-based ones
/// fill `next`/`previous`. Settlement and transaction totals add `count` and
/// `total_volume`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, deserialize_with = "opt_u64_lenient::deserialize")]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_lenient::deserialize")]
    pub skipped: Option<u64>,
    #[serde(
        default,
        rename = "perPage",
        alias = "per_page",
        deserialize_with = "opt_u64_lenient::deserialize"
    )]
    pub per_page: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_lenient::deserialize")]
    pub page: Option<u64>,
    #[serde(
        default,
        rename = "pageCount",
        deserialize_with = "opt_u64_lenient::deserialize"
    )]
    pub page_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_string_lenient::deserialize")]
    pub next: Option<String>,
    #[serde(default, deserialize_with = "opt_string_lenient::deserialize")]
    pub previous: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_lenient::deserialize")]
    pub count: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_lenient::deserialize")]
    pub total_volume: Option<u64>,
}

// ─── Paginated ───────────────────────────────────────────────────────────────

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: Meta,
}

impl<T> Paginated<T> {
    /// Cursor for the following page, if the endpoint is cursor-based.
    pub fn next_cursor(&self) -> Option<&str> {
        self.meta.next.as_deref()
    }

    pub fn has_more(&self) -> bool {
        if self.meta.next.is_some() {
            return true;
        }
        match (self.meta.page, self.meta.page_count) {
            (Some(page), Some(count)) => page < count,
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Result of operations that only confirm success (pause, enable, delete...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}
