//! Pagination bounds.
//!
//! The index is the number of records to skip and the size the number to
//! return. Both come from loosely formatted parameters; anything that is
//! not a usable number falls back to a default instead of failing.

use serde::Serialize;

use crate::coerce::parse_int;
use crate::config::DEFAULT_SIZE;
use crate::document::Document;

/// Reads a count parameter. Unparseable or absent input reads as `0`.
///
/// A zero fraction is accepted, so `"5.0"` reads as `5`.
pub fn parse_count(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = match raw.split_once('.') {
        Some((whole, fraction)) if fraction.bytes().all(|b| b == b'0') => whole,
        _ => raw,
    };
    parse_int(trimmed).unwrap_or(0)
}

/// Clamps a raw index to be non-negative.
pub fn resolve_index(raw: Option<&str>) -> u64 {
    u64::try_from(parse_count(raw)).unwrap_or(0)
}

/// Resolves a page size, using `default` when absent or not positive.
pub fn resolve_size(raw: Option<&str>, default: u64) -> u64 {
    match u64::try_from(parse_count(raw)) {
        Ok(size) if size > 0 => size,
        _ => default,
    }
}

/// Skip / limit / sort options handed to a store's find operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindOptions {
    pub skip: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Document>,
}

impl FindOptions {
    /// Builds options from raw bounds, clamping a negative skip to `0` and
    /// replacing a limit below `1` with [`DEFAULT_SIZE`].
    pub fn new(index: i64, size: i64) -> Self {
        FindOptions {
            skip: u64::try_from(index).unwrap_or(0),
            limit: u64::try_from(size)
                .ok()
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_SIZE),
            sort: None,
        }
    }

    /// Attaches a sort document.
    pub fn with_sort(mut self, sort: Option<Document>) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_parsing() {
        assert_eq!(parse_count(Some("12")), 12);
        assert_eq!(parse_count(Some("-5")), -5);
        assert_eq!(parse_count(Some("5.0")), 5);
        assert_eq!(parse_count(Some("5.5")), 0);
        assert_eq!(parse_count(Some("abc")), 0);
        assert_eq!(parse_count(Some("")), 0);
        assert_eq!(parse_count(None), 0);
    }

    #[test]
    fn index_clamps() {
        assert_eq!(resolve_index(Some("-5")), 0);
        assert_eq!(resolve_index(Some("40")), 40);
        assert_eq!(resolve_index(None), 0);
    }

    #[test]
    fn size_defaults() {
        assert_eq!(resolve_size(Some("0"), 20), 20);
        assert_eq!(resolve_size(Some("-1"), 20), 20);
        assert_eq!(resolve_size(None, 20), 20);
        assert_eq!(resolve_size(Some("x"), 20), 20);
        assert_eq!(resolve_size(Some("100000"), 20), 100000);
    }

    #[test]
    fn find_options_clamp() {
        let options = FindOptions::new(-3, 0);
        assert_eq!(options.skip, 0);
        assert_eq!(options.limit, DEFAULT_SIZE);
        assert_eq!(options.sort, None);

        let options = FindOptions::new(10, 5).with_sort(Some(Document::empty()));
        assert_eq!(options.skip, 10);
        assert_eq!(options.limit, 5);
        assert_eq!(options.sort, Some(Document::empty()));
    }
}
