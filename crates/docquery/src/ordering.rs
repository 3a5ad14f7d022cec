//! Sort orderings.
//!
//! Provides [`Dir`] for sort direction, [`OrderBy`] for field-based
//! ordering, and the assembler that reads them from `sort[]` / `sort`
//! parameters.

use serde::Serialize;

use crate::config::CriteriaConfig;
use crate::document::{Document, Map};
use crate::params::Params;

/// Direction of one sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    #[default]
    Asc,
    /// Written as a leading `-` in sort parameters.
    Desc,
}

impl Dir {
    pub fn is_asc(self) -> bool {
        self == Dir::Asc
    }

    pub fn is_desc(self) -> bool {
        self == Dir::Desc
    }

    /// Store encoding: `1` ascending, `-1` descending.
    pub fn sign(self) -> i64 {
        if self.is_desc() {
            -1
        } else {
            1
        }
    }

    /// Lowercase name, as serialized.
    pub fn as_str(self) -> &'static str {
        if self.is_desc() {
            "desc"
        } else {
            "asc"
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sort key: a document field and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderBy {
    pub field: String,
    pub dir: Dir,
}

impl OrderBy {
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    /// Ascending on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    /// Descending on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    /// Parses one sort entry: `field` is ascending, `-field` descending.
    ///
    /// Returns `None` for an empty entry or a lone `-`.
    pub fn parse(entry: &str) -> Option<Self> {
        match entry.strip_prefix('-') {
            Some("") => None,
            Some(field) => Some(OrderBy::desc(field)),
            None if entry.is_empty() => None,
            None => Some(OrderBy::asc(entry)),
        }
    }
}

/// Parses sort entries in order, skipping entries without a field.
pub fn parse_sort<S: AsRef<str>>(entries: &[S]) -> Vec<OrderBy> {
    entries
        .iter()
        .filter_map(|entry| OrderBy::parse(entry.as_ref()))
        .collect()
}

/// Reads the orderings from `params`.
///
/// The array-form parameter wins over the plain one when both are
/// present. Returns `None` when neither is present or no entry names a
/// field.
pub fn sort_from_params(params: &Params, config: &CriteriaConfig) -> Option<Vec<OrderBy>> {
    let entries = params
        .get_all(&config.sort_array_key)
        .or_else(|| params.get_all(&config.sort_key))?;

    let orderings = parse_sort(entries);
    if orderings.is_empty() {
        None
    } else {
        Some(orderings)
    }
}

/// Renders orderings as `{field: 1 | -1, ...}` in sort priority order.
pub fn sort_document(orderings: &[OrderBy]) -> Document {
    let mut map = Map::new();
    for order_by in orderings {
        map.insert(order_by.field.clone(), Document::Int(order_by.dir.sign()));
    }
    Document::Map(map)
}
