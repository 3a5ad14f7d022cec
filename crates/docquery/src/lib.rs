//! Docquery - compile URL filter parameters into document-store criteria.
//!
//! Docquery turns a flat, URL-encoded parameter set into the three parts a
//! document store needs for a find request:
//!
//! - **Filter**: nested AND/OR groups encoded as `name[and][or][attr]` keys,
//!   with values typed by inference (numbers, booleans, timestamps, lists)
//! - **Sort**: ordered `sort[]` / `sort` fields, `-` prefix for descending
//! - **Pagination**: `index` (records to skip) and `size` (page size)
//!
//! # Quick Start
//!
//! ```rust
//! use docquery::Criteria;
//!
//! let criteria = Criteria::from_query(
//!     "size=10&sort[]=-price\
//!      &filters[0][0][field]=sku&filters[0][0][value]=WSH&filters[0][0][condition]=like\
//!      &filters[0][1][field]=sku&filters[0][1][value]=WP&filters[0][1][condition]=like\
//!      &filters[1][0][field]=qty&filters[1][0][value]=1,2,3&filters[1][0][condition]=in",
//!     "filters",
//! )
//! .unwrap();
//!
//! assert_eq!(criteria.size(), 10);
//! assert_eq!(
//!     criteria.filter().to_json(),
//!     serde_json::json!({"and": [
//!         {"or": [
//!             {"sku": {"regex": {"pattern": "WSH", "options": "i"}}},
//!             {"sku": {"regex": {"pattern": "WP", "options": "i"}}}
//!         ]},
//!         {"qty": {"in": [1, 2, 3]}}
//!     ]})
//! );
//! ```
//!
//! # Parameter Grammar
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `name[i][j][field]` | Field compared by entry `j` of AND-group `i` |
//! | `name[i][j][value]` | Raw value, typed by inference |
//! | `name[i][j][condition]` | `eq` (default), `ne`, `gt`, `gte`, `lt`, `lte`, `in`, `nin`, `regex`, `like` |
//! | `index`, `size` | Pagination; negative index reads as 0, size ≤ 0 as 20 |
//! | `sort[]`, `sort` | Repeatable sort fields; `sort[]` wins when both are given |
//!
//! Entries of one AND-group are OR-ed together; the AND-groups of one name
//! are AND-ed. Entries without a field or with an unknown condition are
//! dropped silently.
//!
//! # Building Filters in Code
//!
//! The [`builder`] module produces the same expression model directly:
//!
//! ```rust
//! use docquery::builder::{eq, or, regex};
//! use docquery::Filter;
//!
//! let filter = Filter::from(or([regex("sku", "WSH", "i"), eq("price", 40)]));
//! assert_eq!(
//!     filter.render().to_json(),
//!     serde_json::json!({"or": [
//!         {"sku": {"regex": {"pattern": "WSH", "options": "i"}}},
//!         {"price": {"eq": 40}}
//!     ]})
//! );
//! ```

pub mod builder;
pub mod catalog;
pub mod coerce;
mod config;
mod criteria;
mod document;
mod error;
mod expr;
mod op;
mod ordering;
mod pagination;
mod params;
mod parser;
mod render;
mod value;

// Re-export public API
pub use coerce::coerce;
pub use config::{CriteriaConfig, DEFAULT_SIZE};
pub use criteria::Criteria;
pub use document::{to_document, Document, Map};
pub use error::{CriteriaError, Result};
pub use expr::{Expr, Filter, Leaf, Logical, Operand, Pattern};
pub use op::{Operator, OperatorKind};
pub use ordering::{parse_sort, sort_document, sort_from_params, Dir, OrderBy};
pub use pagination::{parse_count, resolve_index, resolve_size, FindOptions};
pub use params::Params;
pub use parser::{parse, parse_with, to_filter, to_filter_with};
pub use value::{List, Value};
