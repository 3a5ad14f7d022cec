//! Key-grouping filter parser.
//!
//! Filters arrive as flat parameters whose keys encode the group
//! structure:
//!
//! ```text
//!         AND OR
//!          |  |
//! filters[0][0][field]=sku
//! filters[0][0][value]=ABC
//! filters[0][0][condition]=eq
//! ```
//!
//! Entries sharing a name and AND index but differing in OR index are
//! combined with `or`; the AND groups of one name are combined with `and`.
//! Malformed entries are dropped rather than reported.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::builder;
use crate::catalog;
use crate::coerce::coerce;
use crate::config::CriteriaConfig;
use crate::expr::{Expr, Filter, Leaf, Logical, Operand};
use crate::op::Operator;
use crate::params::Params;

const FIELD: &str = "field";
const VALUE: &str = "value";
const CONDITION: &str = "condition";

static KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^\[\]]+)\[([^\[\]]+)\]\[([^\[\]]+)\]\[(field|value|condition)\]$")
        .expect("key pattern is valid")
});

/// Position of a group within its parent: numeric indices order by value,
/// other labels after them by text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    Index(u64, String),
    Label(String),
}

impl Slot {
    fn new(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) => Slot::Index(n, raw.to_string()),
            Err(_) => Slot::Label(raw.to_string()),
        }
    }
}

type OrGroup = BTreeMap<Slot, Expr>;
type AndGroups = BTreeMap<Slot, OrGroup>;

/// Parses every named filter group with the default configuration.
pub fn parse(params: &Params) -> BTreeMap<String, Filter> {
    parse_with(params, &CriteriaConfig::default())
}

/// Parses every named filter group in `params`.
///
/// Names without a single valid entry are absent from the result.
pub fn parse_with(params: &Params, config: &CriteriaConfig) -> BTreeMap<String, Filter> {
    let mut seen = BTreeSet::new();
    let mut groups: BTreeMap<String, AndGroups> = BTreeMap::new();

    for key in params.keys() {
        let Some(caps) = KEY_PATTERN.captures(key) else {
            continue;
        };
        let (name, and, or) = (&caps[1], &caps[2], &caps[3]);

        if !seen.insert((name.to_string(), and.to_string(), or.to_string())) {
            continue;
        }

        let Some(expr) = compile_entry(params, name, and, or, config) else {
            continue;
        };

        groups
            .entry(name.to_string())
            .or_default()
            .entry(Slot::new(and))
            .or_default()
            .insert(Slot::new(or), expr);
    }

    groups
        .into_iter()
        .map(|(name, ands)| {
            let conjuncts = ands
                .into_values()
                .map(|ors| collapse(Operator::Or, ors.into_values().collect()))
                .collect();
            (name, Filter::from(collapse(Operator::And, conjuncts)))
        })
        .collect()
}

/// Parses the filter group called `name`, empty when absent.
pub fn to_filter(params: &Params, name: &str) -> Filter {
    to_filter_with(params, name, &CriteriaConfig::default())
}

/// Parses the filter group called `name` with an explicit configuration.
pub fn to_filter_with(params: &Params, name: &str, config: &CriteriaConfig) -> Filter {
    parse_with(params, config).remove(name).unwrap_or_default()
}

/// Builds the leaf for one `name[and][or]` entry.
fn compile_entry(
    params: &Params,
    name: &str,
    and: &str,
    or: &str,
    config: &CriteriaConfig,
) -> Option<Expr> {
    let attr = |attribute: &str| {
        params
            .get(&format!("{name}[{and}][{or}][{attribute}]"))
            .unwrap_or("")
    };

    let field = attr(FIELD);
    if field.is_empty() {
        debug!("dropping filter entry {name}[{and}][{or}]: no field");
        return None;
    }

    let code = attr(CONDITION);
    let Some(op) = catalog::lookup(code) else {
        debug!("dropping filter entry {name}[{and}][{or}]: unknown condition {code:?}");
        return None;
    };

    let raw = attr(VALUE);
    trace!("filter entry {name}[{and}][{or}]: {field} {op} {raw:?}");

    if op == Operator::Regex {
        return Some(builder::regex(field, raw, &config.regex_options));
    }
    Some(Expr::Leaf(Leaf::new(
        op,
        field,
        Operand::Value(coerce(raw, op)),
    )))
}

/// Wraps `children` in `op`, unless there is exactly one child.
fn collapse(op: Operator, mut children: Vec<Expr>) -> Expr {
    if children.len() == 1 {
        if let Some(only) = children.pop() {
            return only;
        }
    }
    Expr::Logical(Logical::new(op, children))
}
