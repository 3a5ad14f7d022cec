//! Fluent expression builder.
//!
//! Stateless constructors for composing filters in code instead of
//! parsing them from parameters. The result is the same expression model
//! the parser produces, so both render identically.
//!
//! ```
//! use docquery::builder::{and, elem_match, eq, gt, in_list, or, regex};
//! use docquery::Filter;
//!
//! let filter = Filter::new(vec![
//!     or([regex("sku", "^WSH", "i"), regex("sku", "^WP", "i")]),
//!     and([gt("price", 40), in_list("size", vec!["S", "M"])]),
//!     elem_match("variants", [eq("color", "red"), gt("stock", 0)]),
//! ]);
//!
//! let doc = filter.render();
//! assert!(doc.get("or").is_some());
//! assert!(doc.get("variants").is_some());
//! ```

use crate::expr::{Expr, Leaf, Logical, Operand, Pattern};
use crate::op::Operator;
use crate::value::{List, Value};

fn logical(op: Operator, exprs: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Logical(Logical::new(op, exprs.into_iter().collect()))
}

fn leaf(op: Operator, field: impl Into<String>, value: impl Into<Value>) -> Expr {
    Expr::Leaf(Leaf::new(op, field, Operand::Value(value.into())))
}

// ============================================================================
// Logical
// ============================================================================

/// All expressions must match.
pub fn and(exprs: impl IntoIterator<Item = Expr>) -> Expr {
    logical(Operator::And, exprs)
}

/// At least one expression must match.
pub fn or(exprs: impl IntoIterator<Item = Expr>) -> Expr {
    logical(Operator::Or, exprs)
}

/// No expression may match.
pub fn nor(exprs: impl IntoIterator<Item = Expr>) -> Expr {
    logical(Operator::Nor, exprs)
}

/// Negates an operator expression on `field`.
///
/// The inner expression is usually anonymous: `not("price", gt("", 10))`
/// renders `{price: {not: {gt: 10}}}`.
pub fn not(field: impl Into<String>, expr: Expr) -> Expr {
    Expr::Leaf(Leaf::new(Operator::Not, field, Operand::Not(Box::new(expr))))
}

// ============================================================================
// Comparison
// ============================================================================

pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Expr {
    leaf(Operator::Eq, field, value)
}

pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Expr {
    leaf(Operator::Ne, field, value)
}

pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Expr {
    leaf(Operator::Gt, field, value)
}

pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Expr {
    leaf(Operator::Gte, field, value)
}

pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Expr {
    leaf(Operator::Lt, field, value)
}

pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Expr {
    leaf(Operator::Lte, field, value)
}

/// Field value is one of `values`.
pub fn in_list(field: impl Into<String>, values: impl Into<List>) -> Expr {
    leaf(Operator::In, field, Value::List(values.into()))
}

/// Field value is none of `values`.
pub fn nin_list(field: impl Into<String>, values: impl Into<List>) -> Expr {
    leaf(Operator::Nin, field, Value::List(values.into()))
}

// ============================================================================
// Array, element, evaluation
// ============================================================================

/// Array field has exactly `len` elements.
pub fn size(field: impl Into<String>, len: u32) -> Expr {
    leaf(Operator::Size, field, len)
}

/// Field is present (`true`) or absent (`false`).
pub fn exists(field: impl Into<String>, present: bool) -> Expr {
    leaf(Operator::Exists, field, present)
}

/// Field matches `pattern` with the given option flags.
pub fn regex(field: impl Into<String>, pattern: impl Into<String>, options: &str) -> Expr {
    Expr::Leaf(Leaf::new(
        Operator::Regex,
        field,
        Operand::Regex(Pattern::new(pattern, options)),
    ))
}

/// Array field contains every element of `values`.
pub fn all(field: impl Into<String>, values: impl Into<List>) -> Expr {
    leaf(Operator::All, field, Value::List(values.into()))
}

/// At least one array element satisfies every sub-expression.
///
/// Named sub-expressions constrain a sub-field of the element; anonymous
/// ones apply directly to the element, so `elem_match("scores",
/// [gte("", 80), lt("", 90)])` renders `{scores: {elemMatch: {gte: 80,
/// lt: 90}}}`.
pub fn elem_match(field: impl Into<String>, exprs: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Leaf(Leaf::new(
        Operator::ElemMatch,
        field,
        Operand::ElemMatch(exprs.into_iter().collect()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Filter;
    use serde_json::json;

    fn render(expr: Expr) -> serde_json::Value {
        Filter::from(expr).render().to_json()
    }

    #[test]
    fn comparisons() {
        assert_eq!(render(eq("sku", "A")), json!({"sku": {"eq": "A"}}));
        assert_eq!(render(ne("sku", "A")), json!({"sku": {"ne": "A"}}));
        assert_eq!(render(gt("qty", 1)), json!({"qty": {"gt": 1}}));
        assert_eq!(render(gte("qty", 1.5)), json!({"qty": {"gte": 1.5}}));
        assert_eq!(render(lt("qty", 2i64)), json!({"qty": {"lt": 2}}));
        assert_eq!(render(lte("ok", true)), json!({"ok": {"lte": true}}));
        assert_eq!(
            render(in_list("qty", vec![1i64, 2, 3])),
            json!({"qty": {"in": [1, 2, 3]}})
        );
        assert_eq!(
            render(nin_list("tag", vec!["a", "b"])),
            json!({"tag": {"nin": ["a", "b"]}})
        );
    }

    #[test]
    fn array_and_element() {
        assert_eq!(render(size("tags", 2)), json!({"tags": {"size": 2}}));
        assert_eq!(
            render(exists("deleted", false)),
            json!({"deleted": {"exists": false}})
        );
        assert_eq!(
            render(all("tags", vec!["x", "y"])),
            json!({"tags": {"all": ["x", "y"]}})
        );
    }

    #[test]
    fn regex_carries_options() {
        assert_eq!(
            render(regex("sku", "^WSH", "i")),
            json!({"sku": {"regex": {"pattern": "^WSH", "options": "i"}}})
        );
    }

    #[test]
    fn not_wraps_operator_document() {
        assert_eq!(
            render(not("price", gt("", 10))),
            json!({"price": {"not": {"gt": 10}}})
        );
    }

    #[test]
    fn elem_match_named_sub_fields() {
        assert_eq!(
            render(elem_match("items", [eq("sku", "A"), gte("qty", 2)])),
            json!({"items": {"elemMatch": {
                "sku": {"eq": "A"},
                "qty": {"gte": 2}
            }}})
        );
    }

    #[test]
    fn elem_match_anonymous_operators() {
        assert_eq!(
            render(elem_match("scores", [gte("", 80), lt("", 90)])),
            json!({"scores": {"elemMatch": {"gte": 80, "lt": 90}}})
        );
    }

    #[test]
    fn elem_match_with_logical() {
        assert_eq!(
            render(elem_match("items", [or([eq("sku", "A"), eq("sku", "B")])])),
            json!({"items": {"elemMatch": {
                "or": [{"sku": {"eq": "A"}}, {"sku": {"eq": "B"}}]
            }}})
        );
    }

    #[test]
    fn nested_logicals() {
        let expr = and([
            or([eq("a", 1), eq("b", 2)]),
            nor([eq("c", 3)]),
        ]);
        assert_eq!(
            render(expr),
            json!({"and": [
                {"or": [{"a": {"eq": 1}}, {"b": {"eq": 2}}]},
                {"nor": [{"c": {"eq": 3}}]}
            ]})
        );
    }
}
