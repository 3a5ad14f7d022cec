//! Expression rendering.
//!
//! Converts the expression model into the generic [`Document`] shape a
//! document store consumes. Operator tokens become map keys:
//!
//! ```text
//! Leaf      {op: operand}
//! Logical   {op: [child, ...]}      named leaf child -> {field: {op: operand}}
//! Filter    {field: {op: operand}, op: [...], ...}
//! ```

use crate::document::{Document, Map};
use crate::expr::{Expr, Filter, Leaf, Logical, Operand};

impl Expr {
    /// Renders this node on its own.
    ///
    /// A leaf renders to its operator document without the field name;
    /// the enclosing logical node or filter supplies the field.
    pub fn render(&self) -> Document {
        match self {
            Expr::Leaf(leaf) => leaf.render(),
            Expr::Logical(logical) => logical.render(),
        }
    }

    /// Renders this node as an element of a logical node's array.
    fn render_child(&self) -> Document {
        match self {
            Expr::Leaf(leaf) if leaf.is_named() => {
                Document::entry(leaf.field().to_string(), leaf.render())
            }
            Expr::Leaf(leaf) => leaf.render(),
            Expr::Logical(logical) => logical.render(),
        }
    }
}

impl Leaf {
    /// Renders `{op: operand}`.
    pub fn render(&self) -> Document {
        Document::entry(self.op().token(), render_operand(self.operand()))
    }
}

impl Logical {
    /// Renders `{op: [children...]}`.
    pub fn render(&self) -> Document {
        let children = self.children().iter().map(Expr::render_child).collect();
        Document::entry(self.op().token(), Document::Array(children))
    }
}

impl Filter {
    /// Renders the filter as one document.
    ///
    /// Named leaves are keyed by their field, anonymous leaves are merged
    /// flatly, and logical nodes are keyed by their operator. Later entries
    /// replace earlier ones under the same key. An empty filter renders to
    /// the empty document.
    pub fn render(&self) -> Document {
        let mut map = Map::new();
        for expr in self.exprs() {
            match expr {
                Expr::Leaf(leaf) if leaf.is_named() => {
                    map.insert(leaf.field().to_string(), leaf.render());
                }
                Expr::Leaf(leaf) => merge(&mut map, leaf.render()),
                Expr::Logical(logical) => merge(&mut map, logical.render()),
            }
        }
        Document::Map(map)
    }
}

fn render_operand(operand: &Operand) -> Document {
    match operand {
        Operand::Value(value) => Document::from(value),
        Operand::Regex(pattern) => Document::Regex {
            pattern: pattern.pattern.clone(),
            options: pattern.options.clone(),
        },
        Operand::Not(expr) => expr.render(),
        Operand::ElemMatch(exprs) => {
            let mut map = Map::new();
            for expr in exprs {
                match expr {
                    Expr::Leaf(leaf) if leaf.is_named() => {
                        map.insert(leaf.field().to_string(), leaf.render());
                    }
                    _ => merge(&mut map, expr.render()),
                }
            }
            Document::Map(map)
        }
    }
}

/// Copies the entries of a map document into `map`.
fn merge(map: &mut Map, doc: Document) {
    if let Document::Map(entries) = doc {
        map.extend(entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::Operator;
    use crate::value::{List, Value};
    use serde_json::json;

    fn leaf(op: Operator, field: &str, value: Value) -> Expr {
        Expr::Leaf(Leaf::new(op, field, Operand::Value(value)))
    }

    #[test]
    fn leaf_renders_operator_document() {
        let doc = leaf(Operator::Eq, "sku", Value::from("ABC")).render();
        assert_eq!(doc.to_json(), json!({"eq": "ABC"}));
    }

    #[test]
    fn empty_filter_renders_empty_document() {
        assert!(Filter::default().render().is_empty_map());
    }

    #[test]
    fn named_leaf_in_filter() {
        let filter = Filter::from(leaf(Operator::Eq, "sku", Value::from("ABC")));
        assert_eq!(filter.render().to_json(), json!({"sku": {"eq": "ABC"}}));
    }

    #[test]
    fn anonymous_leaves_merge_flatly() {
        let filter = Filter::new(vec![
            leaf(Operator::Gt, "", Value::Int(1)),
            leaf(Operator::Lt, "", Value::Int(9)),
        ]);
        assert_eq!(filter.render().to_json(), json!({"gt": 1, "lt": 9}));
    }

    #[test]
    fn logical_children() {
        let or = Expr::Logical(Logical::new(
            Operator::Or,
            vec![
                leaf(Operator::Eq, "sku", Value::from("A")),
                Expr::Logical(Logical::new(
                    Operator::And,
                    vec![
                        leaf(Operator::Gte, "price", Value::Int(10)),
                        leaf(Operator::Lte, "price", Value::Int(20)),
                    ],
                )),
                leaf(Operator::Exists, "", Value::Bool(true)),
            ],
        ));

        assert_eq!(
            Filter::from(or).render().to_json(),
            json!({"or": [
                {"sku": {"eq": "A"}},
                {"and": [{"price": {"gte": 10}}, {"price": {"lte": 20}}]},
                {"exists": true}
            ]})
        );
    }

    #[test]
    fn mixed_filter() {
        let filter = Filter::new(vec![
            leaf(Operator::In, "qty", Value::List(List::Int(vec![1, 2]))),
            Expr::Logical(Logical::new(
                Operator::Nor,
                vec![leaf(Operator::Eq, "status", Value::from("gone"))],
            )),
        ]);
        assert_eq!(
            filter.render().to_json(),
            json!({
                "qty": {"in": [1, 2]},
                "nor": [{"status": {"eq": "gone"}}]
            })
        );
    }

    #[test]
    fn later_keys_replace_earlier() {
        let filter = Filter::new(vec![
            leaf(Operator::Eq, "sku", Value::from("A")),
            leaf(Operator::Eq, "sku", Value::from("B")),
        ]);
        assert_eq!(filter.render().to_json(), json!({"sku": {"eq": "B"}}));
    }
}
