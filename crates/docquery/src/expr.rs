//! Filter expression model.
//!
//! An [`Expr`] is either a [`Leaf`] (field, operator, operand) or a
//! [`Logical`] combination of child expressions. A [`Filter`] is the
//! top-level list of expressions, implicitly combined with AND.
//!
//! Expressions are built once, by the parameter parser or the fluent
//! builder, and are not mutated afterwards.

use crate::op::Operator;
use crate::value::Value;

/// A filter expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Leaf(Leaf),
    Logical(Logical),
}

impl Expr {
    /// Returns the operator of this node.
    pub fn op(&self) -> Operator {
        match self {
            Expr::Leaf(leaf) => leaf.op,
            Expr::Logical(logical) => logical.op,
        }
    }

    /// Returns the leaf, if this node is one.
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Expr::Leaf(leaf) => Some(leaf),
            Expr::Logical(_) => None,
        }
    }

    /// Returns the logical node, if this node is one.
    pub fn as_logical(&self) -> Option<&Logical> {
        match self {
            Expr::Logical(logical) => Some(logical),
            Expr::Leaf(_) => None,
        }
    }
}

impl From<Leaf> for Expr {
    fn from(leaf: Leaf) -> Self {
        Expr::Leaf(leaf)
    }
}

impl From<Logical> for Expr {
    fn from(logical: Logical) -> Self {
        Expr::Logical(logical)
    }
}

/// What a leaf compares its field against.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A plain typed value.
    Value(Value),
    /// A regular expression.
    Regex(Pattern),
    /// The expression negated by `not`.
    Not(Box<Expr>),
    /// Sub-expressions an array element must satisfy (`elemMatch`).
    ElemMatch(Vec<Expr>),
}

/// Regular expression operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub pattern: String,
    /// Option flags, e.g. `i` for case-insensitive matching.
    pub options: String,
}

impl Pattern {
    pub fn new(pattern: impl Into<String>, options: impl Into<String>) -> Self {
        Pattern {
            pattern: pattern.into(),
            options: options.into(),
        }
    }
}

/// A single field-operator-operand condition.
///
/// The field may be empty for anonymous leaves nested inside `elemMatch`
/// or merged flatly into a filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    op: Operator,
    field: String,
    operand: Operand,
}

impl Leaf {
    pub fn new(op: Operator, field: impl Into<String>, operand: Operand) -> Self {
        Leaf {
            op,
            field: field.into(),
            operand,
        }
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// Returns `true` if the leaf names a field.
    pub fn is_named(&self) -> bool {
        !self.field.is_empty()
    }
}

/// An operator applied to an ordered list of child expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Logical {
    op: Operator,
    children: Vec<Expr>,
}

impl Logical {
    pub fn new(op: Operator, children: Vec<Expr>) -> Self {
        Logical { op, children }
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn children(&self) -> &[Expr] {
        &self.children
    }
}

/// Top-level expressions combined by implicit conjunction.
///
/// An empty filter matches everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter(Vec<Expr>);

impl Filter {
    pub fn new(exprs: Vec<Expr>) -> Self {
        Filter(exprs)
    }

    pub fn exprs(&self) -> &[Expr] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Expr> for Filter {
    fn from(expr: Expr) -> Self {
        Filter(vec![expr])
    }
}

impl FromIterator<Expr> for Filter {
    fn from_iter<I: IntoIterator<Item = Expr>>(iter: I) -> Self {
        Filter(iter.into_iter().collect())
    }
}
