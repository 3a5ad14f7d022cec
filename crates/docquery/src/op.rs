//! Query operators.
//!
//! The [`Operator`] enum is closed: every operator a filter document can
//! carry is listed here, grouped by the [`OperatorKind`] it belongs to.

/// Category of an [`Operator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// Field comparison: `eq`, `ne`, `gt`, `gte`, `lt`, `lte`, `in`, `nin`.
    Comparison,
    /// Combination of sub-expressions: `and`, `or`, `nor`, `not`.
    Logical,
    /// Array inspection: `all`, `size`, `elemMatch`.
    Array,
    /// Field presence: `exists`.
    Element,
    /// Pattern evaluation: `regex`.
    Evaluation,
}

/// Operator of a filter expression.
///
/// The textual token returned by [`Operator::token`] is the key the
/// operator occupies in a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Comparison
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Member of a list.
    In,
    /// Not a member of a list.
    Nin,

    // Logical
    /// All sub-expressions match.
    And,
    /// At least one sub-expression matches.
    Or,
    /// No sub-expression matches.
    Nor,
    /// Negates an operator expression on a field.
    Not,

    // Array
    /// Array contains every listed element.
    All,
    /// Array has exactly the given length.
    Size,
    /// At least one array element matches the sub-document.
    ElemMatch,

    // Element
    /// Field is present (or absent).
    Exists,

    // Evaluation
    /// String matches a regular expression.
    Regex,
}

impl Operator {
    /// Returns the category this operator belongs to.
    pub fn kind(self) -> OperatorKind {
        match self {
            Operator::Eq
            | Operator::Ne
            | Operator::Gt
            | Operator::Gte
            | Operator::Lt
            | Operator::Lte
            | Operator::In
            | Operator::Nin => OperatorKind::Comparison,
            Operator::And | Operator::Or | Operator::Nor | Operator::Not => OperatorKind::Logical,
            Operator::All | Operator::Size | Operator::ElemMatch => OperatorKind::Array,
            Operator::Exists => OperatorKind::Element,
            Operator::Regex => OperatorKind::Evaluation,
        }
    }

    /// Returns `true` for operators that take a list operand (`in`, `nin`).
    pub fn is_list_op(self) -> bool {
        matches!(self, Operator::In | Operator::Nin)
    }

    /// Returns the document key for this operator.
    pub fn token(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::In => "in",
            Operator::Nin => "nin",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Nor => "nor",
            Operator::Not => "not",
            Operator::All => "all",
            Operator::Size => "size",
            Operator::ElemMatch => "elemMatch",
            Operator::Exists => "exists",
            Operator::Regex => "regex",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
