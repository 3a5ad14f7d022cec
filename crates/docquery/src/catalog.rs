//! Condition catalog.
//!
//! Maps the short condition codes accepted in request parameters to
//! [`Operator`]s. The table is closed; unknown codes resolve to `None`.

use crate::op::Operator;

/// Condition codes accepted in `name[i][j][condition]` parameters.
pub const CONDITION_CODES: [&str; 11] = [
    "", "eq", "ne", "gt", "gte", "lt", "lte", "in", "nin", "regex", "like",
];

/// Resolves a condition code to its operator.
///
/// The empty code means `eq`. `like` is an alias of `regex` and carries no
/// wildcard translation: the value is used as a regular expression as-is.
pub fn lookup(code: &str) -> Option<Operator> {
    match code {
        "" | "eq" => Some(Operator::Eq),
        "ne" => Some(Operator::Ne),
        "gt" => Some(Operator::Gt),
        "gte" => Some(Operator::Gte),
        "lt" => Some(Operator::Lt),
        "lte" => Some(Operator::Lte),
        "in" => Some(Operator::In),
        "nin" => Some(Operator::Nin),
        "regex" | "like" => Some(Operator::Regex),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_resolves() {
        for code in CONDITION_CODES {
            assert!(lookup(code).is_some(), "code {code:?} should resolve");
        }
    }

    #[test]
    fn empty_defaults_to_eq() {
        assert_eq!(lookup(""), Some(Operator::Eq));
        assert_eq!(lookup("eq"), Some(Operator::Eq));
    }

    #[test]
    fn like_aliases_regex() {
        assert_eq!(lookup("like"), Some(Operator::Regex));
        assert_eq!(lookup("regex"), Some(Operator::Regex));
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(lookup("to"), None);
        assert_eq!(lookup("EQ"), None);
        assert_eq!(lookup("and"), None);
        assert_eq!(lookup(" eq"), None);
    }
}
