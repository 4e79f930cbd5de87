//! Filter predicates attached to selectors and report queries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredicateOperator {
    Equals,
    NotEquals,
    In,
    NotIn,
    GreaterThan,
    GreaterThanEquals,
    LessThan,
    LessThanEquals,
    StartsWith,
    StartsWithIgnoreCase,
    Contains,
    ContainsIgnoreCase,
    DoesNotContain,
    DoesNotContainIgnoreCase,
    ContainsAny,
    ContainsAll,
    ContainsNone,
}

impl PredicateOperator {
    /// AWQL keyword for this operator.
    pub fn awql(&self) -> &'static str {
        match self {
            PredicateOperator::Equals => "=",
            PredicateOperator::NotEquals => "!=",
            PredicateOperator::In => "IN",
            PredicateOperator::NotIn => "NOT_IN",
            PredicateOperator::GreaterThan => ">",
            PredicateOperator::GreaterThanEquals => ">=",
            PredicateOperator::LessThan => "<",
            PredicateOperator::LessThanEquals => "<=",
            PredicateOperator::StartsWith => "STARTS_WITH",
            PredicateOperator::StartsWithIgnoreCase => "STARTS_WITH_IGNORE_CASE",
            PredicateOperator::Contains => "CONTAINS",
            PredicateOperator::ContainsIgnoreCase => "CONTAINS_IGNORE_CASE",
            PredicateOperator::DoesNotContain => "DOES_NOT_CONTAIN",
            PredicateOperator::DoesNotContainIgnoreCase => "DOES_NOT_CONTAIN_IGNORE_CASE",
            PredicateOperator::ContainsAny => "CONTAINS_ANY",
            PredicateOperator::ContainsAll => "CONTAINS_ALL",
            PredicateOperator::ContainsNone => "CONTAINS_NONE",
        }
    }

    /// Operators that compare ordered values; only these take a bare number.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            PredicateOperator::Equals
                | PredicateOperator::NotEquals
                | PredicateOperator::GreaterThan
                | PredicateOperator::GreaterThanEquals
                | PredicateOperator::LessThan
                | PredicateOperator::LessThanEquals
        )
    }

    /// Operators whose right-hand side is a bracketed list.
    pub fn takes_list(&self) -> bool {
        matches!(
            self,
            PredicateOperator::In
                | PredicateOperator::NotIn
                | PredicateOperator::ContainsAny
                | PredicateOperator::ContainsAll
                | PredicateOperator::ContainsNone
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Predicate {
    pub field: String,
    pub operator: PredicateOperator,
    pub values: Vec<String>,
}

impl Predicate {
    pub fn new(
        field: impl Into<String>,
        operator: PredicateOperator,
        values: Vec<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            values,
        }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, PredicateOperator::Equals, vec![value.into()])
    }

    /// Render as an AWQL `WHERE` condition, e.g. `Id = 42` or
    /// `Status IN ['ENABLED','PAUSED']`.
    pub fn to_awql(&self) -> String {
        if self.operator.takes_list() {
            let list: Vec<String> = self.values.iter().map(|v| quote(v)).collect();
            format!("{} {} [{}]", self.field, self.operator.awql(), list.join(","))
        } else {
            let value = self.values.first().map(String::as_str).unwrap_or_default();
            let rendered = if self.operator.is_comparison() && is_plain_number(value) {
                value.to_string()
            } else {
                quote(value)
            };
            format!("{} {} {}", self.field, self.operator.awql(), rendered)
        }
    }
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Decimal literal with no exponent and no leading zero, e.g. `42`, `-3.5`,
/// `0.25`. Anything else (`01234`, `1e3`) is text.
fn is_plain_number(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };

    let int_ok = !int.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && (int == "0" || !int.starts_with('0'));
    let frac_ok = frac.map_or(true, |f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()));
    int_ok && frac_ok
}
