//! Caller-supplied shapes consumed by the builder. Pure data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Traversal direction of a predicate edge relative to the source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    #[default]
    Outgoing,
    Incoming,
}

/// A predicate edge to follow during expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdfPredicate {
    pub uri: String,
    pub new_col_name: String,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub optional: bool,
}

impl RdfPredicate {
    pub fn new(
        uri: impl Into<String>,
        new_col_name: impl Into<String>,
        direction: Direction,
        optional: bool,
    ) -> Self {
        Self {
            uri: uri.into(),
            new_col_name: new_col_name.into(),
            direction,
            optional,
        }
    }

    /// Mandatory outgoing edge.
    pub fn outgoing(uri: impl Into<String>, new_col_name: impl Into<String>) -> Self {
        Self::new(uri, new_col_name, Direction::Outgoing, false)
    }

    /// Mandatory incoming edge.
    pub fn incoming(uri: impl Into<String>, new_col_name: impl Into<String>) -> Self {
        Self::new(uri, new_col_name, Direction::Incoming, false)
    }
}

/// One aggregation request: which column to aggregate and what to call the result.
///
/// `agg_parameter` is function specific (e.g. `{"distinct": true}` for COUNT)
/// and is carried through to the compiler untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationData {
    pub src_col_name: String,
    pub new_col_name: String,
    #[serde(default)]
    pub agg_parameter: Option<serde_json::Value>,
}

impl AggregationData {
    pub fn new(
        src_col_name: impl Into<String>,
        new_col_name: impl Into<String>,
        agg_parameter: Option<serde_json::Value>,
    ) -> Self {
        Self {
            src_col_name: src_col_name.into(),
            new_col_name: new_col_name.into(),
            agg_parameter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum JoinType {
    #[default]
    Inner,
    LeftOuter,
    RightOuter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AggregationFunction {
    Sum,
    Avg,
    Min,
    Max,
    Count,
}

impl AggregationFunction {
    pub fn as_str(self) -> &'static str {
        match self {
            AggregationFunction::Sum => "SUM",
            AggregationFunction::Avg => "AVG",
            AggregationFunction::Min => "MIN",
            AggregationFunction::Max => "MAX",
            AggregationFunction::Count => "COUNT",
        }
    }

    /// Parse a function name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SUM" => Some(AggregationFunction::Sum),
            "AVG" => Some(AggregationFunction::Avg),
            "MIN" => Some(AggregationFunction::Min),
            "MAX" => Some(AggregationFunction::Max),
            "COUNT" => Some(AggregationFunction::Count),
            _ => None,
        }
    }
}

impl fmt::Display for AggregationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter condition applied to a single column. Opaque to the builder; the
/// compiler decides how to render it (e.g. `">= 2000"` or `"regex(\"^A\")"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(String);

impl Condition {
    pub fn new(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Condition {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Condition {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregation_function_names() {
        assert_eq!(AggregationFunction::Count.as_str(), "COUNT");
        assert_eq!(AggregationFunction::parse("avg"), Some(AggregationFunction::Avg));
        assert_eq!(AggregationFunction::parse("median"), None);
        assert_eq!(
            serde_json::to_string(&AggregationFunction::Max).unwrap(),
            "\"MAX\""
        );
    }

    #[test]
    fn predicate_defaults_from_json() {
        let p: RdfPredicate =
            serde_json::from_str(r#"{"uri":"dbpo:starring","new_col_name":"actor"}"#).unwrap();
        assert_eq!(p.direction, Direction::Outgoing);
        assert!(!p.optional);
    }
}
