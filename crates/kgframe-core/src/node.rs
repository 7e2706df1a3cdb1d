//! Operator nodes: one immutable descriptor per builder step.
//!
//! Every node carries `dataset_name`, the lineage tag of the dataset (or
//! grouped view) that issued the call. Nodes hold only what a compiler needs
//! to translate the step; they have no behavior of their own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::ViewId;
use crate::types::{AggregationFunction, Condition, Direction, JoinType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedNode {
    pub dataset_name: String,
    pub seed_uri_list: Vec<String>,
    pub seed_col_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionNode {
    pub dataset_name: String,
    pub src_col_name: String,
    pub predicate_uri: String,
    pub new_col_name: String,
    pub direction: Direction,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterNode {
    pub dataset_name: String,
    pub column: String,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectNode {
    pub dataset_name: String,
    pub col_list: Vec<String>,
}

/// Defines a grouped view. `grouped_dataset` names the view this node
/// created; `generated_name` is the lineage tag that view's nodes carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupByNode {
    pub dataset_name: String,
    pub groupby_cols_list: Vec<String>,
    pub generated_name: String,
    pub grouped_dataset: ViewId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationNode {
    pub dataset_name: String,
    pub src_col_name: String,
    pub function: AggregationFunction,
    pub new_col_name: String,
    pub agg_parameter: Option<serde_json::Value>,
}

/// `other_nodes` is the right-hand dataset's plan at join time, so the
/// compiler can translate both sides from this plan alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinNode {
    pub dataset_name: String,
    pub join_col_name: String,
    pub other_dataset_name: String,
    pub other_join_col_name: String,
    pub join_type: JoinType,
    pub other_nodes: Vec<OperatorNode>,
}

/// Closed set of plan steps. Compilers match on this exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OperatorNode {
    Seed(SeedNode),
    Expansion(ExpansionNode),
    Filter(FilterNode),
    Select(SelectNode),
    GroupBy(GroupByNode),
    Aggregation(AggregationNode),
    Join(JoinNode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Seed,
    Expansion,
    Filter,
    Select,
    GroupBy,
    Aggregation,
    Join,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Seed => "seed",
            NodeKind::Expansion => "expansion",
            NodeKind::Filter => "filter",
            NodeKind::Select => "select",
            NodeKind::GroupBy => "group_by",
            NodeKind::Aggregation => "aggregation",
            NodeKind::Join => "join",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OperatorNode {
    pub fn kind(&self) -> NodeKind {
        use OperatorNode::*;
        match self {
            Seed(_) => NodeKind::Seed,
            Expansion(_) => NodeKind::Expansion,
            Filter(_) => NodeKind::Filter,
            Select(_) => NodeKind::Select,
            GroupBy(_) => NodeKind::GroupBy,
            Aggregation(_) => NodeKind::Aggregation,
            Join(_) => NodeKind::Join,
        }
    }

    /// Lineage tag: the dataset (or grouped view) that appended this node.
    pub fn dataset_name(&self) -> &str {
        use OperatorNode::*;
        match self {
            Seed(n) => &n.dataset_name,
            Expansion(n) => &n.dataset_name,
            Filter(n) => &n.dataset_name,
            Select(n) => &n.dataset_name,
            GroupBy(n) => &n.dataset_name,
            Aggregation(n) => &n.dataset_name,
            Join(n) => &n.dataset_name,
        }
    }

    pub fn as_group_by(&self) -> Option<&GroupByNode> {
        match self {
            OperatorNode::GroupBy(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_select(&self) -> Option<&SelectNode> {
        match self {
            OperatorNode::Select(n) => Some(n),
            _ => None,
        }
    }
}
