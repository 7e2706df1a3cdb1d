//! Convenient re-exports for downstream crates.

pub use crate::config::{BuilderConfig, GraphConfig};
pub use crate::error::{Error, Result};
pub use crate::graph::KnowledgeGraph;
pub use crate::hash::Hash256;
pub use crate::id::ViewId;
pub use crate::node::{
    AggregationNode, ExpansionNode, FilterNode, GroupByNode, JoinNode, NodeKind, OperatorNode,
    SeedNode, SelectNode,
};
pub use crate::plan::{Plan, PlanHandle};
pub use crate::types::{
    AggregationData, AggregationFunction, Condition, Direction, JoinType, RdfPredicate,
};
