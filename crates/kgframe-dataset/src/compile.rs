//! Hand-off to an external query compiler.
//!
//! The builder's only product is the node sequence plus the tracked columns.
//! `QueryDescription` packages both, with enough metadata for a compiler to
//! translate and cache the query.

use serde::{Deserialize, Serialize};

use kgframe_core::error::Result;
use kgframe_core::graph::KnowledgeGraph;
use kgframe_core::hash::Hash256;
use kgframe_core::node::OperatorNode;

use crate::dataset::{Dataset, DatasetKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDescription {
    pub dataset_name: String,
    pub kind: DatasetKind,
    pub graph: KnowledgeGraph,
    /// Plan nodes in application order.
    pub nodes: Vec<OperatorNode>,
    pub columns: Vec<String>,
    /// Projection the result rows must follow: the dataset's last Select,
    /// or `columns` when it never selected.
    pub output_columns: Vec<String>,
    pub fingerprint: Hash256,
}

impl QueryDescription {
    pub fn from_dataset<D: Dataset + ?Sized>(ds: &D) -> Result<Self> {
        let nodes = ds.plan().snapshot();
        let output_columns = nodes
            .iter()
            .rev()
            .filter_map(|n| n.as_select())
            .find(|s| s.dataset_name == ds.name())
            .map(|s| s.col_list.clone())
            .unwrap_or_else(|| ds.columns().to_vec());

        Ok(Self {
            dataset_name: ds.name().to_string(),
            kind: ds.kind(),
            graph: ds.graph().clone(),
            fingerprint: ds.plan().fingerprint()?,
            nodes,
            columns: ds.columns().to_vec(),
            output_columns,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Translates a description into something executable (query text, a
/// physical plan, ...). Implementations must handle every `OperatorNode`
/// variant and process nodes in order.
pub trait QueryCompiler {
    type Output;

    fn compile(&self, query: &QueryDescription) -> Result<Self::Output>;
}
