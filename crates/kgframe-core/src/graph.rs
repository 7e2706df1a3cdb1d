//! Opaque Knowledge Graph handle.

use serde::{Deserialize, Serialize};

use crate::config::GraphConfig;

/// Identifies the graph(s) a dataset is derived from. The builder never
/// interprets it; it is passed through to the compiler as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    pub name: String,
    pub config: GraphConfig,
}

impl KnowledgeGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: GraphConfig::default(),
        }
    }

    pub fn from_config(name: impl Into<String>, config: GraphConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}
