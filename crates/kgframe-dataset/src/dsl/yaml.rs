//! Minimal YAML → dataset chain parser for *linear* pipelines.
//!
//! Example:
//! ```yaml
//! graph: { name: "dbpedia", endpoint: "https://dbpedia.org/sparql" }
//! steps:
//!   - op: seed
//!     name: "films"
//!     uris: ["dbpr:Inception", "dbpr:Memento"]
//!     column: "film"
//!   - op: expand
//!     src: "film"
//!     predicates:
//!       - { uri: "dbpp:starring", new_col_name: "actor" }
//!   - op: filter
//!     conditions:
//!       - { column: "actor", conditions: ["!= dbpr:Nobody"] }
//!   - op: group_by
//!     columns: ["actor"]
//!   - op: aggregate
//!     function: count
//!     entries:
//!       - { src_col_name: "film", new_col_name: "films" }
//! ```

use serde::{Deserialize, Serialize};

use kgframe_core::config::GraphConfig;
use kgframe_core::error::{Error, Result};
use kgframe_core::graph::KnowledgeGraph;
use kgframe_core::types::{AggregationData, AggregationFunction, Condition, RdfPredicate};

use crate::expandable::ExpandableDataset;
use crate::grouped::GroupedDataset;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub graph: Option<GraphDef>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDef {
    #[serde(default = "default_graph_name")]
    pub name: String,
    #[serde(flatten)]
    pub config: GraphConfig,
}

fn default_graph_name() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum Step {
    #[serde(rename = "seed")]
    Seed {
        name: String,
        uris: Vec<String>,
        column: String,
    },

    #[serde(rename = "expand")]
    Expand {
        src: String,
        predicates: Vec<RdfPredicate>,
    },

    #[serde(rename = "filter")]
    Filter { conditions: Vec<FilterDef> },

    #[serde(rename = "select")]
    Select { columns: Vec<String> },

    #[serde(rename = "group_by")]
    GroupBy { columns: Vec<String> },

    #[serde(rename = "aggregate")]
    Aggregate {
        function: String,
        entries: Vec<AggregationData>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterDef {
    pub column: String,
    pub conditions: Vec<Condition>,
}

#[derive(Debug)]
pub struct ParsedPipeline {
    pub dataset: ExpandableDataset,
    /// Present when the pipeline grouped; later steps were applied to it.
    pub grouped: Option<GroupedDataset>,
}

fn parse_function(s: &str) -> Result<AggregationFunction> {
    AggregationFunction::parse(s)
        .ok_or_else(|| Error::Dsl(format!("unknown aggregation function '{s}'")))
}

/// Parse a YAML document and replay its steps on a fresh dataset.
///
/// Without a `graph:` section the dataset gets a default graph handle; the
/// environment is never consulted here.
pub fn parse_yaml_pipeline(yaml_src: &str) -> Result<ParsedPipeline> {
    let doc: Pipeline = serde_yaml::from_str(yaml_src)?;
    let graph = match doc.graph {
        Some(def) => KnowledgeGraph::from_config(def.name, def.config),
        None => KnowledgeGraph::from_config(default_graph_name(), GraphConfig::default()),
    };

    let mut steps = doc.steps.into_iter();
    let mut dataset = match steps.next() {
        Some(Step::Seed { name, uris, column }) => {
            ExpandableDataset::new(graph, name, uris, column)?
        }
        Some(other) => {
            return Err(Error::Dsl(format!(
                "first step must be 'seed', got {:?}",
                other
            )))
        }
        None => return Err(Error::Dsl("empty pipeline".into())),
    };
    let mut grouped: Option<GroupedDataset> = None;

    for step in steps {
        if let Some(g) = grouped.as_mut() {
            match step {
                Step::Select { columns } => {
                    g.select_cols(&columns)?;
                }
                Step::Aggregate { function, entries } => {
                    g.aggregate(parse_function(&function)?, &entries);
                }
                other => {
                    return Err(Error::UnsupportedOperation(format!(
                        "{:?} after group_by",
                        other
                    )));
                }
            }
            continue;
        }

        match step {
            Step::Seed { .. } => {
                return Err(Error::Dsl("multiple seed steps not supported".into()));
            }
            Step::Expand { src, predicates } => {
                dataset.expand(&src, &predicates)?;
            }
            Step::Filter { conditions } => {
                dataset.filter(conditions.into_iter().map(|f| (f.column, f.conditions)))?;
            }
            Step::Select { columns } => {
                dataset.select_cols(&columns)?;
            }
            Step::GroupBy { columns } => {
                grouped = Some(dataset.group_by(&columns)?);
            }
            Step::Aggregate { function, entries } => {
                dataset.aggregate(parse_function(&function)?, &entries);
            }
        }
    }

    Ok(ParsedPipeline { dataset, grouped })
}
