//! Grouped view over an `ExpandableDataset`.

use kgframe_core::config::BuilderConfig;
use kgframe_core::error::Result;
use kgframe_core::graph::KnowledgeGraph;
use kgframe_core::id::ViewId;
use kgframe_core::node::{AggregationNode, GroupByNode, OperatorNode, SelectNode};
use kgframe_core::plan::PlanHandle;
use kgframe_core::types::{AggregationData, AggregationFunction};

use crate::dataset::{Dataset, DatasetKind};
use crate::expandable::ExpandableDataset;

/// Deterministic name of the view grouping `base_name` by `cols` (in order),
/// using the default separator.
pub fn generated_grouped_ds_name<S: AsRef<str>>(base_name: &str, cols: &[S]) -> String {
    generated_grouped_ds_name_with(
        &BuilderConfig::default().grouped_name_separator,
        base_name,
        cols,
    )
}

/// `{base}{sep}groupby{sep}{len}:{col}{sep}{len}:{col}...`
///
/// Each column is length-prefixed so a separator inside a column name cannot
/// make two different groupings produce the same name.
pub fn generated_grouped_ds_name_with<S: AsRef<str>>(
    separator: &str,
    base_name: &str,
    cols: &[S],
) -> String {
    let mut name = format!("{base_name}{separator}groupby");
    for col in cols {
        let col = col.as_ref();
        name.push_str(separator);
        name.push_str(&col.len().to_string());
        name.push(':');
        name.push_str(col);
    }
    name
}

/// A dataset partitioned by grouping columns, awaiting aggregation.
///
/// Shares the parent's plan: nodes appended here are tagged with the view's
/// generated name and land in the same sequence as the parent's.
#[derive(Debug)]
pub struct GroupedDataset {
    id: ViewId,
    name: String,
    parent_name: String,
    parent_columns: Vec<String>,
    grouping_columns: Vec<String>,
    groupby_node_index: usize,
    columns: Vec<String>,
    plan: PlanHandle,
    graph: KnowledgeGraph,
    config: BuilderConfig,
}

impl GroupedDataset {
    pub(crate) fn new(
        id: ViewId,
        name: String,
        parent: &ExpandableDataset,
        grouping_columns: Vec<String>,
        groupby_node_index: usize,
    ) -> Self {
        Self {
            id,
            name,
            parent_name: parent.name().to_string(),
            parent_columns: parent.columns().to_vec(),
            columns: grouping_columns.clone(),
            grouping_columns,
            groupby_node_index,
            plan: parent.plan().clone(),
            graph: parent.graph().clone(),
            config: parent.config().clone(),
        }
    }

    /// Same as the free function; kept on the type for discoverability.
    pub fn generated_grouped_ds_name<S: AsRef<str>>(base_name: &str, cols: &[S]) -> String {
        generated_grouped_ds_name(base_name, cols)
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn parent_name(&self) -> &str {
        &self.parent_name
    }

    /// Parent's columns as of the `group_by` call.
    pub fn parent_columns(&self) -> &[String] {
        &self.parent_columns
    }

    pub fn grouping_columns(&self) -> &[String] {
        &self.grouping_columns
    }

    /// The GroupBy node that defined this view, copied out of the plan.
    pub fn groupby_node(&self) -> Option<GroupByNode> {
        match self.plan.node(self.groupby_node_index)? {
            OperatorNode::GroupBy(node) => Some(node),
            _ => None,
        }
    }

    /// One Aggregation node per entry; each result becomes a view column.
    pub fn aggregate(
        &mut self,
        function: AggregationFunction,
        aggregation_fn_data: &[AggregationData],
    ) -> &mut Self {
        for entry in aggregation_fn_data {
            self.plan.append_node(OperatorNode::Aggregation(AggregationNode {
                dataset_name: self.name.clone(),
                src_col_name: entry.src_col_name.clone(),
                function,
                new_col_name: entry.new_col_name.clone(),
                agg_parameter: entry.agg_parameter.clone(),
            }));
            self.add_column(entry.new_col_name.clone());
        }
        self
    }

    pub fn sum(&mut self, aggregation_fn_data: &[AggregationData]) -> &mut Self {
        self.aggregate(AggregationFunction::Sum, aggregation_fn_data)
    }

    pub fn avg(&mut self, aggregation_fn_data: &[AggregationData]) -> &mut Self {
        self.aggregate(AggregationFunction::Avg, aggregation_fn_data)
    }

    pub fn min(&mut self, aggregation_fn_data: &[AggregationData]) -> &mut Self {
        self.aggregate(AggregationFunction::Min, aggregation_fn_data)
    }

    pub fn max(&mut self, aggregation_fn_data: &[AggregationData]) -> &mut Self {
        self.aggregate(AggregationFunction::Max, aggregation_fn_data)
    }

    pub fn count(&mut self, aggregation_fn_data: &[AggregationData]) -> &mut Self {
        self.aggregate(AggregationFunction::Count, aggregation_fn_data)
    }

    pub fn select_cols<S: AsRef<str>>(&mut self, col_list: &[S]) -> Result<&mut Self> {
        if self.config.strict_select {
            for col in col_list {
                self.require_column(col.as_ref())?;
            }
        }

        self.plan.append_node(OperatorNode::Select(SelectNode {
            dataset_name: self.name.clone(),
            col_list: col_list.iter().map(|c| c.as_ref().to_string()).collect(),
        }));

        Ok(self)
    }
}

impl Dataset for GroupedDataset {
    fn name(&self) -> &str {
        &self.name
    }

    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn plan(&self) -> &PlanHandle {
        &self.plan
    }

    fn graph(&self) -> &KnowledgeGraph {
        &self.graph
    }

    fn add_column(&mut self, name: String) {
        self.columns.push(name);
    }

    fn kind(&self) -> DatasetKind {
        DatasetKind::Grouped
    }
}
