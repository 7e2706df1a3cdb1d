//! Flat dataset grown by following predicate edges from a seed column.

use kgframe_core::config::BuilderConfig;
use kgframe_core::error::{Error, Result};
use kgframe_core::graph::KnowledgeGraph;
use kgframe_core::node::{
    AggregationNode, ExpansionNode, FilterNode, GroupByNode, JoinNode, OperatorNode, SeedNode,
    SelectNode,
};
use kgframe_core::plan::PlanHandle;
use kgframe_core::trace;
use kgframe_core::types::{AggregationData, AggregationFunction, Condition, JoinType, RdfPredicate};

use crate::dataset::{Dataset, DatasetKind};
use crate::grouped::{generated_grouped_ds_name_with, GroupedDataset};

/// A table of entities reached by walking the Knowledge Graph.
///
/// Nothing is executed. Each call records an operator node in the plan and
/// updates the tracked columns; the pair is later handed to a compiler.
#[derive(Debug)]
pub struct ExpandableDataset {
    name: String,
    columns: Vec<String>,
    plan: PlanHandle,
    graph: KnowledgeGraph,
    config: BuilderConfig,
}

impl ExpandableDataset {
    /// Start a dataset from `seed_uri_list`, exposed as `seed_col_name`.
    pub fn new<I, S>(
        graph: KnowledgeGraph,
        name: impl Into<String>,
        seed_uri_list: I,
        seed_col_name: impl Into<String>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let seed_col_name = seed_col_name.into();
        let seed_uri_list: Vec<String> = seed_uri_list.into_iter().map(Into::into).collect();

        if seed_uri_list.is_empty() {
            return Err(Error::InvalidSeed(format!(
                "dataset '{name}' needs at least one seed uri"
            )));
        }
        if let Some(pos) = seed_uri_list.iter().position(|u| u.trim().is_empty()) {
            return Err(Error::InvalidSeed(format!(
                "dataset '{name}': seed uri #{pos} is blank"
            )));
        }
        if seed_col_name.trim().is_empty() {
            return Err(Error::InvalidSeed(format!(
                "dataset '{name}': seed column name is blank"
            )));
        }

        let plan = PlanHandle::new();
        plan.append_node(OperatorNode::Seed(SeedNode {
            dataset_name: name.clone(),
            seed_uri_list,
            seed_col_name: seed_col_name.clone(),
        }));

        Ok(Self {
            name,
            columns: vec![seed_col_name],
            plan,
            graph,
            config: BuilderConfig::default(),
        })
    }

    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Follow each predicate from `src_col_name`.
    ///
    /// Per predicate, the new entity column and then the predicate URI are
    /// appended to the tracked columns.
    pub fn expand(&mut self, src_col_name: &str, predicate_list: &[RdfPredicate]) -> Result<&mut Self> {
        self.require_column(src_col_name)?;

        for predicate in predicate_list {
            self.plan.append_node(OperatorNode::Expansion(ExpansionNode {
                dataset_name: self.name.clone(),
                src_col_name: src_col_name.to_string(),
                predicate_uri: predicate.uri.clone(),
                new_col_name: predicate.new_col_name.clone(),
                direction: predicate.direction,
                optional: predicate.optional,
            }));
            self.add_column(predicate.new_col_name.clone());
            self.add_column(predicate.uri.clone());
        }

        Ok(self)
    }

    /// Join `other` into this dataset on `join_col_name`.
    ///
    /// `other_join_col_name` defaults to `join_col_name`. The other side's
    /// columns are appended in their order, minus the first occurrence of
    /// its join key.
    pub fn join(
        &mut self,
        other: &ExpandableDataset,
        join_col_name: &str,
        other_join_col_name: Option<&str>,
        join_type: JoinType,
    ) -> Result<&mut Self> {
        let other_key = other_join_col_name.unwrap_or(join_col_name);

        if self.plan.ptr_eq(&other.plan) {
            return Err(Error::UnsupportedOperation(format!(
                "join of '{}' with '{}': both share one plan",
                self.name, other.name
            )));
        }
        if self.graph != other.graph {
            return Err(Error::UnsupportedOperation(format!(
                "join of '{}' with '{}' across knowledge graphs '{}' and '{}'",
                self.name, other.name, self.graph.name, other.graph.name
            )));
        }
        self.require_column(join_col_name)?;
        other.require_column(other_key)?;

        self.plan.append_node(OperatorNode::Join(JoinNode {
            dataset_name: self.name.clone(),
            join_col_name: join_col_name.to_string(),
            other_dataset_name: other.name.clone(),
            other_join_col_name: other_key.to_string(),
            join_type,
            other_nodes: other.plan.snapshot(),
        }));
        trace::builder_event(&self.name, "join", &other.name);

        // Only the first occurrence is the key; later duplicates are kept.
        let key_pos = other.columns.iter().position(|c| c == other_key);
        for (i, col) in other.columns.iter().enumerate() {
            if Some(i) != key_pos {
                self.add_column(col.clone());
            }
        }

        Ok(self)
    }

    /// Apply `(column, conditions)` pairs in iteration order.
    ///
    /// Conditions are conjunctive: each one becomes its own Filter node, so
    /// a row must satisfy all of them. Every column is checked before any
    /// node is appended.
    pub fn filter<I, K>(&mut self, conditions: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, Vec<Condition>)>,
        K: Into<String>,
    {
        let conditions: Vec<(String, Vec<Condition>)> = conditions
            .into_iter()
            .map(|(col, conds)| (col.into(), conds))
            .collect();

        for (col, _) in &conditions {
            self.require_column(col)?;
        }

        for (col, conds) in conditions {
            for condition in conds {
                self.plan.append_node(OperatorNode::Filter(FilterNode {
                    dataset_name: self.name.clone(),
                    column: col.clone(),
                    condition,
                }));
            }
        }

        Ok(self)
    }

    /// Record the output projection. Tracked columns are left as they are.
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

    /// Group by `groupby_cols_list`, returning a view that shares this plan.
    pub fn group_by<S: AsRef<str>>(&mut self, groupby_cols_list: &[S]) -> Result<GroupedDataset> {
        // An empty grouping names no column at all.
        if groupby_cols_list.is_empty() {
            return Err(Error::unknown_column(&self.name, ""));
        }
        for col in groupby_cols_list {
            self.require_column(col.as_ref())?;
        }

        let grouping_columns: Vec<String> = groupby_cols_list
            .iter()
            .map(|c| c.as_ref().to_string())
            .collect();
        let generated_name = generated_grouped_ds_name_with(
            &self.config.grouped_name_separator,
            &self.name,
            &grouping_columns,
        );

        let view_id = self.plan.allocate_view_id();
        let node_index = self.plan.append_node(OperatorNode::GroupBy(GroupByNode {
            dataset_name: self.name.clone(),
            groupby_cols_list: grouping_columns.clone(),
            generated_name: generated_name.clone(),
            grouped_dataset: view_id,
        }));
        trace::builder_event(&self.name, "group_by", &generated_name);

        Ok(GroupedDataset::new(
            view_id,
            generated_name,
            self,
            grouping_columns,
            node_index,
        ))
    }

    /// One Aggregation node per entry, in order. Columns are unchanged.
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
}

impl Dataset for ExpandableDataset {
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
        DatasetKind::Expandable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kgframe_core::node::NodeKind;
    use kgframe_core::types::Direction;

    fn films() -> ExpandableDataset {
        ExpandableDataset::new(KnowledgeGraph::new("dbpedia"), "D", ["u1", "u2"], "s").unwrap()
    }

    fn kinds(ds: &ExpandableDataset) -> Vec<NodeKind> {
        ds.plan().with_nodes(|nodes| nodes.iter().map(|n| n.kind()).collect())
    }

    #[test]
    fn seed_rejects_empty_and_blank() {
        let g = KnowledgeGraph::new("g");
        let empty: [&str; 0] = [];
        assert!(matches!(
            ExpandableDataset::new(g.clone(), "D", empty, "s"),
            Err(Error::InvalidSeed(_))
        ));
        assert!(matches!(
            ExpandableDataset::new(g.clone(), "D", ["u1", " "], "s"),
            Err(Error::InvalidSeed(_))
        ));
        assert!(matches!(
            ExpandableDataset::new(g, "D", ["u1"], ""),
            Err(Error::InvalidSeed(_))
        ));
    }

    #[test]
    fn expand_records_nodes_in_predicate_order() {
        let mut ds = films();
        ds.expand(
            "s",
            &[
                RdfPredicate::outgoing("p1", "t"),
                RdfPredicate::new("p2", "u", Direction::Incoming, true),
            ],
        )
        .unwrap();

        assert_eq!(ds.columns(), ["s", "t", "p1", "u", "p2"]);
        ds.plan().with_nodes(|nodes| {
            let exps: Vec<&ExpansionNode> = nodes
                .iter()
                .filter_map(|n| match n {
                    OperatorNode::Expansion(e) => Some(e),
                    _ => None,
                })
                .collect();
            assert_eq!(exps.len(), 2);
            assert_eq!(exps[0].predicate_uri, "p1");
            assert_eq!(exps[1].predicate_uri, "p2");
            assert!(exps.iter().all(|e| e.src_col_name == "s"));
            assert_eq!(exps[1].direction, Direction::Incoming);
            assert!(exps[1].optional);
        });
    }

    #[test]
    fn failed_filter_appends_nothing() {
        let mut ds = films();
        let err = ds
            .filter(vec![
                ("s", vec![Condition::new("!= u1")]),
                ("missing", vec![Condition::new("> 1")]),
            ])
            .unwrap_err();
        assert!(matches!(err, Error::UnknownColumn { ref column, .. } if column == "missing"));
        assert_eq!(ds.plan().len(), 1);
        assert_eq!(ds.columns(), ["s"]);
    }

    #[test]
    fn aggregates_use_their_function() {
        let mut ds = films();
        let entry = [AggregationData::new("s", "n", None)];
        ds.sum(&entry).avg(&entry).min(&entry).max(&entry).count(&entry);
        let functions: Vec<AggregationFunction> = ds.plan().with_nodes(|nodes| {
            nodes
                .iter()
                .filter_map(|n| match n {
                    OperatorNode::Aggregation(a) => Some(a.function),
                    _ => None,
                })
                .collect()
        });
        assert_eq!(
            functions,
            [
                AggregationFunction::Sum,
                AggregationFunction::Avg,
                AggregationFunction::Min,
                AggregationFunction::Max,
                AggregationFunction::Count,
            ]
        );
        assert_eq!(ds.columns(), ["s"]);
    }

    #[test]
    fn strict_select_validates() {
        let mut ds = films().with_config(BuilderConfig {
            strict_select: true,
            ..BuilderConfig::default()
        });
        assert!(ds.select_cols(&["nope"]).is_err());
        assert_eq!(kinds(&ds), [NodeKind::Seed]);
        ds.select_cols(&["s"]).unwrap();
        assert_eq!(kinds(&ds), [NodeKind::Seed, NodeKind::Select]);
    }

    #[test]
    fn empty_group_by_is_rejected() {
        let mut ds = films();
        let none: [&str; 0] = [];
        assert!(matches!(
            ds.group_by(&none),
            Err(Error::UnknownColumn { ref column, .. }) if column.is_empty()
        ));
        assert!(matches!(ds.group_by(&["x"]), Err(Error::UnknownColumn { .. })));
        assert_eq!(ds.plan().len(), 1);
    }
}
