//! The contract every dataset variant fulfils.

use std::fmt;

use serde::{Deserialize, Serialize};

use kgframe_core::error::{Error, Result};
use kgframe_core::graph::KnowledgeGraph;
use kgframe_core::plan::PlanHandle;

use crate::compile::{QueryCompiler, QueryDescription};

/// Closed tag for the concrete dataset variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    #[serde(rename = "ExpandableDataset")]
    Expandable,
    #[serde(rename = "GroupedDataset")]
    Grouped,
}

impl DatasetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKind::Expandable => "ExpandableDataset",
            DatasetKind::Grouped => "GroupedDataset",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Dataset {
    /// Lineage tag stamped on every node this dataset appends.
    fn name(&self) -> &str;

    /// Tracked columns in append order. May contain duplicates.
    fn columns(&self) -> &[String];

    fn plan(&self) -> &PlanHandle;

    fn graph(&self) -> &KnowledgeGraph;

    /// Append a column name unconditionally (no deduplication).
    fn add_column(&mut self, name: String);

    fn kind(&self) -> DatasetKind;

    fn has_column(&self, name: &str) -> bool {
        self.columns().iter().any(|c| c == name)
    }

    /// `UnknownColumn` unless `name` is tracked.
    fn require_column(&self, name: &str) -> Result<()> {
        if self.has_column(name) {
            Ok(())
        } else {
            Err(Error::unknown_column(self.name(), name))
        }
    }

    /// Snapshot the plan and columns for a compiler.
    fn describe(&self) -> Result<QueryDescription> {
        QueryDescription::from_dataset(self)
    }

    fn compile_with<C: QueryCompiler>(&self, compiler: &C) -> Result<C::Output>
    where
        Self: Sized,
    {
        compiler.compile(&self.describe()?)
    }
}
