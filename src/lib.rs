#![forbid(unsafe_code)]
//! kgframe: lazily-evaluated dataset builders over a Knowledge Graph.
//!
//! Start from seed entities, chain expand/filter/select/group/aggregate/join
//! calls, then hand the resulting plan to a query compiler.

pub use kgframe_core::prelude::*;
pub use kgframe_dataset::{
    generated_grouped_ds_name, parse_yaml_pipeline, Dataset, DatasetKind, ExpandableDataset,
    GroupedDataset, ParsedPipeline, QueryCompiler, QueryDescription,
};

