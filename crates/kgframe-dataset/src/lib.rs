#![forbid(unsafe_code)]
//! kgframe-dataset: fluent, lazily-evaluated dataset builders.
//!
//! Design:
//! - Every builder call validates against the dataset's tracked columns,
//!   then appends one or more `OperatorNode`s to the shared `PlanHandle`.
//!   A failed call appends nothing and leaves the columns untouched.
//! - `group_by` returns a `GroupedDataset` that aliases the parent's plan.
//! - `QueryDescription` is the hand-off to an external `QueryCompiler`.
//! - A small YAML DSL builds the same chains from a document.

pub mod compile;
pub mod dataset;
pub mod dsl;
pub mod expandable;
pub mod grouped;

pub use compile::{QueryCompiler, QueryDescription};
pub use dataset::{Dataset, DatasetKind};
pub use dsl::yaml::{parse_yaml_pipeline, ParsedPipeline};
pub use expandable::ExpandableDataset;
pub use grouped::{generated_grouped_ds_name, GroupedDataset};
