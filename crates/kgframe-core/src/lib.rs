#![forbid(unsafe_code)]
//! kgframe-core: identifiers, external data shapes, operator nodes, the
//! append-only `Plan`, configuration, and stable hashing.
//!
//! Nothing in this crate executes a query. A `Plan` is the ordered record of
//! builder calls; a downstream compiler turns it into a graph query.

pub mod config;
pub mod error;
pub mod graph;
pub mod hash;
pub mod id;
pub mod node;
pub mod plan;
pub mod prelude;
pub mod trace;
pub mod types;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
