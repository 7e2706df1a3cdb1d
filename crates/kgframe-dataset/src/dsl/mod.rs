//! Declarative front-ends that build dataset chains.

pub mod yaml;
