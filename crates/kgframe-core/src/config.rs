//! Configuration that downstream crates can serialize/deserialize.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Describes where a Knowledge Graph lives. The builder stores it verbatim;
/// only the compiler/executor reads these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Query endpoint of the graph store, if it is remote.
    pub endpoint: Option<String>,

    /// Named graphs the dataset is derived from, in declaration order.
    pub graph_uris: Vec<String>,

    /// Prefix → namespace URI table used when rendering queries.
    pub prefixes: BTreeMap<String, String>,

    /// Per-query timeout applied at execution time.
    pub default_timeout_ms: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            graph_uris: Vec::new(),
            prefixes: BTreeMap::new(),
            default_timeout_ms: 30_000,
        }
    }
}

impl GraphConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `KGFRAME_ENDPOINT`: query endpoint
    /// - `KGFRAME_GRAPH_URIS`: comma separated named-graph URIs
    /// - `KGFRAME_TIMEOUT_MS`: query timeout in milliseconds
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("KGFRAME_ENDPOINT") {
            cfg.endpoint = Some(s);
        }

        if let Some(s) = lookup("KGFRAME_GRAPH_URIS") {
            cfg.graph_uris = s
                .split(',')
                .map(|u| u.trim())
                .filter(|u| !u.is_empty())
                .map(|u| u.to_string())
                .collect();
        }

        if let Some(s) = lookup("KGFRAME_TIMEOUT_MS") {
            if let Ok(v) = s.parse::<u64>() {
                cfg.default_timeout_ms = v;
            }
        }

        cfg
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.prefixes.insert(prefix.into(), namespace.into());
        self
    }
}

/// Knobs for the dataset builder itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Separator used when composing grouped-view names.
    pub grouped_name_separator: String,

    /// When set, `select_cols` rejects columns the dataset does not track.
    pub strict_select: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            grouped_name_separator: "__".to_string(),
            strict_select: false,
        }
    }
}
