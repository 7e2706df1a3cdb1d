//! Tracing hooks for plan growth.
//!
//! Compiled to no-ops unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
pub fn node_appended(dataset: &str, kind: &str, plan_len: usize) {
    tracing::trace!(%dataset, %kind, plan_len, "plan node appended");
}

#[cfg(not(feature = "tracing"))]
pub fn node_appended(_dataset: &str, _kind: &str, _plan_len: usize) { /* no-op */
}

#[cfg(feature = "tracing")]
pub fn builder_event(dataset: &str, event: &str, detail: &str) {
    tracing::debug!(%dataset, %event, %detail, "dataset builder");
}

#[cfg(not(feature = "tracing"))]
pub fn builder_event(_dataset: &str, _event: &str, _detail: &str) { /* no-op */
}
