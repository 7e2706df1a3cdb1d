//! Append-only plan and its shared handle.
//!
//! A dataset and every grouped view derived from it hold clones of the same
//! `PlanHandle`; an append through any of them is visible through all.
//! The handle is `Rc`-based: chaining is single-threaded and sequential.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hash::{hash_serde, Hash256};
use crate::id::ViewId;
use crate::node::OperatorNode;
use crate::trace;

/// Ordered operator nodes. Order is application order and is never changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlanNodes")]
pub struct Plan {
    nodes: Vec<OperatorNode>,
    #[serde(skip)]
    next_view: u64,
}

#[derive(Deserialize)]
struct PlanNodes {
    nodes: Vec<OperatorNode>,
}

/// The view counter resumes past every `GroupBy` already in the plan.
impl From<PlanNodes> for Plan {
    fn from(p: PlanNodes) -> Self {
        let next_view = p
            .nodes
            .iter()
            .filter_map(|n| n.as_group_by())
            .map(|g| g.grouped_dataset.get() + 1)
            .max()
            .unwrap_or(0);
        Self {
            nodes: p.nodes,
            next_view,
        }
    }
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    /// The only mutator. Returns the index of the appended node.
    pub fn append_node(&mut self, node: OperatorNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn nodes(&self) -> &[OperatorNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Stable hash of the node sequence.
    pub fn fingerprint(&self) -> Result<Hash256> {
        hash_serde(&self.nodes)
    }

    fn allocate_view_id(&mut self) -> ViewId {
        let id = ViewId::new(self.next_view);
        self.next_view += 1;
        id
    }
}

/// Shared ownership of one `Plan`. Cloning the handle aliases the plan.
#[derive(Debug, Clone, Default)]
pub struct PlanHandle(Rc<RefCell<Plan>>);

impl PlanHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_node(&self, node: OperatorNode) -> usize {
        let mut plan = self.0.borrow_mut();
        let idx = plan.append_node(node);
        trace::node_appended(
            plan.nodes[idx].dataset_name(),
            plan.nodes[idx].kind().as_str(),
            plan.len(),
        );
        idx
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Owned copy of the node at `idx`. No borrow outlives the call.
    pub fn node(&self, idx: usize) -> Option<OperatorNode> {
        self.0.borrow().nodes.get(idx).cloned()
    }

    /// Run `f` over the current node sequence without cloning it.
    pub fn with_nodes<R>(&self, f: impl FnOnce(&[OperatorNode]) -> R) -> R {
        f(self.0.borrow().nodes())
    }

    /// Owned copy of the current node sequence.
    pub fn snapshot(&self) -> Vec<OperatorNode> {
        self.with_nodes(|nodes| nodes.to_vec())
    }

    pub fn fingerprint(&self) -> Result<Hash256> {
        self.0.borrow().fingerprint()
    }

    /// Allocate an id for a grouped view defined on this plan.
    pub fn allocate_view_id(&self) -> ViewId {
        self.0.borrow_mut().allocate_view_id()
    }

    /// True when both handles point at the same plan.
    pub fn ptr_eq(&self, other: &PlanHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
