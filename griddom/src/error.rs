use thiserror::Error;

use crate::node::NodeId;

/// Errors raised by scene mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The handle does not resolve to a live node.
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),

    #[error("node {0} is not a scroll view")]
    NotAScrollView(NodeId),

    #[error("node {0} is not a scroller")]
    NotAScroller(NodeId),

    /// Inserting the node would make it its own ancestor.
    #[error("cannot insert {child} into its own subtree at {parent}")]
    CyclicInsert { parent: NodeId, child: NodeId },
}
