use thiserror::Error;

use crate::NodeId;

/// Errors that can occur while building or mutating a document
#[derive(Error, Debug)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Node {child} cannot be inserted under {parent}: {reason}")]
    HierarchyRequest {
        parent: NodeId,
        child: NodeId,
        reason: &'static str,
    },

    #[error("Node {reference} is not a child of {parent}")]
    NotAChild { parent: NodeId, reference: NodeId },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DomError>;
