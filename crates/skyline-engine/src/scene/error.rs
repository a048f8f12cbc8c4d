use std::fmt;

use super::NodeId;

/// Structural error found while assembling or validating a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A handle that does not belong to this graph was used.
    UnknownNode(NodeId),
    /// Following child links from `node` leads back to `node`.
    Cycle { node: NodeId },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::UnknownNode(id) => write!(f, "scene error: unknown node {id}"),
            SceneError::Cycle { node } => {
                write!(f, "scene error: node {node} is its own ancestor")
            }
        }
    }
}

impl std::error::Error for SceneError {}
