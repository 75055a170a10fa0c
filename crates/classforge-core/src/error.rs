//! Validation errors for diagram-model ingestion.

use thiserror::Error;

/// Errors raised while validating a raw diagram document into a
/// [`crate::model::DiagramModel`].
#[derive(Debug, Error)]
pub enum ModelError {
    /// A node label contains nothing usable as a class identifier.
    #[error("node `{node_id}` has label `{label}` which sanitizes to an empty identifier")]
    UnusableLabel { node_id: String, label: String },

    /// Two nodes share the same id.
    #[error("duplicate node id `{id}`")]
    DuplicateNodeId { id: String },

    /// An edge declares a relationship kind outside the known set.
    #[error("edge `{edge_id}` has unknown relationship kind `{kind}`")]
    UnknownRelationshipKind { edge_id: String, kind: String },
}
