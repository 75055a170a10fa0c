//! Resolution errors.

use thiserror::Error;

use classforge_core::identifier::ClassName;

/// Errors raised while resolving a model into class descriptors.
///
/// Both variants are explicit conflict checks: the input declared two
/// mutually exclusive structures for one class, and generation refuses to
/// pick a winner silently.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A child class is the target of more than one inheritance edge.
    #[error("class `{child}` inherits from both `{first_parent}` and `{second_parent}`")]
    InheritanceConflict {
        child: ClassName,
        first_parent: ClassName,
        second_parent: ClassName,
    },

    /// A part class is the target of more than one composition edge; a
    /// class can carry at most one composite-identity scheme.
    #[error("class `{part}` is the part of more than one composition (wholes `{first_whole}` and `{second_whole}`)")]
    CompositionConflict {
        part: ClassName,
        first_whole: ClassName,
        second_whole: ClassName,
    },
}
