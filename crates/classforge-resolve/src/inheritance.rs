//! The inheritance resolver.
//!
//! Builds parent/child roles from `inheritance` edges (source = parent,
//! target = child). Parents get the joined-table strategy with a
//! discriminator column at emission time; children inherit their key and
//! declare a discriminator value derived from their own identifier's first
//! character. Sibling discriminator collisions are not detected.

use log::{debug, warn};

use classforge_core::{
    lookup::NameTable,
    model::{DiagramModel, RelationshipKind},
};

use crate::{Resolution, ResolveError};

/// Resolve every inheritance edge in the model.
///
/// Edges with unresolved endpoints are dropped with a warning.
///
/// # Errors
///
/// Returns [`ResolveError::InheritanceConflict`] when a child is targeted
/// by inheritance edges from two different parents. A repeated edge from
/// the same parent is ignored.
pub(crate) fn resolve(
    model: &DiagramModel,
    table: &NameTable,
    resolution: &mut Resolution,
) -> Result<(), ResolveError> {
    for edge in model.edges() {
        if edge.kind() != RelationshipKind::Inheritance {
            continue;
        }

        let (Some(parent), Some(child)) = (
            table.class_of(edge.source()).cloned(),
            table.class_of(edge.target()).cloned(),
        ) else {
            warn!(
                edge = edge.id(),
                source = edge.source(),
                target = edge.target();
                "Dropping inheritance edge with unresolved endpoint"
            );
            continue;
        };

        debug!(parent = parent.as_str(), child = child.as_str(); "Resolving inheritance edge");

        if let Some(desc) = resolution.descriptor_mut(&child) {
            let role = desc.inheritance_mut();
            match role.parent().cloned() {
                Some(existing) if existing != parent => {
                    return Err(ResolveError::InheritanceConflict {
                        child: child.clone(),
                        first_parent: existing,
                        second_parent: parent,
                    });
                }
                Some(_) => continue,
                None => {
                    let discriminator = child.initial();
                    role.set_parent(parent.clone(), discriminator);
                }
            }
        }

        if let Some(desc) = resolution.descriptor_mut(&parent) {
            desc.inheritance_mut().mark_parent();
        }
    }

    Ok(())
}
