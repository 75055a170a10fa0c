//! Resolution of diagram models into emission-ready class descriptors.
//!
//! This crate sits between the validated model
//! ([`classforge_core::model::DiagramModel`]) and the artifact emitter. It
//! partitions the edge set by kind and runs three resolvers over it:
//!
//! - the **relationship classifier** ([`classify`] internally) for
//!   associations, aggregations, realizations, and dependencies, including
//!   association-class join entities;
//! - the **inheritance resolver** for `inheritance` edges, producing
//!   parent/child roles and discriminator values;
//! - the **composition resolver** for `composition` edges, synthesizing
//!   composite identities for part classes.
//!
//! The output is a [`Resolution`]: one [`ClassDescriptor`] per class, in
//! document order.
//!
//! # Duplicate relationships
//!
//! When the same class pair is connected by more than one non-inheritance
//! edge, every name derived from the second and later edges (fields,
//! `mappedBy` targets, join columns, reference tags) carries the edge's
//! per-pair sequence number, so mirrored field pairs stay consistent and
//! never collide.

pub mod descriptor;

mod classify;
mod composition;
mod error;
mod inheritance;

pub use error::ResolveError;

use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, warn};

use classforge_core::{
    identifier::ClassName,
    lookup::NameTable,
    model::{DiagramModel, RelationshipKind},
};

use descriptor::{ClassDescriptor, CompositeId};

/// The resolved descriptor set for one model.
#[derive(Debug, Clone)]
pub struct Resolution {
    descriptors: IndexMap<ClassName, ClassDescriptor>,
}

impl Resolution {
    fn seed(table: &NameTable) -> Self {
        let descriptors = table
            .class_names()
            .map(|name| {
                (
                    name.clone(),
                    ClassDescriptor::new(name.clone(), table.attributes_of(name).to_vec()),
                )
            })
            .collect();
        Self { descriptors }
    }

    /// Look up one class's descriptor.
    pub fn get(&self, name: &ClassName) -> Option<&ClassDescriptor> {
        self.descriptors.get(name)
    }

    /// All descriptors in document order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.descriptors.values()
    }

    /// Number of resolved classes.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the model contained no classes.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// The retained composite-identity structures, one per part class.
    pub fn composite_ids(&self) -> impl Iterator<Item = &CompositeId> {
        self.descriptors
            .values()
            .filter_map(ClassDescriptor::composite_id)
    }

    fn descriptor_mut(&mut self, name: &ClassName) -> Option<&mut ClassDescriptor> {
        self.descriptors.get_mut(name)
    }
}

/// Per-class-pair edge sequence used to disambiguate duplicate
/// relationships. The pair key is unordered so `A→B` and `B→A` edges share
/// one sequence.
#[derive(Debug, Default)]
struct PairSequence {
    counts: HashMap<(ClassName, ClassName), u32>,
}

impl PairSequence {
    /// Suffix for the next edge between `a` and `b`: empty for the first
    /// edge, `"2"`, `"3"`, ... for the ones after it.
    fn next_suffix(&mut self, a: &ClassName, b: &ClassName) -> String {
        let key = if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        if *count == 1 {
            String::new()
        } else {
            count.to_string()
        }
    }
}

/// Resolve a model's edge set into class descriptors.
///
/// Edges whose source or target id does not resolve to a node are dropped
/// with a warning; no other class's descriptor is affected.
///
/// # Errors
///
/// Returns [`ResolveError`] when a child class has conflicting inheritance
/// parents or a part class is claimed by more than one composition edge.
pub fn resolve(model: &DiagramModel, table: &NameTable) -> Result<Resolution, ResolveError> {
    let mut resolution = Resolution::seed(table);

    inheritance::resolve(model, table, &mut resolution)?;

    let mut pairs = PairSequence::default();
    for edge in model.edges() {
        // Inheritance edges are consumed by the inheritance resolver only.
        if edge.kind() == RelationshipKind::Inheritance {
            continue;
        }

        let (Some(source), Some(target)) = (
            table.class_of(edge.source()).cloned(),
            table.class_of(edge.target()).cloned(),
        ) else {
            warn!(
                edge = edge.id(),
                source = edge.source(),
                target = edge.target();
                "Dropping edge with unresolved endpoint"
            );
            continue;
        };

        let suffix = pairs.next_suffix(&source, &target);

        if edge.kind() == RelationshipKind::Composition {
            composition::apply(&mut resolution, &source, &target, &suffix)?;
            continue;
        }

        // An association with a resolvable association class becomes an
        // explicit join entity regardless of cardinality.
        if edge.kind() == RelationshipKind::Association {
            if let Some(assoc) = edge.association_class().and_then(|id| table.class_of(id)) {
                let assoc = assoc.clone();
                // The edge's reference decides; the node flag is advisory.
                if !table.is_association_class(&assoc) {
                    debug!(
                        edge = edge.id(),
                        class = assoc.as_str();
                        "Edge names an association class the node does not declare"
                    );
                }
                classify::association_class(&mut resolution, &source, &target, &assoc, &suffix);
                continue;
            }
        }

        classify::cardinality(&mut resolution, edge, &source, &target, &suffix);
    }

    Ok(resolution)
}
