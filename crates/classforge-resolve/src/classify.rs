//! The relationship classifier.
//!
//! Turns every non-inheritance, non-composition edge into a matching pair
//! of owning/inverse [`RelationField`]s on the two endpoint descriptors.
//! All derived names are pure functions of the two class identifiers plus
//! the edge's per-pair suffix.

use log::debug;

use classforge_core::{identifier::ClassName, model::RelationshipEdge};

use crate::{Resolution, descriptor::RelationField};

/// Apply an association-class edge: both endpoints gain an owning
/// one-to-many to the association class; the association class gains one
/// single-valued, foreign-key-backed reference per endpoint.
pub(crate) fn association_class(
    resolution: &mut Resolution,
    source: &ClassName,
    target: &ClassName,
    assoc: &ClassName,
    suffix: &str,
) {
    debug!(
        source = source.as_str(),
        target = target.as_str(),
        assoc = assoc.as_str();
        "Classifying association-class edge"
    );

    for endpoint in [source, target] {
        let endpoint_lower = format!("{}{suffix}", endpoint.lower());
        let reference = format!("{endpoint_lower}_{}", assoc.lower());

        if let Some(desc) = resolution.descriptor_mut(endpoint) {
            desc.push_relation(RelationField::OneToMany {
                target: assoc.clone(),
                field: format!("{}s{suffix}", assoc.lower()),
                mapped_by: endpoint_lower.clone(),
                reference: reference.clone(),
                composition: false,
            });
        }

        if let Some(desc) = resolution.descriptor_mut(assoc) {
            desc.push_relation(RelationField::ManyToOne {
                target: endpoint.clone(),
                field: endpoint_lower.clone(),
                join_column: format!("{endpoint_lower}_id"),
                reference,
                maps_id: None,
            });
        }
    }
}

/// Classify a generic edge by its cardinality pair.
pub(crate) fn cardinality(
    resolution: &mut Resolution,
    edge: &RelationshipEdge,
    source: &ClassName,
    target: &ClassName,
    suffix: &str,
) {
    // The source end "has many targets" when the *target* cardinality
    // carries the many marker, and vice versa.
    let source_has_many_targets = edge.target_is_many();
    let target_has_many_sources = edge.source_is_many();

    let source_lower = format!("{}{suffix}", source.lower());
    let target_lower = format!("{}{suffix}", target.lower());

    match (source_has_many_targets, target_has_many_sources) {
        (true, true) => {
            // Many-to-many; the edge's declared source owns the join table.
            let reference = format!("{source_lower}_{}", target.lower());
            if let Some(desc) = resolution.descriptor_mut(source) {
                desc.push_relation(RelationField::ManyToManyOwning {
                    target: target.clone(),
                    field: format!("{target_lower}s"),
                    join_table: format!("{source_lower}_{}", target.lower()),
                    join_column: format!("{source_lower}_id"),
                    inverse_join_column: format!("{}_id", target.lower()),
                    reference: reference.clone(),
                });
            }
            if let Some(desc) = resolution.descriptor_mut(target) {
                desc.push_relation(RelationField::ManyToManyInverse {
                    target: source.clone(),
                    field: format!("{source_lower}s"),
                    mapped_by: format!("{target_lower}s"),
                    reference,
                });
            }
        }
        (true, false) => one_to_many(resolution, source, target, suffix),
        (false, true) => one_to_many(resolution, target, source, suffix),
        (false, false) => {
            // One-to-one; the edge's declared source owns the foreign key.
            let reference = format!("{source_lower}_{}", target.lower());
            if let Some(desc) = resolution.descriptor_mut(source) {
                desc.push_relation(RelationField::OneToOneOwning {
                    target: target.clone(),
                    field: target_lower.clone(),
                    join_column: format!("{target_lower}_id"),
                    reference: reference.clone(),
                });
            }
            if let Some(desc) = resolution.descriptor_mut(target) {
                desc.push_relation(RelationField::OneToOneInverse {
                    target: source.clone(),
                    field: source_lower,
                    mapped_by: target_lower,
                    reference,
                });
            }
        }
    }
}

/// The one-to-many/many-to-one pair: `one` gets the collection, `many`
/// gets the single-valued foreign-key field back to `one`.
fn one_to_many(resolution: &mut Resolution, one: &ClassName, many: &ClassName, suffix: &str) {
    let one_lower = format!("{}{suffix}", one.lower());
    let many_lower = format!("{}{suffix}", many.lower());
    let reference = one_lower.clone();

    if let Some(desc) = resolution.descriptor_mut(one) {
        desc.push_relation(RelationField::OneToMany {
            target: many.clone(),
            field: format!("{many_lower}s"),
            mapped_by: one_lower.clone(),
            reference: reference.clone(),
            composition: false,
        });
    }
    if let Some(desc) = resolution.descriptor_mut(many) {
        desc.push_relation(RelationField::ManyToOne {
            target: one.clone(),
            field: one_lower.clone(),
            join_column: format!("{one_lower}_id"),
            reference,
            maps_id: None,
        });
    }
}
