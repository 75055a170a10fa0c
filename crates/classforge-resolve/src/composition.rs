//! The composition resolver.
//!
//! A composition edge (source = whole, target = part) gives the whole an
//! owning collection with cascading delete and orphan removal, and replaces
//! the part's identity with a synthesized composite id: a reference to the
//! whole's identifier plus the part's own original identifier type. The
//! part's back reference to the whole feeds the composite id via `@MapsId`.

use log::debug;

use classforge_core::{
    identifier::ClassName,
    model::{AttrType, Attribute},
};

use crate::{
    Resolution, ResolveError,
    descriptor::{CompositeId, RelationField},
};

/// Apply one composition edge.
///
/// # Errors
///
/// Returns [`ResolveError::CompositionConflict`] when the part already
/// carries a composite identity from an earlier composition edge; at most
/// one scheme is retained per class and the conflict is not resolved
/// silently.
pub(crate) fn apply(
    resolution: &mut Resolution,
    whole: &ClassName,
    part: &ClassName,
    suffix: &str,
) -> Result<(), ResolveError> {
    debug!(
        whole = whole.as_str(),
        part = part.as_str();
        "Resolving composition edge"
    );

    let whole_lower = format!("{}{suffix}", whole.lower());
    let reference = format!("{whole_lower}_composition");

    if let Some(desc) = resolution.descriptor_mut(whole) {
        desc.push_relation(RelationField::OneToMany {
            target: part.clone(),
            field: format!("{}s{suffix}", part.lower()),
            mapped_by: whole_lower.clone(),
            reference: reference.clone(),
            composition: true,
        });
    }

    let Some(desc) = resolution.descriptor_mut(part) else {
        return Ok(());
    };

    if let Some(existing) = desc.composite_id() {
        return Err(ResolveError::CompositionConflict {
            part: part.clone(),
            first_whole: existing.whole().clone(),
            second_whole: whole.clone(),
        });
    }

    // The part's own identifier keeps its declared type; a part without an
    // `id` attribute gets the 64-bit default.
    let own_id_type = desc
        .attributes()
        .iter()
        .find(|attr| attr.is_id())
        .map(Attribute::attr_type)
        .unwrap_or(AttrType::Long);

    let whole_id_field = format!("{whole_lower}Id");
    desc.set_composite_id(CompositeId::new(
        format!("{part}Id"),
        whole.clone(),
        whole_id_field.clone(),
        own_id_type,
    ));
    desc.push_relation(RelationField::ManyToOne {
        target: whole.clone(),
        field: whole_lower.clone(),
        join_column: format!("{whole_lower}_id"),
        reference,
        maps_id: Some(whole_id_field),
    });

    Ok(())
}
