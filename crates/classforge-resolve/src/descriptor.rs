//! Emission-ready class descriptors.
//!
//! The resolver's output is one [`ClassDescriptor`] per class: the
//! sanitized name, the declared attributes, an ordered list of typed
//! [`RelationField`]s, the deduplicated import set those fields require,
//! and inheritance/composite-identity metadata. Descriptors carry no
//! formatting; rendering them into Java source is the emitter's job.

use indexmap::IndexSet;

use classforge_core::{
    identifier::ClassName,
    model::{AttrType, Attribute},
};

/// A fully-qualified Java import symbol.
pub type Import = &'static str;

/// One relationship field on a class, typed by its JPA shape.
///
/// `field` names are derived from the related class's identifier
/// (lower-cased first letter), already carrying any duplicate-relationship
/// suffix. `reference` is the managed/back reference tag shared by both
/// sides of the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationField {
    /// Collection side of a one-to-many, mapped by the single-valued field
    /// on the other class. `composition` adds cascading delete and orphan
    /// removal.
    OneToMany {
        target: ClassName,
        field: String,
        mapped_by: String,
        reference: String,
        composition: bool,
    },

    /// Single-valued side holding the foreign key. `maps_id` is set for
    /// composition parts, where the foreign key also feeds the embedded
    /// identity.
    ManyToOne {
        target: ClassName,
        field: String,
        join_column: String,
        reference: String,
        maps_id: Option<String>,
    },

    /// Owning side of a many-to-many with its join table.
    ManyToManyOwning {
        target: ClassName,
        field: String,
        join_table: String,
        join_column: String,
        inverse_join_column: String,
        reference: String,
    },

    /// Non-owning mirror of a many-to-many.
    ManyToManyInverse {
        target: ClassName,
        field: String,
        mapped_by: String,
        reference: String,
    },

    /// Owning side of a one-to-one with its foreign-key column.
    OneToOneOwning {
        target: ClassName,
        field: String,
        join_column: String,
        reference: String,
    },

    /// Non-owning mirror of a one-to-one.
    OneToOneInverse {
        target: ClassName,
        field: String,
        mapped_by: String,
        reference: String,
    },
}

impl RelationField {
    /// Import symbols this field requires in the entity source.
    pub fn imports(&self) -> &'static [Import] {
        match self {
            Self::OneToMany {
                composition: false, ..
            } => &[
                "java.util.List",
                "jakarta.persistence.OneToMany",
                "com.fasterxml.jackson.annotation.JsonManagedReference",
            ],
            Self::OneToMany {
                composition: true, ..
            } => &[
                "java.util.List",
                "jakarta.persistence.OneToMany",
                "jakarta.persistence.CascadeType",
                "com.fasterxml.jackson.annotation.JsonManagedReference",
            ],
            Self::ManyToOne { maps_id: None, .. } => &[
                "jakarta.persistence.ManyToOne",
                "jakarta.persistence.JoinColumn",
                "com.fasterxml.jackson.annotation.JsonBackReference",
            ],
            Self::ManyToOne {
                maps_id: Some(_), ..
            } => &[
                "jakarta.persistence.ManyToOne",
                "jakarta.persistence.JoinColumn",
                "jakarta.persistence.MapsId",
                "jakarta.persistence.EmbeddedId",
                "com.fasterxml.jackson.annotation.JsonBackReference",
            ],
            Self::ManyToManyOwning { .. } => &[
                "java.util.List",
                "jakarta.persistence.ManyToMany",
                "jakarta.persistence.JoinTable",
                "jakarta.persistence.JoinColumn",
                "com.fasterxml.jackson.annotation.JsonManagedReference",
            ],
            Self::ManyToManyInverse { .. } => &[
                "java.util.List",
                "jakarta.persistence.ManyToMany",
                "com.fasterxml.jackson.annotation.JsonBackReference",
            ],
            Self::OneToOneOwning { .. } => &[
                "jakarta.persistence.OneToOne",
                "jakarta.persistence.JoinColumn",
                "com.fasterxml.jackson.annotation.JsonManagedReference",
            ],
            Self::OneToOneInverse { .. } => &[
                "jakarta.persistence.OneToOne",
                "com.fasterxml.jackson.annotation.JsonBackReference",
            ],
        }
    }

    /// The field name as emitted.
    pub fn field_name(&self) -> &str {
        match self {
            Self::OneToMany { field, .. }
            | Self::ManyToOne { field, .. }
            | Self::ManyToManyOwning { field, .. }
            | Self::ManyToManyInverse { field, .. }
            | Self::OneToOneOwning { field, .. }
            | Self::OneToOneInverse { field, .. } => field,
        }
    }
}

/// Inheritance metadata for one class.
///
/// A class can be a parent and a child at the same time in multi-level
/// hierarchies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InheritanceRole {
    is_parent: bool,
    parent: Option<ClassName>,
    discriminator: Option<char>,
}

impl InheritanceRole {
    /// Whether any inheritance edge points away from this class.
    pub fn is_parent(&self) -> bool {
        self.is_parent
    }

    /// Whether this class inherits from another.
    pub fn is_child(&self) -> bool {
        self.parent.is_some()
    }

    /// The resolved parent class, for children.
    pub fn parent(&self) -> Option<&ClassName> {
        self.parent.as_ref()
    }

    /// Discriminator value, for children: the upper-cased first character
    /// of the child's own identifier. Sibling collisions are not detected.
    pub fn discriminator(&self) -> Option<char> {
        self.discriminator
    }

    pub(crate) fn mark_parent(&mut self) {
        self.is_parent = true;
    }

    pub(crate) fn set_parent(&mut self, parent: ClassName, discriminator: char) {
        self.parent = Some(parent);
        self.discriminator = Some(discriminator);
    }
}

/// Synthesized composite identity for a composition part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeId {
    id_class: String,
    whole: ClassName,
    whole_id_field: String,
    own_id_type: AttrType,
}

impl CompositeId {
    pub(crate) fn new(
        id_class: String,
        whole: ClassName,
        whole_id_field: String,
        own_id_type: AttrType,
    ) -> Self {
        Self {
            id_class,
            whole,
            whole_id_field,
            own_id_type,
        }
    }

    /// Name of the `@Embeddable` identity class, e.g. `LineItemId`.
    pub fn id_class(&self) -> &str {
        &self.id_class
    }

    /// The owning "whole" class.
    pub fn whole(&self) -> &ClassName {
        &self.whole
    }

    /// Field holding the whole's identifier inside the embedded id, e.g.
    /// `orderId`. Also the `@MapsId` target on the part's reference field.
    pub fn whole_id_field(&self) -> &str {
        &self.whole_id_field
    }

    /// The part's own original identifier type.
    pub fn own_id_type(&self) -> AttrType {
        self.own_id_type
    }
}

/// The fully-resolved, emission-ready representation of one class.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    name: ClassName,
    attributes: Vec<Attribute>,
    relations: Vec<RelationField>,
    imports: IndexSet<Import>,
    inheritance: InheritanceRole,
    composite_id: Option<CompositeId>,
}

impl ClassDescriptor {
    pub(crate) fn new(name: ClassName, attributes: Vec<Attribute>) -> Self {
        Self {
            name,
            attributes,
            relations: Vec::new(),
            imports: IndexSet::new(),
            inheritance: InheritanceRole::default(),
            composite_id: None,
        }
    }

    /// Class identifier.
    pub fn name(&self) -> &ClassName {
        &self.name
    }

    /// Declared attributes in document order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Relationship fields in edge-processing order.
    pub fn relations(&self) -> &[RelationField] {
        &self.relations
    }

    /// Import symbols required by the relationship fields, deduplicated,
    /// in first-use order.
    pub fn imports(&self) -> &IndexSet<Import> {
        &self.imports
    }

    /// Inheritance metadata.
    pub fn inheritance(&self) -> &InheritanceRole {
        &self.inheritance
    }

    /// Composite identity, for composition parts.
    pub fn composite_id(&self) -> Option<&CompositeId> {
        self.composite_id.as_ref()
    }

    /// Whether the class declares its own `id` attribute.
    pub fn has_own_id_attribute(&self) -> bool {
        self.attributes.iter().any(Attribute::is_id)
    }

    pub(crate) fn push_relation(&mut self, relation: RelationField) {
        self.imports.extend(relation.imports().iter().copied());
        self.relations.push(relation);
    }

    pub(crate) fn inheritance_mut(&mut self) -> &mut InheritanceRole {
        &mut self.inheritance
    }

    pub(crate) fn set_composite_id(&mut self, id: CompositeId) {
        self.composite_id = Some(id);
    }
}
