//! The validated diagram model.
//!
//! [`DiagramModel::from_document`] turns the loosely-typed wire document
//! into a typed graph: every node gets a sanitized [`ClassName`], every
//! edge a closed [`RelationshipKind`]. Attribute type tags are forgiving
//! (unknown tags fall back to [`AttrType::Other`]); everything else that
//! cannot be interpreted fails with a structured [`ModelError`].
//!
//! The model is a read-only value for the duration of one generation
//! request; nothing derived from it is cached across requests.

use std::collections::HashSet;

use crate::{ModelError, document::ModelDocument, identifier::ClassName};

/// Semantic attribute type tag.
///
/// Generation only distinguishes 32-bit integers, 64-bit integers, and
/// text; the remaining tags are kept for the collection emitter's example
/// values and all map to text in emitted entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Int,
    Long,
    Str,
    Boolean,
    Double,
    Float,
    Date,
    Other,
}

impl AttrType {
    /// Interpret a raw type tag. Unknown or empty tags become
    /// [`AttrType::Other`]; this never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "int" | "integer" => Self::Int,
            "long" => Self::Long,
            "string" => Self::Str,
            "boolean" | "bool" => Self::Boolean,
            "double" => Self::Double,
            "float" => Self::Float,
            "date" => Self::Date,
            _ => Self::Other,
        }
    }

    /// The Java type this tag maps to in emitted entities.
    pub fn java_type(self) -> &'static str {
        match self {
            Self::Int => "Integer",
            Self::Long => "Long",
            _ => "String",
        }
    }

    /// Display form used when synthesizing example values, e.g. `Date` in
    /// `"ExampleDate"`.
    pub fn display_tag(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Str => "String",
            Self::Boolean => "Boolean",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Date => "Date",
            Self::Other => "String",
        }
    }
}

/// A validated class attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    name: String,
    attr_type: AttrType,
    visibility: Option<String>,
}

impl Attribute {
    /// Create an attribute from its parts.
    pub fn new(name: String, attr_type: AttrType, visibility: Option<String>) -> Self {
        Self {
            name,
            attr_type,
            visibility,
        }
    }

    /// Attribute name, emitted verbatim.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semantic type tag.
    pub fn attr_type(&self) -> AttrType {
        self.attr_type
    }

    /// Declared visibility, if any.
    pub fn visibility(&self) -> Option<&str> {
        self.visibility.as_deref()
    }

    /// Whether this attribute is the class's own identifier field.
    pub fn is_id(&self) -> bool {
        self.name == "id"
    }
}

/// Closed set of relationship kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    Association,
    Aggregation,
    Composition,
    Inheritance,
    Realization,
    Dependency,
}

impl RelationshipKind {
    /// Interpret a raw kind tag. `None` (an untyped connection) is treated
    /// as a plain association; an unknown tag is a validation error.
    pub fn parse(raw: Option<&str>) -> Result<Self, String> {
        match raw {
            None | Some("association") => Ok(Self::Association),
            Some("aggregation") => Ok(Self::Aggregation),
            Some("composition") => Ok(Self::Composition),
            Some("inheritance") => Ok(Self::Inheritance),
            Some("realization") => Ok(Self::Realization),
            Some("dependency") => Ok(Self::Dependency),
            Some(other) => Err(other.to_string()),
        }
    }
}

/// A validated class node.
#[derive(Debug, Clone)]
pub struct ClassNode {
    id: String,
    name: ClassName,
    attributes: Vec<Attribute>,
    is_association_class: bool,
}

impl ClassNode {
    /// Node id, unique within the model.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sanitized class identifier.
    pub fn name(&self) -> &ClassName {
        &self.name
    }

    /// Declared attributes in document order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Whether this class realizes an association's attributes.
    pub fn is_association_class(&self) -> bool {
        self.is_association_class
    }
}

/// A validated relationship edge.
#[derive(Debug, Clone)]
pub struct RelationshipEdge {
    id: String,
    source: String,
    target: String,
    kind: RelationshipKind,
    source_cardinality: Option<String>,
    target_cardinality: Option<String>,
    label: Option<String>,
    association_class: Option<String>,
}

impl RelationshipEdge {
    /// Edge id (may be empty in legacy documents).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Source node id. For inheritance: the parent; for composition: the
    /// whole.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Target node id. For inheritance: the child; for composition: the
    /// part.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Relationship kind.
    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    /// Display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Node id of the association class attached to this edge, if any.
    pub fn association_class(&self) -> Option<&str> {
        self.association_class.as_deref()
    }

    /// Whether the source end is a "many" end (its cardinality carries the
    /// `*` marker).
    pub fn source_is_many(&self) -> bool {
        is_many(self.source_cardinality.as_deref())
    }

    /// Whether the target end is a "many" end.
    pub fn target_is_many(&self) -> bool {
        is_many(self.target_cardinality.as_deref())
    }
}

fn is_many(cardinality: Option<&str>) -> bool {
    cardinality.is_some_and(|c| c.contains('*'))
}

/// A validated, immutable diagram model.
#[derive(Debug, Clone)]
pub struct DiagramModel {
    nodes: Vec<ClassNode>,
    edges: Vec<RelationshipEdge>,
}

impl DiagramModel {
    /// Validate a raw document into a typed model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] for duplicate node ids, labels that sanitize
    /// to nothing, and unknown relationship kinds. Edges pointing at
    /// missing node ids are *not* rejected here; the resolver drops them
    /// with a warning, leaving every other class unaffected.
    pub fn from_document(doc: ModelDocument) -> Result<Self, ModelError> {
        let mut seen_ids = HashSet::new();
        let mut nodes = Vec::with_capacity(doc.nodes.len());
        for node in doc.nodes {
            if !seen_ids.insert(node.id.clone()) {
                return Err(ModelError::DuplicateNodeId { id: node.id });
            }
            let name = ClassName::sanitize(&node.data.label).ok_or_else(|| {
                ModelError::UnusableLabel {
                    node_id: node.id.clone(),
                    label: node.data.label.clone(),
                }
            })?;
            let attributes = node
                .data
                .attributes
                .into_iter()
                .map(|attr| {
                    Attribute::new(attr.name, AttrType::parse(&attr.attr_type), attr.visibility)
                })
                .collect();
            nodes.push(ClassNode {
                id: node.id,
                name,
                attributes,
                is_association_class: node.data.is_association_class,
            });
        }

        let mut edges = Vec::with_capacity(doc.edges.len());
        for edge in doc.edges {
            let kind = RelationshipKind::parse(edge.kind_str()).map_err(|kind| {
                ModelError::UnknownRelationshipKind {
                    edge_id: edge.id.clone(),
                    kind,
                }
            })?;
            let data = edge.data.unwrap_or_default();
            edges.push(RelationshipEdge {
                id: edge.id,
                source: edge.source,
                target: edge.target,
                kind,
                source_cardinality: data.source_cardinality,
                target_cardinality: data.target_cardinality,
                label: data.label,
                association_class: data.association_class,
            });
        }

        Ok(Self { nodes, edges })
    }

    /// Class nodes in document order.
    pub fn nodes(&self) -> &[ClassNode] {
        &self.nodes
    }

    /// Relationship edges in document order.
    pub fn edges(&self) -> &[RelationshipEdge] {
        &self.edges
    }
}
