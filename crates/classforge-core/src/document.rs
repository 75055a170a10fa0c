//! Raw diagram-model document as produced by the editor frontend.
//!
//! This is the loosely-typed wire shape: node payloads live under a `data`
//! object, edge kinds may appear either under `data.type` or as a legacy
//! top-level `type`, and every field that editors have historically omitted
//! is optional. Validation into the typed model happens in
//! [`crate::model::DiagramModel::from_document`].

use serde::Deserialize;

/// Top-level diagram document: `{ nodes, edges, metadata }`.
///
/// Unknown fields (including `metadata`, which generation never reads) are
/// ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelDocument {
    /// Class nodes.
    #[serde(default)]
    pub nodes: Vec<NodeDocument>,

    /// Relationship edges.
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

/// A raw class node: `{ id, data: { label, attributes, ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeDocument {
    /// Node id, unique within a document.
    pub id: String,

    /// Node payload.
    pub data: NodePayload,
}

/// The `data` object of a node.
#[derive(Debug, Clone, Deserialize)]
pub struct NodePayload {
    /// Free-text display label.
    pub label: String,

    /// Declared attributes, possibly empty or absent.
    #[serde(default)]
    pub attributes: Vec<AttributeDocument>,

    /// Whether this class realizes the attributes of an association.
    #[serde(default, rename = "isAssociationClass")]
    pub is_association_class: bool,
}

/// A raw attribute: `{ id, name, type, visibility }`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeDocument {
    /// Attribute id within the node.
    #[serde(default)]
    pub id: String,

    /// Attribute name, emitted verbatim as a field name.
    pub name: String,

    /// Semantic type tag (`int`, `long`, `string`, ...). Unknown tags fall
    /// back to the text type during validation.
    #[serde(default, rename = "type")]
    pub attr_type: String,

    /// Declared visibility; carried but unused by generation.
    #[serde(default)]
    pub visibility: Option<String>,
}

/// A raw relationship edge.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDocument {
    /// Edge id.
    #[serde(default)]
    pub id: String,

    /// Source node id.
    pub source: String,

    /// Target node id.
    pub target: String,

    /// Edge payload. Absent for plain untyped connections.
    #[serde(default)]
    pub data: Option<EdgePayload>,

    /// Legacy location for the edge kind, used when `data.type` is absent.
    #[serde(default, rename = "type")]
    pub legacy_kind: Option<String>,
}

impl EdgeDocument {
    /// The effective kind string: `data.type` first, then the legacy
    /// top-level `type`.
    pub fn kind_str(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.kind.as_deref())
            .or(self.legacy_kind.as_deref())
    }
}

/// The `data` object of an edge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EdgePayload {
    /// Relationship kind tag.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Display label.
    #[serde(default)]
    pub label: Option<String>,

    /// Cardinality shown at the source end, e.g. `1` or `0..*`.
    #[serde(default, rename = "sourceCardinality")]
    pub source_cardinality: Option<String>,

    /// Cardinality shown at the target end.
    #[serde(default, rename = "targetCardinality")]
    pub target_cardinality: Option<String>,

    /// Node id of an association class attached to this edge.
    #[serde(default, rename = "associationClass")]
    pub association_class: Option<String>,
}
