//! Name and attribute lookup tables over a validated model.
//!
//! The resolver and both emitters work in terms of class identifiers, not
//! node ids. [`NameTable`] is the bridge: `node id → ClassName`,
//! `ClassName → attributes`, plus the set of association-class names.
//! Iteration order follows document order so downstream output is
//! deterministic.

use indexmap::{IndexMap, IndexSet};
use log::warn;

use crate::{
    identifier::ClassName,
    model::{Attribute, DiagramModel},
};

/// Lookup tables derived from one [`DiagramModel`].
#[derive(Debug, Clone)]
pub struct NameTable {
    by_node_id: IndexMap<String, ClassName>,
    attributes: IndexMap<ClassName, Vec<Attribute>>,
    association_classes: IndexSet<ClassName>,
}

impl NameTable {
    /// Build the tables from a validated model.
    ///
    /// When two labels sanitize to the same identifier the later node's
    /// attributes overwrite the earlier node's, matching the file-level
    /// last-writer-wins behavior of generation.
    pub fn build(model: &DiagramModel) -> Self {
        let mut by_node_id = IndexMap::new();
        let mut attributes = IndexMap::new();
        let mut association_classes = IndexSet::new();

        for node in model.nodes() {
            by_node_id.insert(node.id().to_string(), node.name().clone());
            if attributes
                .insert(node.name().clone(), node.attributes().to_vec())
                .is_some()
            {
                warn!(
                    class = node.name().as_str(),
                    node = node.id();
                    "Duplicate class identifier, keeping the later node's attributes"
                );
            }
            if node.is_association_class() {
                association_classes.insert(node.name().clone());
            }
        }

        Self {
            by_node_id,
            attributes,
            association_classes,
        }
    }

    /// Resolve a node id to its class identifier.
    pub fn class_of(&self, node_id: &str) -> Option<&ClassName> {
        self.by_node_id.get(node_id)
    }

    /// Attributes of a class, empty when unknown.
    pub fn attributes_of(&self, name: &ClassName) -> &[Attribute] {
        self.attributes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All class identifiers in document order.
    pub fn class_names(&self) -> impl Iterator<Item = &ClassName> {
        self.attributes.keys()
    }

    /// Whether the given class is flagged as an association class.
    pub fn is_association_class(&self, name: &ClassName) -> bool {
        self.association_classes.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::{document::ModelDocument, model::DiagramModel};

    use super::NameTable;

    #[test]
    fn builds_tables_in_document_order() {
        let doc: ModelDocument = serde_json::from_str(
            r#"{
                "nodes": [
                    {"id": "n2", "data": {"label": "Product"}},
                    {"id": "n1", "data": {"label": "User", "attributes": [
                        {"id": "a", "name": "id", "type": "long"}
                    ]}},
                    {"id": "n3", "data": {"label": "Purchase", "isAssociationClass": true}}
                ],
                "edges": []
            }"#,
        )
        .expect("valid json");
        let model = DiagramModel::from_document(doc).expect("valid model");
        let table = NameTable::build(&model);

        let names: Vec<_> = table.class_names().map(|n| n.as_str()).collect();
        assert_eq!(names, ["Product", "User", "Purchase"]);

        let user = table.class_of("n1").expect("resolves");
        assert_eq!(user.as_str(), "User");
        assert_eq!(table.attributes_of(user).len(), 1);
        assert!(table.is_association_class(table.class_of("n3").unwrap()));
        assert!(!table.is_association_class(user));
        assert!(table.class_of("missing").is_none());
    }

    #[test]
    fn colliding_identifiers_keep_the_later_nodes_attributes() {
        let doc: ModelDocument = serde_json::from_str(
            r#"{
                "nodes": [
                    {"id": "n1", "data": {"label": "Order!", "attributes": [
                        {"id": "a", "name": "id", "type": "long"}
                    ]}},
                    {"id": "n2", "data": {"label": "order", "attributes": [
                        {"id": "b", "name": "total", "type": "double"},
                        {"id": "c", "name": "note", "type": "string"}
                    ]}}
                ],
                "edges": []
            }"#,
        )
        .expect("valid json");
        let model = DiagramModel::from_document(doc).expect("valid model");
        let table = NameTable::build(&model);

        // Both labels sanitize to `Order`; one class, last writer wins.
        assert_eq!(table.class_names().count(), 1);
        let order = table.class_of("n1").expect("resolves");
        assert_eq!(table.class_of("n2"), Some(order));
        let attrs: Vec<_> = table.attributes_of(order).iter().map(|a| a.name()).collect();
        assert_eq!(attrs, ["total", "note"]);
    }
}
