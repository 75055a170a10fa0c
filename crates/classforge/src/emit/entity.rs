//! Entity artifact rendering.

use std::fmt::Write;

use indexmap::IndexSet;

use classforge_core::model::Attribute;
use classforge_resolve::descriptor::{ClassDescriptor, RelationField};

use crate::config::GeneratorConfig;

/// Imports every entity carries regardless of its relationships.
const BASE_IMPORTS: [&str; 6] = [
    "jakarta.persistence.*",
    "lombok.Data",
    "lombok.NoArgsConstructor",
    "lombok.AllArgsConstructor",
    "com.fasterxml.jackson.annotation.JsonBackReference",
    "com.fasterxml.jackson.annotation.JsonManagedReference",
];

/// Render the JPA entity for one class descriptor.
pub(super) fn render(desc: &ClassDescriptor, config: &GeneratorConfig) -> String {
    let name = desc.name();
    let inheritance = desc.inheritance();

    let mut imports: IndexSet<&str> = BASE_IMPORTS.into_iter().collect();
    if inheritance.is_parent() {
        imports.extend([
            "jakarta.persistence.Inheritance",
            "jakarta.persistence.InheritanceType",
            "jakarta.persistence.DiscriminatorColumn",
            "jakarta.persistence.DiscriminatorType",
            "jakarta.persistence.DiscriminatorValue",
        ]);
    }
    if inheritance.is_child() {
        imports.extend([
            "jakarta.persistence.DiscriminatorValue",
            "jakarta.persistence.PrimaryKeyJoinColumn",
        ]);
    }
    imports.extend(desc.imports().iter().copied());

    let mut fields: Vec<String> = Vec::new();

    // Primary key: inheritance children inherit the parent's key;
    // composition parts carry the embedded composite identity instead.
    if !inheritance.is_child() {
        if let Some(id) = desc.composite_id() {
            fields.push(format!(
                "    @EmbeddedId\n    private {} id;",
                id.id_class()
            ));
        } else if desc.has_own_id_attribute() {
            fields.push("    @Id\n    private Long id;".to_string());
        } else {
            fields.push(
                "    @Id\n    @GeneratedValue(strategy = GenerationType.IDENTITY)\n    private Long id;"
                    .to_string(),
            );
        }
    }

    for attr in desc.attributes().iter().filter(|a| !a.is_id()) {
        fields.push(render_attribute(attr));
    }

    for relation in desc.relations() {
        fields.push(render_relation(relation));
    }

    let mut annotations: Vec<String> = Vec::new();
    if inheritance.is_parent() {
        annotations.push("@Inheritance(strategy = InheritanceType.JOINED)".to_string());
        annotations.push(format!(
            "@DiscriminatorColumn(name = \"{}\", discriminatorType = DiscriminatorType.STRING, length = 1)",
            config.discriminator_column()
        ));
        // Rows persisted as the parent type itself get the parent's own
        // default discriminator value.
        annotations.push(format!("@DiscriminatorValue(\"{}\")", name.initial()));
    }
    if let Some(discriminator) = inheritance.discriminator() {
        annotations.push(format!("@DiscriminatorValue(\"{discriminator}\")"));
        annotations.push("@PrimaryKeyJoinColumn(name = \"id\")".to_string());
    }

    let extends = match inheritance.parent() {
        Some(parent) => format!(" extends {parent}"),
        None => String::new(),
    };

    let mut out = String::new();
    let _ = writeln!(out, "package {}.model;", config.base_package());
    let _ = writeln!(out);
    for import in &imports {
        let _ = writeln!(out, "import {import};");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "@Data");
    let _ = writeln!(out, "@NoArgsConstructor");
    let _ = writeln!(out, "@AllArgsConstructor");
    let _ = writeln!(out, "@Entity");
    for annotation in &annotations {
        let _ = writeln!(out, "{annotation}");
    }
    let _ = writeln!(out, "public class {name}{extends} {{");
    let _ = write!(out, "{}", fields.join("\n\n"));
    let _ = writeln!(out);
    let _ = writeln!(out, "}}");
    out
}

fn render_attribute(attr: &Attribute) -> String {
    format!(
        "    private {} {};",
        attr.attr_type().java_type(),
        attr.name()
    )
}

fn render_relation(relation: &RelationField) -> String {
    match relation {
        RelationField::OneToMany {
            target,
            field,
            mapped_by,
            reference,
            composition: false,
        } => format!(
            "    @OneToMany(mappedBy = \"{mapped_by}\")\n    @JsonManagedReference(\"{reference}\")\n    private List<{target}> {field};"
        ),
        RelationField::OneToMany {
            target,
            field,
            mapped_by,
            reference,
            composition: true,
        } => format!(
            "    @OneToMany(mappedBy = \"{mapped_by}\", cascade = CascadeType.ALL, orphanRemoval = true)\n    @JsonManagedReference(\"{reference}\")\n    private List<{target}> {field};"
        ),
        RelationField::ManyToOne {
            target,
            field,
            join_column,
            reference,
            maps_id: None,
        } => format!(
            "    @ManyToOne\n    @JoinColumn(name = \"{join_column}\")\n    @JsonBackReference(\"{reference}\")\n    private {target} {field};"
        ),
        RelationField::ManyToOne {
            target,
            field,
            join_column,
            reference,
            maps_id: Some(maps_id),
        } => format!(
            "    @ManyToOne(optional = false)\n    @MapsId(\"{maps_id}\")\n    @JoinColumn(name = \"{join_column}\")\n    @JsonBackReference(\"{reference}\")\n    private {target} {field};"
        ),
        RelationField::ManyToManyOwning {
            target,
            field,
            join_table,
            join_column,
            inverse_join_column,
            reference,
        } => format!(
            "    @ManyToMany\n    @JoinTable(name = \"{join_table}\", joinColumns = @JoinColumn(name = \"{join_column}\"), inverseJoinColumns = @JoinColumn(name = \"{inverse_join_column}\"))\n    @JsonManagedReference(\"{reference}\")\n    private List<{target}> {field};"
        ),
        RelationField::ManyToManyInverse {
            target,
            field,
            mapped_by,
            reference,
        } => format!(
            "    @ManyToMany(mappedBy = \"{mapped_by}\")\n    @JsonBackReference(\"{reference}\")\n    private List<{target}> {field};"
        ),
        RelationField::OneToOneOwning {
            target,
            field,
            join_column,
            reference,
        } => format!(
            "    @OneToOne\n    @JoinColumn(name = \"{join_column}\")\n    @JsonManagedReference(\"{reference}\")\n    private {target} {field};"
        ),
        RelationField::OneToOneInverse {
            target,
            field,
            mapped_by,
            reference,
        } => format!(
            "    @OneToOne(mappedBy = \"{mapped_by}\")\n    @JsonBackReference(\"{reference}\")\n    private {target} {field};"
        ),
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::GeneratorConfig, emit::tests::resolution_of};

    use super::render;

    #[test]
    fn plain_entity_declares_a_generated_key() {
        let resolution = resolution_of(
            r#"{"nodes": [{"id": "u", "data": {"label": "User", "attributes": [
                {"id": "a", "name": "age", "type": "int"},
                {"id": "b", "name": "name", "type": "string"}
            ]}}], "edges": []}"#,
        );
        let desc = resolution.descriptors().next().unwrap();
        let source = render(desc, &GeneratorConfig::default());

        assert!(source.starts_with("package com.example.demo.model;\n"));
        assert!(source.contains("@GeneratedValue(strategy = GenerationType.IDENTITY)"));
        assert!(source.contains("    private Integer age;"));
        assert!(source.contains("    private String name;"));
        assert!(source.contains("public class User {"));
    }

    #[test]
    fn declared_id_attribute_suppresses_generation() {
        let resolution = resolution_of(
            r#"{"nodes": [{"id": "u", "data": {"label": "User", "attributes": [
                {"id": "a", "name": "id", "type": "long"}
            ]}}], "edges": []}"#,
        );
        let desc = resolution.descriptors().next().unwrap();
        let source = render(desc, &GeneratorConfig::default());

        assert!(source.contains("    @Id\n    private Long id;"));
        assert!(!source.contains("@GeneratedValue"));
        // The id attribute is the key, not a second plain field.
        assert_eq!(source.matches("private Long id;").count(), 1);
    }

    #[test]
    fn composition_part_replaces_its_key_with_the_embedded_id() {
        let resolution = resolution_of(
            r#"{
                "nodes": [
                    {"id": "o", "data": {"label": "Order"}},
                    {"id": "l", "data": {"label": "LineItem", "attributes": [
                        {"id": "a", "name": "id", "type": "int"}
                    ]}}
                ],
                "edges": [{"source": "o", "target": "l", "data": {"type": "composition"}}]
            }"#,
        );
        let config = GeneratorConfig::default();

        let whole = resolution.descriptors().next().unwrap();
        let whole_source = render(whole, &config);
        assert!(whole_source.contains(
            "@OneToMany(mappedBy = \"order\", cascade = CascadeType.ALL, orphanRemoval = true)"
        ));
        assert!(whole_source.contains("private List<LineItem> lineItems;"));

        let part = resolution.descriptors().nth(1).unwrap();
        let part_source = render(part, &config);
        assert!(part_source.contains("    @EmbeddedId\n    private LineItemId id;"));
        assert!(!part_source.contains("@GeneratedValue"));
        assert!(part_source.contains("@MapsId(\"orderId\")"));
        assert!(part_source.contains("@ManyToOne(optional = false)"));
        assert!(part_source.contains("@JoinColumn(name = \"order_id\")"));
    }

    #[test]
    fn inheritance_parent_and_child_annotations() {
        let resolution = resolution_of(
            r#"{
                "nodes": [
                    {"id": "v", "data": {"label": "Vehicle"}},
                    {"id": "c", "data": {"label": "Car"}}
                ],
                "edges": [{"source": "v", "target": "c", "data": {"type": "inheritance"}}]
            }"#,
        );
        let config = GeneratorConfig::default();

        let parent = resolution.descriptors().next().unwrap();
        let parent_source = render(parent, &config);
        assert!(parent_source.contains("@Inheritance(strategy = InheritanceType.JOINED)"));
        assert!(parent_source.contains(
            "@DiscriminatorColumn(name = \"subtype\", discriminatorType = DiscriminatorType.STRING, length = 1)"
        ));
        assert!(parent_source.contains("@DiscriminatorValue(\"V\")"));
        assert!(parent_source.contains("public class Vehicle {"));

        let child = resolution.descriptors().nth(1).unwrap();
        let child_source = render(child, &config);
        assert!(child_source.contains("@DiscriminatorValue(\"C\")"));
        assert!(child_source.contains("@PrimaryKeyJoinColumn(name = \"id\")"));
        assert!(child_source.contains("public class Car extends Vehicle {"));
        // The key is inherited from the parent.
        assert!(!child_source.contains("@Id"));
        assert!(!child_source.contains("@EmbeddedId"));
    }
}
