//! Request-collection emission.
//!
//! An independent consumer of the name table: for every class it emits one
//! group of list/get/create/update/delete requests in the Postman v2.1
//! collection format, with example bodies synthesized from the class's
//! attribute type tags. Relationships are deliberately ignored here.

use serde_json::{Map, Value, json};

use classforge_core::{
    identifier::ClassName,
    lookup::NameTable,
    model::{AttrType, Attribute},
};

use crate::config::CollectionConfig;

const SCHEMA_URL: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Build the request-collection document for a model's classes.
///
/// # Errors
///
/// Returns a JSON error only if an example body fails to serialize, which
/// does not happen for bodies built from attribute tags.
pub fn build(table: &NameTable, config: &CollectionConfig) -> Result<Value, serde_json::Error> {
    let mut items = Vec::new();
    for name in table.class_names() {
        items.extend(class_items(name, table.attributes_of(name))?);
    }

    Ok(json!({
        "info": {
            "name": config.name(),
            "description": "Request collection generated from the class diagram",
            "schema": SCHEMA_URL,
        },
        "item": items,
        "variable": [
            {
                "key": "baseUrl",
                "value": config.base_url(),
                "type": "string",
            }
        ],
    }))
}

/// The five requests covering one class's endpoints.
fn class_items(name: &ClassName, attributes: &[Attribute]) -> Result<Vec<Value>, serde_json::Error> {
    let lower = name.lower();
    let endpoint = format!("/api/{lower}");
    let id_variable = format!("{{{{{lower}Id}}}}");
    let example_body = serde_json::to_string_pretty(&example_body(attributes))?;

    let accept = json!([{"key": "Accept", "value": "application/json"}]);
    let content_and_accept = json!([
        {"key": "Content-Type", "value": "application/json"},
        {"key": "Accept", "value": "application/json"}
    ]);
    let base_path = vec!["api".to_string(), lower.clone()];
    let mut id_path = base_path.clone();
    id_path.push(id_variable.clone());

    Ok(vec![
        json!({
            "name": format!("Get All {name}s"),
            "request": {
                "method": "GET",
                "header": accept.clone(),
                "url": {
                    "raw": format!("{{{{baseUrl}}}}{endpoint}"),
                    "host": ["{{baseUrl}}"],
                    "path": base_path.clone(),
                },
                "description": format!("Fetch every {name} record"),
            },
            "response": [],
        }),
        json!({
            "name": format!("Get {name} by ID"),
            "request": {
                "method": "GET",
                "header": accept.clone(),
                "url": {
                    "raw": format!("{{{{baseUrl}}}}{endpoint}/{id_variable}"),
                    "host": ["{{baseUrl}}"],
                    "path": id_path.clone(),
                },
                "description": format!("Fetch a single {name} by its id"),
            },
            "response": [],
        }),
        json!({
            "name": format!("Create {name}"),
            "request": {
                "method": "POST",
                "header": content_and_accept.clone(),
                "body": {"mode": "raw", "raw": example_body.clone()},
                "url": {
                    "raw": format!("{{{{baseUrl}}}}{endpoint}"),
                    "host": ["{{baseUrl}}"],
                    "path": base_path.clone(),
                },
                "description": format!("Create a new {name}"),
            },
            "response": [],
        }),
        json!({
            "name": format!("Update {name}"),
            "request": {
                "method": "PUT",
                "header": content_and_accept.clone(),
                "body": {"mode": "raw", "raw": example_body.clone()},
                "url": {
                    "raw": format!("{{{{baseUrl}}}}{endpoint}/{id_variable}"),
                    "host": ["{{baseUrl}}"],
                    "path": id_path.clone(),
                },
                "description": format!("Update an existing {name}"),
            },
            "response": [],
        }),
        json!({
            "name": format!("Delete {name}"),
            "request": {
                "method": "DELETE",
                "header": accept.clone(),
                "url": {
                    "raw": format!("{{{{baseUrl}}}}{endpoint}/{id_variable}"),
                    "host": ["{{baseUrl}}"],
                    "path": id_path.clone(),
                },
                "description": format!("Delete a {name} by its id"),
            },
            "response": [],
        }),
    ])
}

/// Example request body: identifier fields get a fixed id, numeric tags
/// fixed example numbers, everything else a synthesized example string.
fn example_body(attributes: &[Attribute]) -> Value {
    let mut body = Map::new();
    for attr in attributes {
        body.insert(attr.name().to_string(), example_value(attr));
    }
    Value::Object(body)
}

fn example_value(attr: &Attribute) -> Value {
    if attr.is_id() {
        return json!(1);
    }
    match attr.attr_type() {
        AttrType::Int => json!(123),
        AttrType::Long => json!(123_456_789),
        other => json!(format!("Example{}", other.display_tag())),
    }
}
