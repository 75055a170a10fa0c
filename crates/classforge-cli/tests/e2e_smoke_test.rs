use std::fs;

use tempfile::tempdir;

use classforge_cli::{Args, run};

const DIAGRAM: &str = r#"{
    "nodes": [
        {"id": "c", "data": {"label": "Customer", "attributes": [
            {"id": "a1", "name": "id", "type": "long"},
            {"id": "a2", "name": "name", "type": "string"}
        ]}},
        {"id": "o", "data": {"label": "Order"}}
    ],
    "edges": [
        {"source": "c", "target": "o", "data": {
            "sourceCardinality": "1", "targetCardinality": "*"
        }}
    ]
}"#;

fn args_for(input: &str, output: &str) -> Args {
    Args {
        input: input.to_string(),
        output: output.to_string(),
        project_dir: None,
        collection: None,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_zip_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("diagram.json");
    fs::write(&input, DIAGRAM).expect("Failed to write diagram");
    let output = temp_dir.path().join("project.zip");

    let args = args_for(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
    );
    run(&args).expect("Generation should succeed");

    let bytes = fs::read(&output).expect("Output zip should exist");
    assert!(!bytes.is_empty(), "Output zip should not be empty");
    // Zip local-file-header magic
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn e2e_smoke_test_project_dir_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("diagram.json");
    fs::write(&input, DIAGRAM).expect("Failed to write diagram");
    let project_dir = temp_dir.path().join("generated");

    let mut args = args_for(&input.to_string_lossy(), "unused.zip");
    args.project_dir = Some(project_dir.to_string_lossy().to_string());
    run(&args).expect("Generation should succeed");

    let base = project_dir.join("src/main/java/com/example/demo");
    assert!(base.join("model/Customer.java").is_file());
    assert!(base.join("controller/OrderController.java").is_file());
}

#[test]
fn e2e_smoke_test_collection_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("diagram.json");
    fs::write(&input, DIAGRAM).expect("Failed to write diagram");
    let output = temp_dir.path().join("project.zip");
    let collection = temp_dir.path().join("requests.json");

    let mut args = args_for(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
    );
    args.collection = Some(collection.to_string_lossy().to_string());
    run(&args).expect("Generation should succeed");

    let content = fs::read_to_string(&collection).expect("Collection should exist");
    assert!(content.contains("Get All Customers"));
    assert!(content.contains("{{baseUrl}}"));
}

#[test]
fn e2e_smoke_test_invalid_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("diagram.json");
    fs::write(&input, "not json at all").expect("Failed to write diagram");
    let output = temp_dir.path().join("project.zip");

    let args = args_for(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
    );
    assert!(run(&args).is_err(), "Invalid input should fail");
    assert!(!output.exists(), "No output should be written on failure");
}

#[test]
fn e2e_smoke_test_missing_input_fails() {
    let args = args_for("/definitely/not/a/diagram.json", "out.zip");
    assert!(run(&args).is_err(), "Missing input should fail");
}
