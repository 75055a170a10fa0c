//! CLI logic for the Classforge project generator.
//!
//! This module contains the core CLI logic for the Classforge project
//! generator.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io, path::Path};

use log::info;

use classforge::{ClassforgeError, ProjectBuilder};

/// Run the Classforge CLI application
///
/// This function loads the input diagram, generates the backend project,
/// and writes it either as a zip archive or into a project directory.
/// When requested, it also writes a request collection for the generated
/// endpoints.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ClassforgeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Model loading errors
/// - Relationship resolution conflicts
/// - Archiving errors
pub fn run(args: &Args) -> Result<(), ClassforgeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Generating project"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process the diagram using the ProjectBuilder API
    let builder = ProjectBuilder::new(app_config);
    let model = builder.load(&source)?;

    match &args.project_dir {
        Some(dir) => {
            let written = builder.generate(&model, Path::new(dir))?;
            info!(project_dir = dir, files = written; "Project generated");
        }
        None => {
            let mut archive = builder.generate_archive(&model)?;
            let mut file = fs::File::create(&args.output)?;
            io::copy(&mut archive, &mut file)?;
            info!(
                output_file = args.output,
                entries = archive.entries(),
                bytes = archive.len();
                "Archive written"
            );
        }
    }

    if let Some(collection_path) = &args.collection {
        let doc = builder.request_collection(&model)?;
        fs::write(collection_path, serde_json::to_string_pretty(&doc)?)?;
        info!(collection_file = collection_path; "Request collection written");
    }

    Ok(())
}
