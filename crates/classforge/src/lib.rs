//! Classforge - a backend-project generator for UML class diagrams.
//!
//! Loading, resolution, emission, assembly, and archiving for diagram
//! models: classes, attributes, and typed relationships come in as a graph
//! document and leave as a complete, persistable, REST-exposed backend
//! project packaged into a single archive.

pub mod config;

mod archive;
mod assemble;
mod collection;
mod emit;
mod error;

pub use classforge_core::{document, identifier, lookup, model};
pub use classforge_resolve::{Resolution, descriptor};

pub use archive::Archive;
pub use emit::{Artifact, ArtifactKind, emit_all};
pub use error::ClassforgeError;

use std::path::Path;

use log::{debug, info, trace};

use classforge_core::{lookup::NameTable, model::DiagramModel};

use config::AppConfig;

/// Builder for loading diagram models and generating projects.
///
/// This provides an API for processing diagram models through loading,
/// resolution, assembly, and archiving stages.
///
/// # Examples
///
/// ```rust,no_run
/// use classforge::{ProjectBuilder, config::AppConfig};
///
/// let source = r#"{"nodes": [], "edges": []}"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = ProjectBuilder::new(config);
///
/// // Parse the model document
/// let model = builder.load(source)
///     .expect("Failed to load");
///
/// // Generate the project and package it
/// let archive = builder.generate_archive(&model)
///     .expect("Failed to generate");
///
/// // Or use default config
/// let builder = ProjectBuilder::default();
/// ```
#[derive(Default)]
pub struct ProjectBuilder {
    config: AppConfig,
}

impl ProjectBuilder {
    /// Create a new project builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including generator and
    ///   collection settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The builder's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load a diagram model from a JSON document.
    ///
    /// Accepts either a bare model document or a wrapper object carrying
    /// it under a `model` key, matching both input provenances (persisted
    /// diagram record or caller-supplied payload).
    ///
    /// # Errors
    ///
    /// Returns `ClassforgeError` for malformed JSON or model documents
    /// that fail validation.
    pub fn load(&self, source: &str) -> Result<DiagramModel, ClassforgeError> {
        info!("Loading diagram model");

        let mut value: serde_json::Value = serde_json::from_str(source)?;
        let doc_value = match value.get_mut("model") {
            Some(wrapped) => wrapped.take(),
            None => value,
        };
        let doc = serde_json::from_value(doc_value)?;
        let model = DiagramModel::from_document(doc)?;

        debug!(
            nodes = model.nodes().len(),
            edges = model.edges().len();
            "Model loaded"
        );
        trace!(model:?; "Loaded model");

        Ok(model)
    }

    /// Resolve a model into emission-ready class descriptors.
    ///
    /// # Errors
    ///
    /// Returns `ClassforgeError` for inheritance or composition conflicts.
    pub fn resolve(&self, model: &DiagramModel) -> Result<Resolution, ClassforgeError> {
        let table = NameTable::build(model);
        let resolution = classforge_resolve::resolve(model, &table)?;
        debug!(classes = resolution.len(); "Model resolved");
        Ok(resolution)
    }

    /// Generate the project tree under `root`.
    ///
    /// Returns the number of artifact files written.
    ///
    /// # Errors
    ///
    /// Returns `ClassforgeError` for resolution conflicts, an unusable
    /// scaffold location, or filesystem failures.
    pub fn generate(&self, model: &DiagramModel, root: &Path) -> Result<usize, ClassforgeError> {
        let resolution = self.resolve(model)?;
        assemble::assemble(&resolution, self.config.generator(), root)
    }

    /// Generate the project into a scratch directory and package it into a
    /// streamable archive.
    ///
    /// The scratch directory is uniquely named per request and removed on
    /// every exit path, including mid-pipeline failures; the archive spool
    /// file is removed when the returned [`Archive`] is dropped.
    ///
    /// # Errors
    ///
    /// Returns `ClassforgeError` for generation failures and for empty
    /// archives, which are rejected before streaming.
    pub fn generate_archive(&self, model: &DiagramModel) -> Result<Archive, ClassforgeError> {
        let scratch = tempfile::Builder::new().prefix("classforge-").tempdir()?;
        debug!(scratch = scratch.path().display().to_string(); "Generating into scratch directory");

        self.generate(model, scratch.path())?;
        let archive = archive::archive_dir(scratch.path())?;

        info!(
            entries = archive.entries(),
            bytes = archive.len();
            "Project archived"
        );
        Ok(archive)
    }

    /// Build the request-collection document for a model.
    ///
    /// This consumes attribute information only and works without
    /// generating the project.
    ///
    /// # Errors
    ///
    /// Returns `ClassforgeError` if the document fails to serialize.
    pub fn request_collection(
        &self,
        model: &DiagramModel,
    ) -> Result<serde_json::Value, ClassforgeError> {
        let table = NameTable::build(model);
        let doc = collection::build(&table, self.config.collection())?;
        Ok(doc)
    }
}
