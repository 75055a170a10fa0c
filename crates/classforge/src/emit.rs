//! Source-artifact emission for resolved class descriptors.
//!
//! This module is the codegen layer: it renders typed descriptors into
//! Java source text, keeping formatting isolated from relationship
//! resolution. Each class yields four deterministic artifacts, plus one
//! embeddable identity class per retained composite id.
//!
//! # Pipeline Position
//!
//! ```text
//! DiagramModel
//!     ↓ resolve
//! ClassDescriptors
//!     ↓ emit (this module)
//! Artifacts
//!     ↓ assemble
//! Project tree
//! ```

mod controller;
mod embedded_id;
mod entity;
mod repository;
mod service;

use classforge_resolve::Resolution;

use crate::config::GeneratorConfig;

/// Which package sub-directory an artifact lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// JPA entity, under `model/`.
    Entity,
    /// Persistence-access contract, under `repository/`.
    Repository,
    /// CRUD service, under `service/`.
    Service,
    /// REST controller, under `controller/`.
    Controller,
    /// Embeddable composite-identity class, under `model/`.
    EmbeddedId,
}

impl ArtifactKind {
    /// The package sub-directory name.
    pub fn subdir(self) -> &'static str {
        match self {
            Self::Entity | Self::EmbeddedId => "model",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::Controller => "controller",
        }
    }
}

/// One rendered source file.
#[derive(Debug, Clone)]
pub struct Artifact {
    kind: ArtifactKind,
    file_name: String,
    source: String,
}

impl Artifact {
    fn new(kind: ArtifactKind, file_name: String, source: String) -> Self {
        Self {
            kind,
            file_name,
            source,
        }
    }

    /// Artifact kind, determining its target sub-directory.
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// File name, e.g. `OrderController.java`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Rendered Java source.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Emit every artifact for a resolution: four per class, plus the
/// synthesized composite-identity classes.
pub fn emit_all(resolution: &Resolution, config: &GeneratorConfig) -> Vec<Artifact> {
    let mut artifacts = Vec::with_capacity(resolution.len() * 4);

    for desc in resolution.descriptors() {
        let name = desc.name();
        artifacts.push(Artifact::new(
            ArtifactKind::Entity,
            format!("{name}.java"),
            entity::render(desc, config),
        ));
        artifacts.push(Artifact::new(
            ArtifactKind::Repository,
            format!("{name}Repository.java"),
            repository::render(name, config),
        ));
        artifacts.push(Artifact::new(
            ArtifactKind::Service,
            format!("{name}Service.java"),
            service::render(name, config),
        ));
        artifacts.push(Artifact::new(
            ArtifactKind::Controller,
            format!("{name}Controller.java"),
            controller::render(name, desc.inheritance(), config),
        ));
    }

    for id in resolution.composite_ids() {
        artifacts.push(Artifact::new(
            ArtifactKind::EmbeddedId,
            format!("{}.java", id.id_class()),
            embedded_id::render(id, config),
        ));
    }

    artifacts
}
