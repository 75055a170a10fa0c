//! Error types for Classforge operations.
//!
//! This module provides the main error type [`ClassforgeError`] which wraps
//! the error conditions that can occur while loading, resolving,
//! generating, and archiving a project.

use std::io;

use thiserror::Error;

use classforge_core::ModelError;
use classforge_resolve::ResolveError;

/// The main error type for Classforge operations.
#[derive(Debug, Error)]
pub enum ClassforgeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid model document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Scaffold error: {0}")]
    Scaffold(String),

    #[error("Archive error: {0}")]
    Archive(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::archive::Error> for ClassforgeError {
    fn from(error: crate::archive::Error) -> Self {
        Self::Archive(Box::new(error))
    }
}
