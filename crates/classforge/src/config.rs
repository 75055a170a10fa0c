//! Configuration types for Classforge project generation.
//!
//! This module provides configuration structures that control how the
//! generated project is laid out and how the request collection is
//! synthesized. All types implement [`serde::Deserialize`] for flexible
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining generator and collection settings.
//! - [`GeneratorConfig`] - Package naming, scaffold location, discriminator column.
//! - [`CollectionConfig`] - Request-collection metadata and base URL.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Generator configuration section.
    #[serde(default)]
    generator: GeneratorConfig,

    /// Request-collection configuration section.
    #[serde(default)]
    collection: CollectionConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from the two sections.
    pub fn new(generator: GeneratorConfig, collection: CollectionConfig) -> Self {
        Self {
            generator,
            collection,
        }
    }

    /// Returns the generator configuration.
    pub fn generator(&self) -> &GeneratorConfig {
        &self.generator
    }

    /// Returns the request-collection configuration.
    pub fn collection(&self) -> &CollectionConfig {
        &self.collection
    }
}

/// Settings for the emitted project.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Java base package of emitted sources, e.g. `com.example.demo`.
    #[serde(default = "default_base_package")]
    base_package: String,

    /// Directory holding the static project scaffold (build descriptor,
    /// wrapper scripts, resources, bootstrap entry file). `None` skips the
    /// scaffold copy entirely.
    #[serde(default)]
    scaffold_dir: Option<PathBuf>,

    /// Name of the bootstrap entry file inside the scaffold's package
    /// directory.
    #[serde(default = "default_bootstrap_file")]
    bootstrap_file: String,

    /// Column name for the inheritance discriminator.
    #[serde(default = "default_discriminator_column")]
    discriminator_column: String,
}

impl GeneratorConfig {
    /// Returns the Java base package.
    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    /// Returns the base package as a relative directory path under
    /// `src/main/java`, e.g. `com/example/demo`.
    pub fn package_path(&self) -> PathBuf {
        self.base_package.split('.').collect()
    }

    /// Returns the scaffold template directory, if configured.
    pub fn scaffold_dir(&self) -> Option<&Path> {
        self.scaffold_dir.as_deref()
    }

    /// Sets the scaffold template directory.
    pub fn set_scaffold_dir(&mut self, dir: Option<PathBuf>) {
        self.scaffold_dir = dir;
    }

    /// Returns the bootstrap entry file name.
    pub fn bootstrap_file(&self) -> &str {
        &self.bootstrap_file
    }

    /// Returns the discriminator column name.
    pub fn discriminator_column(&self) -> &str {
        &self.discriminator_column
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_package: default_base_package(),
            scaffold_dir: None,
            bootstrap_file: default_bootstrap_file(),
            discriminator_column: default_discriminator_column(),
        }
    }
}

/// Settings for the request-collection document.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionConfig {
    /// Collection display name.
    #[serde(default = "default_collection_name")]
    name: String,

    /// Value of the `baseUrl` collection variable.
    #[serde(default = "default_base_url")]
    base_url: String,
}

impl CollectionConfig {
    /// Returns the collection display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the `baseUrl` variable value.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            name: default_collection_name(),
            base_url: default_base_url(),
        }
    }
}

fn default_base_package() -> String {
    "com.example.demo".to_string()
}

fn default_bootstrap_file() -> String {
    "DemoApplication.java".to_string()
}

fn default_discriminator_column() -> String {
    "subtype".to_string()
}

fn default_collection_name() -> String {
    "Generated API Collections".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, GeneratorConfig};

    #[test]
    fn defaults_match_the_generated_project_convention() {
        let config = AppConfig::default();
        assert_eq!(config.generator().base_package(), "com.example.demo");
        assert_eq!(config.generator().discriminator_column(), "subtype");
        assert_eq!(config.collection().base_url(), "http://localhost:8080");
        assert!(config.generator().scaffold_dir().is_none());
    }

    #[test]
    fn package_path_splits_on_dots() {
        let config = GeneratorConfig::default();
        let path = config.package_path();
        let parts: Vec<_> = path.iter().map(|p| p.to_string_lossy()).collect();
        assert_eq!(parts, ["com", "example", "demo"]);
    }
}
