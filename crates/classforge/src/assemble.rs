//! Project assembly: directory tree, scaffold copy, artifact writes.
//!
//! The assembler materializes one generated project under a caller-chosen
//! root: it copies the static scaffold (when configured), creates the
//! package tree, and writes every emitted artifact into its sub-directory.
//! Missing scaffold pieces are logged warnings; filesystem failures on
//! files that do exist propagate as request failures.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use walkdir::WalkDir;

use classforge_resolve::Resolution;

use crate::{
    ClassforgeError,
    config::GeneratorConfig,
    emit,
};

/// Package sub-directories holding generated sources.
const PACKAGE_SUBDIRS: [&str; 4] = ["model", "repository", "service", "controller"];

/// Assemble a resolved project under `root`.
///
/// Returns the number of artifact files written (scaffold files are not
/// counted).
///
/// # Errors
///
/// Returns [`ClassforgeError::Scaffold`] when a configured scaffold
/// directory does not exist, and [`ClassforgeError::Io`] for directory
/// creation, copy, or write failures.
pub fn assemble(
    resolution: &Resolution,
    config: &GeneratorConfig,
    root: &Path,
) -> Result<usize, ClassforgeError> {
    if let Some(scaffold) = config.scaffold_dir() {
        copy_scaffold(scaffold, root, config)?;
    }

    let base = root
        .join("src")
        .join("main")
        .join("java")
        .join(config.package_path());
    for subdir in PACKAGE_SUBDIRS {
        fs::create_dir_all(base.join(subdir))?;
    }

    let artifacts = emit::emit_all(resolution, config);
    for artifact in &artifacts {
        let path = base.join(artifact.kind().subdir()).join(artifact.file_name());
        debug!(path = path.display().to_string(); "Writing artifact");
        fs::write(&path, artifact.source())?;
    }

    info!(
        classes = resolution.len(),
        files = artifacts.len(),
        root = root.display().to_string();
        "Project assembled"
    );
    Ok(artifacts.len())
}

/// Copy the static scaffold into the project root.
///
/// Every piece is optional: a missing `pom.xml`, wrapper script, resource
/// tree, or bootstrap file is logged and skipped, never fatal. Only a
/// scaffold directory that does not exist at all blocks generation.
fn copy_scaffold(
    scaffold: &Path,
    root: &Path,
    config: &GeneratorConfig,
) -> Result<(), ClassforgeError> {
    if !scaffold.is_dir() {
        return Err(ClassforgeError::Scaffold(format!(
            "scaffold directory not found at {}",
            scaffold.display()
        )));
    }
    fs::create_dir_all(root)?;

    copy_file_if_present(&scaffold.join("pom.xml"), &root.join("pom.xml"))?;

    let mvnw_dest = root.join("mvnw");
    if copy_file_if_present(&scaffold.join("mvnw"), &mvnw_dest)? {
        make_executable(&mvnw_dest)?;
    }
    copy_file_if_present(&scaffold.join("mvnw.cmd"), &root.join("mvnw.cmd"))?;

    copy_tree_if_present(&scaffold.join(".mvn"), &root.join(".mvn"))?;
    copy_tree_if_present(
        &scaffold.join("src").join("main").join("resources"),
        &root.join("src").join("main").join("resources"),
    )?;

    let package_rel: PathBuf = ["src", "main", "java"]
        .iter()
        .collect::<PathBuf>()
        .join(config.package_path());
    let bootstrap_src = scaffold.join(&package_rel).join(config.bootstrap_file());
    if bootstrap_src.is_file() {
        let dest_dir = root.join(&package_rel);
        fs::create_dir_all(&dest_dir)?;
        fs::copy(&bootstrap_src, dest_dir.join(config.bootstrap_file()))?;
    } else {
        warn!(
            path = bootstrap_src.display().to_string();
            "Scaffold bootstrap file missing, skipping"
        );
    }

    Ok(())
}

/// Copy a single scaffold file, returning whether it existed.
fn copy_file_if_present(src: &Path, dest: &Path) -> Result<bool, ClassforgeError> {
    if src.is_file() {
        fs::copy(src, dest)?;
        Ok(true)
    } else {
        warn!(path = src.display().to_string(); "Scaffold file missing, skipping");
        Ok(false)
    }
}

/// Recursively copy a scaffold directory if it exists.
fn copy_tree_if_present(src: &Path, dest: &Path) -> Result<(), ClassforgeError> {
    if !src.is_dir() {
        warn!(path = src.display().to_string(); "Scaffold directory missing, skipping");
        return Ok(());
    }
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|err| ClassforgeError::Io(err.into()))?;
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), ClassforgeError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), ClassforgeError> {
    Ok(())
}
