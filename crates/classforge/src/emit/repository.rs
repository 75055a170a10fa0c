//! Repository artifact rendering.

use classforge_core::identifier::ClassName;

use crate::config::GeneratorConfig;

/// Render the persistence-access contract for one class: a Spring Data
/// repository parameterized by the entity type and a `Long` key.
pub(super) fn render(name: &ClassName, config: &GeneratorConfig) -> String {
    let package = config.base_package();
    format!(
        r#"package {package}.repository;

import {package}.model.{name};
import org.springframework.data.jpa.repository.JpaRepository;
import org.springframework.stereotype.Repository;

@Repository
public interface {name}Repository extends JpaRepository<{name}, Long> {{
}}
"#
    )
}
