//! Service artifact rendering.

use classforge_core::identifier::ClassName;

use crate::config::GeneratorConfig;

/// Render the CRUD service for one class. Update assigns the externally
/// supplied id onto the payload and saves, a full overwrite rather than a
/// partial patch.
pub(super) fn render(name: &ClassName, config: &GeneratorConfig) -> String {
    let package = config.base_package();
    format!(
        r#"package {package}.service;

import {package}.model.{name};
import {package}.repository.{name}Repository;
import org.springframework.stereotype.Service;
import java.util.List;
import java.util.Optional;

@Service
public class {name}Service {{
    private final {name}Repository repository;

    public {name}Service({name}Repository repository) {{
        this.repository = repository;
    }}

    public List<{name}> findAll() {{
        return repository.findAll();
    }}

    public Optional<{name}> findById(Long id) {{
        return repository.findById(id);
    }}

    public {name} create({name} entity) {{
        return repository.save(entity);
    }}

    public {name} update(Long id, {name} entity) {{
        entity.setId(id);
        return repository.save(entity);
    }}

    public void delete(Long id) {{
        repository.deleteById(id);
    }}
}}
"#
    )
}
