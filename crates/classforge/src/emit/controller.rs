//! Controller artifact rendering.

use std::fmt::Write;

use classforge_core::identifier::ClassName;
use classforge_resolve::descriptor::InheritanceRole;

use crate::config::GeneratorConfig;

/// Render the REST controller for one class: list, get-by-id (404 on
/// miss), create, update, delete (204), all with explicit content-type
/// negotiation. Inheritance children get additional endpoints filtering
/// the complete result set by runtime type.
pub(super) fn render(
    name: &ClassName,
    inheritance: &InheritanceRole,
    config: &GeneratorConfig,
) -> String {
    let package = config.base_package();
    let lower = name.lower();

    let mut out = format!(
        r#"package {package}.controller;

import {package}.model.{name};
import {package}.service.{name}Service;
import org.springframework.http.ResponseEntity;
import org.springframework.http.MediaType;
import org.springframework.web.bind.annotation.*;
import java.util.List;
import java.util.stream.Collectors;

@RestController
@RequestMapping("/api/{lower}")
public class {name}Controller {{
    private final {name}Service service;

    public {name}Controller({name}Service service) {{
        this.service = service;
    }}

    @GetMapping(produces = MediaType.APPLICATION_JSON_VALUE)
    public List<{name}> all() {{
        return service.findAll();
    }}

    @GetMapping(path = "/{{id}}", produces = MediaType.APPLICATION_JSON_VALUE)
    public ResponseEntity<{name}> get(@PathVariable Long id) {{
        return service.findById(id)
                .map(ResponseEntity::ok)
                .orElse(ResponseEntity.notFound().build());
    }}

    @PostMapping(consumes = MediaType.APPLICATION_JSON_VALUE, produces = MediaType.APPLICATION_JSON_VALUE)
    public {name} create(@RequestBody {name} entity) {{
        return service.create(entity);
    }}

    @PutMapping(path = "/{{id}}", consumes = MediaType.APPLICATION_JSON_VALUE, produces = MediaType.APPLICATION_JSON_VALUE)
    public {name} update(@PathVariable Long id, @RequestBody {name} entity) {{
        return service.update(id, entity);
    }}

    @DeleteMapping(path = "/{{id}}")
    public ResponseEntity<Void> delete(@PathVariable Long id) {{
        service.delete(id);
        return ResponseEntity.noContent().build();
    }}
"#
    );

    if inheritance.is_child() {
        let _ = write!(
            out,
            r#"
    @GetMapping(path = "/{lower}s", produces = MediaType.APPLICATION_JSON_VALUE)
    public List<{name}> all{name}s() {{
        return service.findAll().stream()
                .filter(v -> v instanceof {name})
                .map(v -> ({name}) v)
                .collect(Collectors.toList());
    }}

    @GetMapping(path = "/{lower}s/{{id}}", produces = MediaType.APPLICATION_JSON_VALUE)
    public ResponseEntity<{name}> get{name}(@PathVariable Long id) {{
        return service.findById(id)
                .filter(v -> v instanceof {name})
                .map(v -> ({name}) v)
                .map(ResponseEntity::ok)
                .orElse(ResponseEntity.notFound().build());
    }}
"#
        );
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use crate::{config::GeneratorConfig, emit::tests::resolution_of};

    use super::render;

    #[test]
    fn controller_negotiates_json_and_maps_crud_routes() {
        let resolution = resolution_of(r#"{"nodes": [{"id": "o", "data": {"label": "Order"}}], "edges": []}"#);
        let desc = resolution.descriptors().next().unwrap();
        let source = render(desc.name(), desc.inheritance(), &GeneratorConfig::default());

        assert!(source.contains("@RequestMapping(\"/api/order\")"));
        assert!(source.contains("produces = MediaType.APPLICATION_JSON_VALUE"));
        assert!(source.contains("consumes = MediaType.APPLICATION_JSON_VALUE"));
        assert!(source.contains(".orElse(ResponseEntity.notFound().build())"));
        assert!(source.contains("return ResponseEntity.noContent().build();"));
        assert!(!source.contains("instanceof"));
    }

    #[test]
    fn inheritance_child_gains_type_filtered_endpoints() {
        let resolution = resolution_of(
            r#"{
                "nodes": [
                    {"id": "v", "data": {"label": "Vehicle"}},
                    {"id": "c", "data": {"label": "Car"}}
                ],
                "edges": [{"source": "v", "target": "c", "data": {"type": "inheritance"}}]
            }"#,
        );
        let child = resolution.descriptors().nth(1).unwrap();
        let source = render(child.name(), child.inheritance(), &GeneratorConfig::default());

        assert!(source.contains("@GetMapping(path = \"/cars\", produces = MediaType.APPLICATION_JSON_VALUE)"));
        assert!(source.contains("@GetMapping(path = \"/cars/{id}\", produces = MediaType.APPLICATION_JSON_VALUE)"));
        assert!(source.contains(".filter(v -> v instanceof Car)"));
        assert!(source.contains("public List<Car> allCars() {"));
    }
}
