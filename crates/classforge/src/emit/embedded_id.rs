//! Embeddable composite-identity artifact rendering.

use classforge_resolve::descriptor::CompositeId;

use crate::config::GeneratorConfig;

/// Render the `@Embeddable` identity class for a composition part: a
/// 64-bit reference to the whole's identifier plus the part's own original
/// identifier type.
pub(super) fn render(id: &CompositeId, config: &GeneratorConfig) -> String {
    let package = config.base_package();
    let id_class = id.id_class();
    let whole_id_field = id.whole_id_field();
    let own_type = id.own_id_type().java_type();
    format!(
        r#"package {package}.model;

import jakarta.persistence.Embeddable;
import lombok.Data;
import lombok.NoArgsConstructor;
import lombok.AllArgsConstructor;
import java.io.Serializable;

@Data
@NoArgsConstructor
@AllArgsConstructor
@Embeddable
public class {id_class} implements Serializable {{
    private Long {whole_id_field};
    private {own_type} id;
}}
"#
    )
}
