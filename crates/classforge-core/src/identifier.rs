//! Class identifiers derived from diagram labels.
//!
//! Diagram nodes carry free-text labels. Generated source files need stable
//! Java-style identifiers, so labels are sanitized into [`ClassName`]s:
//! every non-alphanumeric character is stripped and the first remaining
//! character is upper-cased.

use std::fmt;

use serde::Serialize;

/// A sanitized class identifier.
///
/// Invariants: non-empty, alphanumeric only, first character upper-cased.
/// Construction goes through [`ClassName::sanitize`]; distinct labels may
/// sanitize to the same identifier (collisions are not rejected here).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ClassName(String);

impl ClassName {
    /// Sanitize a free-text label into a class identifier.
    ///
    /// Returns `None` when nothing alphanumeric survives, e.g. for labels
    /// consisting only of punctuation or whitespace.
    pub fn sanitize(label: &str) -> Option<Self> {
        let mut out = String::with_capacity(label.len());
        for ch in label.chars().filter(|c| c.is_ascii_alphanumeric()) {
            if out.is_empty() {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
        }
        if out.is_empty() { None } else { Some(Self(out)) }
    }

    /// The identifier as written in type position, e.g. `LineItem`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier with its first character lower-cased, as used for
    /// field names and URL segments, e.g. `lineItem`.
    pub fn lower(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// The upper-cased first character, used as the default discriminator
    /// value for inheritance subtypes.
    pub fn initial(&self) -> char {
        // Sanitization guarantees a non-empty, already upper-cased head.
        self.0.chars().next().unwrap_or('X')
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::ClassName;

    #[test]
    fn strips_non_alphanumerics_and_capitalizes() {
        let name = ClassName::sanitize("line item!").expect("sanitizable");
        assert_eq!(name.as_str(), "Lineitem");

        let name = ClassName::sanitize("order_2-draft").expect("sanitizable");
        assert_eq!(name.as_str(), "Order2draft");
    }

    #[test]
    fn already_clean_labels_pass_through() {
        let name = ClassName::sanitize("LineItem").expect("sanitizable");
        assert_eq!(name.as_str(), "LineItem");
        assert_eq!(name.lower(), "lineItem");
        assert_eq!(name.initial(), 'L');
    }

    #[test]
    fn lowercase_label_gets_capitalized_head() {
        let name = ClassName::sanitize("user").expect("sanitizable");
        assert_eq!(name.as_str(), "User");
        assert_eq!(name.lower(), "user");
    }

    #[test]
    fn unsanitizable_labels_yield_none() {
        assert!(ClassName::sanitize("").is_none());
        assert!(ClassName::sanitize("  ").is_none());
        assert!(ClassName::sanitize("***").is_none());
        assert!(ClassName::sanitize("¡¿").is_none());
    }

    #[test]
    fn distinct_labels_may_collide() {
        let a = ClassName::sanitize("Order!").expect("sanitizable");
        let b = ClassName::sanitize("order").expect("sanitizable");
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn sanitized_names_are_valid_identifiers(label in ".{0,64}") {
            if let Some(name) = ClassName::sanitize(&label) {
                let s = name.as_str();
                prop_assert!(!s.is_empty());
                prop_assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
                prop_assert!(!s.chars().next().unwrap().is_ascii_lowercase());
            }
        }

        #[test]
        fn sanitization_is_idempotent(label in ".{1,64}") {
            if let Some(first) = ClassName::sanitize(&label) {
                let second = ClassName::sanitize(first.as_str()).unwrap();
                prop_assert_eq!(first, second);
            }
        }
    }
}
