//! # Built-in Demonstrations
//!
//! The shipped catalog: interfaces first, then enums. The tutorial walks
//! them in exactly this order.

pub mod enums;
pub mod interfaces;

use crate::core::catalog::{Catalog, Category};
use crate::core::dispatcher::Dispatcher;
use crate::core::error::CatalogError;
use crate::core::registry::Registry;

pub fn default_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(vec![
        Category::new(
            "interfaces",
            "Interfaces",
            &[
                "Basic Interfaces",
                "Interface Implementation",
                "Empty Interface",
                "Type Assertion",
                "Interface Composition",
            ],
        ),
        Category::new(
            "enums",
            "Enums",
            &["Basic Enums", "Iota Enums", "String Enums", "Behavior Enums"],
        ),
    ])
}

pub fn default_dispatcher() -> Dispatcher {
    Dispatcher::new()
        .with("Basic Interfaces", interfaces::BasicInterfaces)
        .with("Interface Implementation", interfaces::InterfaceImplementation)
        .with("Empty Interface", interfaces::EmptyInterface)
        .with("Type Assertion", interfaces::TypeAssertion)
        .with("Interface Composition", interfaces::InterfaceComposition)
        .with("Basic Enums", enums::BasicEnums)
        .with("Iota Enums", enums::IotaEnums)
        .with("String Enums", enums::StringEnums)
        .with("Behavior Enums", enums::BehaviorEnums)
}

/// Catalog and dispatcher, validated against each other.
pub fn default_registry() -> Result<Registry, CatalogError> {
    Registry::new(default_catalog()?, default_dispatcher())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::Section;
    use crate::test_support::{RecordingRenderer, Rendered};

    #[test]
    fn test_default_registry_is_valid() {
        let registry = default_registry().unwrap();
        let catalog = registry.catalog();
        assert_eq!(catalog.categories()[0].id, "interfaces");
        assert_eq!(catalog.categories()[1].id, "enums");
        assert_eq!(catalog.all_topics_in_declared_order().len(), 9);
    }

    #[test]
    fn test_every_demo_renders_all_sections() {
        let registry = default_registry().unwrap();
        for topic in registry.catalog().all_topics_in_declared_order() {
            let mut out = RecordingRenderer::default();
            registry.invoke(topic, &mut out).unwrap();
            let sections: Vec<Section> = out
                .events
                .iter()
                .filter_map(|e| match e {
                    Rendered::Section(s, _) => Some(*s),
                    _ => None,
                })
                .collect();
            assert_eq!(
                sections,
                vec![
                    Section::Explanation,
                    Section::Code,
                    Section::Output,
                    Section::KeyTakeaways
                ],
                "topic {topic}"
            );
        }
    }
}
