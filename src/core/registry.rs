//! # Registry
//!
//! The catalog plus its demonstrations, checked against each other once at
//! startup. After [`Registry::new`] succeeds every topic in the catalog is
//! guaranteed to have a routine.

use log::info;

use super::catalog::Catalog;
use super::dispatcher::Dispatcher;
use super::error::{CatalogError, NavError};
use super::render::Renderer;

pub struct Registry {
    catalog: Catalog,
    dispatcher: Dispatcher,
}

impl Registry {
    pub fn new(catalog: Catalog, dispatcher: Dispatcher) -> Result<Self, CatalogError> {
        if let Some(missing) = catalog
            .all_topics_in_declared_order()
            .into_iter()
            .find(|topic| !dispatcher.contains(topic))
        {
            return Err(CatalogError::MissingRoutine(missing.to_string()));
        }

        info!(
            "Registry ready: {} categories, {} topics",
            catalog.categories().len(),
            catalog.topic_count()
        );
        Ok(Self {
            catalog,
            dispatcher,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn invoke(&self, topic: &str, out: &mut dyn Renderer) -> Result<(), NavError> {
        self.dispatcher.invoke(topic, out)
    }
}
