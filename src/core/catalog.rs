//! # Topic Catalog
//!
//! The static list of categories and their topics. Order matters twice:
//! it numbers the browse menus, and it is the path the tutorial walks.
//!
//! ```text
//! Catalog
//! ├── Category "interfaces"  (title "Interfaces")
//! │   ├── 1. Basic Interfaces
//! │   └── 2. ...
//! └── Category "enums"       (title "Enums")
//!     ├── 1. Basic Enums
//!     └── 2. ...
//! ```
//!
//! Built once at startup, read-only afterwards. Every lookup is pure.

use std::collections::HashSet;

use super::error::{CatalogError, NavError};

/// A named, ordered group of topic ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub topics: Vec<String>,
}

impl Category {
    pub fn new(id: &str, title: &str, topics: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Where a topic lives in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic<'a> {
    pub id: &'a str,
    pub category: &'a Category,
    /// 0-based position inside the category.
    pub ordinal: usize,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Validates and wraps the given categories, keeping their declared order.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut category_ids = HashSet::new();
        let mut topic_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
            if category.topics.is_empty() {
                return Err(CatalogError::EmptyCategory(category.id.clone()));
            }
            for topic in &category.topics {
                if !topic_ids.insert(topic.as_str()) {
                    return Err(CatalogError::DuplicateTopic(topic.clone()));
                }
            }
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by id.
    pub fn category(&self, id: &str) -> Result<&Category, NavError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| NavError::UnknownCategory(id.to_string()))
    }

    /// Looks up a category by its 1-based menu number.
    pub fn category_at(&self, number: usize) -> Option<&Category> {
        number
            .checked_sub(1)
            .and_then(|index| self.categories.get(index))
    }

    pub fn topics(&self, category: &str) -> Result<&[String], NavError> {
        self.category(category).map(|c| c.topics.as_slice())
    }

    /// Every topic id, categories in declared order, each category's topics
    /// in declared order. This is the tutorial path.
    pub fn all_topics_in_declared_order(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.topics.iter().map(String::as_str))
            .collect()
    }

    pub fn topic_count(&self) -> usize {
        self.categories.iter().map(|c| c.topics.len()).sum()
    }

    /// Resolves a topic id to its owning category and position.
    pub fn topic(&self, id: &str) -> Option<Topic<'_>> {
        self.categories.iter().find_map(|category| {
            category
                .topics
                .iter()
                .position(|t| t == id)
                .map(|ordinal| Topic {
                    id: category.topics[ordinal].as_str(),
                    category,
                    ordinal,
                })
        })
    }
}
