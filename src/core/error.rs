//! # Errors
//!
//! Two families:
//!
//! - [`NavError`]: runtime, recoverable. Reported to the user, then the
//!   current menu is shown again. Never fatal.
//! - [`CatalogError`]: startup-time configuration errors found while the
//!   registry is assembled. These abort the program before any menu is drawn.

use std::fmt;

/// What kind of token the controller was waiting for when it got a bad one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A main menu choice (`1`, `2`, `3`, `q`).
    MenuChoice,
    /// A 1-based topic number inside a category.
    TopicNumber,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// No category with this id, or no category at this menu number.
    UnknownCategory(String),
    /// No routine registered for this topic.
    UnknownTopic(String),
    /// Non-numeric or out-of-range input where a menu entry was expected.
    InvalidToken { token: String, expected: Expected },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UnknownCategory(_) => write!(f, "Invalid category. Please try again."),
            NavError::UnknownTopic(topic) => {
                write!(f, "Example for {topic} is not implemented yet.")
            }
            NavError::InvalidToken {
                expected: Expected::MenuChoice,
                ..
            } => write!(f, "Invalid choice. Please try again."),
            NavError::InvalidToken {
                expected: Expected::TopicNumber,
                ..
            } => write!(f, "Invalid selection. Please try again."),
        }
    }
}

impl std::error::Error for NavError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog declares no categories at all.
    Empty,
    /// A category declares no topics.
    EmptyCategory(String),
    DuplicateCategory(String),
    /// Topic ids are unique across the whole catalog, not per category.
    DuplicateTopic(String),
    /// A topic is listed in a category but has no demonstration routine.
    MissingRoutine(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no categories"),
            CatalogError::EmptyCategory(id) => write!(f, "category '{id}' has no topics"),
            CatalogError::DuplicateCategory(id) => write!(f, "category '{id}' is declared twice"),
            CatalogError::DuplicateTopic(id) => write!(f, "topic '{id}' is declared twice"),
            CatalogError::MissingRoutine(id) => {
                write!(f, "topic '{id}' has no demonstration routine")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
