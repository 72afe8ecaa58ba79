//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::{Catalog, Category};
use crate::core::dispatcher::{Demo, Dispatcher};
use crate::core::registry::Registry;
use crate::core::render::{Renderer, Section, Tone};

/// One call made on a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Clear,
    Title(String, Tone),
    Line(String),
    Prompt(String),
    Section(Section, String),
}

/// A renderer that keeps everything it was asked to show.
#[derive(Default)]
pub struct RecordingRenderer {
    pub events: Vec<Rendered>,
}

impl RecordingRenderer {
    /// Names of stub demos that ran, in order.
    pub fn invoked(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Rendered::Section(Section::Output, body) => body.strip_prefix("ran "),
                _ => None,
            })
            .collect()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Rendered::Title(text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_line(&self, text: &str) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, Rendered::Line(line) if line == text))
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.events.push(Rendered::Clear);
    }

    fn title(&mut self, text: &str, tone: Tone) {
        self.events.push(Rendered::Title(text.to_string(), tone));
    }

    fn line(&mut self, text: &str) {
        self.events.push(Rendered::Line(text.to_string()));
    }

    fn prompt(&mut self, text: &str) {
        self.events.push(Rendered::Prompt(text.to_string()));
    }

    fn section(&mut self, section: Section, body: &str) {
        self.events.push(Rendered::Section(section, body.to_string()));
    }
}

/// A demo that only announces itself.
pub struct StubDemo(pub &'static str);

impl Demo for StubDemo {
    fn run(&self, out: &mut dyn Renderer) {
        out.section(Section::Output, &format!("ran {}", self.0));
    }
}

/// interfaces → [A, B], enums → [C], each backed by a [`StubDemo`].
pub fn test_registry() -> Registry {
    let catalog = Catalog::new(vec![
        Category::new("interfaces", "Interfaces", &["A", "B"]),
        Category::new("enums", "Enums", &["C"]),
    ])
    .unwrap();
    let dispatcher = Dispatcher::new()
        .with("A", StubDemo("A"))
        .with("B", StubDemo("B"))
        .with("C", StubDemo("C"));
    Registry::new(catalog, dispatcher).unwrap()
}
