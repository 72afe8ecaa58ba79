//! # Example Dispatcher
//!
//! Maps a topic id to the demonstration that teaches it. Each demonstration
//! is a small type implementing [`Demo`]; the dispatcher stores them as trait
//! objects so any implementation can be registered.

use std::collections::HashMap;

use log::{debug, warn};

use super::error::NavError;
use super::render::Renderer;

/// A runnable demonstration. Produces its own output (explanation, code,
/// result, takeaways) and returns once it is done.
pub trait Demo {
    fn run(&self, out: &mut dyn Renderer);
}

#[derive(Default)]
pub struct Dispatcher {
    demos: HashMap<String, Box<dyn Demo>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `demo` under `topic`, replacing any previous entry.
    pub fn register(&mut self, topic: &str, demo: Box<dyn Demo>) {
        if self.demos.insert(topic.to_string(), demo).is_some() {
            warn!("Demo for '{}' registered twice, keeping the last one", topic);
        }
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, topic: &str, demo: impl Demo + 'static) -> Self {
        self.register(topic, Box::new(demo));
        self
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.demos.contains_key(topic)
    }

    /// Runs the demo for `topic` to completion.
    pub fn invoke(&self, topic: &str, out: &mut dyn Renderer) -> Result<(), NavError> {
        let demo = self
            .demos
            .get(topic)
            .ok_or_else(|| NavError::UnknownTopic(topic.to_string()))?;
        debug!("Invoking demo '{}'", topic);
        demo.run(out);
        Ok(())
    }
}
