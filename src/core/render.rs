//! # Renderer Seam
//!
//! The output side of the app, as a trait. Demonstration routines and the
//! driver both talk to a `Renderer`, never to stdout directly, so tests can
//! record exactly what would have been shown.
//!
//! The concrete terminal implementation lives in `term::renderer`.

/// Visual tone of a title banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Welcome,
    Menu,
    Topic,
    Browse,
    Help,
}

/// The labelled blocks every demonstration is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Explanation,
    Code,
    Output,
    KeyTakeaways,
}

impl Section {
    pub fn header(self) -> &'static str {
        match self {
            Section::Explanation => "--- EXPLANATION ---",
            Section::Code => "--- CODE EXAMPLE ---",
            Section::Output => "--- OUTPUT ---",
            Section::KeyTakeaways => "--- KEY TAKEAWAYS ---",
        }
    }

    /// Code is shown verbatim; prose may be re-wrapped.
    pub fn is_prose(self) -> bool {
        matches!(self, Section::Explanation | Section::KeyTakeaways)
    }
}

pub trait Renderer {
    /// Wipe the screen before a new page. May be a no-op.
    fn clear(&mut self);

    fn title(&mut self, text: &str, tone: Tone);

    fn line(&mut self, text: &str);

    /// Text with no trailing newline, shown right before reading input.
    fn prompt(&mut self, text: &str);

    fn section(&mut self, section: Section, body: &str);

    fn blank(&mut self) {
        self.line("");
    }

    /// Push buffered output to the user and surface any write error seen so far.
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
