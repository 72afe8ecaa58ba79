//! # Terminal Renderer
//!
//! `Renderer` backed by any `Write` (stdout in practice). Colors and screen
//! clearing go through crossterm commands; prose is wrapped with textwrap.
//!
//! Write errors are remembered and handed back on the next `flush()`, since
//! the `Renderer` drawing methods themselves are infallible.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use log::warn;
use unicode_width::UnicodeWidthStr;

use crate::core::config::ResolvedConfig;
use crate::core::render::{Renderer, Section, Tone};

/// Banner rules are never shorter than this.
const MIN_RULE_WIDTH: usize = 35;

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Welcome => Color::Cyan,
        Tone::Menu => Color::Green,
        Tone::Topic => Color::Yellow,
        Tone::Browse => Color::Blue,
        Tone::Help => Color::Magenta,
    }
}

fn section_color(section: Section) -> Color {
    match section {
        Section::Explanation => Color::Blue,
        Section::Code => Color::Green,
        Section::Output => Color::Yellow,
        Section::KeyTakeaways => Color::Magenta,
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
    clear_screen: bool,
    wrap_width: usize,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, config: &ResolvedConfig) -> Self {
        Self {
            out,
            color: config.color,
            clear_screen: config.clear_screen,
            wrap_width: config.wrap_width,
            error: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Keeps the first failure; later writes are skipped.
    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result
            && self.error.is_none()
        {
            warn!("Terminal write failed: {}", e);
            self.error = Some(e);
        }
    }

    fn colored_line(&mut self, text: &str, color: Color) {
        if self.error.is_some() {
            return;
        }
        let result = if self.color {
            queue!(
                self.out,
                SetForegroundColor(color),
                Print(text),
                ResetColor,
                Print("\n")
            )
        } else {
            writeln!(self.out, "{text}")
        };
        self.record(result);
    }

    fn plain(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        let result = write!(self.out, "{text}");
        self.record(result);
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) {
        if !self.clear_screen || self.error.is_some() {
            return;
        }
        let result = queue!(self.out, Clear(ClearType::All), MoveTo(0, 0));
        self.record(result);
    }

    fn title(&mut self, text: &str, tone: Tone) {
        let rule = "=".repeat(text.width().max(MIN_RULE_WIDTH));
        let color = tone_color(tone);
        self.colored_line(&rule, color);
        self.colored_line(text, color);
        self.colored_line(&rule, color);
    }

    fn line(&mut self, text: &str) {
        self.plain(text);
        self.plain("\n");
    }

    fn prompt(&mut self, text: &str) {
        self.plain(text);
    }

    fn section(&mut self, section: Section, body: &str) {
        self.colored_line(section.header(), section_color(section));
        let body = body.trim_matches('\n');
        if section.is_prose() {
            let wrapped = textwrap::fill(body, self.wrap_width);
            self.line(&wrapped);
        } else {
            self.line(body);
        }
        self.blank();
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()
    }
}
