//! # Terminal Adapter
//!
//! The line-oriented front end. Reads tokens from stdin, feeds them to the
//! `Navigator`, and carries out the resulting `Effect`s on a `Renderer`.
//!
//! This is the only module that touches stdin/stdout and crossterm.
//!
//! ## Loop
//!
//! ```text
//! ┌─► draw menu for current state
//! │   read token ───────────── EOF ──► farewell, stop
//! │   Navigator::handle(token) → [Effect]
//! │   apply each effect (may invoke a demo, may wait for Enter)
//! └── until Effect::Quit
//! ```

pub mod input;
pub mod renderer;
pub mod screens;

use std::io;

use log::{info, warn};

use crate::core::action::Effect;
use crate::core::config::ResolvedConfig;
use crate::core::registry::Registry;
use crate::core::render::{Renderer, Tone};
use crate::core::state::Navigator;
use input::{InputReader, LineReader};
use renderer::TerminalRenderer;

/// Runs an interactive session on stdin/stdout.
pub fn run(registry: &Registry, config: &ResolvedConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = LineReader::new(stdin.lock());
    let mut out = TerminalRenderer::new(io::stdout(), config);
    drive(registry, config.show_welcome, &mut input, &mut out)
}

/// The session loop, independent of where tokens come from or go to.
pub fn drive(
    registry: &Registry,
    show_welcome: bool,
    input: &mut dyn InputReader,
    out: &mut dyn Renderer,
) -> io::Result<()> {
    if show_welcome {
        screens::welcome(out);
        await_ack(input, out)?;
    }

    let mut nav = Navigator::new(registry);
    while !nav.is_finished() {
        screens::menu_for(nav.state(), registry.catalog(), out);
        out.flush()?;

        let Some(token) = input.read_token()? else {
            info!("Input closed in {:?}, ending session", nav.state());
            out.blank();
            out.line(screens::FAREWELL);
            break;
        };

        for effect in nav.handle(&token) {
            apply(effect, registry, input, out)?;
        }
    }

    info!("Session ended");
    out.flush()
}

fn apply(
    effect: Effect,
    registry: &Registry,
    input: &mut dyn InputReader,
    out: &mut dyn Renderer,
) -> io::Result<()> {
    match effect {
        Effect::ShowHelp => screens::help(out),
        Effect::ShowTutorialTopic {
            position,
            total,
            topic,
        } => {
            out.clear();
            out.title(&format!("Tutorial ({position}/{total}): {topic}"), Tone::Topic);
        }
        Effect::ShowTopicTitle(topic) => {
            out.clear();
            out.title(&topic, Tone::Topic);
        }
        Effect::Invoke(topic) => invoke(registry, &topic, out),
        Effect::ShowCompletion => out.line(screens::COMPLETION),
        Effect::Report(error) => out.line(&error.to_string()),
        Effect::AwaitAck => await_ack(input, out)?,
        Effect::Farewell => out.line(screens::FAREWELL),
        Effect::Quit => {}
    }
    Ok(())
}

/// Runs a topic's demo; a missing one gets a placeholder line instead.
pub fn invoke(registry: &Registry, topic: &str, out: &mut dyn Renderer) {
    if let Err(e) = registry.invoke(topic, out) {
        warn!("{:?}", e);
        out.line(&e.to_string());
    }
}

/// "Press Enter to continue...". EOF counts as Enter.
fn await_ack(input: &mut dyn InputReader, out: &mut dyn Renderer) -> io::Result<()> {
    out.prompt(screens::ACK_PROMPT);
    out.flush()?;
    input.read_token()?;
    out.blank();
    Ok(())
}

/// Shows one topic outside of any menu (`--run`).
pub fn run_single(registry: &Registry, topic: &str, config: &ResolvedConfig) -> io::Result<()> {
    let mut out = TerminalRenderer::new(io::stdout(), config);
    show_single(registry, topic, &mut out);
    out.flush()
}

/// Titles a topic with where it sits in the catalog, then runs it.
/// Unknown names still get a title and the placeholder line.
fn show_single(registry: &Registry, topic: &str, out: &mut dyn Renderer) {
    match registry.catalog().topic(topic) {
        Some(found) => out.title(
            &format!(
                "{} ({}/{}): {}",
                found.category.title,
                found.ordinal + 1,
                found.category.topics.len(),
                found.id
            ),
            Tone::Topic,
        ),
        None => out.title(topic, Tone::Topic),
    }
    invoke(registry, topic, out);
}

/// Prints the catalog (`--list`).
pub fn list(registry: &Registry, config: &ResolvedConfig) -> io::Result<()> {
    let mut out = TerminalRenderer::new(io::stdout(), config);
    screens::listing(registry.catalog(), &mut out);
    out.flush()
}
