//! # Navigation State
//!
//! Where the user currently is. Owned by a [`Navigator`]; only
//! `update()` in action.rs decides what comes next.
//!
//! ```text
//!                 ┌──────── "1" ───────► TutorialAt(0) ─► TutorialAt(1) ─► ... ─┐
//!                 │                           │  "m"            │  "m"          │ last topic
//!   Root ◄────────┼───────────────────────────┴─────────────────┴───────────────┘
//!    ▲  │         │
//!    │  └── "2" ──► BrowseCategoryMenu ── "<n>" ──► BrowseTopicMenu(category)
//!    │                  │       ▲                         │
//!    └────── "b" ───────┘       └────────── "b" ──────────┘
//! ```

use log::debug;

use super::action::{Effect, Transition, update};
use super::registry::Registry;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Root,
    /// Showing tutorial topic `index` (0-based) of the declared-order path.
    TutorialAt(usize),
    BrowseCategoryMenu,
    /// Topic list of the category with this id.
    BrowseTopicMenu(String),
}

/// Owns the state and feeds tokens through the transition function.
pub struct Navigator<'a> {
    registry: &'a Registry,
    state: NavState,
    finished: bool,
}

impl<'a> Navigator<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            state: NavState::Root,
            finished: false,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// True once a `Quit` effect has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Applies one token and returns the effects the caller must carry out.
    pub fn handle(&mut self, token: &str) -> Vec<Effect> {
        let Transition { next, effects } = update(&self.state, token, self.registry.catalog());
        debug!("{:?} + {:?} -> {:?} ({} effects)", self.state, token, next, effects.len());
        if effects.contains(&Effect::Quit) {
            self.finished = true;
        }
        self.state = next;
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_registry;

    #[test]
    fn test_navigator_starts_at_root() {
        let registry = test_registry();
        let nav = Navigator::new(&registry);
        assert_eq!(nav.state(), &NavState::Root);
        assert!(!nav.is_finished());
    }

    #[test]
    fn test_navigator_tracks_state() {
        let registry = test_registry();
        let mut nav = Navigator::new(&registry);
        nav.handle("2");
        assert_eq!(nav.state(), &NavState::BrowseCategoryMenu);
        nav.handle("1");
        assert_eq!(nav.state(), &NavState::BrowseTopicMenu("interfaces".into()));
        nav.handle("b");
        nav.handle("b");
        assert_eq!(nav.state(), &NavState::Root);
    }

    #[test]
    fn test_navigator_finishes_on_quit() {
        let registry = test_registry();
        let mut nav = Navigator::new(&registry);
        let effects = nav.handle("Q");
        assert_eq!(effects.last(), Some(&Effect::Quit));
        assert!(nav.is_finished());
    }
}
