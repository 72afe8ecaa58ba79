//! # Transitions
//!
//! Everything the user types goes through `update()`.
//! Typed "2" at the main menu? That's `NavState::BrowseCategoryMenu` next,
//! no effects. Picked a topic? That's `Effect::Invoke(topic)` plus a pause.
//!
//! `update()` takes the current state and a token and returns the next state
//! together with a list of effects. No side effects here. I/O happens in the
//! terminal adapter, which carries the effects out in order.
//!
//! ```text
//! State + Token  →  update()  →  New State + [Effect]
//! ```
//!
//! Two input policies live side by side:
//!
//! - Tutorial: anything except `m`/`M` means "next". Nothing is validated.
//! - Browse: every token is validated; a bad one is reported and the
//!   menu stays put.

use super::catalog::Catalog;
use super::error::{Expected, NavError};
use super::state::NavState;

/// Something the adapter must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowHelp,
    /// New page headed "Tutorial (position/total): topic". `position` is 1-based.
    ShowTutorialTopic {
        position: usize,
        total: usize,
        topic: String,
    },
    /// New page headed with the topic name (browse mode).
    ShowTopicTitle(String),
    /// Run the topic's demonstration.
    Invoke(String),
    ShowCompletion,
    Report(NavError),
    /// Block until the user acknowledges ("Press Enter to continue...").
    AwaitAck,
    Farewell,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: NavState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(next: NavState) -> Self {
        Self {
            next,
            effects: Vec::new(),
        }
    }

    fn with(next: NavState, effects: Vec<Effect>) -> Self {
        Self { next, effects }
    }

    /// Stay in `state`, report `error` and wait for the user to read it.
    fn reject(state: &NavState, error: NavError) -> Self {
        Self::with(state.clone(), vec![Effect::Report(error), Effect::AwaitAck])
    }
}

fn is_token(token: &str, key: char) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.eq_ignore_ascii_case(&key))
}

/// Matches a category number exactly as the menu prints it: no sign, no
/// leading zeros.
fn listed_number(token: &str, len: usize) -> Option<usize> {
    (1..=len).find(|n| n.to_string() == token)
}

/// Parses a 1-based menu number, rejecting anything outside `1..=len`.
fn menu_number(token: &str, len: usize) -> Option<usize> {
    token
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
}

/// Entering `TutorialAt(index)`: show and run the topic. The last topic also
/// shows the completion page and falls straight back to `Root`.
fn enter_tutorial(index: usize, catalog: &Catalog) -> Transition {
    let path = catalog.all_topics_in_declared_order();
    let total = path.len();
    let Some(topic) = path.get(index) else {
        return Transition::to(NavState::Root);
    };

    let mut effects = vec![
        Effect::ShowTutorialTopic {
            position: index + 1,
            total,
            topic: topic.to_string(),
        },
        Effect::Invoke(topic.to_string()),
    ];

    if index + 1 == total {
        effects.push(Effect::ShowCompletion);
        effects.push(Effect::AwaitAck);
        return Transition::with(NavState::Root, effects);
    }
    Transition::with(NavState::TutorialAt(index), effects)
}

/// The transition function. Pure: same inputs, same output.
pub fn update(state: &NavState, token: &str, catalog: &Catalog) -> Transition {
    let token = token.trim();

    match state {
        NavState::Root => match token {
            "1" => enter_tutorial(0, catalog),
            "2" => Transition::to(NavState::BrowseCategoryMenu),
            "3" => Transition::with(NavState::Root, vec![Effect::ShowHelp, Effect::AwaitAck]),
            t if is_token(t, 'q') => {
                Transition::with(NavState::Root, vec![Effect::Farewell, Effect::Quit])
            }
            t => Transition::reject(
                state,
                NavError::InvalidToken {
                    token: t.to_string(),
                    expected: Expected::MenuChoice,
                },
            ),
        },

        NavState::TutorialAt(index) => {
            if is_token(token, 'm') {
                Transition::to(NavState::Root)
            } else {
                enter_tutorial(index + 1, catalog)
            }
        }

        NavState::BrowseCategoryMenu => {
            if is_token(token, 'b') {
                return Transition::to(NavState::Root);
            }
            let category = listed_number(token, catalog.categories().len())
                .and_then(|n| catalog.category_at(n));
            match category {
                Some(c) => Transition::to(NavState::BrowseTopicMenu(c.id.clone())),
                None => Transition::reject(state, NavError::UnknownCategory(token.to_string())),
            }
        }

        NavState::BrowseTopicMenu(category) => {
            if is_token(token, 'b') {
                return Transition::to(NavState::BrowseCategoryMenu);
            }
            let topics = match catalog.topics(category) {
                Ok(topics) => topics,
                // "b" still backs out through the row above
                Err(e) => return Transition::reject(state, e),
            };
            match menu_number(token, topics.len()) {
                Some(n) => {
                    let topic = topics[n - 1].clone();
                    Transition::with(
                        state.clone(),
                        vec![
                            Effect::ShowTopicTitle(topic.clone()),
                            Effect::Invoke(topic),
                            Effect::AwaitAck,
                        ],
                    )
                }
                None => Transition::reject(
                    state,
                    NavError::InvalidToken {
                        token: token.to_string(),
                        expected: Expected::TopicNumber,
                    },
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Category;

    /// interfaces → [A, B], enums → [C]
    fn catalog() -> Catalog {
        Catalog::new(vec![
            Category::new("interfaces", "Interfaces", &["A", "B"]),
            Category::new("enums", "Enums", &["C"]),
        ])
        .unwrap()
    }

    fn invoked(effects: &[Effect]) -> Vec<&str> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Invoke(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    fn invalid_selection(token: &str) -> Effect {
        Effect::Report(NavError::InvalidToken {
            token: token.to_string(),
            expected: Expected::TopicNumber,
        })
    }

    // ── Root ────────────────────────────────────────────────────────────────

    #[test]
    fn test_root_help() {
        let t = update(&NavState::Root, "3", &catalog());
        assert_eq!(t.next, NavState::Root);
        assert_eq!(t.effects, vec![Effect::ShowHelp, Effect::AwaitAck]);
    }

    #[test]
    fn test_root_quit_either_case() {
        for token in ["q", "Q", "  q  "] {
            let t = update(&NavState::Root, token, &catalog());
            assert_eq!(t.effects, vec![Effect::Farewell, Effect::Quit]);
        }
    }

    #[test]
    fn test_root_invalid_choice() {
        for token in ["4", "", "quit", "b", "qq"] {
            let t = update(&NavState::Root, token, &catalog());
            assert_eq!(t.next, NavState::Root);
            assert_eq!(
                t.effects[0],
                Effect::Report(NavError::InvalidToken {
                    token: token.to_string(),
                    expected: Expected::MenuChoice,
                })
            );
            assert_eq!(t.effects[1], Effect::AwaitAck);
        }
    }

    #[test]
    fn test_root_browse() {
        let t = update(&NavState::Root, "2", &catalog());
        assert_eq!(t.next, NavState::BrowseCategoryMenu);
        assert!(t.effects.is_empty());
    }

    // ── Tutorial ────────────────────────────────────────────────────────────

    #[test]
    fn test_tutorial_walks_every_topic() {
        let catalog = catalog();

        let t = update(&NavState::Root, "1", &catalog);
        assert_eq!(t.next, NavState::TutorialAt(0));
        assert_eq!(
            t.effects,
            vec![
                Effect::ShowTutorialTopic {
                    position: 1,
                    total: 3,
                    topic: "A".into()
                },
                Effect::Invoke("A".into()),
            ]
        );

        let t = update(&t.next, "x", &catalog);
        assert_eq!(t.next, NavState::TutorialAt(1));
        assert_eq!(invoked(&t.effects), vec!["B"]);

        let t = update(&t.next, "x", &catalog);
        assert_eq!(t.next, NavState::Root);
        assert_eq!(invoked(&t.effects), vec!["C"]);
        assert_eq!(
            &t.effects[2..],
            &[Effect::ShowCompletion, Effect::AwaitAck]
        );
    }

    #[test]
    fn test_tutorial_any_token_advances() {
        let catalog = catalog();
        for token in ["", "n", "N", "b", "q", "42", "menu"] {
            let t = update(&NavState::TutorialAt(0), token, &catalog);
            assert_eq!(t.next, NavState::TutorialAt(1), "token {token:?}");
        }
    }

    #[test]
    fn test_tutorial_menu_token_returns_to_root() {
        let catalog = catalog();
        for token in ["m", "M"] {
            let t = update(&NavState::TutorialAt(0), token, &catalog);
            assert_eq!(t.next, NavState::Root);
            assert!(t.effects.is_empty());
        }
    }

    #[test]
    fn test_tutorial_menu_token_midway_skips_remaining_topics() {
        let catalog = Catalog::new(vec![
            Category::new("interfaces", "Interfaces", &["A", "B", "C"]),
            Category::new("enums", "Enums", &["D", "E"]),
        ])
        .unwrap();
        let t = update(&NavState::Root, "1", &catalog);
        let t = update(&t.next, "", &catalog);
        assert_eq!(t.next, NavState::TutorialAt(1));
        for index in 1..4 {
            for token in ["m", "M"] {
                let t = update(&NavState::TutorialAt(index), token, &catalog);
                assert_eq!(t.next, NavState::Root);
                assert!(invoked(&t.effects).is_empty());
                assert!(!t.effects.contains(&Effect::ShowCompletion));
            }
        }
    }

    #[test]
    fn test_tutorial_reaches_root_after_n_minus_one_tokens() {
        let catalog = catalog();
        let n = catalog.topic_count();
        let mut t = update(&NavState::Root, "1", &catalog);
        let mut seen = invoked(&t.effects).iter().map(|s| s.to_string()).collect::<Vec<_>>();
        for _ in 0..n - 1 {
            assert_ne!(t.next, NavState::Root);
            t = update(&t.next, "next", &catalog);
            seen.extend(invoked(&t.effects).iter().map(|s| s.to_string()));
        }
        assert_eq!(t.next, NavState::Root);
        assert!(t.effects.contains(&Effect::ShowCompletion));
        assert_eq!(seen, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_single_topic_tutorial_completes_immediately() {
        let catalog = Catalog::new(vec![Category::new("enums", "Enums", &["C"])]).unwrap();
        let t = update(&NavState::Root, "1", &catalog);
        assert_eq!(t.next, NavState::Root);
        assert_eq!(invoked(&t.effects), vec!["C"]);
        assert!(t.effects.contains(&Effect::ShowCompletion));
    }

    // ── Browse ──────────────────────────────────────────────────────────────

    #[test]
    fn test_browse_category_selection() {
        let t = update(&NavState::BrowseCategoryMenu, "2", &catalog());
        assert_eq!(t.next, NavState::BrowseTopicMenu("enums".into()));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_browse_category_invalid() {
        for token in ["0", "3", "enums", "", "-1", "+2", "02", "0002", "2x"] {
            let t = update(&NavState::BrowseCategoryMenu, token, &catalog());
            assert_eq!(t.next, NavState::BrowseCategoryMenu);
            assert_eq!(
                t.effects,
                vec![
                    Effect::Report(NavError::UnknownCategory(token.to_string())),
                    Effect::AwaitAck
                ]
            );
        }
    }

    #[test]
    fn test_browse_category_back() {
        for token in ["b", "B"] {
            let t = update(&NavState::BrowseCategoryMenu, token, &catalog());
            assert_eq!(t.next, NavState::Root);
        }
    }

    #[test]
    fn test_browse_topic_valid_selection_stays() {
        let state = NavState::BrowseTopicMenu("interfaces".into());
        let t = update(&state, "2", &catalog());
        assert_eq!(t.next, state);
        assert_eq!(
            t.effects,
            vec![
                Effect::ShowTopicTitle("B".into()),
                Effect::Invoke("B".into()),
                Effect::AwaitAck,
            ]
        );
    }

    #[test]
    fn test_browse_topic_out_of_range_never_moves() {
        let state = NavState::BrowseTopicMenu("interfaces".into());
        for token in ["0", "3", "99", "-1", "one", "", "1.0"] {
            let t = update(&state, token, &catalog());
            assert_eq!(t.next, state, "token {token:?}");
            assert_eq!(t.effects, vec![invalid_selection(token), Effect::AwaitAck]);
            assert!(invoked(&t.effects).is_empty());
        }
    }

    #[test]
    fn test_browse_topic_back() {
        let state = NavState::BrowseTopicMenu("enums".into());
        let t = update(&state, "B", &catalog());
        assert_eq!(t.next, NavState::BrowseCategoryMenu);
    }

    #[test]
    fn test_browse_scenario() {
        let catalog = catalog();
        let t = update(&NavState::Root, "2", &catalog);
        let t = update(&t.next, "2", &catalog);
        assert_eq!(t.next, NavState::BrowseTopicMenu("enums".into()));

        let t = update(&t.next, "1", &catalog);
        assert_eq!(invoked(&t.effects), vec!["C"]);

        let t = update(&t.next, "9", &catalog);
        assert_eq!(t.next, NavState::BrowseTopicMenu("enums".into()));
        assert_eq!(t.effects[0], invalid_selection("9"));

        let t = update(&t.next, "b", &catalog);
        assert_eq!(t.next, NavState::BrowseCategoryMenu);
    }

    #[test]
    fn test_back_from_category_menu_lands_on_root_once() {
        let catalog = catalog();
        let t = update(&NavState::BrowseCategoryMenu, "b", &catalog);
        assert_eq!(t.next, NavState::Root);
        // At Root, "b" is just another invalid choice
        let t = update(&t.next, "b", &catalog);
        assert_eq!(t.next, NavState::Root);
        assert!(matches!(t.effects[0], Effect::Report(NavError::InvalidToken { .. })));
    }

    #[test]
    fn test_stale_category_reports_in_place() {
        let state = NavState::BrowseTopicMenu("generics".into());
        let t = update(&state, "1", &catalog());
        assert_eq!(t.next, state);
        assert_eq!(
            t.effects,
            vec![
                Effect::Report(NavError::UnknownCategory("generics".into())),
                Effect::AwaitAck
            ]
        );
        let t = update(&state, "b", &catalog());
        assert_eq!(t.next, NavState::BrowseCategoryMenu);
    }
}
