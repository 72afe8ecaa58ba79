//! # Core Application Logic
//!
//! This module contains the explorer's navigation logic.
//! It knows nothing about any specific terminal or input source.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (topics)     │
//!                    │  • Dispatcher (demos)   │
//!                    │  • NavState + update()  │
//!                    │                         │
//!                    │  No I/O. Pure.          │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    term    │                │   tests    │
//!          │  Adapter   │                │ (recording │
//!          │ (crossterm)│                │  renderer) │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: categories and topics, in declared order
//! - [`dispatcher`]: the `Demo` trait and the topic → demo table
//! - [`registry`]: catalog + dispatcher, validated together at startup
//! - [`state`]: `NavState` and the `Navigator` that owns it
//! - [`action`]: `update()`, the transition function, and its `Effect`s
//! - [`render`]: the `Renderer` trait every output goes through
//! - [`config`]: settings file and override resolution
//! - [`error`]: runtime and startup error types

pub mod action;
pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod registry;
pub mod render;
pub mod state;
