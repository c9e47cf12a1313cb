//! Core traits for the **pick** widget library.
//!
//! `pick-core` defines the two types every widget is built from:
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Component`] | A self-contained widget that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Describes a side effect for the embedding application to execute |
//!
//! The model is deliberately synchronous and runtime-agnostic. Widgets are
//! plain state machines: the host forwards input events as messages, calls
//! [`Component::update`], executes whatever [`Command`]s come back (delivering
//! follow-up messages, toggling mouse capture), and redraws through
//! [`Component::view`]. There is no event loop, executor, or subscription
//! machinery here — any ratatui application can embed these widgets in its
//! own loop.

pub mod command;
pub mod component;

pub use command::{Command, Effect, MouseMode, TerminalCommand};
pub use component::Component;
