//! Editor-style select and combobox widgets for the **pick** library.
//!
//! The centerpiece is [`select::Select`], a dropdown control that mimics an
//! editor-native select: it owns its option list, tracks the selected and
//! active entries, optionally narrows the list through a typed filter
//! (combobox mode), and dismisses its overlay on pointer activity outside its
//! rendered bounds. It implements [`pick_core::Component`], so it embeds in
//! any ratatui layout.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`select`] | Select/combobox control and its keyboard state machine |
//! | [`options`] | Option data model, option list, source-node ingestion |
//! | [`filter`] | Filter method enumeration and label matchers |
//! | [`dropdown`] | Render-only dropdown overlay |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`scroll`] | Scroll-window bookkeeping for the overlay |
//! | [`text`] | Unicode-width-aware measurement and truncation |

pub mod dropdown;
pub mod filter;
pub mod options;
pub mod scroll;
pub mod select;
pub mod text;
