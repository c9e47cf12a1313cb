//! **pick** — editor-style select and combobox widgets for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything from a single
//! dependency:
//!
//! ```toml
//! [dependencies]
//! pick = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`pick_core`] are available at the crate root
//!   ([`Component`], [`Command`], [`TerminalCommand`], etc.).
//! * The [`widgets`] module re-exports everything from [`pick_widgets`]
//!   (the select/combobox control, option model, filter methods).
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream crates do
//!   not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use pick::widgets::select::{Message, Select};
//! use pick::Component;
//!
//! let mut select = Select::new(["Rust", "Go", "Zig"]);
//! select.focus();
//!
//! // In your event loop:
//! // let cmd = select.update(Message::KeyPress(key_event));
//! // ...execute cmd, then terminal.draw(|f| select.view(f, area))
//! ```

pub use pick_core::*;
pub mod widgets {
    pub use pick_widgets::*;
}

// Re-export dependencies for use in examples and downstream crates
pub use crossterm;
pub use ratatui;
