//! Keymapper TUI Library
//!
//! This library provides the application state, input handling, and UI
//! rendering for the keymapper terminal front-end. The binary in `main.rs`
//! wires these pieces to a terminal and an async event loop.

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::App;
pub use ui::toast::{Toast, ToastLevel};
