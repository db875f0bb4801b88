//! Async runtime support: terminal lifecycle and side-effect tasks.

pub mod side_effects;
pub mod terminal;
