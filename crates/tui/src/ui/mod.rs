//! UI widgets shared across the application.

pub mod toast;

pub use toast::{Toast, ToastLevel};
