//! Core domain library for the keymapper front-end.
//!
//! This crate holds everything that is not terminal plumbing: the typed
//! mapping model, the config-grammar formatter and its inverse parser,
//! document rendering and file persistence, the external-command apply
//! batch, and key-capture symbol naming.
//!
//! Does NOT handle:
//! - Terminal rendering or the event loop (see `crates/tui`).
//! - Persisted UI state and the legacy JSON save file (see `crates/config`).
//! - Command-line argument parsing (see `crates/cli`).

pub mod apply;
pub mod capture;
pub mod document;
pub mod format;
pub mod model;
pub mod parse;

pub use apply::{
    ApplyError, ApplyOptions, ApplyReport, DAEMON_SERVICE, EntryOutcome, MapCommand,
    ServiceCommand, SkipReason, apply_entries,
};
pub use document::{Document, DocumentError, Section};
pub use model::{ContextKind, ContextSelector, InputKind, LintWarning, MappingEntry, OutputKind};
pub use parse::{ParseError, parse_document};
