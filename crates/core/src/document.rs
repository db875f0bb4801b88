//! Configuration document rendering and file persistence.
//!
//! Responsibilities:
//! - Hold the ordered sections (context + entries) being edited.
//! - Render sections into the text grammar, entry order preserved.
//! - Append rendered text to the daemon config file and load it back.
//!
//! Does NOT handle:
//! - Expression formatting rules (see `format`).
//! - Locking against concurrent external writers of the same file.
//!
//! Invariants:
//! - Appending to an existing non-empty file emits one separating blank line
//!   before the context block.
//! - A missing file on load is a distinct, recoverable condition.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::format::{format_context, format_entry};
use crate::model::{ContextSelector, LintWarning, MappingEntry};
use crate::parse::{ParseError, parse_document};

/// Default file name of the daemon configuration in the per-user config dir.
pub const CONFIG_FILE_NAME: &str = "keymapper.conf";

/// Errors from document persistence.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file does not exist. Reported, not fatal; the caller keeps its
    /// current entries.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Any other I/O failure (permissions, missing directory).
    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content did not parse as the emitted grammar subset.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// One context scope and its mappings, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub context: ContextSelector,
    pub entries: Vec<MappingEntry>,
}

impl Section {
    pub fn new(context: ContextSelector) -> Self {
        Self {
            context,
            entries: Vec::new(),
        }
    }
}

/// An ordered sequence of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    /// A single-section document, the shape the editor works on.
    pub fn single(context: ContextSelector, entries: Vec<MappingEntry>) -> Self {
        Self {
            sections: vec![Section { context, entries }],
        }
    }

    /// The only section, when the document has exactly one.
    pub fn sole_section(&self) -> Option<&Section> {
        match self.sections.as_slice() {
            [section] => Some(section),
            _ => None,
        }
    }

    /// All entries across sections, in document order.
    pub fn entries(&self) -> impl Iterator<Item = &MappingEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    /// Lint warnings for every entry, in document order.
    pub fn lint(&self) -> Vec<LintWarning> {
        self.entries().flat_map(|e| e.lint()).collect()
    }

    /// Render the document into the text grammar.
    ///
    /// Sections are separated by one blank line; a default context emits no
    /// context line. The result has no trailing newline.
    pub fn render(&self) -> String {
        let mut blocks = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            let mut lines = Vec::with_capacity(section.entries.len() + 1);
            if let Some(context_line) = format_context(&section.context) {
                lines.push(context_line);
            }
            for entry in &section.entries {
                lines.push(format_entry(entry));
            }
            if !lines.is_empty() {
                blocks.push(lines.join("\n"));
            }
        }
        blocks.join("\n\n")
    }

    /// Append the rendered document to `path`, creating the file if needed.
    ///
    /// When the file already exists and is non-empty, a blank line separates
    /// the new block from the previous content. No rollback on partial
    /// writes.
    pub fn append_to_file(&self, path: &Path) -> Result<(), DocumentError> {
        let rendered = self.render();
        if rendered.is_empty() {
            return Ok(());
        }

        let existing_len = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(source) => {
                return Err(DocumentError::Io {
                    action: "stat",
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| DocumentError::Io {
                action: "open",
                path: path.to_path_buf(),
                source,
            })?;

        let block = if existing_len > 0 {
            format!("\n{rendered}\n")
        } else {
            format!("{rendered}\n")
        };
        file.write_all(block.as_bytes())
            .map_err(|source| DocumentError::Io {
                action: "write",
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(path = %path.display(), bytes = block.len(), "Appended configuration block");
        Ok(())
    }

    /// Load and parse a configuration file.
    pub fn load_from_file(path: &Path) -> Result<Self, DocumentError> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                DocumentError::NotFound(path.to_path_buf())
            } else {
                DocumentError::Io {
                    action: "read",
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        parse_document(&text).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
