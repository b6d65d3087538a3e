//! Error and diagnostic types for header import.
//!
//! `ImportError` is fatal and aborts a run. `ExtractionWarning` is recorded for
//! a single declaration that had to be skipped; the run continues.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::chunker::FRAMEWORK_MARKER;

/// Fatal errors that abort an import run
#[derive(Debug, Error)]
pub enum ImportError {
    /// The combined header text carries no framework boundary marker, which
    /// means the preprocessing step did not run on the generated import source.
    #[error("couldn't find framework boundaries: no `{marker}` marker in input")]
    NoFrameworkBoundaries { marker: &'static str },

    #[error("failed to write header document to {path}")]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImportError {
    pub(crate) fn no_boundaries() -> Self {
        ImportError::NoFrameworkBoundaries {
            marker: FRAMEWORK_MARKER,
        }
    }
}

/// Non-fatal problems found while extracting a framework's declarations
///
/// Each warning names the framework it was found in. The offending declaration
/// is dropped; everything else in the framework is still extracted.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionWarning {
    #[error("{framework}: invalid characters \"{chars}\" (first on line {line})")]
    InvalidCharacters {
        framework: String,
        chars: String,
        line: usize,
    },

    #[error("{framework}: no header path for framework marker #{index}")]
    MissingHeaderPath { framework: String, index: usize },

    #[error("{framework}: can't find member kind in {interface}: {text}")]
    UnrecognizedMember {
        framework: String,
        interface: String,
        text: String,
    },

    #[error("{framework}: couldn't match property in {interface}: {text}")]
    UnmatchedProperty {
        framework: String,
        interface: String,
        text: String,
    },

    #[error("{framework}: can't find return type in {interface}: {text}")]
    MissingReturnType {
        framework: String,
        interface: String,
        text: String,
    },

    #[error("{framework}: can't find parameters in {owner}: {text}")]
    UnparsableParameters {
        framework: String,
        owner: String,
        text: String,
    },

    #[error("{framework}: unbalanced ivar block in {interface}")]
    UnbalancedIvars { framework: String, interface: String },
}
