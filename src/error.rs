//! Error types for layout composition

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while composing a template chain
///
/// The first failure at any level of the chain aborts the whole composition;
/// no partial output is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The template file could not be read
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The template engine rejected or failed to evaluate a template
    ///
    /// Covers syntax errors, evaluation-time errors, and errors raised by
    /// host functions during evaluation (such as an `extend` call with an
    /// empty layout path).
    #[error("failed to render template {path}: {message}")]
    Render { path: PathBuf, message: String },
}

impl ComposeError {
    /// Path of the template the error occurred in
    pub fn path(&self) -> &std::path::Path {
        match self {
            ComposeError::Read { path, .. } => path,
            ComposeError::Render { path, .. } => path,
        }
    }
}
