// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failure of the renderer capability for one URL.
/// Callers degrade on this (empty list / empty detail); it never aborts a run.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("browser session failed for {url}: {reason}")]
    Browser { url: String, reason: String },

    #[error("could not start render runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("no page available for {0}")]
    NotFound(String),
}

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("configuration: {0}")]
    Config(String),

    #[error("invalid selector for `{field}` ({selector}): {reason}")]
    Selector {
        field: &'static str,
        selector: String,
        reason: String,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("could not write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
