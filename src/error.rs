//! Error types for the engine and pattern loading.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors raised while constructing an engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid grid dimension {width}x{height}: both sides must be positive")]
    InvalidDimension { width: i32, height: i32 },
}

/// Errors raised while loading a pattern file.
///
/// These are never fatal to a running simulation; the engine keeps whatever
/// state it had before the load was attempted.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to read pattern file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
