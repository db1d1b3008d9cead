//! Error taxonomy for hrlog-core

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the logging core. Every variant aborts the
/// current invocation before anything is persisted.
#[derive(Debug, Error)]
pub enum Error {
    /// The working directory cannot be mapped to hierarchy segments
    /// (logging at HOME, at the filesystem root, or an unresolvable path).
    #[error("cannot resolve logging path: {0}")]
    PathResolution(String),

    /// The resolved path produced an empty section chain.
    #[error("invalid path: no hierarchy segments")]
    InvalidHierarchy,

    /// The document lock was not acquired within the timeout window.
    #[error("could not acquire document lock within {waited:?}")]
    LockTimeout { waited: Duration },

    /// Document or lock sentinel read/write failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for failures with no more specific classification.
    #[error("{0}")]
    Unexpected(String),
}
