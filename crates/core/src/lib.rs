//! hrlog core - hierarchical directory logging
//!
//! This crate provides:
//! - Working-directory resolution relative to HOME
//! - Section hierarchy construction (one section per path component)
//! - Block-structured document model with canonical rendering
//! - Merge algorithm (longest-prefix match, missing-suffix insertion)
//! - Advisory file locking around the read-merge-write cycle

pub mod append;
pub mod document;
pub mod error;
pub mod lock;
pub mod merge;
pub mod path;
pub mod section;

// Re-export main types for convenience
pub use append::{append_entry, AppendRequest};
pub use document::{Block, Document, SEPARATOR};
pub use error::Error;
pub use lock::{DocumentLock, DEFAULT_LOCK_TIMEOUT};
pub use path::{resolve_dir, ResolvedDir};
pub use section::{build_chain, Section};

/// Common result type used throughout hrlog-core
pub type Result<T> = std::result::Result<T, Error>;
