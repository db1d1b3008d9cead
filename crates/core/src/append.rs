//! The one public operation: append a timestamped entry
//!
//! Pipeline: resolve directory, build the section chain, then under the
//! document lock run parse, merge, and a single whole-file rewrite.
//! Any failure aborts before the write; the document is rewritten once
//! or not at all.

use crate::document::Document;
use crate::lock::{DocumentLock, DEFAULT_LOCK_TIMEOUT};
use crate::merge::merge_entry;
use crate::path::resolve_dir;
use crate::section::build_chain;
use crate::{Error, Result};
use chrono::NaiveDateTime;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Inputs for one append invocation. All context is explicit; the core
/// reads no environment variables and keeps no state between calls.
pub struct AppendRequest<'a> {
    /// Path of the shared log document.
    pub document: &'a Path,
    /// Free-text note.
    pub description: &'a str,
    /// Directory the note is being logged from.
    pub current_dir: &'a Path,
    /// HOME reference the hierarchy is relative to.
    pub home_dir: &'a Path,
    /// Timestamp recorded on the bullet (minute resolution).
    pub now: NaiveDateTime,
    /// Bound on document lock acquisition.
    pub lock_timeout: Duration,
}

impl<'a> AppendRequest<'a> {
    pub fn new(
        document: &'a Path,
        description: &'a str,
        current_dir: &'a Path,
        home_dir: &'a Path,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            document,
            description,
            current_dir,
            home_dir,
            now,
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }
}

/// Append one entry to the document, creating missing sections on the
/// way. Returns the display path of the target section.
pub fn append_entry(req: &AppendRequest<'_>) -> Result<String> {
    let resolved = resolve_dir(req.current_dir, req.home_dir)?;
    let chain = build_chain(&resolved)?;
    let target = chain.last().ok_or(Error::InvalidHierarchy)?;
    let display_path = target.display_path().to_string();

    let bullet = format!("- {}: {}", req.now.format("%Y%m%d.%H%M"), req.description);

    let _lock = DocumentLock::acquire(req.document, req.lock_timeout)?;
    let mut doc = Document::load(req.document)?;
    merge_entry(&mut doc, &chain, &bullet);
    doc.save(req.document)?;

    debug!(document = %req.document.display(), path = %display_path, "entry logged");
    Ok(display_path)
}
