//! Exclusive document lock
//!
//! One advisory lock per document serializes the read-merge-write
//! cycle across independent process invocations. The sentinel is the
//! document path with `.lock` appended; it lives for exactly one
//! operation and is removed best-effort on release.

use crate::{Error, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default bound on lock acquisition.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Scoped exclusive lock on a log document.
///
/// Released on drop along every exit path; the sentinel file is then
/// removed, ignoring failures (another invocation may already hold a
/// fresh handle to it).
#[derive(Debug)]
pub struct DocumentLock {
    file: File,
    path: PathBuf,
}

impl DocumentLock {
    /// Acquire the lock for `document`, polling up to `timeout`.
    pub fn acquire(document: &Path, timeout: Duration) -> Result<Self> {
        let path = sentinel_path(document);
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)?;

        let contended = fs2::lock_contended_error();
        let start = Instant::now();
        loop {
            match file.try_lock_exclusive() {
                Ok(()) => {
                    debug!(sentinel = %path.display(), "document lock acquired");
                    return Ok(Self { file, path });
                }
                Err(e) if e.raw_os_error() == contended.raw_os_error() => {
                    if start.elapsed() >= timeout {
                        return Err(Error::LockTimeout { waited: timeout });
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl Drop for DocumentLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
        let _ = fs::remove_file(&self.path);
    }
}

fn sentinel_path(document: &Path) -> PathBuf {
    let mut raw = document.as_os_str().to_owned();
    raw.push(".lock");
    PathBuf::from(raw)
}
