//! Working-directory resolution relative to HOME

use crate::{Error, Result};
use std::path::{Component, Path};

/// A working directory broken into hierarchy segments.
///
/// Segments are the path components that become sections in the log
/// document: relative to HOME when the directory sits under it,
/// otherwise the components of the absolute path (with any drive
/// prefix folded into the first segment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDir {
    pub segments: Vec<String>,
    pub inside_home: bool,
}

/// Resolve `current` against `home` into hierarchy segments.
///
/// Fails when `current` is HOME itself or reduces to the filesystem
/// root (there is nowhere to hang a section), or when either path
/// cannot be canonicalized.
pub fn resolve_dir(current: &Path, home: &Path) -> Result<ResolvedDir> {
    let current = current
        .canonicalize()
        .map_err(|e| Error::PathResolution(format!("{}: {}", current.display(), e)))?;
    let home = home
        .canonicalize()
        .map_err(|e| Error::PathResolution(format!("{}: {}", home.display(), e)))?;

    if current == home {
        return Err(Error::PathResolution(
            "cannot log at the HOME directory".to_string(),
        ));
    }

    if let Ok(rel) = current.strip_prefix(&home) {
        let segments = collect_segments(rel);
        return Ok(ResolvedDir {
            segments,
            inside_home: true,
        });
    }

    // Outside HOME: keep the absolute path.
    let segments = collect_segments(&current);
    if segments.is_empty() {
        return Err(Error::PathResolution(
            "cannot log at the filesystem root".to_string(),
        ));
    }

    Ok(ResolvedDir {
        segments,
        inside_home: false,
    })
}

fn collect_segments(path: &Path) -> Vec<String> {
    let mut segments = Vec::new();
    for component in path.components() {
        match component {
            // Drive/volume prefix becomes the first segment ("C:").
            Component::Prefix(prefix) => {
                let text = prefix.as_os_str().to_string_lossy();
                segments.push(text.trim_end_matches('\\').to_string());
            }
            Component::RootDir => {}
            Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
            // Canonicalization already removed these.
            Component::CurDir | Component::ParentDir => {}
        }
    }
    segments
}
