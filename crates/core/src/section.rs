//! Section hierarchy construction
//!
//! Each path segment becomes one section: a header line whose leading
//! `#` run encodes the depth, followed by a `> ` display line showing
//! the cumulative path up to that segment.

use crate::path::ResolvedDir;
use crate::{Error, Result};

/// One node of the section chain for a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Header line, e.g. `## foo`.
    pub header: String,
    /// Display line for the cumulative path, e.g. `> ~/projects/foo`.
    pub path_line: String,
    /// 1-based nesting depth; increases by exactly 1 along a chain.
    pub depth: usize,
}

impl Section {
    /// The display path without the `> ` prefix.
    pub fn display_path(&self) -> &str {
        &self.path_line[2..]
    }
}

/// Build the ordered section chain for a resolved directory.
///
/// The last element is the target section where the bullet lands.
pub fn build_chain(dir: &ResolvedDir) -> Result<Vec<Section>> {
    if dir.segments.is_empty() {
        return Err(Error::InvalidHierarchy);
    }

    let mut chain = Vec::with_capacity(dir.segments.len());
    for (idx, segment) in dir.segments.iter().enumerate() {
        let depth = idx + 1;
        chain.push(Section {
            header: format!("{} {}", "#".repeat(depth), segment),
            path_line: format!("> {}", display_path(&dir.segments[..depth], dir.inside_home)),
            depth,
        });
    }

    Ok(chain)
}

fn display_path(parts: &[String], inside_home: bool) -> String {
    if inside_home {
        return format!("~/{}", parts.join("/"));
    }

    let first = &parts[0];
    if first.ends_with(':') {
        // Drive-prefixed path, rendered with backslashes.
        if parts.len() == 1 {
            format!("{}\\", first)
        } else {
            format!("{}\\{}", first, parts[1..].join("\\"))
        }
    } else {
        format!("/{}", parts.join("/"))
    }
}
