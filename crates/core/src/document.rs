//! Block-structured log document
//!
//! The persisted document is flat line-oriented text, but it encodes a
//! sequence of blocks: a separator rule, a header whose `#` run encodes
//! depth, a `> ` path line, then bullets. Parsing builds that structure
//! once; rendering re-serializes it canonically, which is also the
//! normalization pass (blank runs collapse, exactly one trailing
//! newline). Rendering a re-parsed render is byte-identical.

use crate::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Rule delimiting top-level blocks.
pub const SEPARATOR: &str = "------------------------";

/// One section block: header, path line, and its body lines (bullets
/// plus any other content, in original order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub header: String,
    /// `> ` display line; tolerated as absent in hand-edited documents.
    pub path_line: Option<String>,
    pub body: Vec<String>,
}

/// Parsed log document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Content lines before the first block, preserved verbatim.
    pub preamble: Vec<String>,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Parse persisted text into blocks.
    ///
    /// Tolerant by design: a header opens a block even without a
    /// preceding separator or blank line (legacy documents), blank
    /// lines are structural and dropped, and anything unrecognized is
    /// kept as preamble or block body.
    pub fn parse(text: &str) -> Document {
        let mut doc = Document::default();
        let mut current: Option<Block> = None;
        let mut lines = text.lines().peekable();

        while let Some(line) = lines.next() {
            if line == SEPARATOR {
                if let Some(block) = current.take() {
                    doc.blocks.push(block);
                }
                continue;
            }

            if is_header(line) {
                if let Some(block) = current.take() {
                    doc.blocks.push(block);
                }
                let path_line = match lines.peek() {
                    Some(next) if next.starts_with("> ") => {
                        lines.next().map(|l| l.to_string())
                    }
                    _ => None,
                };
                current = Some(Block {
                    header: line.to_string(),
                    path_line,
                    body: Vec::new(),
                });
                continue;
            }

            if line.is_empty() {
                continue;
            }

            match current.as_mut() {
                Some(block) => block.body.push(line.to_string()),
                None => doc.preamble.push(line.to_string()),
            }
        }

        if let Some(block) = current.take() {
            doc.blocks.push(block);
        }

        doc
    }

    /// Canonical serialization: one blank line between blocks, one
    /// separator per block, exactly one trailing newline.
    pub fn render(&self) -> String {
        let mut out: Vec<&str> = Vec::new();
        for line in &self.preamble {
            out.push(line);
        }
        for block in &self.blocks {
            if !out.is_empty() {
                out.push("");
            }
            out.push(SEPARATOR);
            out.push(&block.header);
            if let Some(path_line) = &block.path_line {
                out.push(path_line);
            }
            for line in &block.body {
                out.push(line);
            }
        }

        if out.is_empty() {
            return String::new();
        }

        let mut text = out.join("\n");
        text.push('\n');
        text
    }

    /// Load and parse the document; a missing file is an empty document.
    pub fn load(path: &Path) -> Result<Document> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Document::parse(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Document::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Render and write the whole document in a single write.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }

    /// Index of the first block whose header text equals `header`.
    pub fn find_block(&self, header: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.header == header)
    }
}

fn is_header(line: &str) -> bool {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    hashes > 0 && line.as_bytes().get(hashes) == Some(&b' ') && line.len() > hashes + 1
}
