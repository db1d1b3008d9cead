//! Merging a section chain into the document
//!
//! Ensures every section of the desired chain exists, creating only the
//! missing suffix, and lands the new bullet under the target section.

use crate::document::{Block, Document};
use crate::section::Section;
use tracing::debug;

/// Merge `chain` into `doc` and insert `bullet` under the deepest section.
///
/// Matching walks the chain from depth 1 and stops at the first header
/// not present in the document; sections past a missing ancestor are
/// never searched independently, even if their header text happens to
/// appear elsewhere. Headers compare by full text equality, depth
/// markers included.
pub fn merge_entry(doc: &mut Document, chain: &[Section], bullet: &str) {
    // Longest-prefix match over the chain.
    let mut matched: Option<(usize, usize)> = None;
    for (chain_idx, section) in chain.iter().enumerate() {
        match doc.find_block(&section.header) {
            Some(block_idx) => matched = Some((chain_idx, block_idx)),
            None => break,
        }
    }

    match matched {
        Some((chain_idx, block_idx)) if chain_idx == chain.len() - 1 => {
            // Whole chain present: new bullet goes first among siblings.
            debug!(header = %chain[chain_idx].header, "target section exists");
            doc.blocks[block_idx].body.insert(0, bullet.to_string());
        }
        Some((chain_idx, block_idx)) => {
            // Missing suffix goes directly after the deepest matched
            // ancestor's block, before whatever followed it.
            debug!(
                matched = %chain[chain_idx].header,
                missing = chain.len() - chain_idx - 1,
                "extending partial chain"
            );
            let suffix = new_blocks(&chain[chain_idx + 1..], bullet);
            doc.blocks.splice(block_idx + 1..block_idx + 1, suffix);
        }
        None => {
            debug!(sections = chain.len(), "appending new chain");
            doc.blocks.extend(new_blocks(chain, bullet));
        }
    }
}

/// Blocks for a run of new sections; only the last one gets the bullet.
fn new_blocks(sections: &[Section], bullet: &str) -> Vec<Block> {
    let last = sections.len().saturating_sub(1);
    sections
        .iter()
        .enumerate()
        .map(|(idx, section)| Block {
            header: section.header.clone(),
            path_line: Some(section.path_line.clone()),
            body: if idx == last {
                vec![bullet.to_string()]
            } else {
                Vec::new()
            },
        })
        .collect()
}
