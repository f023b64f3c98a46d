//! Document Template Enforcement
//!
//! Reorders document blocks into the canonical template:
//! header, description?, need*, price, paragraph*, other*.

use crate::domain::{Block, BlockKind};

/// Index of the first block of the given kind
pub(crate) fn first_index_of(blocks: &[Block], kind: BlockKind) -> Option<usize> {
    blocks.iter().position(|b| b.kind() == kind)
}

/// Index of the last block of the given kind
pub(crate) fn last_index_of(blocks: &[Block], kind: BlockKind) -> Option<usize> {
    blocks.iter().rposition(|b| b.kind() == kind)
}

/// Reorder blocks into canonical template order.
///
/// Stable partition by kind: needs, paragraphs and remaining blocks keep
/// their relative order. For the singleton kinds (header, description,
/// price) the first occurrence wins and any surplus duplicate is dropped;
/// the placement rules reject duplicates before they reach the document,
/// so the drop path only fires on malformed input.
///
/// Idempotent: the output depends only on block kinds and relative order,
/// never on absolute positions.
pub fn enforce_template(blocks: Vec<Block>) -> Vec<Block> {
    let total = blocks.len();
    let mut header = None;
    let mut description = None;
    let mut price = None;
    let mut needs = Vec::new();
    let mut paragraphs = Vec::new();
    let mut others = Vec::new();

    for block in blocks {
        match block.kind() {
            BlockKind::Header => {
                if header.is_none() {
                    header = Some(block);
                }
            }
            BlockKind::Description => {
                if description.is_none() {
                    description = Some(block);
                }
            }
            BlockKind::Price => {
                if price.is_none() {
                    price = Some(block);
                }
            }
            BlockKind::Need => needs.push(block),
            BlockKind::Paragraph => paragraphs.push(block),
            BlockKind::Other => others.push(block),
        }
    }

    let mut result = Vec::with_capacity(total);
    result.extend(header);
    result.extend(description);
    result.extend(needs);
    result.extend(price);
    result.extend(paragraphs);
    result.extend(others);
    result
}
