//! Block Placement Rules
//!
//! Pure admission checks for moving a block into a column at a target
//! index. Decisions have no side effects and never panic; an inadmissible
//! placement is simply reported as `false`.

use crate::domain::{Block, BlockKind};

use super::template::{first_index_of, last_index_of};

/// Whether `block` may be inserted into the document column at `index`.
///
/// `document` is the column's current contents and `index` an insertion
/// position in `0..=document.len()`. The rules keep the document template
/// intact by construction:
/// - a description goes directly after the header, and only one may exist;
/// - the first need goes directly after the description (or the header when
///   there is none); further needs may land anywhere in the need section up
///   to the price block;
/// - the first paragraph goes directly after the price block; further
///   paragraphs anywhere past it;
/// - header and price blocks never move, and remaining content cannot be
///   dragged into the document.
pub fn can_move_to_right(block: &Block, document: &[Block], index: usize) -> bool {
    match block.kind() {
        BlockKind::Description => {
            if first_index_of(document, BlockKind::Description).is_some() {
                return false;
            }
            match first_index_of(document, BlockKind::Header) {
                Some(header_idx) => index == header_idx + 1,
                None => false,
            }
        }
        BlockKind::Need => {
            let header_idx = match first_index_of(document, BlockKind::Header) {
                Some(idx) => idx,
                None => return false,
            };
            match last_index_of(document, BlockKind::Need) {
                None => {
                    let anchor = first_index_of(document, BlockKind::Description)
                        .unwrap_or(header_idx);
                    index == anchor + 1
                }
                Some(last_need_idx) => {
                    let bound = match first_index_of(document, BlockKind::Price) {
                        Some(price_idx) => price_idx.max(last_need_idx + 1),
                        None => last_need_idx + 1,
                    };
                    index > header_idx && index <= bound
                }
            }
        }
        BlockKind::Paragraph => {
            let price_idx = match first_index_of(document, BlockKind::Price) {
                Some(idx) => idx,
                None => return false,
            };
            match first_index_of(document, BlockKind::Paragraph) {
                None => index == price_idx + 1,
                Some(_) => index > price_idx,
            }
        }
        // Anchors never move; remaining content lives in the document only
        // if it was composed there, it cannot be dragged in
        BlockKind::Header | BlockKind::Price | BlockKind::Other => false,
    }
}

/// Whether `block` may be moved back to the staging column. Anchors
/// (header, price) never leave the document; everything else may.
pub fn can_move_to_left(block: &Block) -> bool {
    !block.is_anchor()
}
