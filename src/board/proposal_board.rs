//! Proposal Board
//!
//! Owns the two columns of the proposal editor and applies drop events
//! atomically: a move either fully commits or leaves both columns
//! untouched.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::domain::{first_duplicate_id, Block, BlockKind, DomainError, DomainResult};

use super::drag::{ColumnId, DropResult, MoveOutcome};
use super::placement::{can_move_to_left, can_move_to_right};
use super::template::enforce_template;

/// Two-column board state for one proposal editing session
///
/// The left column holds blocks available for composition in user-chosen
/// order; the right column is the composed document and always satisfies
/// the canonical template after any committed move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalBoard {
    left: Vec<Block>,
    right: Vec<Block>,
}

impl ProposalBoard {
    /// Create a board from initial column contents.
    ///
    /// The document column must contain exactly one header and exactly one
    /// price block, anchors may not appear in the staging column, and block
    /// ids must be unique across both columns. The document is normalized
    /// to canonical template order before the board is returned.
    pub fn new(left: Vec<Block>, right: Vec<Block>) -> DomainResult<Self> {
        let headers = right.iter().filter(|b| b.kind() == BlockKind::Header).count();
        if headers != 1 {
            return Err(DomainError::InvalidInput(format!(
                "document must contain exactly one header block, found {}",
                headers
            )));
        }
        let prices = right.iter().filter(|b| b.kind() == BlockKind::Price).count();
        if prices != 1 {
            return Err(DomainError::InvalidInput(format!(
                "document must contain exactly one price block, found {}",
                prices
            )));
        }
        if let Some(anchor) = left.iter().find(|b| b.is_anchor()) {
            return Err(DomainError::InvalidInput(format!(
                "{} block '{}' belongs to the document column",
                anchor.kind().as_str(),
                anchor.id()
            )));
        }

        if let Some(id) = first_duplicate_id(left.iter().chain(right.iter())) {
            return Err(DomainError::Conflict(format!("duplicate block id: {}", id)));
        }

        Ok(Self {
            left,
            right: enforce_template(right),
        })
    }

    /// Blocks available for composition (staging column)
    pub fn left(&self) -> &[Block] {
        &self.left
    }

    /// Composed document blocks, in canonical template order
    pub fn right(&self) -> &[Block] {
        &self.right
    }

    /// Sum of `price * quantity` over the document's need blocks
    pub fn total_price(&self) -> f64 {
        self.right.iter().filter_map(|b| b.line_total()).sum()
    }

    /// Apply a drop event.
    ///
    /// Inadmissible moves are normal user input, not failures: they return
    /// [`MoveOutcome::Rejected`] and both columns are left untouched. A
    /// destination index past the end of a column is clamped to the last
    /// insertion position; an out-of-range source index is rejected.
    pub fn apply_drop(&mut self, event: DropResult) -> MoveOutcome {
        let destination = match event.destination {
            Some(destination) => destination,
            None => {
                trace!("block released outside any column, ignoring");
                return MoveOutcome::Rejected;
            }
        };
        let source = event.source;

        if source.index >= self.column(source.column).len() {
            debug!(
                "drop rejected: no block at {:?} index {}",
                source.column, source.index
            );
            return MoveOutcome::Rejected;
        }

        if source.column == destination.column {
            self.reorder_within(source.column, source.index, destination.index)
        } else {
            self.transfer(source.column, source.index, destination.index)
        }
    }

    fn column(&self, id: ColumnId) -> &[Block] {
        match id {
            ColumnId::Left => &self.left,
            ColumnId::Right => &self.right,
        }
    }

    /// Reposition a block within one column. Reorders inside the document
    /// are not validated: enforcement snaps the result back to canonical
    /// order, so an impossible placement simply has no visible effect.
    fn reorder_within(&mut self, column: ColumnId, from: usize, to: usize) -> MoveOutcome {
        let mut working = self.column(column).to_vec();
        let block = working.remove(from);
        let at = to.min(working.len());
        trace!(
            "reordering {} block '{}' to {:?} index {}",
            block.kind().as_str(),
            block.id(),
            column,
            at
        );
        working.insert(at, block);

        match column {
            ColumnId::Left => self.left = working,
            ColumnId::Right => self.right = enforce_template(working),
        }
        MoveOutcome::Committed
    }

    /// Move a block across columns. All-or-nothing: placement is checked
    /// against the destination before anything is removed from the source.
    fn transfer(&mut self, source_column: ColumnId, from: usize, to: usize) -> MoveOutcome {
        match source_column {
            ColumnId::Left => {
                let at = to.min(self.right.len());
                let block = &self.left[from];
                if !can_move_to_right(block, &self.right, at) {
                    debug!(
                        "drop rejected: {} block '{}' not admissible at document index {}",
                        block.kind().as_str(),
                        block.id(),
                        at
                    );
                    return MoveOutcome::Rejected;
                }

                let mut left = self.left.clone();
                let block = left.remove(from);
                let mut right = self.right.clone();
                right.insert(at, block);

                self.left = left;
                self.right = enforce_template(right);
            }
            ColumnId::Right => {
                let block = &self.right[from];
                if !can_move_to_left(block) {
                    debug!(
                        "drop rejected: {} block '{}' cannot leave the document",
                        block.kind().as_str(),
                        block.id()
                    );
                    return MoveOutcome::Rejected;
                }

                let mut right = self.right.clone();
                let block = right.remove(from);
                let mut left = self.left.clone();
                let at = to.min(left.len());
                left.insert(at, block);

                // The document lost a block, restore canonical order
                self.right = enforce_template(right);
                self.left = left;
            }
        }
        MoveOutcome::Committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Block {
        Block::header("h".to_string(), "Proposal".to_string())
    }

    fn price() -> Block {
        Block::price("p".to_string(), "Total".to_string())
    }

    fn need(id: &str, price: f64, quantity: u32) -> Block {
        Block::need(
            id.to_string(),
            format!("Need {}", id),
            String::new(),
            price,
            quantity,
        )
    }

    #[test]
    fn test_new_requires_exactly_one_header() {
        let err = ProposalBoard::new(vec![], vec![price()]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let two_headers = vec![
            header(),
            Block::header("h2".to_string(), "Again".to_string()),
            price(),
        ];
        let err = ProposalBoard::new(vec![], two_headers).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_new_requires_exactly_one_price() {
        let err = ProposalBoard::new(vec![], vec![header()]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_new_rejects_anchor_in_staging_column() {
        let err = ProposalBoard::new(
            vec![Block::price("p2".to_string(), "Loose".to_string())],
            vec![header(), price()],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let err = ProposalBoard::new(
            vec![need("n1", 100.0, 1), need("n1", 200.0, 1)],
            vec![header(), price()],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn test_new_normalizes_document_order() {
        let board = ProposalBoard::new(vec![], vec![price(), need("n1", 100.0, 1), header()])
            .expect("board should build");
        let kinds: Vec<BlockKind> = board.right().iter().map(|b| b.kind()).collect();
        assert_eq!(
            kinds,
            vec![BlockKind::Header, BlockKind::Need, BlockKind::Price]
        );
    }

    #[test]
    fn test_total_price_sums_needs() {
        let board = ProposalBoard::new(
            vec![],
            vec![header(), need("n1", 100.0, 2), need("n2", 50.0, 1), price()],
        )
        .expect("board should build");
        assert_eq!(board.total_price(), 250.0);
    }
}
