//! Board Layer
//!
//! Two-column board state for proposal composition: a staging column of
//! available blocks and a composed document column with a fixed template.

mod drag;
mod placement;
mod proposal_board;
mod template;


pub use drag::{ColumnId, DropLocation, DropResult, MoveOutcome};
pub use placement::{can_move_to_left, can_move_to_right};
pub use proposal_board::ProposalBoard;
pub use template::enforce_template;
