//! Propale Composer
//!
//! Constrained two-column reordering engine for commercial proposal
//! composition. A board holds a staging column of available content blocks
//! and a document column that always satisfies the canonical template
//! `header, description?, need*, price, paragraph*, other*`. Drop events
//! from a drag-and-drop front end are applied atomically; inadmissible
//! moves are silent no-ops and the block snaps back.
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - board: Two-column board state, placement rules and template enforcement

pub mod board;
pub mod domain;

pub use board::{
    can_move_to_left, can_move_to_right, enforce_template, ColumnId, DropLocation, DropResult,
    MoveOutcome, ProposalBoard,
};
pub use domain::{first_duplicate_id, Block, BlockKind, DomainError, DomainResult, Entity};
