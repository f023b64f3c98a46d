//! Drag Event Types
//!
//! Mirrors the drop-result event shape of a drag-and-drop front end:
//! a source location, and a destination that is absent when the block
//! was released outside any column.

use serde::{Deserialize, Serialize};

/// Identifies one of the two board columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    /// Staging column of available blocks, user-ordered
    Left,
    /// Composed document column, template-ordered
    Right,
}

/// A position within one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    pub column: ColumnId,
    pub index: usize,
}

impl DropLocation {
    pub fn new(column: ColumnId, index: usize) -> Self {
        Self { column, index }
    }
}

/// Drop-result event produced by the drag front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropResult {
    pub source: DropLocation,
    /// `None` when the block was released outside any column
    pub destination: Option<DropLocation>,
}

impl DropResult {
    pub fn new(source: DropLocation, destination: Option<DropLocation>) -> Self {
        Self {
            source,
            destination,
        }
    }
}

/// Outcome of applying a drop event
///
/// A rejected move is a normal occurrence (the user attempted an invalid
/// drag), not an error: the board is left untouched and the front end
/// simply snaps the block back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Both columns were replaced with the post-move state
    Committed,
    /// The move was inadmissible; neither column changed
    Rejected,
}

impl MoveOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, MoveOutcome::Committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_id_serialization() {
        assert_eq!(serde_json::to_string(&ColumnId::Left).unwrap(), "\"left\"");
        assert_eq!(serde_json::to_string(&ColumnId::Right).unwrap(), "\"right\"");
    }

    #[test]
    fn test_drop_result_without_destination() {
        let json = r#"{"source":{"column":"left","index":0},"destination":null}"#;
        let event: DropResult = serde_json::from_str(json).unwrap();
        assert_eq!(event.source.column, ColumnId::Left);
        assert!(event.destination.is_none());
    }
}
