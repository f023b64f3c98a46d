//! Block Entity
//!
//! Content blocks composing a commercial proposal document. A document
//! follows a fixed template: header, optional description, needs, price,
//! paragraphs, then any remaining blocks.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Block kind determines placement rules within the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Document title, always the first block
    Header,
    /// Introductory text, directly after the header
    Description,
    /// Priced line item for a client requirement
    Need,
    /// Totals block, closes the need section
    Price,
    /// Free-text narrative after pricing
    Paragraph,
    /// Any remaining content, ordered last
    Other,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Description => "description",
            BlockKind::Need => "need",
            BlockKind::Price => "price",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "header" => BlockKind::Header,
            "description" => BlockKind::Description,
            "need" => BlockKind::Need,
            "price" => BlockKind::Price,
            "paragraph" => BlockKind::Paragraph,
            _ => BlockKind::Other,
        }
    }

    /// Header and price are structural anchors of the document: they are
    /// created with it and can never be dragged
    pub fn is_anchor(&self) -> bool {
        matches!(self, BlockKind::Header | BlockKind::Price)
    }
}

/// A content block of a proposal document
///
/// Closed sum type: each variant carries exactly the fields its kind uses,
/// so a need always has a price and quantity and a paragraph never does.
/// Rendering of block content is a front-end concern; blocks carry display
/// data and toggles only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Header {
        id: String,
        name: String,
    },
    Description {
        id: String,
        name: String,
        body: String,
        show_name: bool,
    },
    Need {
        id: String,
        name: String,
        description: String,
        price: f64,
        quantity: u32,
        show_name: bool,
        show_price: bool,
        show_quantity: bool,
    },
    Price {
        id: String,
        name: String,
    },
    Paragraph {
        id: String,
        name: String,
        body: String,
        show_name: bool,
    },
    Other {
        id: String,
        name: String,
    },
}

impl Block {
    /// Create a header block
    pub fn header(id: String, name: String) -> Self {
        Block::Header { id, name }
    }

    /// Create a description block (name shown by default)
    pub fn description(id: String, name: String, body: String) -> Self {
        Block::Description {
            id,
            name,
            body,
            show_name: true,
        }
    }

    /// Create a need block with all display toggles on
    pub fn need(id: String, name: String, description: String, price: f64, quantity: u32) -> Self {
        Block::Need {
            id,
            name,
            description,
            price,
            quantity,
            show_name: true,
            show_price: true,
            show_quantity: true,
        }
    }

    /// Create a price block
    pub fn price(id: String, name: String) -> Self {
        Block::Price { id, name }
    }

    /// Create a paragraph block (name shown by default)
    pub fn paragraph(id: String, name: String, body: String) -> Self {
        Block::Paragraph {
            id,
            name,
            body,
            show_name: true,
        }
    }

    /// Create a block for remaining content
    pub fn other(id: String, name: String) -> Self {
        Block::Other { id, name }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Header { .. } => BlockKind::Header,
            Block::Description { .. } => BlockKind::Description,
            Block::Need { .. } => BlockKind::Need,
            Block::Price { .. } => BlockKind::Price,
            Block::Paragraph { .. } => BlockKind::Paragraph,
            Block::Other { .. } => BlockKind::Other,
        }
    }

    /// Returns the block's unique identifier
    pub fn id(&self) -> &str {
        match self {
            Block::Header { id, .. }
            | Block::Description { id, .. }
            | Block::Need { id, .. }
            | Block::Price { id, .. }
            | Block::Paragraph { id, .. }
            | Block::Other { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Block::Header { name, .. }
            | Block::Description { name, .. }
            | Block::Need { name, .. }
            | Block::Price { name, .. }
            | Block::Paragraph { name, .. }
            | Block::Other { name, .. } => name,
        }
    }

    /// Whether this block is a structural anchor (header or price)
    pub fn is_anchor(&self) -> bool {
        self.kind().is_anchor()
    }

    /// `price * quantity` for a need, `None` for every other kind
    pub fn line_total(&self) -> Option<f64> {
        match self {
            Block::Need {
                price, quantity, ..
            } => Some(price * f64::from(*quantity)),
            _ => None,
        }
    }
}

impl Entity for Block {
    type Id = String;

    fn id(&self) -> String {
        Block::id(self).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_creation() {
        let need = Block::need(
            "n1".to_string(),
            "Audit".to_string(),
            "Two-day security audit".to_string(),
            1200.0,
            2,
        );
        assert_eq!(need.id(), "n1");
        assert_eq!(need.name(), "Audit");
        assert_eq!(need.kind(), BlockKind::Need);
        assert!(!need.is_anchor());
        match &need {
            Block::Need { description, .. } => assert_eq!(description, "Two-day security audit"),
            _ => panic!("expected a need block"),
        }
    }

    #[test]
    fn test_anchor_kinds() {
        let header = Block::header("h".to_string(), "Proposal".to_string());
        let price = Block::price("p".to_string(), "Total".to_string());
        assert!(header.is_anchor());
        assert!(price.is_anchor());
        assert!(!Block::paragraph("x".to_string(), "Notes".to_string(), String::new()).is_anchor());
    }

    #[test]
    fn test_line_total() {
        let need = Block::need(
            "n1".to_string(),
            "Audit".to_string(),
            String::new(),
            1200.0,
            2,
        );
        assert_eq!(need.line_total(), Some(2400.0));
        assert_eq!(Block::header("h".to_string(), "P".to_string()).line_total(), None);
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(BlockKind::Need.as_str(), "need");
        assert_eq!(BlockKind::from_str("paragraph"), BlockKind::Paragraph);
        assert_eq!(BlockKind::from_str("unknown"), BlockKind::Other);
    }

    #[test]
    fn test_block_serde_tag() {
        let need = Block::need(
            "n1".to_string(),
            "Audit".to_string(),
            "Scoping workshop".to_string(),
            100.0,
            1,
        );
        let json = serde_json::to_value(&need).unwrap();
        assert_eq!(json["type"], "need");
        assert_eq!(json["id"], "n1");
        assert_eq!(json["description"], "Scoping workshop");
        assert_eq!(json["show_price"], true);

        let back: Block = serde_json::from_value(json).unwrap();
        assert_eq!(back, need);
    }
}
