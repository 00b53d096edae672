//! Canonical attribute keys and symbolic constants.

use crate::types::{Anchor, Fill, RELATIVE, REMAINDER};

/// Canonical identifier of a placement attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    Column,
    Row,
    ColumnSpan,
    RowSpan,
    WeightX,
    WeightY,
    PadX,
    PadY,
    Fill,
    Anchor,
    Margins,
    /// Sets both `PadX` and `PadY`
    Padding,
    /// Vertical part of the anchor
    VerticalAlign,
    /// Margins on the bottom and right sides only
    CellSpacing,
}

impl AttributeKey {
    /// Keys that are resolved together after all other attributes.
    pub fn is_alignment(self) -> bool {
        matches!(self, AttributeKey::Anchor | AttributeKey::VerticalAlign)
    }
}

/// A named constant usable as an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Relative,
    Remainder,
    Fill(Fill),
    Anchor(Anchor),
}

impl Symbol {
    /// Integer value of the constant when assigned to a numeric field.
    pub fn code(self) -> i32 {
        match self {
            Symbol::Relative => RELATIVE,
            Symbol::Remainder => REMAINDER,
            Symbol::Fill(fill) => fill.code(),
            Symbol::Anchor(anchor) => anchor.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_codes() {
        assert_eq!(Symbol::Relative.code(), -1);
        assert_eq!(Symbol::Remainder.code(), 0);
        assert_eq!(Symbol::Fill(Fill::Horizontal).code(), 2);
        assert_eq!(Symbol::Anchor(Anchor::SouthWest).code(), 16);
    }

    #[test]
    fn test_alignment_keys() {
        assert!(AttributeKey::Anchor.is_alignment());
        assert!(AttributeKey::VerticalAlign.is_alignment());
        assert!(!AttributeKey::Fill.is_alignment());
    }
}
