//! Typed constraint values for grid cells.

/// Position/span value meaning "relative to the previous cell".
///
/// As a column or row this is the "not set" marker that triggers
/// auto-placement. As a span it means "up to the next-to-last column".
pub const RELATIVE: i32 = -1;

/// Span value meaning "consume every remaining column".
pub const REMAINDER: i32 = 0;

/// Highest column a cell can occupy. Larger columns and spans are clamped.
pub const MAX_COLUMN: i32 = 4095;

/// How a component is resized to fill its display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Fill {
    /// Keep the component's preferred size
    #[default]
    None,
    /// Grow in both directions
    Both,
    /// Grow horizontally only
    Horizontal,
    /// Grow vertically only
    Vertical,
}

impl Fill {
    /// Every fill mode, in code order.
    pub const ALL: [Fill; 4] = [Fill::None, Fill::Both, Fill::Horizontal, Fill::Vertical];

    /// Numeric code understood by layout hosts.
    pub const fn code(self) -> i32 {
        match self {
            Fill::None => 0,
            Fill::Both => 1,
            Fill::Horizontal => 2,
            Fill::Vertical => 3,
        }
    }

    /// Look up a fill mode by its numeric code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|fill| fill.code() == code)
    }
}

/// Where a component sits inside a display area larger than itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Anchor {
    // Absolute
    #[default]
    Center,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    // Orientation relative
    PageStart,
    PageEnd,
    LineStart,
    LineEnd,
    FirstLineStart,
    FirstLineEnd,
    LastLineStart,
    LastLineEnd,
    // Baseline relative
    Baseline,
    BaselineLeading,
    BaselineTrailing,
    AboveBaseline,
    AboveBaselineLeading,
    AboveBaselineTrailing,
    BelowBaseline,
    BelowBaselineLeading,
    BelowBaselineTrailing,
}

impl Anchor {
    /// Every anchor, in code order.
    pub const ALL: [Anchor; 26] = [
        Anchor::Center,
        Anchor::North,
        Anchor::NorthEast,
        Anchor::East,
        Anchor::SouthEast,
        Anchor::South,
        Anchor::SouthWest,
        Anchor::West,
        Anchor::NorthWest,
        Anchor::PageStart,
        Anchor::PageEnd,
        Anchor::LineStart,
        Anchor::LineEnd,
        Anchor::FirstLineStart,
        Anchor::FirstLineEnd,
        Anchor::LastLineStart,
        Anchor::LastLineEnd,
        Anchor::Baseline,
        Anchor::BaselineLeading,
        Anchor::BaselineTrailing,
        Anchor::AboveBaseline,
        Anchor::AboveBaselineLeading,
        Anchor::AboveBaselineTrailing,
        Anchor::BelowBaseline,
        Anchor::BelowBaselineLeading,
        Anchor::BelowBaselineTrailing,
    ];

    /// Numeric code understood by layout hosts.
    pub const fn code(self) -> i32 {
        match self {
            Anchor::Center => 10,
            Anchor::North => 11,
            Anchor::NorthEast => 12,
            Anchor::East => 13,
            Anchor::SouthEast => 14,
            Anchor::South => 15,
            Anchor::SouthWest => 16,
            Anchor::West => 17,
            Anchor::NorthWest => 18,
            Anchor::PageStart => 19,
            Anchor::PageEnd => 20,
            Anchor::LineStart => 21,
            Anchor::LineEnd => 22,
            Anchor::FirstLineStart => 23,
            Anchor::FirstLineEnd => 24,
            Anchor::LastLineStart => 25,
            Anchor::LastLineEnd => 26,
            Anchor::Baseline => 0x100,
            Anchor::BaselineLeading => 0x200,
            Anchor::BaselineTrailing => 0x300,
            Anchor::AboveBaseline => 0x400,
            Anchor::AboveBaselineLeading => 0x500,
            Anchor::AboveBaselineTrailing => 0x600,
            Anchor::BelowBaseline => 0x700,
            Anchor::BelowBaselineLeading => 0x800,
            Anchor::BelowBaselineTrailing => 0x900,
        }
    }

    /// Look up an anchor by its numeric code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|anchor| anchor.code() == code)
    }
}

/// Space kept around a component, per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Insets {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create insets in top, left, bottom, right order.
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self { top, left, bottom, right }
    }

    /// Same value on every side.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Horizontal value on left/right, vertical value on top/bottom.
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

/// Placement attributes of a single grid cell.
///
/// Columns and rows are zero-based. Negative positions mean "not set" and
/// spans of [`REMAINDER`] or [`RELATIVE`] carry positional meaning instead
/// of a literal width.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintSpec {
    pub column: i32,
    pub row: i32,
    pub column_span: i32,
    pub row_span: i32,
    pub weight_x: f64,
    pub weight_y: f64,
    pub pad_x: i32,
    pub pad_y: i32,
    pub fill: Fill,
    pub anchor: Anchor,
    pub margins: Insets,
}

impl Default for ConstraintSpec {
    fn default() -> Self {
        Self {
            column: RELATIVE,
            row: RELATIVE,
            column_span: 1,
            row_span: 1,
            weight_x: 0.0,
            weight_y: 0.0,
            pad_x: 0,
            pad_y: 0,
            fill: Fill::None,
            anchor: Anchor::Center,
            margins: Insets::ZERO,
        }
    }
}

impl ConstraintSpec {
    /// Create a spec with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place at an explicit column and row.
    pub fn at(mut self, column: i32, row: i32) -> Self {
        self.column = column;
        self.row = row;
        self
    }

    /// Set column and row spans.
    pub fn spanning(mut self, columns: i32, rows: i32) -> Self {
        self.column_span = columns;
        self.row_span = rows;
        self
    }

    /// Set horizontal and vertical weights.
    pub fn weighted(mut self, x: f64, y: f64) -> Self {
        self.weight_x = x;
        self.weight_y = y;
        self
    }

    /// Set the fill mode.
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Set the anchor.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the margins.
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    /// Set internal padding.
    pub fn with_padding(mut self, pad_x: i32, pad_y: i32) -> Self {
        self.pad_x = pad_x;
        self.pad_y = pad_y;
        self
    }

    /// Whether the column is unset and the cell should be auto-placed.
    pub fn is_auto_column(&self) -> bool {
        self.column < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec() {
        let spec = ConstraintSpec::default();
        assert_eq!(spec.column, RELATIVE);
        assert_eq!(spec.row, RELATIVE);
        assert_eq!(spec.column_span, 1);
        assert_eq!(spec.row_span, 1);
        assert_eq!(spec.fill, Fill::None);
        assert_eq!(spec.anchor, Anchor::Center);
        assert_eq!(spec.margins, Insets::ZERO);
        assert!(spec.is_auto_column());
    }

    #[test]
    fn test_fill_codes() {
        for fill in Fill::ALL {
            assert_eq!(Fill::from_code(fill.code()), Some(fill));
        }
        assert_eq!(Fill::from_code(11), None);
    }

    #[test]
    fn test_anchor_codes() {
        assert_eq!(Anchor::from_code(11), Some(Anchor::North));
        assert_eq!(Anchor::from_code(0x700), Some(Anchor::BelowBaseline));
        assert_eq!(Anchor::from_code(9), None);
    }

    #[test]
    fn test_insets_symmetric() {
        let insets = Insets::symmetric(5, 6);
        assert_eq!(insets, Insets::new(6, 5, 6, 5));
    }

    #[test]
    fn test_builder() {
        let spec = ConstraintSpec::new()
            .at(2, 3)
            .spanning(2, 1)
            .weighted(0.5, 1.0)
            .with_fill(Fill::Both);
        assert_eq!((spec.column, spec.row), (2, 3));
        assert_eq!(spec.column_span, 2);
        assert!(!spec.is_auto_column());
    }
}
