//! Attribute-name resolution.

use crate::registry::AliasMap;
use once_cell::sync::Lazy;
use trellis_core::AttributeKey;

const CANONICAL: &[(&str, AttributeKey)] = &[
    ("gridx", AttributeKey::Column),
    ("gridy", AttributeKey::Row),
    ("gridwidth", AttributeKey::ColumnSpan),
    ("gridheight", AttributeKey::RowSpan),
    ("weightx", AttributeKey::WeightX),
    ("weighty", AttributeKey::WeightY),
    ("ipadx", AttributeKey::PadX),
    ("ipady", AttributeKey::PadY),
    ("fill", AttributeKey::Fill),
    ("anchor", AttributeKey::Anchor),
    ("insets", AttributeKey::Margins),
    ("pad", AttributeKey::Padding),
    ("valign", AttributeKey::VerticalAlign),
    ("cellspacing", AttributeKey::CellSpacing),
    // Descriptive spellings
    ("column", AttributeKey::Column),
    ("row", AttributeKey::Row),
    ("column_span", AttributeKey::ColumnSpan),
    ("row_span", AttributeKey::RowSpan),
    ("weight_x", AttributeKey::WeightX),
    ("weight_y", AttributeKey::WeightY),
    ("pad_x", AttributeKey::PadX),
    ("pad_y", AttributeKey::PadY),
    ("margins", AttributeKey::Margins),
    ("padding", AttributeKey::Padding),
    ("vertical_align", AttributeKey::VerticalAlign),
    ("cell_spacing", AttributeKey::CellSpacing),
];

const ALIASES: &[(&str, &str)] = &[
    ("x", "gridx"),
    ("gx", "gridx"),
    ("y", "gridy"),
    ("gy", "gridy"),
    ("w", "gridwidth"),
    ("gw", "gridwidth"),
    ("cols", "gridwidth"),
    ("colspan", "gridwidth"),
    ("h", "gridheight"),
    ("gh", "gridheight"),
    ("rows", "gridheight"),
    ("rowspan", "gridheight"),
    ("wx", "weightx"),
    ("wy", "weighty"),
    ("px", "ipadx"),
    ("py", "ipady"),
    ("f", "fill"),
    ("a", "anchor"),
    ("align", "anchor"),
    ("va", "valign"),
    ("i", "insets"),
    ("p", "pad"),
    ("ipad", "pad"),
    ("cellpadding", "pad"),
];

static ATTRIBUTES: Lazy<AliasMap<AttributeKey>> =
    Lazy::new(|| AliasMap::with_canonical(CANONICAL).aliases(ALIASES));

/// Resolve an attribute name or alias to its canonical key.
///
/// Unknown names resolve to `None`; callers skip them so that newer
/// attribute vocabularies degrade gracefully.
pub fn resolve_attribute(name: &str) -> Option<AttributeKey> {
    ATTRIBUTES.get(name)
}

/// Every attribute name the resolver understands.
pub fn attribute_names() -> impl Iterator<Item = &'static str> {
    ATTRIBUTES.names()
}
