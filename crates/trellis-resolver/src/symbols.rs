//! Symbolic-constant resolution.

use crate::registry::AliasMap;
use once_cell::sync::Lazy;
use trellis_core::{Anchor, Fill, Symbol};

const CANONICAL: &[(&str, Symbol)] = &[
    ("relative", Symbol::Relative),
    ("remainder", Symbol::Remainder),
    ("none", Symbol::Fill(Fill::None)),
    ("both", Symbol::Fill(Fill::Both)),
    ("horizontal", Symbol::Fill(Fill::Horizontal)),
    ("vertical", Symbol::Fill(Fill::Vertical)),
    ("center", Symbol::Anchor(Anchor::Center)),
    ("north", Symbol::Anchor(Anchor::North)),
    ("northeast", Symbol::Anchor(Anchor::NorthEast)),
    ("east", Symbol::Anchor(Anchor::East)),
    ("southeast", Symbol::Anchor(Anchor::SouthEast)),
    ("south", Symbol::Anchor(Anchor::South)),
    ("southwest", Symbol::Anchor(Anchor::SouthWest)),
    ("west", Symbol::Anchor(Anchor::West)),
    ("northwest", Symbol::Anchor(Anchor::NorthWest)),
    ("page_start", Symbol::Anchor(Anchor::PageStart)),
    ("page_end", Symbol::Anchor(Anchor::PageEnd)),
    ("line_start", Symbol::Anchor(Anchor::LineStart)),
    ("line_end", Symbol::Anchor(Anchor::LineEnd)),
    ("first_line_start", Symbol::Anchor(Anchor::FirstLineStart)),
    ("first_line_end", Symbol::Anchor(Anchor::FirstLineEnd)),
    ("last_line_start", Symbol::Anchor(Anchor::LastLineStart)),
    ("last_line_end", Symbol::Anchor(Anchor::LastLineEnd)),
    ("baseline", Symbol::Anchor(Anchor::Baseline)),
    ("baseline_leading", Symbol::Anchor(Anchor::BaselineLeading)),
    ("baseline_trailing", Symbol::Anchor(Anchor::BaselineTrailing)),
    ("above_baseline", Symbol::Anchor(Anchor::AboveBaseline)),
    ("above_baseline_leading", Symbol::Anchor(Anchor::AboveBaselineLeading)),
    ("above_baseline_trailing", Symbol::Anchor(Anchor::AboveBaselineTrailing)),
    ("below_baseline", Symbol::Anchor(Anchor::BelowBaseline)),
    ("below_baseline_leading", Symbol::Anchor(Anchor::BelowBaselineLeading)),
    ("below_baseline_trailing", Symbol::Anchor(Anchor::BelowBaselineTrailing)),
];

const ALIASES: &[(&str, &str)] = &[
    ("n", "north"),
    ("s", "south"),
    ("e", "east"),
    ("w", "west"),
    ("c", "center"),
    ("ne", "northeast"),
    ("se", "southeast"),
    ("nw", "northwest"),
    ("sw", "southwest"),
    ("top", "north"),
    ("bottom", "south"),
    ("right", "east"),
    ("left", "west"),
    ("middle", "center"),
    ("h", "horizontal"),
    ("v", "vertical"),
    ("rel", "relative"),
    ("rem", "remainder"),
    ("bl", "baseline"),
    ("abl", "above_baseline"),
    ("bbl", "below_baseline"),
];

static SYMBOLS: Lazy<AliasMap<Symbol>> =
    Lazy::new(|| AliasMap::with_canonical(CANONICAL).aliases(ALIASES));

/// Resolve a constant name or alias (e.g. `"ne"`, `"both"`, `"rem"`).
pub fn resolve_symbol(name: &str) -> Option<Symbol> {
    SYMBOLS.get(name)
}

/// Every constant name the resolver understands.
pub fn symbol_names() -> impl Iterator<Item = &'static str> {
    SYMBOLS.names()
}
