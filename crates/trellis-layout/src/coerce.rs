//! Conversion of loosely typed host values into constraint fields.
//!
//! Every function returns `None` when the input cannot be coerced; the
//! caller then leaves the target field as it was.

use trellis_core::{Anchor, Fill, Insets, RawValue, Symbol};
use trellis_resolver::Resolved;

/// How a single scalar is spread over the four sides of an [`Insets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsetsMode {
    /// A scalar applies to every side
    #[default]
    Uniform,
    /// A scalar applies to the bottom and right sides only
    CellSpacing,
}

/// Coerce to an integer.
pub fn to_int(value: Resolved<'_>) -> Option<i32> {
    match value {
        Resolved::Constant(symbol) => Some(symbol.code()),
        Resolved::Raw(raw) => raw_int(raw),
    }
}

/// Coerce to a real number.
pub fn to_real(value: Resolved<'_>) -> Option<f64> {
    match value {
        Resolved::Constant(symbol) => Some(symbol.code().into()),
        Resolved::Raw(RawValue::Int(n)) => Some(*n as f64),
        Resolved::Raw(RawValue::Float(f)) => Some(*f),
        Resolved::Raw(RawValue::Str(s) | RawValue::Symbol(s)) => s.trim().parse().ok(),
        Resolved::Raw(_) => None,
    }
}

/// Coerce to a fill mode, by constant name or numeric code.
pub fn to_fill(value: Resolved<'_>) -> Option<Fill> {
    match value {
        Resolved::Constant(Symbol::Fill(fill)) => Some(fill),
        other => to_int(other).and_then(Fill::from_code),
    }
}

/// Coerce to an anchor, by constant name or numeric code.
pub fn to_anchor(value: Resolved<'_>) -> Option<Anchor> {
    match value {
        Resolved::Constant(Symbol::Anchor(anchor)) => Some(anchor),
        other => to_int(other).and_then(Anchor::from_code),
    }
}

/// Coerce to insets using CSS-style shorthand for lists.
///
/// `nil` clears every side. Lists are truncated to four entries and
/// read as `[all]`, `[horizontal, vertical]`, `[top, horizontal, bottom]`
/// or `[top, right, bottom, left]`.
pub fn to_insets(value: Resolved<'_>, mode: InsetsMode) -> Option<Insets> {
    let scalar = match value {
        Resolved::Raw(RawValue::Nil) => return Some(Insets::ZERO),
        Resolved::Raw(RawValue::List(items)) => return Some(insets_from_list(items)),
        Resolved::Constant(symbol) => symbol.code(),
        Resolved::Raw(raw) => raw_int(raw)?,
    };
    Some(match mode {
        InsetsMode::Uniform => Insets::uniform(scalar),
        InsetsMode::CellSpacing => Insets::new(0, 0, scalar, scalar),
    })
}

/// Coerce to an `(x, y)` padding pair.
///
/// A scalar pads both axes; lists are truncated to two entries.
pub fn to_padding(value: Resolved<'_>) -> Option<(i32, i32)> {
    match value {
        Resolved::Raw(RawValue::Nil) => Some((0, 0)),
        Resolved::Raw(RawValue::List(items)) => Some(match list_ints::<2>(items).as_slice() {
            [] => (0, 0),
            [both] => (*both, *both),
            [x, y, ..] => (*x, *y),
        }),
        other => to_int(other).map(|n| (n, n)),
    }
}

fn insets_from_list(items: &[RawValue]) -> Insets {
    match list_ints::<4>(items).as_slice() {
        [] => Insets::ZERO,
        [all] => Insets::uniform(*all),
        [horizontal, vertical] => Insets::symmetric(*horizontal, *vertical),
        [top, horizontal, bottom] => Insets::new(*top, *horizontal, *bottom, *horizontal),
        [top, right, bottom, left, ..] => Insets::new(*top, *left, *bottom, *right),
    }
}

/// The first `N` list entries as integers; entries that do not parse are 0.
fn list_ints<const N: usize>(items: &[RawValue]) -> Vec<i32> {
    items
        .iter()
        .take(N)
        .map(|item| raw_int(item).unwrap_or(0))
        .collect()
}

fn raw_int(raw: &RawValue) -> Option<i32> {
    match raw {
        RawValue::Int(n) => Some((*n).clamp(i32::MIN.into(), i32::MAX.into()) as i32),
        RawValue::Float(f) => Some(*f as i32),
        RawValue::Str(s) | RawValue::Symbol(s) => parse_int(s),
        _ => None,
    }
}

/// Integer parse first, then a real parse truncated toward zero.
fn parse_int(s: &str) -> Option<i32> {
    s.parse::<i32>()
        .ok()
        .or_else(|| s.trim().parse::<f64>().ok().map(|f| f as i32))
}
