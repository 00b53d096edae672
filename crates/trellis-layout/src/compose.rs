//! Composition of constraint specs from a base and raw overrides.

use crate::coerce::{self, InsetsMode};
use trellis_core::{AttributeKey, ConstraintSpec, Diagnostic, HostError, Overrides, RawValue, Symbol};
use trellis_resolver::{resolve_attribute_logged, resolve_symbol, resolve_value, Resolved};

/// A composed spec together with anything worth reporting about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Composed {
    pub spec: ConstraintSpec,
    pub diagnostics: Vec<Diagnostic>,
}

/// Clone `base` and apply `overrides` to the clone.
pub fn compose(base: &ConstraintSpec, overrides: &Overrides) -> Result<Composed, HostError> {
    let mut spec = base.clone();
    let diagnostics = apply(&mut spec, overrides)?;
    Ok(Composed { spec, diagnostics })
}

/// Apply `overrides` to `spec` in place.
///
/// Unknown attributes and values that fail to coerce are skipped. Anchor
/// and vertical alignment are applied last, after every other attribute.
pub fn apply(spec: &mut ConstraintSpec, overrides: &Overrides) -> Result<Vec<Diagnostic>, HostError> {
    let mut anchor = None;
    let mut vertical_align = None;

    for (key, value) in overrides.iter() {
        let Some(attribute) = resolve_attribute_logged(key.name()?) else {
            continue;
        };
        match attribute {
            AttributeKey::Anchor => anchor = Some(value),
            AttributeKey::VerticalAlign => vertical_align = Some(value),
            _ => assign(spec, attribute, resolve_value(value)),
        }
    }

    Ok(apply_alignment(spec, anchor, vertical_align))
}

/// Apply shorthand defaults: constants whose target field is inferred from
/// the constant itself, optionally followed by regular overrides.
///
/// Fill constants set `fill`, anchor constants set `anchor`; anything else
/// in `tokens` is skipped.
pub fn apply_shorthand(
    spec: &mut ConstraintSpec,
    tokens: &[RawValue],
    trailing: Option<&Overrides>,
) -> Result<Vec<Diagnostic>, HostError> {
    for token in tokens {
        match token.as_token().and_then(resolve_symbol) {
            Some(Symbol::Fill(fill)) => spec.fill = fill,
            Some(Symbol::Anchor(anchor)) => spec.anchor = anchor,
            _ => log::debug!("ignoring shorthand token {:?}", token),
        }
    }
    match trailing {
        Some(overrides) => apply(spec, overrides),
        None => Ok(Vec::new()),
    }
}

fn assign(spec: &mut ConstraintSpec, attribute: AttributeKey, value: Resolved<'_>) {
    match attribute {
        AttributeKey::Column => set(&mut spec.column, coerce::to_int(value)),
        AttributeKey::Row => set(&mut spec.row, coerce::to_int(value)),
        AttributeKey::ColumnSpan => set(&mut spec.column_span, coerce::to_int(value)),
        AttributeKey::RowSpan => set(&mut spec.row_span, coerce::to_int(value)),
        AttributeKey::WeightX => set(&mut spec.weight_x, coerce::to_real(value)),
        AttributeKey::WeightY => set(&mut spec.weight_y, coerce::to_real(value)),
        AttributeKey::PadX => set(&mut spec.pad_x, coerce::to_int(value)),
        AttributeKey::PadY => set(&mut spec.pad_y, coerce::to_int(value)),
        AttributeKey::Fill => set(&mut spec.fill, coerce::to_fill(value)),
        AttributeKey::Anchor | AttributeKey::VerticalAlign => {
            set(&mut spec.anchor, coerce::to_anchor(value))
        }
        AttributeKey::Margins => set(&mut spec.margins, coerce::to_insets(value, InsetsMode::Uniform)),
        AttributeKey::CellSpacing => {
            set(&mut spec.margins, coerce::to_insets(value, InsetsMode::CellSpacing))
        }
        AttributeKey::Padding => {
            if let Some((x, y)) = coerce::to_padding(value) {
                spec.pad_x = x;
                spec.pad_y = y;
            }
        }
    }
}

fn apply_alignment(
    spec: &mut ConstraintSpec,
    anchor: Option<&RawValue>,
    vertical_align: Option<&RawValue>,
) -> Vec<Diagnostic> {
    match (anchor, vertical_align) {
        (None, None) => Vec::new(),
        (Some(value), None) | (None, Some(value)) => {
            set(&mut spec.anchor, coerce::to_anchor(resolve_value(value)));
            Vec::new()
        }
        (Some(anchor), Some(vertical_align)) => {
            let diagnostic = Diagnostic::ConflictingAlignment {
                anchor: anchor.clone(),
                vertical_align: vertical_align.clone(),
            };
            log::warn!("{}", diagnostic);
            vec![diagnostic]
        }
    }
}

fn set<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}
