//! Row-by-row grid placement.
//!
//! A [`GridTable`] turns declared rows into absolute cell positions. Each
//! row is placed as soon as it is added: cells without an explicit column
//! take the first column that no earlier multi-row span still reserves,
//! and every placement is handed straight to a [`LayoutHost`].

use crate::compose::{apply, apply_shorthand, compose};
use crate::occupancy::ColumnOccupancy;
use trellis_core::{
    ConstraintSpec, Constraints, Diagnostic, GridRow, HostError, Overrides, RawValue, MAX_COLUMN,
    RELATIVE,
};

/// A cell with its final, absolute constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<C> {
    pub component: C,
    pub spec: ConstraintSpec,
    /// Last column covered by the cell (inclusive)
    pub last_column: i32,
}

impl<C> Placement<C> {
    /// Number of columns covered; zero when a relative span ran out of room.
    pub fn columns_covered(&self) -> i32 {
        (self.last_column - self.spec.column + 1).max(0)
    }
}

/// Receiver of finished placements.
pub trait LayoutHost<C> {
    fn place(&mut self, placement: Placement<C>);
}

impl<C> LayoutHost<C> for Vec<Placement<C>> {
    fn place(&mut self, placement: Placement<C>) {
        self.push(placement);
    }
}

/// Grid placement state for one table.
#[derive(Debug, Clone, Default)]
pub struct GridTable {
    defaults: ConstraintSpec,
    next_row: i32,
    max_column: i32,
    occupancy: ColumnOccupancy,
    diagnostics: Vec<Diagnostic>,
}

impl GridTable {
    /// Create a table with default constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with its own baseline constraints.
    pub fn with_defaults(defaults: ConstraintSpec) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Table-wide baseline constraints.
    pub fn defaults(&self) -> &ConstraintSpec {
        &self.defaults
    }

    /// Mutable access to the baseline, for callers managing fields directly.
    pub fn defaults_mut(&mut self) -> &mut ConstraintSpec {
        &mut self.defaults
    }

    /// Apply raw overrides to the baseline.
    pub fn set_defaults(&mut self, overrides: &Overrides) -> Result<(), HostError> {
        let diagnostics = apply(&mut self.defaults, overrides)?;
        self.diagnostics.extend(diagnostics);
        Ok(())
    }

    /// Apply shorthand tokens (and optional trailing overrides) to the baseline.
    pub fn set_defaults_shorthand(
        &mut self,
        tokens: &[RawValue],
        trailing: Option<&Overrides>,
    ) -> Result<(), HostError> {
        let diagnostics = apply_shorthand(&mut self.defaults, tokens, trailing)?;
        self.diagnostics.extend(diagnostics);
        Ok(())
    }

    /// Row index the next added row will receive.
    pub fn next_row(&self) -> i32 {
        self.next_row
    }

    /// Highest column covered so far.
    pub fn max_column(&self) -> i32 {
        self.max_column
    }

    pub fn occupancy(&self) -> &ColumnOccupancy {
        &self.occupancy
    }

    /// Diagnostics collected from every composition since the last
    /// [`take_diagnostics`](Self::take_diagnostics) or [`reset`](Self::reset).
    ///
    /// The list keeps growing otherwise; long-lived tables should drain it.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain the collected diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Forget all placed rows, keeping the baseline.
    pub fn reset(&mut self) {
        self.next_row = 0;
        self.max_column = 0;
        self.occupancy.clear();
        self.diagnostics.clear();
    }

    /// Place a component outside the row algorithm.
    ///
    /// The constraints are composed against the baseline and passed on as
    /// they are; columns are not auto-placed and occupancy is not touched.
    pub fn add<C, H>(
        &mut self,
        component: C,
        constraints: Option<Constraints>,
        host: &mut H,
    ) -> Result<(), HostError>
    where
        H: LayoutHost<C> + ?Sized,
    {
        let mut diagnostics = Vec::new();
        let spec = resolve(&self.defaults, constraints, &mut diagnostics)?;
        self.diagnostics.extend(diagnostics);
        let last_column = spec.column.saturating_add(spec.column_span.max(1) - 1);
        host.place(Placement {
            component,
            spec,
            last_column,
        });
        Ok(())
    }

    /// Place one row and hand every cell to `host`.
    ///
    /// Constraints for the whole row are composed before anything is placed,
    /// so a host error leaves the table exactly as it was.
    pub fn add_row<C, H>(&mut self, row: GridRow<C>, host: &mut H) -> Result<(), HostError>
    where
        H: LayoutHost<C> + ?Sized,
    {
        let (row_constraints, cells) = row.into_parts();

        let mut diagnostics = Vec::new();
        let mut row_defaults = resolve(&self.defaults, row_constraints, &mut diagnostics)?;
        row_defaults.row = self.next_row;

        let cells = cells
            .into_iter()
            .map(|cell| -> Result<(C, ConstraintSpec), HostError> {
                let spec = resolve(&row_defaults, cell.constraints, &mut diagnostics)?;
                Ok((cell.component, spec))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.diagnostics.extend(diagnostics);
        self.next_row += 1;

        let mut cursor = 0;
        for (component, spec) in cells {
            let placement = self.place_cell(component, spec, &mut cursor);
            log::trace!(
                "placed cell at ({}, {}) spanning columns {}..={}",
                placement.spec.column,
                placement.spec.row,
                placement.spec.column,
                placement.last_column
            );
            host.place(placement);
        }

        self.occupancy.advance();
        log::trace!("row {} complete, max column {}", self.next_row - 1, self.max_column);
        Ok(())
    }

    /// Place several rows, collecting the placements.
    pub fn add_rows<C>(
        &mut self,
        rows: impl IntoIterator<Item = GridRow<C>>,
    ) -> Result<Vec<Placement<C>>, HostError> {
        let mut placements = Vec::new();
        for row in rows {
            self.add_row(row, &mut placements)?;
        }
        Ok(placements)
    }

    fn place_cell<C>(&mut self, component: C, mut spec: ConstraintSpec, cursor: &mut i32) -> Placement<C> {
        if spec.is_auto_column() {
            while self.occupancy.is_occupied(*cursor as usize) {
                *cursor += 1;
            }
            spec.column = *cursor;
        }
        spec.column = spec.column.min(MAX_COLUMN);
        let column = spec.column;

        spec.column_span = spec.column_span.clamp(RELATIVE, MAX_COLUMN + 1);
        spec.row_span = spec.row_span.max(RELATIVE);

        let next = if spec.column_span > 0 {
            column + spec.column_span
        } else {
            column.max(self.max_column) + 1 + spec.column_span
        };
        // Spans running past the last column are cut off there.
        let last = (next - 1).min(MAX_COLUMN);

        // Non-positive row spans never count down on their own.
        let rows = if spec.row_span <= 0 {
            spec.row_span - 1
        } else {
            spec.row_span
        };

        if last >= column {
            self.occupancy.mark_occupied(column as usize, last as usize, rows);
        }
        *cursor = next;
        self.max_column = self.max_column.max(last);

        Placement {
            component,
            spec,
            last_column: last,
        }
    }
}

/// Effective spec for a row or cell inheriting from `base`.
fn resolve(
    base: &ConstraintSpec,
    constraints: Option<Constraints>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<ConstraintSpec, HostError> {
    match constraints {
        None => Ok(base.clone()),
        Some(Constraints::Spec(spec)) => Ok(spec),
        Some(Constraints::Overrides(overrides)) => {
            let composed = compose(base, &overrides)?;
            diagnostics.extend(composed.diagnostics);
            Ok(composed.spec)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{Anchor, Fill, Insets, REMAINDER};

    fn columns(placements: &[Placement<&str>]) -> Vec<(i32, i32)> {
        placements
            .iter()
            .map(|p| (p.spec.column, p.last_column))
            .collect()
    }

    #[test]
    fn test_auto_placement() {
        let mut table = GridTable::new();
        let placements = table
            .add_rows([GridRow::new().cell("a").cell("b").cell("c")])
            .unwrap();

        assert_eq!(columns(&placements), vec![(0, 0), (1, 1), (2, 2)]);
        assert!(placements.iter().all(|p| p.spec.row == 0));
        assert_eq!(table.next_row(), 1);
        assert_eq!(table.max_column(), 2);
    }

    #[test]
    fn test_row_span_reserves_columns() {
        let mut table = GridTable::new();
        let placements = table
            .add_rows([
                GridRow::new().cell_with("tall", Overrides::new().with("x", 0).with("cols", 2).with("rows", 2)),
                GridRow::new().cell("next"),
            ])
            .unwrap();

        assert_eq!(columns(&placements), vec![(0, 1), (2, 2)]);
        assert_eq!(placements[1].spec.row, 1);
    }

    #[test]
    fn test_reservation_expires() {
        let mut table = GridTable::new();
        let placements = table
            .add_rows([
                GridRow::new().cell_with("tall", Overrides::new().with("h", 2)),
                GridRow::new().cell("beside"),
                GridRow::new().cell("below"),
            ])
            .unwrap();

        assert_eq!(columns(&placements), vec![(0, 0), (1, 1), (0, 0)]);
    }

    #[test]
    fn test_explicit_column_moves_cursor() {
        let mut table = GridTable::new();
        let placements = table
            .add_rows([GridRow::new()
                .cell_with("far", Overrides::new().with("x", 3).with("w", 2))
                .cell("after")])
            .unwrap();

        assert_eq!(columns(&placements), vec![(3, 4), (5, 5)]);
    }

    #[test]
    fn test_remainder_span_fills_to_max_column() {
        let mut table = GridTable::new();
        let placements = table
            .add_rows([
                GridRow::new().cell("a").cell("b").cell("c").cell("d"),
                GridRow::new()
                    .cell("label")
                    .cell_with("rest", Overrides::new().with("w", RawValue::symbol("rem"))),
            ])
            .unwrap();

        assert_eq!(placements[5].spec.column, 1);
        assert_eq!(placements[5].spec.column_span, REMAINDER);
        assert_eq!(placements[5].last_column, 3);
    }

    #[test]
    fn test_relative_span_stops_before_last_column() {
        let mut table = GridTable::new();
        let placements = table
            .add_rows([
                GridRow::new().cell("a").cell("b").cell("c"),
                GridRow::new()
                    .cell_with("wide", Overrides::new().with("w", "relative"))
                    .cell_with("end", Overrides::new().with("w", "rem")),
            ])
            .unwrap();

        assert_eq!(columns(&placements[3..]), vec![(0, 1), (2, 2)]);
    }

    #[test]
    fn test_spans_clamped() {
        let mut table = GridTable::new();
        let placements = table
            .add_rows([GridRow::new().cell_with("odd", Overrides::new().with("w", -7).with("h", -3))])
            .unwrap();

        assert_eq!(placements[0].spec.column_span, RELATIVE);
        assert_eq!(placements[0].spec.row_span, RELATIVE);
    }

    fn place_far_right(span: RawValue) -> Placement<&'static str> {
        let mut table = GridTable::new();
        let row = GridRow::new().cell_with("far", Overrides::new().with("x", i32::MAX).with("w", span));
        let mut placements = table.add_rows([row]).unwrap();
        assert!(table.max_column() <= MAX_COLUMN);
        assert!(table.occupancy().tracked_columns() <= (MAX_COLUMN + 1) as usize);
        placements.remove(0)
    }

    #[test]
    fn test_huge_column_with_remainder_span() {
        let placed = place_far_right(RawValue::symbol("rem"));
        assert_eq!(placed.spec.column, MAX_COLUMN);
        assert_eq!(placed.last_column, MAX_COLUMN);
        assert_eq!(placed.columns_covered(), 1);
    }

    #[test]
    fn test_huge_column_with_relative_span() {
        let placed = place_far_right(RawValue::symbol("rel"));
        assert_eq!(placed.spec.column, MAX_COLUMN);
        assert_eq!(placed.columns_covered(), 0);
    }

    #[test]
    fn test_huge_column_with_explicit_span() {
        let placed = place_far_right(RawValue::Int(2));
        assert_eq!(placed.spec.column, MAX_COLUMN);
        assert_eq!(placed.last_column, MAX_COLUMN);
        assert_eq!(placed.columns_covered(), 1);
    }

    #[test]
    fn test_huge_span_is_clamped() {
        let mut table = GridTable::new();
        let row = GridRow::new().cell_with("wide", Overrides::new().with("w", i64::MAX).with("h", 3));
        let placements = table.add_rows([row]).unwrap();

        assert_eq!(placements[0].spec.column_span, MAX_COLUMN + 1);
        assert_eq!(placements[0].last_column, MAX_COLUMN);
        assert_eq!(table.occupancy().occupied_count(), (MAX_COLUMN + 1) as usize);
    }

    #[test]
    fn test_large_column_keeps_tracker_bounded() {
        let mut table = GridTable::new();
        let row = GridRow::new().cell_with("label", Overrides::new().with("x", 50_000_000));
        table.add_rows([row]).unwrap();

        assert_eq!(table.occupancy().tracked_columns(), (MAX_COLUMN + 1) as usize);
        assert!(!table.occupancy().is_occupied(MAX_COLUMN as usize));
    }

    #[test]
    fn test_remainder_row_span_holds_column() {
        let mut table = GridTable::new();
        table
            .add_rows([GridRow::new().cell_with("side", Overrides::new().with("h", "rem"))])
            .unwrap();
        for _ in 0..4 {
            table.add_row(GridRow::<&str>::new(), &mut Vec::<Placement<&str>>::new()).unwrap();
        }
        assert!(table.occupancy().is_occupied(0));
        assert_eq!(table.occupancy().remaining(0), -1);
    }

    #[test]
    fn test_empty_row_advances() {
        let mut table = GridTable::new();
        let mut placements = Vec::new();
        table
            .add_row(GridRow::new().cell_with("tall", Overrides::new().with("h", 3)), &mut placements)
            .unwrap();
        assert_eq!(table.occupancy().remaining(0), 2);

        table.add_row(GridRow::<&str>::new(), &mut placements).unwrap();
        assert_eq!(table.next_row(), 2);
        assert_eq!(table.occupancy().remaining(0), 1);
        assert_eq!(placements.len(), 1);
    }

    #[test]
    fn test_row_defaults_layering() {
        let mut table = GridTable::with_defaults(ConstraintSpec::new().weighted(0.1, 0.0));
        table.set_defaults(&Overrides::new().with("i", 6)).unwrap();

        let row = GridRow::with_defaults(Overrides::new().with("wy", 0.5).with("f", "h"))
            .cell("inherits")
            .cell_with("own", Overrides::new().with("f", "both").with("a", "sw"));
        let placements = table.add_rows([row]).unwrap();

        let inherits = &placements[0].spec;
        assert_eq!(inherits.weight_x, 0.1);
        assert_eq!(inherits.weight_y, 0.5);
        assert_eq!(inherits.fill, Fill::Horizontal);
        assert_eq!(inherits.margins, Insets::uniform(6));

        let own = &placements[1].spec;
        assert_eq!(own.fill, Fill::Both);
        assert_eq!(own.anchor, Anchor::SouthWest);
        assert_eq!(own.weight_y, 0.5);

        // Row defaults never leak into the table baseline.
        assert_eq!(table.defaults().weight_y, 0.0);
        assert_eq!(table.defaults().row, RELATIVE);
    }

    #[test]
    fn test_prebuilt_specs() {
        let mut table = GridTable::new();
        let row = GridRow::with_defaults(ConstraintSpec::new().with_fill(Fill::Vertical))
            .cell("from row")
            .cell_with("own", ConstraintSpec::new().at(4, 9));
        let placements = table.add_rows([row]).unwrap();

        assert_eq!(placements[0].spec.fill, Fill::Vertical);
        assert_eq!(placements[0].spec.row, 0);
        assert_eq!((placements[1].spec.column, placements[1].spec.row), (4, 9));
    }

    #[test]
    fn test_host_error_leaves_table_untouched() {
        let mut table = GridTable::new();
        let mut bad = Overrides::new();
        bad.insert(trellis_core::AttrKey::Int(0), 1);
        let row = GridRow::new().cell("ok").cell_with("bad", bad);

        let mut placements = Vec::new();
        assert!(table.add_row(row, &mut placements).is_err());
        assert!(placements.is_empty());
        assert_eq!(table.next_row(), 0);
        assert_eq!(table.occupancy().occupied_count(), 0);
    }

    #[test]
    fn test_diagnostics_collected() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut table = GridTable::new();
        let row = GridRow::new().cell_with("both", Overrides::new().with("a", "n").with("va", "s"));
        table.add_rows([row]).unwrap();
        assert_eq!(table.diagnostics().len(), 1);

        table.reset();
        assert!(table.diagnostics().is_empty());
        assert_eq!(table.next_row(), 0);
    }

    #[test]
    fn test_take_diagnostics_drains() {
        let mut table = GridTable::new();
        let conflicting = || GridRow::new().cell_with("x", Overrides::new().with("a", "n").with("va", "s"));
        table.add_rows([conflicting(), conflicting()]).unwrap();

        assert_eq!(table.take_diagnostics().len(), 2);
        assert!(table.diagnostics().is_empty());
        assert_eq!(table.next_row(), 2);

        table.add_rows([conflicting()]).unwrap();
        assert_eq!(table.diagnostics().len(), 1);
    }

    #[test]
    fn test_manual_add() {
        let mut table = GridTable::new();
        table.set_defaults_shorthand(&[RawValue::symbol("both")], None).unwrap();

        let mut placements = Vec::new();
        table
            .add("free", Some(Overrides::new().with("x", 2).with("y", 5).with("w", 3).into()), &mut placements)
            .unwrap();

        let placed = &placements[0];
        assert_eq!((placed.spec.column, placed.spec.row), (2, 5));
        assert_eq!(placed.spec.fill, Fill::Both);
        assert_eq!(placed.last_column, 4);
        assert_eq!(placed.columns_covered(), 3);
        assert_eq!(table.next_row(), 0);
        assert_eq!(table.occupancy().occupied_count(), 0);
    }
}
