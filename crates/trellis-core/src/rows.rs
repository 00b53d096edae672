//! Declared rows and cells.

use crate::values::Constraints;
use smallvec::SmallVec;

/// A component together with its own constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell<C> {
    pub component: C,
    pub constraints: Option<Constraints>,
}

impl<C> GridCell<C> {
    /// A cell that inherits every attribute from its row.
    pub fn new(component: C) -> Self {
        Self { component, constraints: None }
    }

    /// A cell with its own constraints.
    pub fn with_constraints(component: C, constraints: impl Into<Constraints>) -> Self {
        Self {
            component,
            constraints: Some(constraints.into()),
        }
    }
}

/// One declared row of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow<C> {
    cells: SmallVec<[GridCell<C>; 8]>,
    defaults: Option<Constraints>,
}

impl<C> Default for GridRow<C> {
    fn default() -> Self {
        Self {
            cells: SmallVec::new(),
            defaults: None,
        }
    }
}

impl<C> GridRow<C> {
    /// Create an empty row without defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty row with its own defaults.
    pub fn with_defaults(defaults: impl Into<Constraints>) -> Self {
        Self {
            cells: SmallVec::new(),
            defaults: Some(defaults.into()),
        }
    }

    /// Append a cell inheriting the row defaults.
    pub fn add(&mut self, component: C) {
        self.cells.push(GridCell::new(component));
    }

    /// Append a cell with its own constraints.
    pub fn add_with(&mut self, component: C, constraints: impl Into<Constraints>) {
        self.cells.push(GridCell::with_constraints(component, constraints));
    }

    /// Builder form of [`GridRow::add`].
    pub fn cell(mut self, component: C) -> Self {
        self.add(component);
        self
    }

    /// Builder form of [`GridRow::add_with`].
    pub fn cell_with(mut self, component: C, constraints: impl Into<Constraints>) -> Self {
        self.add_with(component, constraints);
        self
    }

    pub fn defaults(&self) -> Option<&Constraints> {
        self.defaults.as_ref()
    }

    pub fn set_defaults(&mut self, defaults: Option<Constraints>) {
        self.defaults = defaults;
    }

    pub fn cells(&self) -> &[GridCell<C>] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Split the row into its defaults and cells.
    pub fn into_parts(self) -> (Option<Constraints>, SmallVec<[GridCell<C>; 8]>) {
        (self.defaults, self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConstraintSpec;
    use crate::values::Overrides;

    #[test]
    fn test_row_builder() {
        let row = GridRow::with_defaults(Overrides::new().with("wy", 0))
            .cell("label")
            .cell_with("field", Overrides::new().with("f", "h"));

        assert_eq!(row.len(), 2);
        assert!(row.defaults().is_some());
        assert!(row.cells()[0].constraints.is_none());
        assert_eq!(row.cells()[1].component, "field");
    }

    #[test]
    fn test_prebuilt_cell_spec() {
        let cell = GridCell::with_constraints(7u32, ConstraintSpec::new().at(1, 0));
        assert!(matches!(cell.constraints, Some(Constraints::Spec(_))));
    }

    #[test]
    fn test_empty_row() {
        let row: GridRow<()> = GridRow::new();
        assert!(row.is_empty());
        let (defaults, cells) = row.into_parts();
        assert!(defaults.is_none());
        assert!(cells.is_empty());
    }
}
