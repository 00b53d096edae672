//! Table documents: the JSON shape of a table and its placed result.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use trellis_core::{ConstraintSpec, GridCell, GridRow, RawValue};
use trellis_layout::{GridTable, LayoutHost, Placement};

use crate::convert::{constraints, overrides, raw_value};
use crate::error::Result;

/// A whole table: baseline defaults followed by rows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableDocument {
    /// An attribute object, or shorthand tokens with an optional trailing object.
    #[serde(default)]
    pub defaults: Option<Value>,
    #[serde(default)]
    pub rows: Vec<RowDocument>,
}

/// A row is either a bare list of cells or an object with its own defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RowDocument {
    Cells(Vec<CellDocument>),
    Row(RowObject),
}

/// The object form of a row. Only JSON objects are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct RowObject {
    pub defaults: Option<Value>,
    pub cells: Vec<CellDocument>,
}

impl TryFrom<Map<String, Value>> for RowObject {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let cells = match map.remove("cells") {
            Some(cells) => serde_json::from_value(cells)?,
            None => Vec::new(),
        };
        Ok(Self {
            defaults: map.remove("defaults"),
            cells,
        })
    }
}

/// A cell is a component name, optionally with attributes next to it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CellDocument {
    Name(String),
    Cell {
        component: String,
        #[serde(flatten)]
        attributes: Map<String, Value>,
    },
}

impl CellDocument {
    fn into_cell(self) -> GridCell<String> {
        match self {
            CellDocument::Name(component) => GridCell::new(component),
            CellDocument::Cell { component, attributes } => GridCell {
                component,
                constraints: constraints(Some(&Value::Object(attributes))),
            },
        }
    }
}

impl RowDocument {
    fn into_row(self) -> GridRow<String> {
        let (defaults, cells) = match self {
            RowDocument::Cells(cells) => (None, cells),
            RowDocument::Row(RowObject { defaults, cells }) => (defaults, cells),
        };
        let mut row = GridRow::new();
        row.set_defaults(constraints(defaults.as_ref()));
        for cell in cells {
            let GridCell { component, constraints } = cell.into_cell();
            match constraints {
                Some(constraints) => row.add_with(component, constraints),
                None => row.add(component),
            }
        }
        row
    }
}

/// One placed cell as written back out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedCell {
    pub component: String,
    #[serde(flatten)]
    pub spec: ConstraintSpec,
    pub last_column: i32,
}

impl From<Placement<String>> for PlacedCell {
    fn from(placement: Placement<String>) -> Self {
        Self {
            component: placement.component,
            spec: placement.spec,
            last_column: placement.last_column,
        }
    }
}

/// The result of laying out a [`TableDocument`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableLayout {
    pub cells: Vec<PlacedCell>,
    pub columns: i32,
    pub rows: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

impl LayoutHost<String> for TableLayout {
    fn place(&mut self, placement: Placement<String>) {
        self.cells.push(placement.into());
    }
}

impl TableDocument {
    /// Parse a document from JSON text.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Apply the document's defaults to `table`.
    pub fn apply_defaults(&self, table: &mut GridTable) -> Result<()> {
        match &self.defaults {
            None | Some(Value::Null) => {}
            Some(Value::Object(map)) => table.set_defaults(&overrides(map, &[]))?,
            Some(Value::Array(items)) => {
                let (tokens, trailing) = match items.split_last() {
                    Some((Value::Object(map), tokens)) => (tokens, Some(overrides(map, &[]))),
                    _ => (items.as_slice(), None),
                };
                let tokens: Vec<RawValue> = tokens.iter().filter_map(raw_value).collect();
                table.set_defaults_shorthand(&tokens, trailing.as_ref())?;
            }
            Some(other) => log::debug!("ignoring table defaults {}", other),
        }
        Ok(())
    }

    /// Lay out the whole document on a fresh table.
    pub fn layout(self) -> Result<TableLayout> {
        let mut table = GridTable::new();
        self.apply_defaults(&mut table)?;

        let mut layout = TableLayout::default();
        for row in self.rows {
            table.add_row(row.into_row(), &mut layout)?;
        }

        layout.columns = if layout.cells.is_empty() { 0 } else { table.max_column() + 1 };
        layout.rows = table.next_row();
        layout.diagnostics = table.take_diagnostics().iter().map(ToString::to_string).collect();
        log::debug!(
            "laid out {} cells in {} rows, {} columns",
            layout.cells.len(),
            layout.rows,
            layout.columns
        );
        Ok(layout)
    }
}

impl TableLayout {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
