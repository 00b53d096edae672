//! JSON table documents for Trellis.
//!
//! A document declares baseline defaults and a list of rows; laying it out
//! yields every cell's resolved constraints as JSON.
//!
//! ```
//! let output = trellis_json::layout_json(r#"{
//!     "defaults": {"insets": [4, 2]},
//!     "rows": [
//!         [{"component": "name", "anchor": ":e"}, {"component": "input", "fill": "h", "wx": 1}],
//!         [{"component": "ok", "x": 1, "anchor": ":e"}]
//!     ]
//! }"#)?;
//! assert!(output.contains("\"last_column\":1"));
//! # Ok::<(), trellis_json::JsonError>(())
//! ```
//!
//! Strings beginning with `:` are read as symbols, so `":north"` and
//! `"north"` name the same anchor while `":x"` as a key names the column.

pub mod convert;
mod document;
mod error;

pub use document::{CellDocument, PlacedCell, RowDocument, RowObject, TableDocument, TableLayout};
pub use error::{JsonError, Result};

/// Parse a table document, lay it out, and serialize the result.
pub fn layout_json(source: &str) -> Result<String> {
    TableDocument::from_json(source)?.layout()?.to_json()
}
