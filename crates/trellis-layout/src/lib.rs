//! Grid placement for Trellis.
//!
//! This crate turns declared rows of cells into absolute grid positions.
//!
//! # Architecture
//!
//! 1. **Coercion**: loosely typed host values become typed fields
//! 2. **Composition**: a base spec is cloned and overridden attribute by attribute
//! 3. **Occupancy**: columns reserved by multi-row spans are counted down row by row
//! 4. **Placement**: each row is placed immediately, auto-placing cells into free columns
//!
//! # Example
//!
//! ```
//! use trellis_core::{GridRow, Overrides};
//! use trellis_layout::GridTable;
//!
//! let mut table = GridTable::new();
//! let placements = table.add_rows([
//!     GridRow::new().cell_with("title", Overrides::new().with("cols", 2).with("rows", 2)),
//!     GridRow::new().cell("body"),
//! ])?;
//!
//! assert_eq!(placements[1].spec.column, 2);
//! # Ok::<(), trellis_core::HostError>(())
//! ```

pub mod coerce;
mod compose;
mod occupancy;
mod table;

pub use coerce::InsetsMode;
pub use compose::{apply, apply_shorthand, compose, Composed};
pub use occupancy::ColumnOccupancy;
pub use table::{GridTable, LayoutHost, Placement};
