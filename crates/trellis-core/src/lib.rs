//! Core types, value model, and errors for the Trellis grid placement engine.
//!
//! This crate provides the foundational types shared by the other crates:
//! - Typed constraint records (`ConstraintSpec`, `Fill`, `Anchor`, `Insets`)
//! - Canonical attribute keys and symbolic constants
//! - The loosely typed host value model (`RawValue`, `AttrKey`, `Overrides`)
//! - Declared rows and cells
//! - Error and diagnostic types

pub mod errors;
pub mod keys;
pub mod rows;
pub mod types;
pub mod values;

pub use errors::*;
pub use keys::*;
pub use rows::*;
pub use types::*;
pub use values::*;
