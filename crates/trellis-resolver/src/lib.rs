//! Name resolution for Trellis.
//!
//! This crate resolves:
//! - Attribute names and their shorthand aliases (`cols`, `wx`, `a`, ...)
//!   to canonical [`AttributeKey`]s
//! - Symbolic constant names (`north`, `ne`, `both`, `rem`, ...) to [`Symbol`]s
//!
//! Both tables are built on first use and never change afterwards.

mod attributes;
mod registry;
mod symbols;

pub use attributes::{attribute_names, resolve_attribute};
pub use registry::AliasMap;
pub use symbols::{resolve_symbol, symbol_names};

use trellis_core::{AttributeKey, RawValue, Symbol};

/// A value after symbolic-constant lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// A string or symbol naming a known constant
    Constant(Symbol),
    /// Anything else, untouched
    Raw(&'a RawValue),
}

/// Look up a string or symbol value as a symbolic constant.
pub fn resolve_value(value: &RawValue) -> Resolved<'_> {
    match value.as_token().and_then(resolve_symbol) {
        Some(symbol) => Resolved::Constant(symbol),
        None => Resolved::Raw(value),
    }
}

/// Resolve an attribute name, logging names that are skipped.
pub fn resolve_attribute_logged(name: &str) -> Option<AttributeKey> {
    let key = resolve_attribute(name);
    if key.is_none() {
        log::debug!("ignoring unknown attribute '{}'", name);
    }
    key
}
