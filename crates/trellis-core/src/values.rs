//! Host-facing value model.
//!
//! Embedding runtimes hand the engine loosely typed keys and values. These
//! types are the common denominator every host adapter converts into.

use crate::errors::HostError;
use crate::types::ConstraintSpec;
use indexmap::IndexMap;

/// A loosely typed attribute value as supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Symbol-like token (e.g. `:north`), already reduced to its name
    Symbol(String),
    List(Vec<RawValue>),
}

impl RawValue {
    /// Create a symbol value.
    pub fn symbol(name: impl Into<String>) -> Self {
        RawValue::Symbol(name.into())
    }

    /// The token text if this is a string or symbol.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            RawValue::Str(s) | RawValue::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a list.
    pub fn as_list(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short description of the value's shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Nil => "nil",
            RawValue::Bool(_) => "bool",
            RawValue::Int(_) => "int",
            RawValue::Float(_) => "float",
            RawValue::Str(_) => "string",
            RawValue::Symbol(_) => "symbol",
            RawValue::List(_) => "list",
        }
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Int(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Int(n.into())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Float(n)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Str(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Str(s)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(items: Vec<T>) -> Self {
        RawValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Nil, Into::into)
    }
}

/// An attribute key as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrKey {
    Str(String),
    Symbol(String),
    /// A key the host could not express as a name
    Int(i64),
}

impl AttrKey {
    /// Canonical attribute name for this key.
    ///
    /// Fails when the host handed over a key that has no textual form; that
    /// is an integration bug rather than bad declarative input.
    pub fn name(&self) -> Result<&str, HostError> {
        match self {
            AttrKey::Str(s) | AttrKey::Symbol(s) => Ok(s),
            AttrKey::Int(n) => Err(HostError::UnnameableKey { key: n.to_string() }),
        }
    }
}

impl From<&str> for AttrKey {
    fn from(s: &str) -> Self {
        AttrKey::Str(s.to_string())
    }
}

impl From<String> for AttrKey {
    fn from(s: String) -> Self {
        AttrKey::Str(s)
    }
}

/// Ordered, not yet coerced attribute overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    entries: IndexMap<AttrKey, RawValue>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an override, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<AttrKey>, value: impl Into<RawValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder form of [`Overrides::insert`].
    pub fn with(mut self, key: impl Into<AttrKey>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the raw value for an exact key.
    pub fn get(&self, key: &AttrKey) -> Option<&RawValue> {
        self.entries.get(key)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttrKey, &RawValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<AttrKey>, V: Into<RawValue>> FromIterator<(K, V)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Overrides::new();
        for (key, value) in iter {
            overrides.insert(key, value);
        }
        overrides
    }
}

/// Constraints attached to a row or a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraints {
    /// Raw attributes, composed on top of the inherited spec
    Overrides(Overrides),
    /// A finished spec, used exactly as given
    Spec(ConstraintSpec),
}

impl From<Overrides> for Constraints {
    fn from(overrides: Overrides) -> Self {
        Constraints::Overrides(overrides)
    }
}

impl From<ConstraintSpec> for Constraints {
    fn from(spec: ConstraintSpec) -> Self {
        Constraints::Spec(spec)
    }
}
