//! Name registry shared by the attribute and symbol tables.

use std::borrow::Cow;
use std::collections::HashMap;

/// A case-insensitive map from names to values with alias support.
#[derive(Debug, Clone)]
pub struct AliasMap<V> {
    entries: HashMap<&'static str, V>,
}

impl<V: Copy> AliasMap<V> {
    /// Create a map holding only canonical names.
    pub fn with_canonical(names: &[(&'static str, V)]) -> Self {
        let mut entries = HashMap::with_capacity(names.len() * 2);
        for &(name, value) in names {
            entries.entry(name).or_insert(value);
        }
        Self { entries }
    }

    /// Bind `short` to whatever `target` is bound to.
    ///
    /// Nothing happens if `target` is unknown or `short` is already bound,
    /// so an alias can never shadow a canonical name. Returns whether the
    /// alias was added.
    pub fn alias(&mut self, short: &'static str, target: &str) -> bool {
        let Some(&value) = self.entries.get(target) else {
            return false;
        };
        if self.entries.contains_key(short) {
            return false;
        }
        self.entries.insert(short, value);
        true
    }

    /// Register a batch of `(short, target)` aliases.
    pub fn aliases(mut self, pairs: &[(&'static str, &str)]) -> Self {
        for &(short, target) in pairs {
            self.alias(short, target);
        }
        self
    }

    /// Look up a name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<V> {
        self.entries.get(&*lowercase(name)).copied()
    }

    /// All bound names, canonical and alias, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn lowercase(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}
