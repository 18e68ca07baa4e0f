//! Variable environment for the calc evaluator.

use calc_types::Number;
use std::collections::BTreeMap;

/// Flat name → value bindings.
///
/// There are no scopes: a name stays bound until it is reassigned or the
/// environment is cleared. Iteration is ordered by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: BTreeMap<String, Number>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<Number> {
        self.bindings.get(name).copied()
    }

    /// Bind `name`, overwriting any previous value. Returns the old value.
    pub fn set(&mut self, name: impl Into<String>, value: Number) -> Option<Number> {
        self.bindings.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Number)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// All bindings, for snapshots.
    pub fn bindings(&self) -> &BTreeMap<String, Number> {
        &self.bindings
    }

    /// Remove every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}
