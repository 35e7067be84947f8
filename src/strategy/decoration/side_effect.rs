//! Side-effect decoration strategy
//!
//! A side effect is a named accumulator shared across a traversal's
//! execution. The strategy stores, per key, a supplier producing the initial
//! value and an optional reducer that merges concurrently-produced
//! contributions under that key into one final value. Without a reducer the
//! consumer's last-write/single-writer semantics apply.

use std::any::Any;
use std::fmt;

use crate::core::functional::{ErasedValue, Reducer, Supplier};
use crate::core::kind::StrategyKind;
use crate::strategy::set::StrategySet;
use crate::strategy::traits::TraversalStrategy;

pub const SIDE_EFFECT: StrategyKind = StrategyKind::new("side-effect");

/// One registered side effect: its initializer and optional reducer.
#[derive(Clone)]
pub struct SideEffectEntry {
    supplier: Supplier,
    reducer: Option<Reducer>,
}

impl SideEffectEntry {
    pub fn new(supplier: Supplier, reducer: Option<Reducer>) -> Self {
        SideEffectEntry { supplier, reducer }
    }

    /// Produce a fresh initial value for this side effect.
    pub fn initial_value(&self) -> ErasedValue {
        (self.supplier)()
    }

    pub fn reducer(&self) -> Option<&Reducer> {
        self.reducer.as_ref()
    }
}

/// Decoration strategy holding every side effect declared on a source.
///
/// Instances are immutable once installed: declaring a further side effect
/// builds an extended copy that replaces this one in the set.
#[derive(Clone, Default)]
pub struct SideEffectStrategy {
    // insertion-ordered; keys are unique
    entries: Vec<(String, SideEffectEntry)>,
}

impl SideEffectStrategy {
    pub fn new() -> Self {
        SideEffectStrategy {
            entries: Vec::new(),
        }
    }

    /// Copy of this strategy with `key` set to the given initializer and
    /// reducer. Re-declaring an existing key replaces its entry entirely
    /// (last call wins).
    pub fn with_entry(&self, key: &str, supplier: Supplier, reducer: Option<Reducer>) -> Self {
        let mut extended = self.clone();
        let entry = SideEffectEntry::new(supplier, reducer);
        match extended.entries.iter().position(|(k, _)| k == key) {
            Some(index) => extended.entries[index].1 = entry,
            None => extended.entries.push((key.to_string(), entry)),
        }
        extended
    }

    /// Install or extend the side-effect strategy in a set. The existing
    /// strategy is never mutated in place; its extended copy overwrites it.
    pub fn install(set: &mut StrategySet, key: &str, supplier: Supplier, reducer: Option<Reducer>) {
        let extended = match set.get_as::<SideEffectStrategy>(SIDE_EFFECT) {
            Some(existing) => existing.with_entry(key, supplier, reducer),
            None => SideEffectStrategy::new().with_entry(key, supplier, reducer),
        };
        set.add(std::sync::Arc::new(extended));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn entry(&self, key: &str) -> Option<&SideEffectEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, e)| e)
    }

    /// Fresh initial value for `key`, if declared.
    pub fn initial_value(&self, key: &str) -> Option<ErasedValue> {
        self.entry(key).map(SideEffectEntry::initial_value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TraversalStrategy for SideEffectStrategy {
    fn kind(&self) -> StrategyKind {
        SIDE_EFFECT
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for SideEffectStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SideEffectStrategy")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::functional::{constant_supplier, reducer_of};

    #[test]
    fn test_with_entry_adds_and_overwrites() {
        let strategy = SideEffectStrategy::new()
            .with_entry("count", constant_supplier(1i64), None)
            .with_entry("names", constant_supplier(Vec::<String>::new()), None)
            .with_entry("count", constant_supplier(2i64), None);

        assert_eq!(strategy.len(), 2);
        let value = strategy.initial_value("count").expect("declared");
        assert_eq!(*value.downcast::<i64>().expect("i64"), 2);
        // overwrite keeps the original key position
        assert_eq!(strategy.keys().collect::<Vec<_>>(), vec!["count", "names"]);
    }

    #[test]
    fn test_overwrite_replaces_reducer() {
        let strategy = SideEffectStrategy::new()
            .with_entry(
                "sum",
                constant_supplier(0i64),
                Some(reducer_of(|a: i64, b: i64| a + b)),
            )
            .with_entry("sum", constant_supplier(0i64), None);

        assert!(strategy.entry("sum").expect("declared").reducer().is_none());
    }

    #[test]
    fn test_install_extends_existing_strategy() {
        let mut set = StrategySet::new();
        SideEffectStrategy::install(&mut set, "a", constant_supplier(1i64), None);
        SideEffectStrategy::install(&mut set, "b", constant_supplier(2i64), None);

        assert_eq!(set.len(), 1);
        let strategy = set
            .get_as::<SideEffectStrategy>(SIDE_EFFECT)
            .expect("installed");
        assert_eq!(strategy.len(), 2);
    }

    #[test]
    fn test_reducer_merges_contributions() {
        let strategy = SideEffectStrategy::new().with_entry(
            "sum",
            constant_supplier(0i64),
            Some(reducer_of(|a: i64, b: i64| a + b)),
        );

        let entry = strategy.entry("sum").expect("declared");
        let reducer = entry.reducer().expect("reducer");
        let merged = reducer(Box::new(40i64), Box::new(2i64));
        assert_eq!(*merged.downcast::<i64>().expect("i64"), 42);
    }
}
