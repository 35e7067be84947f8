//! Ordered, deduplicated-by-kind strategy container
//!
//! Insertion order is kept as the deterministic tie-break for unconstrained
//! strategies; the canonical order handed to the engine is a topological sort
//! over the before/after constraints declared by the contained strategies.

use std::fmt;
use std::sync::OnceLock;

use crate::core::error::{StrategyError, StrategyResult};
use crate::core::kind::StrategyKind;
use crate::strategy::traits::{StrategyRef, TraversalStrategy};

/// An insertion-ordered collection holding at most one strategy per kind.
///
/// Owned exclusively by one traversal source at a time; cloning a source
/// deep-copies the set so the parent's contents are never observed to change.
#[derive(Default)]
pub struct StrategySet {
    entries: Vec<StrategyRef>,
    // Cached resolved order (indices into entries); reset on every mutation.
    resolved: OnceLock<Vec<usize>>,
}

impl StrategySet {
    pub fn new() -> Self {
        StrategySet {
            entries: Vec::new(),
            resolved: OnceLock::new(),
        }
    }

    /// Add one strategy, overwriting any existing entry of the same kind.
    /// An overwrite keeps the original insertion position, so the tie-break
    /// order of unrelated strategies stays stable.
    pub fn add(&mut self, strategy: StrategyRef) {
        let kind = strategy.kind();
        match self.entries.iter().position(|s| s.kind() == kind) {
            Some(index) => self.entries[index] = strategy,
            None => self.entries.push(strategy),
        }
        self.resolved = OnceLock::new();
    }

    /// Add a collection of strategies, overwrite-by-kind.
    pub fn add_strategies<I>(&mut self, strategies: I)
    where
        I: IntoIterator<Item = StrategyRef>,
    {
        for strategy in strategies {
            self.add(strategy);
        }
    }

    /// Remove all entries whose kind appears in `kinds`.
    pub fn remove_strategies(&mut self, kinds: &[StrategyKind]) {
        self.entries.retain(|s| !kinds.contains(&s.kind()));
        self.resolved = OnceLock::new();
    }

    pub fn contains(&self, kind: StrategyKind) -> bool {
        self.entries.iter().any(|s| s.kind() == kind)
    }

    pub fn get(&self, kind: StrategyKind) -> Option<&StrategyRef> {
        self.entries.iter().find(|s| s.kind() == kind)
    }

    /// Typed lookup of a strategy's concrete payload.
    pub fn get_as<T: TraversalStrategy + 'static>(&self, kind: StrategyKind) -> Option<&T> {
        self.get(kind).and_then(|s| s.as_any().downcast_ref::<T>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order (not the resolved order).
    pub fn iter(&self) -> impl Iterator<Item = &StrategyRef> {
        self.entries.iter()
    }

    /// Compute the deterministic total order honoring every before/after
    /// constraint declared by the contained strategies. Constraints naming
    /// kinds absent from the set are ignored. Ties are broken by first
    /// insertion index, so resolution is reproducible across calls and
    /// process runs.
    ///
    /// Successful orders are cached until the next mutation. A constraint
    /// cycle fails with `StrategyError::CyclicConstraint` and is not cached.
    pub fn resolved_order(&self) -> StrategyResult<Vec<StrategyRef>> {
        if let Some(order) = self.resolved.get() {
            return Ok(order.iter().map(|&i| self.entries[i].clone()).collect());
        }
        let order = self.topological_order()?;
        // A concurrent resolver may have published the same order already.
        let _ = self.resolved.set(order);
        let order = self.resolved.get().expect("resolved order just published");
        Ok(order.iter().map(|&i| self.entries[i].clone()).collect())
    }

    fn topological_order(&self) -> StrategyResult<Vec<usize>> {
        let n = self.entries.len();
        let index_of = |kind: StrategyKind| self.entries.iter().position(|s| s.kind() == kind);

        // adjacency[i] holds successors of i; an edge i -> j means i must
        // run before j
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut in_degree: Vec<usize> = vec![0; n];
        for (i, strategy) in self.entries.iter().enumerate() {
            for kind in strategy.precedes() {
                if let Some(j) = index_of(kind) {
                    if i != j {
                        adjacency[i].push(j);
                        in_degree[j] += 1;
                    }
                }
            }
            for kind in strategy.follows() {
                if let Some(j) = index_of(kind) {
                    if i != j {
                        adjacency[j].push(i);
                        in_degree[i] += 1;
                    }
                }
            }
        }

        // Kahn's algorithm, always taking the ready node with the smallest
        // insertion index
        let mut order = Vec::with_capacity(n);
        let mut remaining: Vec<bool> = vec![true; n];
        while order.len() < n {
            let next = (0..n).find(|&i| remaining[i] && in_degree[i] == 0);
            let Some(next) = next else {
                let cycle: Vec<StrategyKind> = (0..n)
                    .filter(|&i| remaining[i])
                    .map(|i| self.entries[i].kind())
                    .collect();
                return Err(StrategyError::CyclicConstraint(cycle));
            };
            remaining[next] = false;
            order.push(next);
            for &succ in &adjacency[next] {
                in_degree[succ] -= 1;
            }
        }
        Ok(order)
    }
}

impl Clone for StrategySet {
    fn clone(&self) -> Self {
        StrategySet {
            entries: self.entries.clone(),
            resolved: OnceLock::new(),
        }
    }
}

impl fmt::Debug for StrategySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|s| s.kind()))
            .finish()
    }
}

impl IntoIterator for StrategySet {
    type Item = StrategyRef;
    type IntoIter = std::vec::IntoIter<StrategyRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<StrategyRef> for StrategySet {
    fn from_iter<I: IntoIterator<Item = StrategyRef>>(iter: I) -> Self {
        let mut set = StrategySet::new();
        set.add_strategies(iter);
        set
    }
}
