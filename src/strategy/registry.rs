//! Per-backend-kind default strategy registry
//!
//! Each execution backend variant declares the default strategies a traversal
//! must carry to run against it. Backend integrations register a provider per
//! kind; the first lookup for a kind computes the provider's set and caches
//! it for the registry's lifetime.
//!
//! The registry is an explicit object, shared via `Arc` by whatever
//! constructs traversal sources. Tests get isolation by constructing a fresh
//! registry instead of scrubbing ambient global state.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::core::error::{StrategyError, StrategyResult};
use crate::core::kind::BackendKind;
use crate::strategy::set::StrategySet;

type DefaultsProvider = Arc<dyn Fn() -> StrategySet + Send + Sync>;

/// Cache of default strategy sets keyed by backend kind.
///
/// Concurrency: first-time population for a kind may race; every racer
/// computes outside the lock and the write lock is only held to publish, so
/// redundant computation is tolerated but exactly one result becomes the
/// durable cache entry.
#[derive(Default)]
pub struct StrategyRegistry {
    providers: RwLock<HashMap<BackendKind, DefaultsProvider>>,
    cache: RwLock<HashMap<BackendKind, StrategySet>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        StrategyRegistry {
            providers: RwLock::new(HashMap::new()),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Register the default-strategy provider for a backend kind. Replaces
    /// any previous provider and drops the kind's cached set.
    pub fn register_defaults<F>(&self, kind: BackendKind, provider: F)
    where
        F: Fn() -> StrategySet + Send + Sync + 'static,
    {
        self.providers.write().insert(kind, Arc::new(provider));
        self.cache.write().remove(&kind);
    }

    /// The canonical default strategy set for a backend kind, computed once
    /// and reused. Returns an independent copy of the cached set.
    pub fn strategies(&self, kind: BackendKind) -> StrategyResult<StrategySet> {
        if let Some(cached) = self.cache.read().get(&kind) {
            return Ok(cached.clone());
        }

        let provider = self
            .providers
            .read()
            .get(&kind)
            .cloned()
            .ok_or(StrategyError::RegistryLookup(kind))?;

        // Potentially expensive; computed without holding any lock.
        let computed = provider();
        debug!("computed {} default strategies for backend kind '{kind}'", computed.len());

        let mut cache = self.cache.write();
        let published = cache.entry(kind).or_insert(computed);
        Ok(published.clone())
    }

    pub fn is_registered(&self, kind: BackendKind) -> bool {
        self.providers.read().contains_key(&kind)
    }

    /// Number of backend kinds with a registered provider.
    pub fn count(&self) -> usize {
        self.providers.read().len()
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::core::kind::StrategyKind;
    use crate::strategy::traits::{StrategyRef, TraversalStrategy};

    struct MarkerStrategy(StrategyKind);

    impl TraversalStrategy for MarkerStrategy {
        fn kind(&self) -> StrategyKind {
            self.0
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn marker(kind: StrategyKind) -> StrategyRef {
        Arc::new(MarkerStrategy(kind))
    }

    const MEMORY: BackendKind = BackendKind::new("memory");
    const SPARK: BackendKind = BackendKind::new("spark");

    #[test]
    fn test_register_and_lookup() {
        let registry = StrategyRegistry::new();
        registry.register_defaults(MEMORY, || {
            let mut set = StrategySet::new();
            set.add(marker(StrategyKind::new("memory-defaults")));
            set
        });

        assert!(registry.is_registered(MEMORY));
        assert_eq!(registry.count(), 1);

        let set = registry.strategies(MEMORY).expect("registered");
        assert_eq!(set.len(), 1);
        assert!(set.contains(StrategyKind::new("memory-defaults")));
    }

    #[test]
    fn test_unknown_kind_fails_lookup() {
        let registry = StrategyRegistry::new();
        let err = registry.strategies(SPARK).expect_err("unregistered");
        assert_eq!(err, StrategyError::RegistryLookup(SPARK));
    }

    #[test]
    fn test_provider_computed_once_then_cached() {
        let registry = StrategyRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        registry.register_defaults(MEMORY, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            StrategySet::new()
        });

        registry.strategies(MEMORY).expect("registered");
        registry.strategies(MEMORY).expect("registered");
        registry.strategies(MEMORY).expect("registered");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reregistering_drops_cached_set() {
        let registry = StrategyRegistry::new();
        registry.register_defaults(MEMORY, StrategySet::new);
        assert!(registry.strategies(MEMORY).expect("registered").is_empty());

        registry.register_defaults(MEMORY, || {
            let mut set = StrategySet::new();
            set.add(marker(StrategyKind::new("v2")));
            set
        });
        let set = registry.strategies(MEMORY).expect("registered");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_concurrent_first_population_publishes_one_value() {
        let registry = Arc::new(StrategyRegistry::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        registry.register_defaults(MEMORY, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let mut set = StrategySet::new();
            set.add(marker(StrategyKind::new("memory-defaults")));
            set
        });

        std::thread::scope(|scope| {
            for _ in 0..8 {
                let registry = Arc::clone(&registry);
                scope.spawn(move || {
                    let set = registry.strategies(MEMORY).expect("registered");
                    assert_eq!(set.len(), 1);
                });
            }
        });

        // racers may have computed redundantly, but the published entry is
        // durable: later lookups never invoke the provider again
        let settled = calls.load(Ordering::SeqCst);
        assert!(settled >= 1);
        registry.strategies(MEMORY).expect("registered");
        assert_eq!(calls.load(Ordering::SeqCst), settled);
    }
}
