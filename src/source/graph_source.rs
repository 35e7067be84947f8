//! Concrete traversal source and its factory
//!
//! `GraphTraversalSource` is the standard source implementation: a shared
//! backend handle, an owned strategy set, the registry the backend's defaults
//! come from, and the creation ledger. `SourceFactory` is the explicit
//! construction path: given a backend handle it produces a base source
//! pre-loaded with the backend kind's registered defaults.

use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::core::backend::BackendHandle;
use crate::source::ledger::CreationLedger;
use crate::source::traversal_source::TraversalSource;
use crate::strategy::registry::StrategyRegistry;
use crate::strategy::set::StrategySet;

/// The standard traversal source: immutable value-like configuration from
/// which traversals are spawned.
pub struct GraphTraversalSource {
    backend: BackendHandle,
    strategies: StrategySet,
    registry: Arc<StrategyRegistry>,
    ledger: CreationLedger,
}

impl GraphTraversalSource {
    pub fn new(
        backend: BackendHandle,
        strategies: StrategySet,
        registry: Arc<StrategyRegistry>,
    ) -> Self {
        GraphTraversalSource {
            backend,
            strategies,
            registry,
            ledger: CreationLedger::new(),
        }
    }
}

impl TraversalSource for GraphTraversalSource {
    fn strategies(&self) -> &StrategySet {
        &self.strategies
    }

    fn strategies_mut(&mut self) -> &mut StrategySet {
        &mut self.strategies
    }

    fn backend(&self) -> &BackendHandle {
        &self.backend
    }

    fn registry(&self) -> &Arc<StrategyRegistry> {
        &self.registry
    }

    fn ledger(&self) -> &CreationLedger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut CreationLedger {
        &mut self.ledger
    }

    fn clone_source(&self) -> Self {
        GraphTraversalSource {
            backend: Arc::clone(&self.backend),
            strategies: self.strategies.clone(),
            registry: Arc::clone(&self.registry),
            ledger: self.ledger.clone(),
        }
    }
}

impl fmt::Debug for GraphTraversalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphTraversalSource")
            .field("backend", &self.backend.kind())
            .field("strategies", &self.strategies)
            .finish()
    }
}

/// Explicit per-backend construction path for base traversal sources.
///
/// A source created here starts from the backend kind's registered default
/// strategies; a backend kind with no registered defaults yields an empty
/// set (a fresh kind is not an error at construction time).
pub struct SourceFactory {
    registry: Arc<StrategyRegistry>,
}

impl SourceFactory {
    pub fn new(registry: Arc<StrategyRegistry>) -> Self {
        SourceFactory { registry }
    }

    pub fn create(&self, backend: BackendHandle) -> GraphTraversalSource {
        let defaults = match self.registry.strategies(backend.kind()) {
            Ok(defaults) => defaults,
            Err(_) => {
                trace!(
                    "no default strategies for backend kind '{}', starting empty",
                    backend.kind()
                );
                StrategySet::new()
            }
        };
        GraphTraversalSource::new(backend, defaults, Arc::clone(&self.registry))
    }
}
