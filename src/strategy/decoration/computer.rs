//! Computer delegation decoration strategy
//!
//! Routes traversal execution to an alternate, possibly distributed, compute
//! backend instead of the default in-process executor. The `Computer`
//! descriptor can materialize a delegate from the graph's backend handle; if
//! that fails, its declared delegate kind still lets the correct default
//! strategies be looked up from the registry.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::core::backend::{Backend, ComputeDelegate};
use crate::core::error::DelegateBuildError;
use crate::core::kind::{BackendKind, StrategyKind};
use crate::strategy::traits::TraversalStrategy;

pub const COMPUTER_DELEGATION: StrategyKind = StrategyKind::new("computer-delegation");

/// The delegate kind assumed when a computer is built without naming one.
pub const GENERIC_COMPUTE: BackendKind = BackendKind::new("compute");

/// Builder describing which compute delegate a traversal should run on.
#[derive(Clone, Default)]
pub struct Computer {
    kind: Option<BackendKind>,
}

impl Computer {
    /// A computer using the backend's own default delegate.
    pub fn new() -> Self {
        Computer { kind: None }
    }

    /// A computer targeting a specific delegate kind.
    pub fn of(kind: BackendKind) -> Self {
        Computer { kind: Some(kind) }
    }

    /// Attempt to materialize the delegate from the backend handle.
    pub fn try_build(
        &self,
        backend: &dyn Backend,
    ) -> Result<Arc<dyn ComputeDelegate>, DelegateBuildError> {
        backend.compute(self.kind)
    }

    /// The delegate kind to assume when materialization fails.
    pub fn delegate_kind(&self) -> BackendKind {
        self.kind.unwrap_or(GENERIC_COMPUTE)
    }
}

impl fmt::Debug for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computer")
            .field("kind", &self.kind.map(|k| k.name()))
            .finish()
    }
}

/// Decoration strategy carrying the computer descriptor and the delegate
/// kind it resolved to (materialized, or the declared fallback).
#[derive(Clone, Debug)]
pub struct ComputerDelegationStrategy {
    computer: Computer,
    delegate_kind: BackendKind,
}

impl ComputerDelegationStrategy {
    pub fn new(computer: Computer, delegate_kind: BackendKind) -> Self {
        ComputerDelegationStrategy {
            computer,
            delegate_kind,
        }
    }

    pub fn computer(&self) -> &Computer {
        &self.computer
    }

    pub fn delegate_kind(&self) -> BackendKind {
        self.delegate_kind
    }
}

impl TraversalStrategy for ComputerDelegationStrategy {
    fn kind(&self) -> StrategyKind {
        COMPUTER_DELEGATION
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
