//! Opaque backend handle and compute delegate interfaces
//!
//! A traversal source holds a backend handle but never touches its internals.
//! The only capabilities this core requires are identity (for registry
//! lookups) and delegate construction (for `with_computer`).

use std::sync::Arc;

use crate::core::error::DelegateBuildError;
use crate::core::kind::BackendKind;

/// The data source traversals run against. Owned externally; shared by
/// reference between a source and its clones.
pub trait Backend: Send + Sync {
    /// Identity of this backend variant.
    fn kind(&self) -> BackendKind;

    /// Materialize a compute delegate of the requested kind, or the backend's
    /// own default delegate when `kind` is `None`. Synchronous and fallible;
    /// timeout or cancellation policy belongs to the delegate itself.
    fn compute(
        &self,
        kind: Option<BackendKind>,
    ) -> Result<Arc<dyn ComputeDelegate>, DelegateBuildError>;
}

/// Shared handle to a backend.
pub type BackendHandle = Arc<dyn Backend>;

/// An alternate execution engine a traversal can be routed to, e.g. a
/// distributed computer instead of the default in-process executor.
pub trait ComputeDelegate: Send + Sync {
    fn kind(&self) -> BackendKind;
}
