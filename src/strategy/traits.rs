//! The strategy capability
//!
//! A strategy is a pluggable unit that decorates or rewrites how a spawned
//! traversal executes. This core never invokes a strategy; it stores them,
//! deduplicates them by kind, and hands the engine a valid total order.

use std::any::Any;
use std::sync::Arc;

use crate::core::kind::StrategyKind;

/// A pluggable unit of traversal behavior, identified by its kind and ordered
/// relative to other kinds.
///
/// Instances are immutable once placed in a set; replacing one means
/// remove-then-add (or an overwrite-by-kind add).
pub trait TraversalStrategy: Send + Sync {
    /// The sole identity of this strategy. A set holds at most one instance
    /// per kind.
    fn kind(&self) -> StrategyKind;

    /// Kinds that must run after this strategy.
    fn precedes(&self) -> Vec<StrategyKind> {
        Vec::new()
    }

    /// Kinds that must run before this strategy.
    fn follows(&self) -> Vec<StrategyKind> {
        Vec::new()
    }

    /// Downcast access to the concrete strategy, used by the configuration
    /// surface and the engine to reach kind-specific payloads.
    fn as_any(&self) -> &dyn Any;
}

impl std::fmt::Debug for dyn TraversalStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TraversalStrategy").field(&self.kind()).finish()
    }
}

/// Shared handle to a strategy instance.
pub type StrategyRef = Arc<dyn TraversalStrategy>;
