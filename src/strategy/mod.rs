//! Traversal strategies, their ordered container, and the defaults registry
//!
//! ## Module structure
//!
//! - `traits` - the `TraversalStrategy` capability every strategy implements
//! - `set` - `StrategySet`, the deduplicated, topologically-ordered container
//! - `registry` - `StrategyRegistry`, per-backend-kind default strategy cache
//! - `decoration` - the built-in decoration strategies the configuration
//!   surface knows how to construct

pub mod decoration;
pub mod registry;
pub mod set;
pub mod traits;

pub use decoration::{
    Computer, ComputerDelegationStrategy, SackStrategy, SackStrategyBuilder, SideEffectEntry,
    SideEffectStrategy, TranslationStrategy, Translator, COMPUTER_DELEGATION, GENERIC_COMPUTE,
    SACK, SIDE_EFFECT, TRANSLATION,
};
pub use registry::StrategyRegistry;
pub use set::StrategySet;
pub use traits::{StrategyRef, TraversalStrategy};
