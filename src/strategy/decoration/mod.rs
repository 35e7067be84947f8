//! Built-in decoration strategies
//!
//! The four strategy kinds the traversal source configuration surface knows
//! how to construct and install:
//!
//! - `side_effect` - named, shared, reducible accumulators
//! - `sack` - a per-branch carried value with fork/join operators
//! - `computer` - delegation of execution to an alternate backend
//! - `translation` - replay of a traversal in a different target language

pub mod computer;
pub mod sack;
pub mod side_effect;
pub mod translation;

pub use computer::{Computer, ComputerDelegationStrategy, COMPUTER_DELEGATION, GENERIC_COMPUTE};
pub use sack::{SackStrategy, SackStrategyBuilder, SACK};
pub use side_effect::{SideEffectEntry, SideEffectStrategy, SIDE_EFFECT};
pub use translation::{TranslationStrategy, Translator, TRANSLATION};
