//! Immutable traversal source configuration
//!
//! ## Module structure
//!
//! - `ledger` - append-only record of configuration calls for replay
//! - `traversal_source` - the minimal source capability and the `with*`
//!   configuration surface built on top of it
//! - `graph_source` - the concrete source implementation and its factory

pub mod graph_source;
pub mod ledger;
pub mod traversal_source;

pub use graph_source::{GraphTraversalSource, SourceFactory};
pub use ledger::{CreationLedger, CreationStep, LedgerArg};
pub use traversal_source::{SourceConfig, TraversalSource};
