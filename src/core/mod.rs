//! Core types shared across the traversal configuration surface
//!
//! ## Module structure
//!
//! - `kind` - identity newtypes for strategies and execution backends
//! - `error` - unified error types and result aliases
//! - `backend` - the opaque graph/backend handle and compute delegate traits
//! - `functional` - type-erased suppliers and operators stored by strategies

pub mod backend;
pub mod error;
pub mod functional;
pub mod kind;

pub use backend::{Backend, BackendHandle, ComputeDelegate};
pub use error::{DelegateBuildError, StrategyError, StrategyResult, TranslationError};
pub use functional::{
    constant_supplier, merge_of, reducer_of, split_of, supplier_of, ErasedValue, MergeOperator,
    Reducer, SplitOperator, Supplier,
};
pub use kind::{BackendKind, StrategyKind};
