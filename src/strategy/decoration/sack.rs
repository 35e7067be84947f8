//! Sack decoration strategy
//!
//! A sack is a value carried per traversal executor/branch. The strategy
//! always stores a producer, never a bare value, so each executor gets an
//! independently-initialized instance rather than a shared reference. The
//! optional split operator derives a forked branch's value from its parent's
//! (absent: identity copy); the optional merge operator recombines values
//! when branches rejoin (absent: no merge-on-join).

use std::any::Any;
use std::fmt;

use crate::core::functional::{ErasedValue, MergeOperator, SplitOperator, Supplier};
use crate::core::kind::StrategyKind;
use crate::strategy::traits::TraversalStrategy;

pub const SACK: StrategyKind = StrategyKind::new("sack");

/// Decoration strategy carrying the sack initializer and fork/join operators.
#[derive(Clone)]
pub struct SackStrategy {
    supplier: Supplier,
    split: Option<SplitOperator>,
    merge: Option<MergeOperator>,
}

impl SackStrategy {
    /// Start building a sack strategy. The initializer is required up front;
    /// split and merge operators are optional.
    pub fn build(supplier: Supplier) -> SackStrategyBuilder {
        SackStrategyBuilder {
            supplier,
            split: None,
            merge: None,
        }
    }

    /// Produce a fresh sack value for a new executor/branch.
    pub fn initial_value(&self) -> ErasedValue {
        (self.supplier)()
    }

    pub fn split_operator(&self) -> Option<&SplitOperator> {
        self.split.as_ref()
    }

    pub fn merge_operator(&self) -> Option<&MergeOperator> {
        self.merge.as_ref()
    }
}

impl TraversalStrategy for SackStrategy {
    fn kind(&self) -> StrategyKind {
        SACK
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for SackStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SackStrategy")
            .field("split", &self.split.is_some())
            .field("merge", &self.merge.is_some())
            .finish()
    }
}

/// Builder for `SackStrategy`.
pub struct SackStrategyBuilder {
    supplier: Supplier,
    split: Option<SplitOperator>,
    merge: Option<MergeOperator>,
}

impl SackStrategyBuilder {
    pub fn split_operator(mut self, split: SplitOperator) -> Self {
        self.split = Some(split);
        self
    }

    pub fn merge_operator(mut self, merge: MergeOperator) -> Self {
        self.merge = Some(merge);
        self
    }

    pub fn create(self) -> SackStrategy {
        SackStrategy {
            supplier: self.supplier,
            split: self.split,
            merge: self.merge,
        }
    }
}
