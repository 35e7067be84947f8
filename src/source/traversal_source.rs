//! The traversal source capability and its configuration surface
//!
//! A traversal source pairs a backend handle with a strategy set and is
//! immutable from the caller's perspective: every configuration method clones
//! the source, mutates the clone's strategy set, and returns the clone.
//!
//! The required capability (`TraversalSource`) is deliberately minimal; the
//! whole `with*` surface lives on `SourceConfig` and is blanket-implemented
//! for every source type, so backend-specific implementations never re-derive
//! the configuration behavior.

use std::any::Any;
use std::sync::Arc;

use log::warn;

use crate::core::backend::BackendHandle;
use crate::core::error::StrategyResult;
use crate::core::functional::{
    constant_supplier, merge_of, reducer_of, split_of, supplier_of, MergeOperator, Reducer,
    SplitOperator, Supplier,
};
use crate::core::kind::{BackendKind, StrategyKind};
use crate::source::ledger::{CreationLedger, CreationStep, LedgerArg};
use crate::strategy::decoration::computer::{Computer, ComputerDelegationStrategy};
use crate::strategy::decoration::sack::SackStrategy;
use crate::strategy::decoration::side_effect::SideEffectStrategy;
use crate::strategy::decoration::translation::{TranslationStrategy, Translator};
use crate::strategy::registry::StrategyRegistry;
use crate::strategy::set::StrategySet;
use crate::strategy::traits::StrategyRef;

/// Minimal capability a traversal source must provide. Everything else is
/// derived by `SourceConfig`.
pub trait TraversalSource: Sized + Send + Sync {
    fn strategies(&self) -> &StrategySet;

    fn strategies_mut(&mut self) -> &mut StrategySet;

    fn backend(&self) -> &BackendHandle;

    fn registry(&self) -> &Arc<StrategyRegistry>;

    fn ledger(&self) -> &CreationLedger;

    fn ledger_mut(&mut self) -> &mut CreationLedger;

    /// The single required primitive of the configuration surface: a copy
    /// whose strategy set and ledger are independent storage from this
    /// source's. The backend handle is shared, not owned.
    fn clone_source(&self) -> Self;
}

/// The `with*` configuration surface, expressed purely in terms of
/// `clone_source` plus strategy set mutation. Blanket-implemented for every
/// `TraversalSource`.
pub trait SourceConfig: TraversalSource {
    /// Add strategies to a clone's set, overwrite-by-kind.
    fn with_strategies<I>(&self, strategies: I) -> Self
    where
        I: IntoIterator<Item = StrategyRef>,
    {
        let mut clone = self.clone_source();
        clone.strategies_mut().add_strategies(strategies);
        clone
    }

    /// Remove the given kinds from a clone's set.
    fn without_strategies(&self, kinds: &[StrategyKind]) -> Self {
        let mut clone = self.clone_source();
        clone.strategies_mut().remove_strategies(kinds);
        clone
    }

    /// Route spawned traversals to a compute delegate.
    ///
    /// Materialization failure never propagates: the computer's declared
    /// delegate kind is used instead, so the right default strategies can
    /// still be looked up. The delegation strategy is installed first,
    /// followed by the delegate kind's registry defaults in registry order.
    /// Only the registry lookup can fail.
    fn with_computer(&self, computer: Computer) -> StrategyResult<Self> {
        let delegate_kind = match computer.try_build(self.backend().as_ref()) {
            Ok(delegate) => delegate.kind(),
            Err(err) => {
                warn!(
                    "compute delegate construction failed, falling back to declared kind '{}': {err}",
                    computer.delegate_kind()
                );
                computer.delegate_kind()
            }
        };
        let defaults = self.registry().strategies(delegate_kind)?;

        let mut clone = self.clone_source();
        let delegation: StrategyRef =
            Arc::new(ComputerDelegationStrategy::new(computer, delegate_kind));
        clone.strategies_mut().add(delegation);
        clone.strategies_mut().add_strategies(defaults);
        clone.ledger_mut().record(CreationStep::new(
            "with_computer",
            vec![LedgerArg::Backend(delegate_kind)],
        ));
        Ok(clone)
    }

    /// `with_computer` targeting a specific delegate kind.
    fn with_computer_kind(&self, kind: BackendKind) -> StrategyResult<Self> {
        self.with_computer(Computer::of(kind))
    }

    /// `with_computer` using the backend's default delegate.
    fn with_default_computer(&self) -> StrategyResult<Self> {
        self.with_computer(Computer::new())
    }

    /// Install a translation strategy carrying the translator and a clone of
    /// this (pre-translation) source for later replay.
    fn with_translator(&self, translator: Arc<dyn Translator>) -> Self
    where
        Self: Any,
    {
        let replay_source = self.clone_source();
        self.with_strategies([
            Arc::new(TranslationStrategy::new(translator, replay_source)) as StrategyRef
        ])
    }

    /// Declare a side effect initialized to a literal value.
    fn with_side_effect<T>(&self, key: &str, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.with_side_effect_erased(key, constant_supplier(value), None)
    }

    /// Declare a side effect initialized by a value-producing function.
    fn with_side_effect_supplied<T, F>(&self, key: &str, supplier: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.with_side_effect_erased(key, supplier_of(supplier), None)
    }

    /// Declare a reducible side effect initialized to a literal value.
    fn with_side_effect_reduced<T, F>(&self, key: &str, value: T, reducer: F) -> Self
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        self.with_side_effect_erased(key, constant_supplier(value), Some(reducer_of(reducer)))
    }

    /// Declare a reducible side effect initialized by a value-producing
    /// function.
    fn with_side_effect_reduced_supplied<T, F, R>(&self, key: &str, supplier: F, reducer: R) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
        R: Fn(T, T) -> T + Send + Sync + 'static,
    {
        self.with_side_effect_erased(key, supplier_of(supplier), Some(reducer_of(reducer)))
    }

    /// Type-erased funnel for every side-effect overload. Re-declaring a key
    /// replaces its initializer and reducer (last call wins).
    fn with_side_effect_erased(
        &self,
        key: &str,
        supplier: Supplier,
        reducer: Option<Reducer>,
    ) -> Self {
        let mut clone = self.clone_source();
        let mut args = vec![LedgerArg::Key(key.to_string()), LedgerArg::Opaque];
        if reducer.is_some() {
            args.push(LedgerArg::Opaque);
        }
        SideEffectStrategy::install(clone.strategies_mut(), key, supplier, reducer);
        clone
            .ledger_mut()
            .record(CreationStep::new("with_side_effect", args));
        clone
    }

    /// Carry a sack initialized to a literal value.
    fn with_sack<T>(&self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.with_sack_erased(constant_supplier(value), None, None)
    }

    /// Carry a sack initialized by a value-producing function.
    fn with_sack_supplied<T, F>(&self, supplier: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.with_sack_erased(supplier_of(supplier), None, None)
    }

    /// Sack with a split operator, literal initializer.
    fn with_sack_split<T, S>(&self, value: T, split: S) -> Self
    where
        T: Clone + Send + Sync + 'static,
        S: Fn(&T) -> T + Send + Sync + 'static,
    {
        self.with_sack_erased(constant_supplier(value), Some(split_of(split)), None)
    }

    /// Sack with a split operator, supplied initializer.
    fn with_sack_split_supplied<T, F, S>(&self, supplier: F, split: S) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
        S: Fn(&T) -> T + Send + Sync + 'static,
    {
        self.with_sack_erased(supplier_of(supplier), Some(split_of(split)), None)
    }

    /// Sack with a merge operator, literal initializer.
    fn with_sack_merge<T, M>(&self, value: T, merge: M) -> Self
    where
        T: Clone + Send + Sync + 'static,
        M: Fn(T, T) -> T + Send + Sync + 'static,
    {
        self.with_sack_erased(constant_supplier(value), None, Some(merge_of(merge)))
    }

    /// Sack with a merge operator, supplied initializer.
    fn with_sack_merge_supplied<T, F, M>(&self, supplier: F, merge: M) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
        M: Fn(T, T) -> T + Send + Sync + 'static,
    {
        self.with_sack_erased(supplier_of(supplier), None, Some(merge_of(merge)))
    }

    /// Sack with split and merge operators, literal initializer.
    fn with_sack_split_merge<T, S, M>(&self, value: T, split: S, merge: M) -> Self
    where
        T: Clone + Send + Sync + 'static,
        S: Fn(&T) -> T + Send + Sync + 'static,
        M: Fn(T, T) -> T + Send + Sync + 'static,
    {
        self.with_sack_erased(
            constant_supplier(value),
            Some(split_of(split)),
            Some(merge_of(merge)),
        )
    }

    /// Sack with split and merge operators, supplied initializer.
    fn with_sack_split_merge_supplied<T, F, S, M>(&self, supplier: F, split: S, merge: M) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
        S: Fn(&T) -> T + Send + Sync + 'static,
        M: Fn(T, T) -> T + Send + Sync + 'static,
    {
        self.with_sack_erased(
            supplier_of(supplier),
            Some(split_of(split)),
            Some(merge_of(merge)),
        )
    }

    /// Type-erased funnel for every sack overload. Installing a sack replaces
    /// any previously configured one entirely.
    fn with_sack_erased(
        &self,
        supplier: Supplier,
        split: Option<SplitOperator>,
        merge: Option<MergeOperator>,
    ) -> Self {
        let mut args = vec![LedgerArg::Opaque];
        let mut builder = SackStrategy::build(supplier);
        if let Some(split) = split {
            builder = builder.split_operator(split);
            args.push(LedgerArg::Opaque);
        }
        if let Some(merge) = merge {
            builder = builder.merge_operator(merge);
            args.push(LedgerArg::Opaque);
        }
        let mut clone = self.clone_source();
        clone.strategies_mut().add(Arc::new(builder.create()));
        clone
            .ledger_mut()
            .record(CreationStep::new("with_sack", args));
        clone
    }
}

impl<S: TraversalSource> SourceConfig for S {}
