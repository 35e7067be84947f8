//! Translation decoration strategy
//!
//! Carries a translator plus a clone of the pre-translation source so that
//! any traversal spawned later can be replayed as an equivalent traversal in
//! the translator's target representation, with the same strategies applied.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::core::error::TranslationError;
use crate::core::kind::StrategyKind;
use crate::strategy::traits::TraversalStrategy;

pub const TRANSLATION: StrategyKind = StrategyKind::new("translation");

/// Rewrites a query into an equivalent query for a different target
/// execution/language backend. The query representation is owned by the
/// engine; this core never interprets it.
pub trait Translator: Send + Sync {
    fn source_language(&self) -> &str;

    fn target_language(&self) -> &str;

    fn translate(
        &self,
        query: &(dyn Any + Send + Sync),
    ) -> Result<Box<dyn Any + Send + Sync>, TranslationError>;
}

/// Decoration strategy installed by `with_translator`.
pub struct TranslationStrategy {
    translator: Arc<dyn Translator>,
    // the auxiliary clone of the source taken before translation was
    // configured, type-erased so the strategy fits any source type
    replay_source: Box<dyn Any + Send + Sync>,
}

impl TranslationStrategy {
    pub fn new<S>(translator: Arc<dyn Translator>, replay_source: S) -> Self
    where
        S: Any + Send + Sync,
    {
        TranslationStrategy {
            translator,
            replay_source: Box::new(replay_source),
        }
    }

    pub fn translator(&self) -> &Arc<dyn Translator> {
        &self.translator
    }

    /// The pre-translation source, downcast to its concrete type.
    pub fn replay_source_as<S: Any>(&self) -> Option<&S> {
        self.replay_source.downcast_ref::<S>()
    }
}

impl TraversalStrategy for TranslationStrategy {
    fn kind(&self) -> StrategyKind {
        TRANSLATION
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for TranslationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationStrategy")
            .field("target", &self.translator.target_language())
            .finish()
    }
}
