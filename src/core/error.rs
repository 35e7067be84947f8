//! Unified error types for the traversal configuration core
//!
//! Error design follows the needs of each failure:
//! - `StrategyError` covers the two configuration failures that surface to
//!   callers: cyclic ordering constraints and unknown registry keys
//! - `DelegateBuildError` is produced by delegate construction and is always
//!   recovered locally inside `with_computer`, never surfaced
//! - `TranslationError` belongs to the translator interface; the engine's
//!   replay path observes it, not this core

use thiserror::Error;

use crate::core::kind::{BackendKind, StrategyKind};

/// Errors surfaced by strategy set resolution and registry lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    /// The declared before/after constraints form a cycle. This is a
    /// configuration bug and is never retried.
    #[error("cyclic ordering constraint among strategies [{}]", format_kinds(.0))]
    CyclicConstraint(Vec<StrategyKind>),

    /// No default strategies are registered for the backend kind.
    #[error("no default strategies registered for backend kind '{0}'")]
    RegistryLookup(BackendKind),
}

/// Unified result type for strategy operations.
pub type StrategyResult<T> = Result<T, StrategyError>;

/// Failure to materialize a compute delegate from a backend handle.
///
/// Callers of `with_computer` never see this error: it is caught internally
/// and treated as a signal to fall back to the builder's declared delegate
/// kind.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("failed to build compute delegate for backend '{backend}': {reason}")]
pub struct DelegateBuildError {
    pub backend: BackendKind,
    pub reason: String,
}

impl DelegateBuildError {
    pub fn new(backend: BackendKind, reason: impl Into<String>) -> Self {
        DelegateBuildError {
            backend,
            reason: reason.into(),
        }
    }
}

/// Failure to translate a traversal into a target language.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslationError {
    /// The traversal has no equivalent in the target language.
    #[error("traversal not expressible in target language '{target}': {reason}")]
    Untranslatable { target: String, reason: String },

    /// The translator was handed a query representation it does not know.
    #[error("unsupported query representation for translator '{0}'")]
    UnsupportedRepresentation(String),
}

fn format_kinds(kinds: &[StrategyKind]) -> String {
    kinds
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_error_display() {
        let err = StrategyError::CyclicConstraint(vec![
            StrategyKind::new("a"),
            StrategyKind::new("b"),
        ]);
        assert_eq!(
            err.to_string(),
            "cyclic ordering constraint among strategies [a, b]"
        );

        let err = StrategyError::RegistryLookup(BackendKind::new("spark"));
        assert!(err.to_string().contains("'spark'"));
    }

    #[test]
    fn test_delegate_build_error_display() {
        let err = DelegateBuildError::new(BackendKind::new("memory"), "cluster unreachable");
        assert_eq!(
            err.to_string(),
            "failed to build compute delegate for backend 'memory': cluster unreachable"
        );
    }

    #[test]
    fn test_translation_error_display() {
        let err = TranslationError::Untranslatable {
            target: "gremlin-js".to_string(),
            reason: "lambda step".to_string(),
        };
        assert!(err.to_string().contains("gremlin-js"));
    }
}
