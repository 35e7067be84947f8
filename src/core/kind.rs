//! Identity newtypes for strategies and execution backends
//!
//! A strategy's kind is its sole identity: a strategy set holds at most one
//! instance per kind, and ordering constraints are declared between kinds.
//! Backend kinds identify execution-engine variants in the strategy registry.

use std::fmt;

use serde::Serialize;

/// Identity of a strategy implementation.
///
/// Two strategy instances with the same kind are considered the same entry
/// for deduplication and removal purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StrategyKind(&'static str);

impl StrategyKind {
    pub const fn new(name: &'static str) -> Self {
        StrategyKind(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Identity of an execution backend variant.
///
/// Used as the key into the strategy registry: each backend kind declares the
/// default strategies a traversal must carry to run against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BackendKind(&'static str);

impl BackendKind {
    pub const fn new(name: &'static str) -> Self {
        BackendKind(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_identity() {
        const A: StrategyKind = StrategyKind::new("side-effect");
        let b = StrategyKind::new("side-effect");
        assert_eq!(A, b);
        assert_ne!(A, StrategyKind::new("sack"));
        assert_eq!(A.name(), "side-effect");
        assert_eq!(A.to_string(), "side-effect");
    }

    #[test]
    fn test_backend_kind_display() {
        let kind = BackendKind::new("distributed");
        assert_eq!(kind.to_string(), "distributed");
        assert_eq!(kind, BackendKind::new("distributed"));
    }
}
