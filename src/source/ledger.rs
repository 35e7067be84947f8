//! Append-only record of configuration calls
//!
//! Some configuration calls must be replayable: when a spawned traversal has
//! to be reconstructed against a freshly created sibling source (distributed
//! sub-query creation, for instance), the same configuration sequence is
//! reapplied from this ledger. The core only appends to and exposes read
//! access to it; interpretation belongs to the replaying mechanism.

use serde::Serialize;

use crate::core::kind::BackendKind;

/// One recorded argument of a configuration call. Function-valued arguments
/// cannot be rendered as data and are recorded as opaque markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LedgerArg {
    /// A side-effect key.
    Key(String),
    /// A backend/delegate kind.
    Backend(BackendKind),
    /// A supplier, reducer, or split/merge operator.
    Opaque,
}

/// One recorded configuration call: method name plus arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreationStep {
    method: &'static str,
    args: Vec<LedgerArg>,
}

impl CreationStep {
    pub fn new(method: &'static str, args: Vec<LedgerArg>) -> Self {
        CreationStep { method, args }
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn args(&self) -> &[LedgerArg] {
        &self.args
    }
}

/// The append-only sequence of configuration calls attached to a source.
/// Copied wholesale when the source is cloned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreationLedger {
    steps: Vec<CreationStep>,
}

impl CreationLedger {
    pub fn new() -> Self {
        CreationLedger { steps: Vec::new() }
    }

    pub fn record(&mut self, step: CreationStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[CreationStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreationStep> {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_call_order() {
        let mut ledger = CreationLedger::new();
        ledger.record(CreationStep::new(
            "with_side_effect",
            vec![LedgerArg::Key("count".to_string()), LedgerArg::Opaque],
        ));
        ledger.record(CreationStep::new(
            "with_computer",
            vec![LedgerArg::Backend(BackendKind::new("spark"))],
        ));

        assert_eq!(ledger.len(), 2);
        let methods: Vec<_> = ledger.iter().map(|s| s.method()).collect();
        assert_eq!(methods, vec!["with_side_effect", "with_computer"]);
        assert_eq!(
            ledger.steps()[0].args()[0],
            LedgerArg::Key("count".to_string())
        );
    }

    #[test]
    fn test_serializes_for_inspection() {
        let mut ledger = CreationLedger::new();
        ledger.record(CreationStep::new(
            "with_computer",
            vec![LedgerArg::Backend(BackendKind::new("spark"))],
        ));

        let json = serde_json::to_string(&ledger).expect("serializable");
        assert!(json.contains("with_computer"));
        assert!(json.contains("spark"));
    }
}
