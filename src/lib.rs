//! TraversalCore - the strategy-composition core of a graph traversal pipeline
//!
//! This crate provides the immutable "traversal source" configuration object
//! from which graph traversals are spawned, the pluggable strategies that
//! decorate or rewrite traversal execution, and the ordering and lifecycle
//! rules that let independently-authored strategies compose deterministically.
//! Plan rewriting and execution itself live in the engine that consumes the
//! resolved strategy order; this crate only assembles it.

pub mod core;
pub mod source;
pub mod strategy;
