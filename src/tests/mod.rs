//! Tests for arrange/act/assert step composition.
//!
//! ## Test Organization
//!
//! - `common`: Shared fixtures, an error type, and the phase-order trace
//! - `arranged`: Definitions with an arrange phase (success paths)
//! - `direct`: Definitions without an arrange phase
//! - `ordering`: Sequencing guarantees and sync/async equivalence
//! - `failure`: Panic propagation and skipped downstream phases
//! - `table`: Table-driven reuse and per-invocation independence
//!
//! ## Test Domain
//!
//! Most tests use a small "session" domain: an arrange phase builds a
//! `Session` (a user profile plus permissions), act derives something from
//! it, and assert checks the derived value against the same session.

mod common;

mod table;
