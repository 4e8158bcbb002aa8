#![deny(missing_docs)]

//! Triphase — declarative arrange/act/assert test steps.
//!
//! # Design Goals
//!
//! Triphase is focused on **one uniform execution contract**:
//!
//! - **Structured test bodies**: a step is an arrange phase (optional), an
//!   act phase, and an assert phase, always run in that order
//! - **Sync and async interchangeable**: every phase is awaited through one
//!   canonical path, so a direct value and a pending one behave identically
//! - **Reentrant by construction**: a composed procedure holds only its
//!   definition and may be invoked once per table row with fully independent
//!   results
//!
//! # Core Concepts
//!
//! - [`step`]: entry point for declaring a step; the builder path taken
//!   decides whether the definition carries an arrange phase
//! - [`Procedure`]: the composed, awaitable test procedure
//! - [`Fixture`]: a reusable arrange source shared across steps
//!
//! Failures are ordinary panics (from `assert_eq!` or any assertion macro)
//! and unwind out of the procedure untouched, so the host runner reports the
//! original message and backtrace.

// Modules
mod builder;
mod fixture;
mod macros;
mod phase;
mod procedure;

// Re-exports for convenience
pub use builder::{step, Acted, Arranged, Direct, StepBuilder};
pub use fixture::Fixture;
pub use procedure::Procedure;

#[cfg(test)]
mod tests;
