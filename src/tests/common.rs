//! Common fixtures and helpers for step tests.
//!
//! This module contains:
//! - `Session` / `Profile`: the context built by arrange phases
//! - `MathError`: error type for acts with fallible outcomes
//! - `Trace`: a shared, ordered record of which phase ran when
//! - Small async helpers standing in for real pending work

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

// ============================================================================
// Context Types
// ============================================================================

/// A user profile, part of the arranged context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
}

/// The context most arranged-shape tests run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Profile,
    pub permissions: Vec<&'static str>,
}

/// Build the canonical test session.
pub fn session() -> Session {
    Session {
        user: Profile {
            name: "Test User".into(),
            age: 30,
        },
        permissions: vec!["read", "write"],
    }
}

/// Async stand-in for loading a session from somewhere slow.
pub async fn fetch_session() -> Session {
    tokio::time::sleep(Duration::from_millis(10)).await;
    session()
}

/// Async stand-in for deriving a display name.
pub async fn render_display_name(name: String, age: u32) -> String {
    tokio::time::sleep(Duration::from_millis(5)).await;
    format!("{} ({})", name, age)
}

/// Async equality assertion, for assert phases that await.
pub async fn eventually_equal(left: String, right: String) {
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(left, right);
}

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced by acts with fallible outcomes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// Division by zero.
    #[error("division by zero")]
    DivideByZero,
}

/// A fallible act body: integer division.
pub fn divide(a: u32, b: u32) -> Result<u32, MathError> {
    a.checked_div(b).ok_or(MathError::DivideByZero)
}

// ============================================================================
// Phase Trace
// ============================================================================

/// Ordered record of phase entries, shared between test closures.
#[derive(Clone, Default)]
pub struct Trace(Arc<Mutex<Vec<&'static str>>>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: &'static str) {
        self.0.lock().push(event);
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.0.lock().clone()
    }
}
