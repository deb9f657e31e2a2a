// tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared helpers for integration tests.
// Purpose: Provide a fallible test result type and a readable assertion
//          helper usable across test targets.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Minimal shared helpers so tests report failures through their `Result`
//! return instead of panicking mid-table.

/// Result type for fallible tests.
pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Fails with `message` unless `condition` holds.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(message.into().into())
    }
}
