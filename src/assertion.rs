// src/assertion.rs
// ============================================================================
// Module: Error Assertions
// Description: Message-equality checks for errors in table-driven tests.
// Purpose: Provide a pluggable expected-error strategy that compares an
//          error's display message against an expected string.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Table-driven tests often carry an expected-error column. This module
//! provides [`error_with_message`], a factory producing a check closure over
//! an optional error value: absent errors fail, present errors fail unless
//! their display message equals the expected string exactly. Failures are
//! reported as [`AssertionError`] values so test functions can propagate them
//! through their `Result` return.
//!
//! ### Example
//!
//! ```
//! use std::fmt;
//!
//! use fixture_permute::error_with_message;
//!
//! #[derive(Debug)]
//! struct Boom;
//!
//! impl fmt::Display for Boom {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("boom")
//!     }
//! }
//!
//! let check = error_with_message::<Boom>("boom");
//! assert!(check(Some(&Boom)).is_ok());
//! assert!(check(None).is_err());
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use thiserror::Error;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Check closure produced by [`error_with_message`].
pub type ErrorAssertion<E> = Box<dyn Fn(Option<&E>) -> Result<(), AssertionError>>;

/// Failure raised by an [`ErrorAssertion`] check.
///
/// # Invariants
/// - Variants are stable for programmatic matching in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// No error was present although one was expected.
    #[error("an error was expected, got none (wanted message {expected:?})")]
    ExpectedError {
        /// The message the absent error was expected to carry.
        expected: String,
    },
    /// An error was present but its message did not match.
    #[error("error message mismatch: expected {expected:?}, got {actual:?}")]
    MessageMismatch {
        /// The expected display message.
        expected: String,
        /// The actual display message.
        actual: String,
    },
}

/// Returns a check that accepts only errors whose display message equals
/// `expected`.
///
/// The check fails with [`AssertionError::ExpectedError`] when no error is
/// present and with [`AssertionError::MessageMismatch`] when the message
/// differs; comparison is exact, with no trimming or case folding.
#[must_use]
pub fn error_with_message<E: fmt::Display>(expected: impl Into<String>) -> ErrorAssertion<E> {
    let expected = expected.into();
    Box::new(move |actual| match actual {
        None => Err(AssertionError::ExpectedError {
            expected: expected.clone(),
        }),
        Some(err) => {
            let actual = err.to_string();
            if actual == expected {
                Ok(())
            } else {
                Err(AssertionError::MessageMismatch {
                    expected: expected.clone(),
                    actual,
                })
            }
        }
    })
}
