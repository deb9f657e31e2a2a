// src/lib.rs
// ============================================================================
// Module: Fixture Permute Library
// Description: Test-support library for order-independent fixture matching.
// Purpose: Expand struct fixtures into all single-field orderings and check
//          error messages in table-driven tests.
// Dependencies: smallvec, thiserror
// ============================================================================

//! ## Overview
//! This crate is a small test-support library with two independent pieces:
//!
//! - **Fixture expansion** ([`expand_fixture`]): given a fixture value whose
//!   type declares its variable fields through [`Permutable`], produce the
//!   base value plus every variant that reorders exactly one ordered field,
//!   recursing through nested record fields. The variant set feeds "matches
//!   any of" assertions when production code makes no ordering guarantee.
//! - **Error assertions** ([`error_with_message`]): a factory for check
//!   closures comparing an error's display message against an expected
//!   string, for use as an expected-error column in table-driven tests.
//!
//! Everything is synchronous and pure: no I/O, no shared state, fresh clones
//! per call. Expansion cost is factorial in the longest declared sequence
//! field; fixtures are expected to stay small.
//!
//! ## Index
//! - Expansion: [`expand_fixture`], [`Permutable`], [`FieldExpansion`]
//! - Engine: [`orderings`], [`IdentityOrdering`]
//! - Assertions: [`error_with_message`], [`ErrorAssertion`], [`AssertionError`]

pub mod assertion;
pub mod expand;
pub mod permutation;

pub use assertion::AssertionError;
pub use assertion::ErrorAssertion;
pub use assertion::error_with_message;
pub use expand::FieldExpansion;
pub use expand::Permutable;
pub use expand::expand_fixture;
pub use permutation::IdentityOrdering;
pub use permutation::orderings;
