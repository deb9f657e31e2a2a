// src/expand.rs
// ============================================================================
// Module: Fixture Expansion
// Description: Field-by-field expansion of struct fixtures for table tests.
// Purpose: Produce every variant of a fixture that permutes one ordered
//          field at a time, recursing through nested record fields.
// Dependencies: crate::permutation
// ============================================================================

//! ## Overview
//! This module turns a fixture value into the ordered set of variants used
//! with "matches any of" assertions: the unmodified base value first, then,
//! per variable field in declaration order, one variant per non-identity
//! ordering of that field. Fields are never varied simultaneously; every
//! variant differs from the base in exactly one field.
//!
//! There is no runtime reflection in Rust, so field discovery is an explicit
//! contract: each fixture type implements [`Permutable`] and declares its
//! variable fields through a [`FieldExpansion`] builder. Undeclared fields
//! are opaque and copied verbatim into every variant. Sequence elements only
//! need `Clone + PartialEq`, so a sequence nested inside a sequence can never
//! be declared as variable; that limitation is deliberate.
//!
//! ### Example
//!
//! ```
//! use fixture_permute::FieldExpansion;
//! use fixture_permute::Permutable;
//! use fixture_permute::expand_fixture;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Batch {
//!     name: String,
//!     entries: Vec<u32>,
//! }
//!
//! impl Permutable for Batch {
//!     fn field_variants(&self) -> Vec<Self> {
//!         FieldExpansion::of(self)
//!             .sequence(&self.entries, |base, entries| Self { entries, ..base.clone() })
//!             .finish()
//!     }
//! }
//!
//! let batch = Batch { name: "batch".to_string(), entries: vec![1, 2] };
//! let expanded = expand_fixture(&batch);
//! assert_eq!(expanded.len(), 2);
//! assert_eq!(expanded[0].entries, vec![1, 2]);
//! assert_eq!(expanded[1].entries, vec![2, 1]);
//! assert_eq!(expanded[1].name, "batch");
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::permutation::IdentityOrdering;
use crate::permutation::orderings;

// ============================================================================
// SECTION: Contract
// ============================================================================

/// Declares which fields of a fixture vary and how.
///
/// Implementations return every variant of `self` that differs in exactly one
/// variable field, in field declaration order, without the base value itself.
/// The provided [`FieldExpansion`] builder keeps implementations down to one
/// line per variable field.
///
/// # Invariants
/// - The returned variants never include a value equal to `self` unless a
///   duplicate arises through nested expansion of equal sibling values.
/// - Variant order is a pure function of `self`.
pub trait Permutable: Clone {
    /// Returns the single-field variants of `self` in declaration order.
    fn field_variants(&self) -> Vec<Self>;
}

/// Expands a fixture into its full variant set.
///
/// The first element is always the unmodified input; the remainder are the
/// [`Permutable::field_variants`] in order. A fixture with no variable fields
/// expands to a singleton.
#[must_use]
pub fn expand_fixture<T: Permutable>(value: &T) -> Vec<T> {
    let mut out = vec![value.clone()];
    out.append(&mut value.field_variants());
    out
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Accumulates single-field variants of a base fixture value.
///
/// Each call declares one variable field; call order fixes the output order
/// and should follow field declaration order. The `rebuild` closures receive
/// the base value and the replacement field content and must synthesize a new
/// value equal to the base in every other field (struct-update syntax over a
/// clone of the base is the expected shape).
#[derive(Debug)]
pub struct FieldExpansion<'a, T> {
    /// The unmodified fixture every variant is synthesized from.
    base: &'a T,
    /// Variants accumulated so far, in declaration order.
    variants: Vec<T>,
}

impl<'a, T> FieldExpansion<'a, T> {
    /// Starts an expansion over the given base value.
    #[must_use]
    pub const fn of(base: &'a T) -> Self {
        Self {
            base,
            variants: Vec::new(),
        }
    }

    /// Declares an ordered-sequence field.
    ///
    /// Contributes one variant per non-identity ordering of `items`, in
    /// backtracking-generation order. An empty or single-element sequence
    /// contributes nothing.
    #[must_use]
    pub fn sequence<E, F>(mut self, items: &[E], rebuild: F) -> Self
    where
        E: Clone + PartialEq,
        F: Fn(&T, Vec<E>) -> T,
    {
        for ordering in orderings(items, IdentityOrdering::Exclude) {
            self.variants.push(rebuild(self.base, ordering));
        }
        self
    }

    /// Declares a nested record (or boxed record) field.
    ///
    /// Contributes the recursive expansion of `field` minus its base entry:
    /// one variant per single-field variant of the nested value, each rebuilt
    /// against the outer base.
    #[must_use]
    pub fn nested<N, F>(mut self, field: &N, rebuild: F) -> Self
    where
        N: Permutable,
        F: Fn(&T, N) -> T,
    {
        for variant in field.field_variants() {
            self.variants.push(rebuild(self.base, variant));
        }
        self
    }

    /// Finishes the expansion and returns the accumulated variants.
    #[must_use]
    pub fn finish(self) -> Vec<T> {
        self.variants
    }
}

// ============================================================================
// SECTION: Pointer And Leaf Impls
// ============================================================================

impl<T: Permutable> Permutable for Box<T> {
    fn field_variants(&self) -> Vec<Self> {
        self.as_ref()
            .field_variants()
            .into_iter()
            .map(Box::new)
            .collect()
    }
}

impl<T: Permutable> Permutable for Option<T> {
    fn field_variants(&self) -> Vec<Self> {
        self.as_ref().map_or_else(Vec::new, |value| {
            value.field_variants().into_iter().map(Some).collect()
        })
    }
}

/// Implements [`Permutable`] for opaque leaf types with no variable fields,
/// so non-record inputs expand to a singleton instead of failing.
macro_rules! opaque_fixture {
    ($($leaf:ty),* $(,)?) => {
        $(
            impl Permutable for $leaf {
                fn field_variants(&self) -> Vec<Self> {
                    Vec::new()
                }
            }
        )*
    };
}

opaque_fixture!(
    String, bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    ()
);

impl Permutable for &str {
    fn field_variants(&self) -> Vec<Self> {
        Vec::new()
    }
}
