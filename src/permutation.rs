// src/permutation.rs
// ============================================================================
// Module: Permutation Engine
// Description: Deterministic full enumeration of slice orderings.
// Purpose: Produce every ordering of a slice via backtracking, with optional
//          exclusion of orderings equal to the input.
// Dependencies: smallvec
// ============================================================================

//! ## Overview
//! This module enumerates every ordering of a slice by backtracking over index
//! slots, visiting candidate source indices in ascending original order at
//! each slot. Output order is therefore a pure function of the input and is
//! stable across calls. Cost is factorial in the slice length; callers keep
//! fixture sequences small.

// ============================================================================
// SECTION: Imports
// ============================================================================

use smallvec::SmallVec;
use smallvec::smallvec;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Policy for orderings that are element-wise equal to the input.
///
/// # Invariants
/// - With duplicate elements, several generated orderings may equal the
///   input; the policy applies to all of them, not only the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityOrdering {
    /// Keep orderings equal to the input in the result.
    Include,
    /// Drop every ordering equal to the input from the result.
    Exclude,
}

/// Returns every ordering of `items` in backtracking-generation order.
///
/// The enumeration fills index slots left to right and tries source indices
/// in ascending order at every slot, so for equal inputs the output sequence
/// is identical. An empty input yields an empty result: no orderings at all,
/// not even the empty ordering.
#[must_use]
pub fn orderings<T>(items: &[T], identity: IdentityOrdering) -> Vec<Vec<T>>
where
    T: Clone + PartialEq,
{
    if items.is_empty() {
        return Vec::new();
    }

    let mut in_use: SmallVec<[bool; 8]> = smallvec![false; items.len()];
    let mut slots: SmallVec<[usize; 8]> = SmallVec::with_capacity(items.len());
    let mut generated = Vec::new();
    fill_slots(items, &mut in_use, &mut slots, &mut generated);

    if identity == IdentityOrdering::Exclude {
        generated.retain(|ordering| ordering.as_slice() != items);
    }
    generated
}

// ============================================================================
// SECTION: Backtracking
// ============================================================================

/// Extends the partial assignment in `slots` with every unused source index,
/// emitting a completed ordering once all slots are filled.
fn fill_slots<T: Clone>(
    items: &[T],
    in_use: &mut SmallVec<[bool; 8]>,
    slots: &mut SmallVec<[usize; 8]>,
    out: &mut Vec<Vec<T>>,
) {
    if slots.len() == items.len() {
        out.push(slots.iter().map(|&index| items[index].clone()).collect());
        return;
    }
    for index in 0 .. items.len() {
        if in_use[index] {
            continue;
        }
        in_use[index] = true;
        slots.push(index);
        fill_slots(items, in_use, slots, out);
        slots.pop();
        in_use[index] = false;
    }
}
