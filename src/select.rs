//! The Selector: descends the buffer until a target position is a pivot.
//!
//! Adapted from the iterative shape of
//! `chapter_09::randomized_select_iterative` — a loop, not recursion, so
//! that resolving a position has bounded stack depth regardless of span
//! width — but operating against the pivot index instead of re-
//! partitioning a flat subarray on every call, so repeated `resolve`
//! calls on the same handle share work.

use crate::buffer::Buffer;
use crate::key::Order;
use crate::partition::{partition, PartitionOutcome};
use crate::pivot_index::{PivotEntry, PivotIndex};

/// Ensures `(k, _)` is present in `pivots`, i.e. `B[k]` is the `k`-th
/// order statistic. Idempotent: returns immediately if `k` is already a
/// pivot.
pub(crate) fn resolve<T, K: Ord>(
    buffer: &mut Buffer<T, K>,
    pivots: &mut PivotIndex,
    order: Order,
    k: usize,
) {
    loop {
        if pivots.contains(k) {
            return;
        }

        let (l, r) = pivots.bracket(k);

        if r.sorted_left_gap {
            pivots.insert(PivotEntry { pos: k as isize, sorted_left_gap: true });
            return;
        }

        let lo = (l.pos + 1) as usize;
        let hi = r.pos as usize;

        match partition(buffer, lo, hi, order) {
            PartitionOutcome::SortedGap => {
                pivots.mark_sorted(r.pos);
            }
            PartitionOutcome::Pivot(p) => {
                pivots.insert(PivotEntry { pos: p as isize, sorted_left_gap: false });
                if p == k {
                    return;
                }
            }
        }
    }
}
