//! The in-place partitioning primitive (Hoare-style, Lomuto-scheme swaps).
//!
//! Grounded on `chapter_07::partition` (the Lomuto scan) and
//! `chapter_09::select::insertion_sort_median` (small-span fallback) from
//! the CLRS reference this crate grew out of, generalized to a randomized
//! median-of-three pivot choice per the spec's adversarial-resistance
//! requirement.

use crate::buffer::Buffer;
use crate::key::Order;
use rand::Rng;
use std::cmp::Ordering;

/// Below this span width, a full insertion sort beats partitioning
/// overhead. Kept within the spec's suggested 5-16 range.
pub(crate) const SORT_THRESH: usize = 8;

pub(crate) enum PartitionOutcome {
    /// `[lo, hi)` was small enough to be fully sorted in place.
    SortedGap,
    /// `B[lo..p) < B[p] <= B[p+1..hi)`; `p` is the pivot's final position.
    Pivot(usize),
}

/// Partitions `B[lo..hi)` around a pivot, or fully sorts it if the span
/// is small.
pub(crate) fn partition<T, K: Ord>(
    buffer: &mut Buffer<T, K>,
    lo: usize,
    hi: usize,
    order: Order,
) -> PartitionOutcome {
    debug_assert!(lo <= hi);
    let len = hi - lo;

    if len <= 1 {
        return PartitionOutcome::SortedGap;
    }
    if len <= SORT_THRESH {
        insertion_sort(buffer, lo, hi, order);
        return PartitionOutcome::SortedGap;
    }

    let pivot_idx = choose_pivot_index(buffer, lo, hi, order);
    buffer.swap(pivot_idx, hi - 1);

    let mut store = lo;
    for j in lo..hi - 1 {
        if buffer.cmp_at(j, hi - 1, order) == Ordering::Less {
            buffer.swap(store, j);
            store += 1;
        }
    }
    buffer.swap(store, hi - 1);
    PartitionOutcome::Pivot(store)
}

/// Median-of-three over three randomly sampled positions in `[lo, hi)`.
///
/// Sampling the three candidates at random rather than at fixed offsets
/// (first/middle/last) is what gives this partitioner its expected-
/// linear-time guarantee against an adversary who knows the fixed
/// positions in advance — the same reasoning behind
/// `chapter_07::randomized_quicksort::randomized_partition`'s random
/// pivot draw, combined with median-of-three's variance reduction.
fn choose_pivot_index<T, K: Ord>(
    buffer: &Buffer<T, K>,
    lo: usize,
    hi: usize,
    order: Order,
) -> usize {
    let len = hi - lo;
    if len <= 2 {
        return lo;
    }
    let mut rng = rand::thread_rng();
    let a = lo + rng.gen_range(0..len);
    let b = lo + rng.gen_range(0..len);
    let c = lo + rng.gen_range(0..len);
    median_of_three(buffer, a, b, c, order)
}

fn median_of_three<T, K: Ord>(
    buffer: &Buffer<T, K>,
    a: usize,
    b: usize,
    c: usize,
    order: Order,
) -> usize {
    let ab = buffer.cmp_at(a, b, order);
    let bc = buffer.cmp_at(b, c, order);
    let ac = buffer.cmp_at(a, c, order);

    if ab == Ordering::Less {
        if bc == Ordering::Less {
            b
        } else if ac == Ordering::Less {
            c
        } else {
            a
        }
    } else if ac == Ordering::Less {
        a
    } else if bc == Ordering::Less {
        c
    } else {
        b
    }
}

fn insertion_sort<T, K: Ord>(buffer: &mut Buffer<T, K>, lo: usize, hi: usize, order: Order) {
    for i in (lo + 1)..hi {
        let mut j = i;
        while j > lo && buffer.cmp_at(j - 1, j, order) == Ordering::Greater {
            buffer.swap(j - 1, j);
            j -= 1;
        }
    }
}
