//! # lazy_order
//!
//! A lazily-sorted virtual view over a fixed multiset.
//!
//! [`LazySorted`] presents a sequence as if it had been sorted up front,
//! but only does the partitioning work needed to answer the queries
//! actually issued, memoising discovered order boundaries (the pivot
//! index) so later queries reuse earlier work. Construction is O(n);
//! every other operation performs just enough in-place partitioning to
//! localise the positions it needs.
//!
//! Every "read" on a [`LazySorted`] mutates it: even [`LazySorted::at`]
//! may partition the buffer further. Query methods therefore all take
//! `&mut self` — there is no read-only view, by design.

mod buffer;
mod cursor;
mod error;
mod key;
mod partition;
mod pivot_index;
mod resolver;
mod select;

pub use cursor::{LazySortedIter, LazySortedRevIter};
pub use error::LazyOrderError;
pub use key::Order;

use buffer::Buffer;
use log::trace;
use pivot_index::{PivotEntry, PivotIndex};
use std::cmp::Ordering;

/// A lazily-sorted view over a fixed multiset of `T`, ordered by a
/// derived key `K`.
///
/// Constructed once from any `IntoIterator<Item = T>`; never resized or
/// mutated logically afterward. All queries operate through partial,
/// on-demand sorting of an owned internal buffer.
pub struct LazySorted<T, K = T> {
    buffer: Buffer<T, K>,
    pivots: PivotIndex,
    order: Order,
    key_fn: Box<dyn Fn(&T) -> K>,
}

impl<T> LazySorted<T, T>
where
    T: Ord + Clone,
{
    /// Builds a lazily-sorted view using the items themselves as keys.
    pub fn new<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new_by_key(iter, |x: &T| x.clone())
    }
}

impl<T, K> LazySorted<T, K>
where
    T: Clone,
    K: Ord,
{
    /// Builds a lazily-sorted view, deriving each item's order-statistic
    /// key through `key_fn`.
    pub fn new_by_key<I, F>(iter: I, key_fn: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> K + 'static,
    {
        let items: Vec<T> = iter.into_iter().collect();
        let keys: Vec<K> = items.iter().map(|x| key_fn(x)).collect();
        let n = items.len();
        trace!("lazy_order: constructing handle over {n} items");
        LazySorted {
            buffer: Buffer::new(items, keys),
            pivots: PivotIndex::new(n),
            order: Order::Ascending,
            key_fn: Box::new(key_fn),
        }
    }

    /// Flips the active comparison direction (ascending <-> descending).
    ///
    /// Consumes and returns `self` so it reads as a builder step right
    /// after construction, e.g. `LazySorted::new(xs).reverse()`.
    pub fn reverse(mut self) -> Self {
        self.order = match self.order {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        };
        self
    }

    /// Number of items in the view. O(1).
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the view holds no items.
    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// The active comparison direction.
    pub fn order(&self) -> Order {
        self.order
    }

    // --- internals shared with cursor.rs -------------------------------

    pub(crate) fn resolve_pos(&mut self, k: usize) {
        select::resolve(&mut self.buffer, &mut self.pivots, self.order, k);
    }

    pub(crate) fn pivot_after(&self, pos: usize) -> PivotEntry {
        self.pivots.smallest_after(pos)
    }

    pub(crate) fn item_clone(&self, idx: usize) -> T {
        self.buffer.items[idx].clone()
    }

    // --- positional access ----------------------------------------------

    /// The item at logical position `k` in the active order.
    ///
    /// Negative `k` wraps once (`k + len()`). Out-of-range `k` is
    /// [`LazyOrderError::IndexOutOfRange`].
    pub fn at(&mut self, k: isize) -> Result<&T, LazyOrderError> {
        let idx = resolver::normalize_index(k, self.len())?;
        self.resolve_pos(idx);
        Ok(&self.buffer.items[idx])
    }

    /// Like [`LazySorted::at`], but returns `None` instead of an error.
    pub fn get(&mut self, k: isize) -> Option<&T> {
        let idx = resolver::normalize_index(k, self.len()).ok()?;
        self.resolve_pos(idx);
        Some(&self.buffer.items[idx])
    }

    /// A freshly allocated copy of `self[a:b:step]`, following the usual
    /// negative-index and out-of-range clamping rules.
    pub fn slice(
        &mut self,
        a: Option<isize>,
        b: Option<isize>,
        step: Option<isize>,
    ) -> Result<Vec<T>, LazyOrderError> {
        let n = self.len();
        let (start, stop, step) = resolver::normalize_slice(a, b, step, n)?;

        if step == 1 {
            let s = start.clamp(0, n as isize) as usize;
            let e = stop.clamp(s as isize, n as isize) as usize;
            return Ok(self.collect_range(s, e));
        }

        let positions = resolver::slice_positions(start, stop, step);
        let mut out = Vec::with_capacity(positions.len());
        for p in positions {
            self.resolve_pos(p);
            out.push(self.buffer.items[p].clone());
        }
        Ok(out)
    }

    /// Resolves and collects `B[start..end)` in order, bulk-copying
    /// whenever the pivot index already knows a gap is sorted.
    fn collect_range(&mut self, start: usize, end: usize) -> Vec<T> {
        let mut out = Vec::with_capacity(end.saturating_sub(start));
        let mut i = start;
        while i < end {
            if self.pivots.contains(i) {
                out.push(self.buffer.items[i].clone());
                i += 1;
                continue;
            }
            let r = self.pivots.smallest_after(i);
            if r.sorted_left_gap {
                let hi = (r.pos as usize).min(end);
                out.extend(self.buffer.items[i..hi].iter().cloned());
                i = hi;
            } else {
                self.resolve_pos(i);
            }
        }
        out
    }

    // --- value queries ----------------------------------------------------

    fn key_of(&self, x: &T) -> K {
        (self.key_fn)(x)
    }

    /// Leftmost position whose key is not less than `target`, under the
    /// active order.
    fn lower_bound(&mut self, target: &K) -> usize {
        let mut lo = 0usize;
        let mut hi = self.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            self.resolve_pos(mid);
            if self.buffer.cmp_key(mid, target, self.order) == Ordering::Less {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Leftmost position whose key is strictly greater than `target`,
    /// under the active order.
    fn upper_bound(&mut self, target: &K) -> usize {
        let mut lo = 0usize;
        let mut hi = self.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            self.resolve_pos(mid);
            if self.buffer.cmp_key(mid, target, self.order) == Ordering::Greater {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }

    /// Whether `x` (compared by key) occurs in the view.
    pub fn contains(&mut self, x: &T) -> bool {
        let k = self.key_of(x);
        let i = self.lower_bound(&k);
        i < self.len() && self.buffer.keys[i] == k
    }

    /// The position of the first occurrence of `x` under the active
    /// order, i.e. the position a fully sorted arrangement would place
    /// it at.
    pub fn index_of(&mut self, x: &T) -> Result<usize, LazyOrderError> {
        let k = self.key_of(x);
        let i = self.lower_bound(&k);
        if i < self.len() && self.buffer.keys[i] == k {
            Ok(i)
        } else {
            Err(LazyOrderError::NotFound)
        }
    }

    /// The number of items equal (by key) to `x`.
    pub fn count(&mut self, x: &T) -> usize {
        let k = self.key_of(x);
        let lo = self.lower_bound(&k);
        let hi = self.upper_bound(&k);
        hi - lo
    }

    /// The items whose key falls in `[key(lo), key(hi))` under the
    /// active order, as a freshly allocated vector. Set-equivalence
    /// only; order of the result is not otherwise meaningful.
    pub fn between(&mut self, lo: &T, hi: &T) -> Vec<T> {
        let lo_key = self.key_of(lo);
        let hi_key = self.key_of(hi);
        let i = self.lower_bound(&lo_key);
        let j = self.lower_bound(&hi_key);
        let (i, j) = if i <= j { (i, j) } else { (j, i) };
        self.collect_range(i, j)
    }

    // --- iteration ----------------------------------------------------

    /// A resumable forward cursor over the active order.
    pub fn iter(&mut self) -> LazySortedIter<'_, T, K> {
        LazySortedIter::new(self)
    }

    /// A resumable reverse cursor over the active order.
    pub fn riter(&mut self) -> LazySortedRevIter<'_, T, K> {
        LazySortedRevIter::new(self)
    }
}

impl<'a, T: Clone, K: Ord> IntoIterator for &'a mut LazySorted<T, K> {
    type Item = T;
    type IntoIter = LazySortedIter<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        LazySortedIter::new(self)
    }
}
