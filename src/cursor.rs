//! The in-order cursor: a resumable external iterator over the active
//! order, tolerant of queries interleaved between advances.
//!
//! Per the handle's "Cursor resumability" design: the cursor holds the
//! handle by exclusive access only *during* a step, never a borrow that
//! spans suspension. Concretely, a `next()` call re-reads the pivot
//! index fresh every time rather than caching anything about it, so
//! whatever partitioning another query performed in between is picked
//! up for free.

use crate::LazySorted;

/// Forward cursor produced by [`LazySorted::iter`].
pub struct LazySortedIter<'a, T, K> {
    handle: &'a mut LazySorted<T, K>,
    next: usize,
}

impl<'a, T, K> LazySortedIter<'a, T, K> {
    pub(crate) fn new(handle: &'a mut LazySorted<T, K>) -> Self {
        LazySortedIter { handle, next: 0 }
    }
}

impl<'a, T: Clone, K: Ord> Iterator for LazySortedIter<'a, T, K> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next >= self.handle.len() {
            return None;
        }
        loop {
            let r = self.handle.pivot_after(self.next);
            if r.sorted_left_gap {
                let v = self.handle.item_clone(self.next);
                self.next += 1;
                return Some(v);
            }
            self.handle.resolve_pos(self.next);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.handle.len() - self.next;
        (remaining, Some(remaining))
    }
}

/// Reverse cursor produced by [`LazySorted::riter`].
pub struct LazySortedRevIter<'a, T, K> {
    handle: &'a mut LazySorted<T, K>,
    next: isize,
}

impl<'a, T, K> LazySortedRevIter<'a, T, K> {
    pub(crate) fn new(handle: &'a mut LazySorted<T, K>) -> Self {
        let n = handle.len();
        LazySortedRevIter { handle, next: n as isize - 1 }
    }
}

impl<'a, T: Clone, K: Ord> Iterator for LazySortedRevIter<'a, T, K> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next < 0 {
            return None;
        }
        loop {
            let idx = self.next as usize;
            let r = self.handle.pivot_after(idx);
            if r.sorted_left_gap {
                let v = self.handle.item_clone(idx);
                self.next -= 1;
                return Some(v);
            }
            self.handle.resolve_pos(idx);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.next + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}
