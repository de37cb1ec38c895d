//! Pure index/slice arithmetic shared by the public query surface.
//!
//! These functions don't touch the buffer or pivot index at all; they
//! turn the client-facing `(index)` / `(start, stop, step)` arguments
//! into concrete buffer positions, following the same normalisation
//! algebra CPython's `slice.indices()` uses (the lineage this crate's
//! slicing semantics were distilled from).

use crate::error::LazyOrderError;

/// Normalises a scalar index: negative values wrap once, then the
/// result must land in `[0, n)`.
pub(crate) fn normalize_index(k: isize, n: usize) -> Result<usize, LazyOrderError> {
    let len = n as isize;
    let idx = if k < 0 { k + len } else { k };
    if idx < 0 || idx >= len {
        Err(LazyOrderError::IndexOutOfRange { index: k, len: n })
    } else {
        Ok(idx as usize)
    }
}

/// Resolves `(start, stop, step)` slice arguments, any of which may be
/// absent, into concrete bounds. Mirrors the standard `slice.indices`
/// algorithm: `step` picks which sentinel pair `(lower, upper)` bounds
/// clamp into, and an explicit negative bound wraps once before being
/// clamped.
pub(crate) fn normalize_slice(
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
    n: usize,
) -> Result<(isize, isize, isize), LazyOrderError> {
    let length = n as isize;
    let step = step.unwrap_or(1);
    if step == 0 {
        return Err(LazyOrderError::ZeroStep);
    }

    let (lower, upper) = if step > 0 { (0, length) } else { (-1, length - 1) };

    let clamp = |v: isize| -> isize {
        if v < 0 {
            (v + length).max(lower)
        } else {
            v.min(upper)
        }
    };

    let a = match start {
        None => if step < 0 { upper } else { lower },
        Some(v) => clamp(v),
    };
    let b = match stop {
        None => if step < 0 { lower } else { upper },
        Some(v) => clamp(v),
    };

    Ok((a, b, step))
}

/// Enumerates the concrete positions a normalised `(start, stop, step)`
/// triple visits, in traversal order.
pub(crate) fn slice_positions(start: isize, stop: isize, step: isize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut i = start;
    if step > 0 {
        while i < stop {
            out.push(i as usize);
            i += step;
        }
    } else {
        while i > stop {
            out.push(i as usize);
            i += step;
        }
    }
    out
}
