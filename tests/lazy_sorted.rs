//! Cross-cutting scenario tests exercising the full public surface
//! together, as distinct from the per-module unit tests inside `src/`.

use lazy_order::LazySorted;
use rand::seq::SliceRandom;
use rand::Rng;

fn shuffled_range(n: i32) -> Vec<i32> {
    let mut xs: Vec<i32> = (0..n).collect();
    xs.shuffle(&mut rand::thread_rng());
    xs
}

#[test]
fn at_matches_identity_for_every_position() {
    for n in [0, 1, 2, 17, 31, 32, 33, 63, 64, 65, 127, 128, 129] {
        let mut ls = LazySorted::new(shuffled_range(n));
        for k in 0..n {
            assert_eq!(*ls.at(k as isize).unwrap(), k, "n = {n}, k = {k}");
        }
    }
}

#[test]
fn slice_matches_contiguous_range_for_every_bound_pair() {
    for n in [0, 1, 5, 17, 32, 64] {
        let mut ls = LazySorted::new(shuffled_range(n));
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let a = rng.gen_range(0..=n);
            let b = rng.gen_range(a..=n);
            let got = ls.slice(Some(a as isize), Some(b as isize), None).unwrap();
            let expected: Vec<i32> = (a as i32..b as i32).collect();
            assert_eq!(got, expected, "n = {n}, a = {a}, b = {b}");
        }
    }
}

#[test]
fn arbitrary_step_slices_match_std_slice_semantics() {
    for n in 0..64 {
        let xs = shuffled_range(n);
        let ys: Vec<i32> = (0..n).collect();
        let mut ls = LazySorted::new(xs);
        let mut rng = rand::thread_rng();
        for _ in 0..40 {
            let a = rng.gen_range(-(n as isize)..=n as isize);
            let b = rng.gen_range(-(n as isize)..=n as isize);
            let step = {
                let s = rng.gen_range(1..=(n as isize + 3));
                if rng.gen_bool(0.5) { s } else { -s }
            };
            let got = ls.slice(Some(a), Some(b), Some(step)).unwrap();
            let expected = python_style_slice(&ys, a, b, step);
            assert_eq!(got, expected, "n = {n}, a = {a}, b = {b}, step = {step}");
        }
    }
}

/// Reference implementation of CPython's `slice.indices` + element
/// selection, used only to check the crate's slice semantics in tests.
fn python_style_slice(ys: &[i32], a: isize, b: isize, step: isize) -> Vec<i32> {
    let length = ys.len() as isize;
    let (lower, upper) = if step > 0 { (0, length) } else { (-1, length - 1) };
    let clamp = |v: isize| if v < 0 { (v + length).max(lower) } else { v.min(upper) };
    let start = clamp(a);
    let stop = clamp(b);

    let mut out = Vec::new();
    let mut i = start;
    if step > 0 {
        while i < stop {
            out.push(ys[i as usize]);
            i += step;
        }
    } else {
        while i > stop {
            out.push(ys[i as usize]);
            i += step;
        }
    }
    out
}

#[test]
fn forward_and_reverse_iteration_match_sorted_and_reverse_sorted() {
    for n in [0, 1, 2, 16, 33, 65] {
        let xs = shuffled_range(n);
        let mut expected: Vec<i32> = xs.clone();
        expected.sort();

        let mut ls = LazySorted::new(xs.clone());
        assert_eq!(ls.iter().collect::<Vec<_>>(), expected);

        let mut ls_rev = LazySorted::new(xs);
        let mut expected_rev = expected;
        expected_rev.reverse();
        assert_eq!(ls_rev.riter().collect::<Vec<_>>(), expected_rev);
    }
}

#[test]
fn cursor_output_is_always_a_prefix_of_sorted_even_with_interleaved_queries() {
    let n = 128;
    let xs = shuffled_range(n);
    let mut expected: Vec<i32> = xs.clone();
    expected.sort();
    let mut ls = LazySorted::new(xs);
    let mut rng = rand::thread_rng();

    let mut consumed = Vec::new();
    {
        let mut it = ls.iter();
        for _ in 0..10 {
            if let Some(v) = it.next() {
                consumed.push(v);
            }
        }
    }
    assert_eq!(consumed, expected[..consumed.len()]);

    // interleave arbitrary queries; none may disturb the prefix already
    // established, since every query only adds pivots, never removes them.
    let probe = rng.gen_range(0..n) as isize;
    let _ = ls.at(probe);
    let _ = ls.contains(&probe.rem_euclid(n as isize));
    let _ = ls.slice(Some(0), Some(5), None).unwrap();

    {
        let mut it2 = ls.iter();
        let mut replay = Vec::new();
        for _ in 0..(consumed.len() + 15) {
            if let Some(v) = it2.next() {
                replay.push(v);
            }
        }
        assert_eq!(replay, expected[..replay.len()]);
    }
}

#[test]
fn count_equals_multiplicity_and_index_equals_rank_sum() {
    for a in 1..20usize {
        for b in 1..20usize {
            let mut xs = vec!["a"; a];
            xs.extend(vec!["b"; b]);
            xs.shuffle(&mut rand::thread_rng());

            let mut ls = LazySorted::new(xs);
            assert_eq!(ls.count(&"a"), a);
            assert_eq!(ls.count(&"b"), b);
            assert_eq!(ls.index_of(&"a").unwrap(), 0);
            assert_eq!(ls.index_of(&"b").unwrap(), a);
            assert_eq!(ls.count(&"a") + ls.count(&"b"), a + b);
        }
    }
}

#[test]
fn contains_matches_membership_including_absent_values() {
    for n in [0, 1, 17, 64] {
        let xs = shuffled_range(n);
        let probes: Vec<i32> = (0..n).step_by(5).chain([-4, -3, -2, -1, n, n + 1]).collect();
        let mut ls = LazySorted::new(xs);
        for p in probes {
            let expected = (0..n).contains(&p);
            assert_eq!(ls.contains(&p), expected, "n = {n}, p = {p}");
        }
    }
}

#[test]
fn index_of_errors_for_absent_values() {
    let mut ls = LazySorted::new(shuffled_range(50));
    assert!(ls.index_of(&-1).is_err());
    assert!(ls.index_of(&50).is_err());
}

#[test]
fn descending_reverses_the_entire_surface() {
    let xs = shuffled_range(40);
    let mut expected: Vec<i32> = xs.clone();
    expected.sort();
    expected.reverse();

    let mut ls = LazySorted::new(xs).reverse();
    assert_eq!(ls.iter().collect::<Vec<_>>(), expected);
    assert_eq!(*ls.at(0).unwrap(), expected[0]);
    assert_eq!(ls.index_of(&expected[0]).unwrap(), 0);
}

#[test]
fn empty_and_singleton_edge_cases() {
    let mut empty: LazySorted<i32> = LazySorted::new(Vec::new());
    assert_eq!(empty.len(), 0);
    assert!(empty.at(0).is_err());
    assert_eq!(empty.slice(Some(0), Some(0), None).unwrap(), Vec::<i32>::new());
    assert_eq!(empty.iter().next(), None);

    let mut one = LazySorted::new(vec![7]);
    assert_eq!(*one.at(0).unwrap(), 7);
    assert_eq!(*one.at(-1).unwrap(), 7);
    assert!(one.at(1).is_err());
    assert!(one.contains(&7));
    assert!(!one.contains(&8));
    assert_eq!(one.index_of(&7).unwrap(), 0);
    assert!(one.index_of(&8).is_err());
}
