//! Fold derived algorithms against std on random inputs.
use accumulate::prelude::*;
use accumulate::*;
use rand::random;

/// Small values so that we get plenty of duplicates.
fn random_vec(len: usize) -> Vec<u32> {
    (0..len).map(|_| random::<u32>() % 8).collect()
}

fn lengths() -> impl Iterator<Item = usize> {
    (0..10).chain(100..103)
}

#[test]
fn test_counts() {
    for len in lengths() {
        let v = random_vec(len);
        let (first, last) = cursors(&v);
        let target = v.first().cloned().unwrap_or(0);
        assert_eq!(
            count(first, last, &target),
            v.iter().filter(|&&e| e == target).count()
        );
        assert_eq!(
            count_if(first, last, |e| **e % 2 == 0),
            v.iter().filter(|&&e| e % 2 == 0).count()
        );
    }
}

#[test]
fn test_finds() {
    for len in lengths() {
        let v = random_vec(len);
        let (first, last) = cursors(&v);
        let target = v.get(len / 2).cloned().unwrap_or(0);
        let expected = v.iter().position(|&e| e == target).unwrap_or(len);
        assert_eq!(find(first, last, &target).index(), expected);
        let expected = v.iter().position(|&e| e > 5).unwrap_or(len);
        assert_eq!(find_if(first, last, |e| **e > 5).index(), expected);
        let expected = v.iter().position(|&e| e <= 5).unwrap_or(len);
        assert_eq!(find_if_not(first, last, |e| **e > 5).index(), expected);
        let expected = v.windows(2).position(|w| w[0] == w[1]).unwrap_or(len);
        assert_eq!(adjacent_find(first, last).index(), expected);
    }
}

#[test]
fn test_mismatch() {
    for len in lengths() {
        let v = random_vec(len);
        let mut w = v.clone();
        if len > 0 {
            w[len / 2] += 1;
        }
        let ((first1, last1), (first2, _)) = (cursors(&v), cursors(&w));
        let expected = v.iter().zip(w.iter()).position(|(a, b)| a != b).unwrap_or(len);
        let (i, j) = mismatch(first1, last1, first2);
        assert_eq!((i.index(), j.index()), (expected, expected));
        assert_eq!(equal(first1, last1, first2), v == w);
    }
}

#[test]
fn test_extrema() {
    for len in lengths() {
        let v = random_vec(len);
        let (first, last) = cursors(&v);
        let min_position = v.iter().min().and_then(|m| v.iter().position(|e| e == m));
        let max_position = v.iter().max().and_then(|m| v.iter().position(|e| e == m));
        assert_eq!(min_element(first, last).index(), min_position.unwrap_or(len));
        assert_eq!(max_element(first, last).index(), max_position.unwrap_or(len));
        let (min, max) = minmax_element(first, last);
        assert_eq!(
            (min.index(), max.index()),
            (min_position.unwrap_or(len), max_position.unwrap_or(len))
        );
        assert_eq!(min_element_value(first, last), v.iter().min());
        assert_eq!(max_element_value(first, last), v.iter().max());
        assert_eq!(
            minmax_element_value(first, last),
            v.iter().min().zip(v.iter().max())
        );
        if let Some((min, max)) = minmax_element_value(first, last) {
            assert!(v.iter().all(|e| min <= e && e <= max));
        }
    }
}

#[test]
fn test_copies() {
    for len in lengths() {
        let v = random_vec(len);
        let (first, last) = cursors(&v);

        let mut out = vec![0; len];
        let written = copy(first.cloned(), last.cloned(), SliceOutput::new(&mut out)).position();
        assert_eq!(written, len);
        assert_eq!(out, v);

        let mut out = vec![0; len];
        let written = copy_if(
            first.cloned(),
            last.cloned(),
            SliceOutput::new(&mut out),
            |e| e % 2 == 0,
        )
        .position();
        let evens: Vec<u32> = v.iter().cloned().filter(|e| e % 2 == 0).collect();
        assert_eq!(written, evens.len());
        assert_eq!(&out[..written], &evens[..]);

        let mut out = Vec::new();
        transform(first, last, BackInserter::new(&mut out), |e| e + 1);
        assert_eq!(out, v.iter().map(|e| e + 1).collect::<Vec<_>>());

        let mut out = Vec::new();
        transform2(first, last, first, BackInserter::new(&mut out), |a, b| a + b);
        assert_eq!(out, v.iter().map(|e| 2 * e).collect::<Vec<_>>());

        let mut out = vec![0; len];
        let written = reverse_copy(first.cloned(), last.cloned(), SliceOutput::new(&mut out)).position();
        assert_eq!(written, len);
        assert_eq!(out, v.iter().rev().cloned().collect::<Vec<_>>());
    }
}

#[test]
fn test_lexicographical_compare() {
    for _ in 0..200 {
        let a = random_vec(random::<usize>() % 5);
        let b = random_vec(random::<usize>() % 5);
        let ((first1, last1), (first2, last2)) = (cursors(&a), cursors(&b));
        assert_eq!(lexicographical_compare(first1, last1, first2, last2), a < b);
        assert!(!lexicographical_compare(first1, last1, first1, last1));
    }
}

#[test]
fn test_is_permutation() {
    for len in lengths() {
        let a = random_vec(len);
        let b = random_vec(len);
        let ((first1, last1), (first2, _)) = (cursors(&a), cursors(&b));
        let (mut sorted_a, mut sorted_b) = (a.clone(), b.clone());
        sorted_a.sort();
        sorted_b.sort();
        assert_eq!(is_permutation(first1, last1, first2), sorted_a == sorted_b);
        assert!(is_permutation(first1, last1, first1));
        let (sorted_first, _) = cursors(&sorted_a);
        assert!(is_permutation(first1, last1, sorted_first));
    }
}
