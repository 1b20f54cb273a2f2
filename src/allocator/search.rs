//! Nearest Lower Bound Search.
use std::cmp::Ordering;

use crate::compare::Comparator;

/// `slice[first..=last]`の中から、`value`以下で最大の要素の位置を探す.
///
/// `slice`は`comparator`の順序で昇順にソートされている必要がある.
///
/// `value`が`slice[first]`よりも小さい場合には`first`が返される
/// (呼び出し側で事前に除外しておくこと).
///
/// # Panics
///
/// `first > last`または`last >= slice.len()`の場合には、現在のスレッドがパニックする.
pub(crate) fn find_floor<V, C>(
    slice: &[V],
    comparator: &C,
    value: &V,
    mut first: usize,
    mut last: usize,
) -> usize
where
    C: Comparator<V> + ?Sized,
{
    assert!(first <= last && last < slice.len());
    loop {
        let width = last - first + 1;
        if width == 1 {
            return last;
        }

        // `width >= 2`なので`first < mid <= last`が成り立つ
        let mid = first + width / 2;
        match comparator.compare(value, &slice[mid]) {
            Ordering::Equal => return mid,
            Ordering::Less => last = mid - 1,
            Ordering::Greater => first = mid,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::compare::NaturalOrder;

    #[test]
    fn it_works() {
        let slice = [10, 20, 30];
        let find = |v| find_floor(&slice, &NaturalOrder, &v, 0, 2);
        assert_eq!(find(10), 0);
        assert_eq!(find(19), 0);
        assert_eq!(find(20), 1);
        assert_eq!(find(29), 1);
        assert_eq!(find(30), 2);
        assert_eq!(find(99), 2);
    }

    #[test]
    fn single_element_range() {
        let slice = [10, 20, 30];
        assert_eq!(find_floor(&slice, &NaturalOrder, &25, 1, 1), 1);
        assert_eq!(find_floor(&slice, &NaturalOrder, &0, 2, 2), 2);
    }

    #[test]
    fn value_below_first_yields_first() {
        let slice = [10, 20, 30, 40];
        assert_eq!(find_floor(&slice, &NaturalOrder, &15, 2, 3), 2);
    }

    #[test]
    fn comparisons_are_logarithmic() {
        let slice = (0..1024).map(|i| i * 2).collect::<Vec<u32>>();
        let calls = Cell::new(0);
        let counting = |a: &u32, b: &u32| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        };
        for v in 0..2048 {
            calls.set(0);
            let found = find_floor(&slice, &counting, &v, 0, slice.len() - 1);
            assert_eq!(found, (v / 2) as usize);
            assert!(calls.get() <= 11, "v={}, calls={}", v, calls.get());
        }
    }

    #[test]
    #[should_panic]
    fn empty_range() {
        find_floor(&[10, 20], &NaturalOrder, &15, 1, 0);
    }
}
