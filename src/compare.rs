//! 区切り値の順序付けに用いる比較関数.
use std::cmp::Ordering;

/// 二つの値の順序を三値(`Less`/`Equal`/`Greater`)で返す比較関数.
///
/// `BinAllocator`は、構築時のソートと、以後の全ての検索で、同一の比較関数を使用する.
///
/// `Fn(&V, &V) -> Ordering`を満たすクロージャは、そのまま比較関数として利用可能.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use binalloc::compare::{Comparator, NaturalOrder};
///
/// assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
///
/// let reverse = |a: &u32, b: &u32| b.cmp(a);
/// assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
/// ```
pub trait Comparator<V: ?Sized> {
    /// `a`と`b`を比較する.
    fn compare(&self, a: &V, b: &V) -> Ordering;
}
impl<V: ?Sized, F> Comparator<V> for F
where
    F: Fn(&V, &V) -> Ordering,
{
    fn compare(&self, a: &V, b: &V) -> Ordering {
        self(a, b)
    }
}

/// 比較関数が指定されなかった場合に使われる、値の自然な順序.
///
/// `a == b`なら`Equal`、`a < b`なら`Less`、それ以外は`Greater`となる.
///
/// 全順序となるのは数値や文字列のような単純な型に限られる
/// (e.g., `f64::NAN`は全ての値よりも"大きい"と判定される).
/// 複合的な型を区切り値に用いる場合には、明示的に比較関数を指定すること.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;
impl<V: PartialOrd + ?Sized> Comparator<V> for NaturalOrder {
    fn compare(&self, a: &V, b: &V) -> Ordering {
        if a == b {
            Ordering::Equal
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    #[test]
    fn natural_order_works() {
        assert_eq!(NaturalOrder.compare(&10, &10), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&9, &10), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&11, &10), Ordering::Greater);
        assert_eq!(NaturalOrder.compare("bar", "foo"), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&1.5, &1.5), Ordering::Equal);
    }

    #[test]
    fn unordered_values_compare_greater() {
        assert_eq!(NaturalOrder.compare(&f64::NAN, &1.0), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&1.0, &f64::NAN), Ordering::Greater);
    }

    #[test]
    fn closure_is_comparator() {
        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
        assert_eq!(
            by_len.compare(&"ab".to_owned(), &"c".to_owned()),
            Ordering::Greater
        );
    }
}
