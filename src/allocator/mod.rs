//! 順序付きビンアロケータ.
//!
//! アロケータは、昇順に並んだ"区切り値"群を保持し、任意の値に対して、
//! その値が属するビン（隣接する二つの区切り値で挟まれた範囲）を割り当てる責務を負っている.
//!
//! 構築後のアロケータは不変であり、区切り値の追加や削除は行えない.
use slog::Logger;
use std::fmt;
use std::slice;

pub use self::builder::BinAllocatorBuilder;

use crate::compare::{Comparator, NaturalOrder};
use crate::metrics::BinAllocatorMetrics;
use crate::Result;

mod builder;
mod search;

/// 区切り値の列から、任意の値が属するビンを求めるためのアロケータ.
///
/// 区切り値は、構築時に束縛された比較関数`C`の順序で昇順に保持される.
/// 比較関数は、構築時のソートと、以後の全ての検索で共通に使用され、後から差し替えることはできない.
///
/// 構築時には、入力の区切り値群はアロケータ自身が所有する領域に集められてからソートされる.
/// 従って、呼び出し側のコレクションが並び替えられることはない.
///
/// # 検索
///
/// `index_of`は、検索値以下で最大の区切り値の位置を返す（"nearest lower bound"）.
/// 検索値が最小の区切り値よりも小さい場合には`None`が返される.
///
/// 計算量は`O(log n)`.
pub struct BinAllocator<V, C = NaturalOrder> {
    delimiters: Vec<V>,
    comparator: C,
    logger: Logger,
    metrics: BinAllocatorMetrics,
}
impl<V> BinAllocator<V, NaturalOrder>
where
    V: PartialOrd,
{
    /// 値の自然な順序を用いて、アロケータを構築する.
    ///
    /// # Examples
    ///
    /// ```
    /// use binalloc::BinAllocator;
    ///
    /// let bins = BinAllocator::new(vec![30, 10, 20]);
    /// assert_eq!(bins.delimiters(), [10, 20, 30]);
    /// assert_eq!(bins.index_of(&25), Some(1));
    /// assert_eq!(bins.index_of(&5), None);
    /// ```
    pub fn new<I>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        BinAllocatorBuilder::new().build(delimiters)
    }

    /// JSON形式の配列から、値の自然な順序を用いてアロケータを構築する.
    ///
    /// # Errors
    ///
    /// 以下のいずれかの場合には、種類が`ErrorKind::InvalidArgument`のエラーが返される:
    ///
    /// - 文字列がJSONとして不正
    /// - JSONの値が配列ではない（`null`, 真偽値, 数値, 文字列, オブジェクト）
    /// - 配列の要素が`V`に変換できない
    ///
    /// # Examples
    ///
    /// ```
    /// use binalloc::{BinAllocator, ErrorKind};
    ///
    /// let bins = BinAllocator::<String>::from_json_str(r#"["foo", "bar"]"#).unwrap();
    /// assert_eq!(bins.delimiters(), ["bar", "foo"]);
    ///
    /// let error = BinAllocator::<String>::from_json_str("null").err().unwrap();
    /// assert_eq!(*error.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self>
    where
        V: serde::de::DeserializeOwned,
    {
        track!(BinAllocatorBuilder::new().build_from_json_str(json))
    }
}
impl<V, C> BinAllocator<V, C>
where
    C: Comparator<V>,
{
    /// 指定された比較関数を用いて、アロケータを構築する.
    ///
    /// # Examples
    ///
    /// ```
    /// use binalloc::BinAllocator;
    ///
    /// let bins = BinAllocator::with_comparator(vec![1, 3, 2], |a: &i32, b: &i32| b.cmp(a));
    /// assert_eq!(bins.delimiters(), [3, 2, 1]);
    /// assert_eq!(bins.index_of(&2), Some(1));
    /// ```
    pub fn with_comparator<I>(delimiters: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = V>,
        C: Clone,
    {
        BinAllocatorBuilder::with_comparator(comparator).build(delimiters)
    }

    pub(crate) fn new_sorted(
        mut delimiters: Vec<V>,
        comparator: C,
        logger: Logger,
        metrics: BinAllocatorMetrics,
    ) -> Self {
        delimiters.sort_by(|a, b| comparator.compare(a, b));
        metrics.delimiters.set(delimiters.len() as f64);
        debug!(logger, "Bin allocator is built"; "delimiters" => delimiters.len());
        BinAllocator {
            delimiters,
            comparator,
            logger,
            metrics,
        }
    }

    /// `value`以下で最大の区切り値の位置を返す.
    ///
    /// `value`が最小の区切り値よりも小さい場合や、区切り値が一つもない場合には`None`が返される.
    ///
    /// `value`と等しい区切り値が存在する場合には、その区切り値の位置が返される.
    ///
    /// `index_of_from(value, 0)`と等価.
    pub fn index_of(&self, value: &V) -> Option<usize> {
        self.index_of_from(value, 0)
    }

    /// 位置`from_index`以降の区切り値を対象として、`value`以下で最大の区切り値の位置を返す.
    ///
    /// `from_index`が負の場合には、末尾からの相対位置（`len() + from_index`）として扱われ、
    /// それも負になる場合には`0`に切り上げられる.
    ///
    /// 以下のいずれかの場合には`None`が返される:
    ///
    /// - 開始位置が最後の区切り値の位置を超えている
    /// - `value`が最小の区切り値よりも小さい
    ///
    /// `value`が開始位置の区切り値よりも小さい(が、最小の区切り値以上の)場合には、開始位置が返される.
    pub fn index_of_from(&self, value: &V, from_index: isize) -> Option<usize> {
        self.metrics.lookups.increment();
        let index = self.search(value, from_index);
        if index.is_none() {
            self.metrics.misses.increment();
        }
        index
    }

    /// `value`が属するビンを返す.
    ///
    /// `value`が最小の区切り値よりも小さい場合には`None`が返される.
    ///
    /// # Examples
    ///
    /// ```
    /// use binalloc::BinAllocator;
    ///
    /// let bins = BinAllocator::new(vec![10, 20, 30]);
    ///
    /// let bin = bins.bin(&25).unwrap();
    /// assert_eq!(bin.index(), 1);
    /// assert_eq!(bin.lower(), &20);
    /// assert_eq!(bin.upper(), Some(&30));
    ///
    /// assert_eq!(bins.bin(&99).unwrap().upper(), None);
    /// assert!(bins.bin(&9).is_none());
    /// ```
    pub fn bin(&self, value: &V) -> Option<Bin<V>> {
        self.index_of(value).map(|index| Bin {
            index,
            lower: &self.delimiters[index],
            upper: self.delimiters.get(index + 1),
        })
    }

    fn search(&self, value: &V, from_index: isize) -> Option<usize> {
        let len = self.delimiters.len();
        let start = if from_index < 0 {
            len.saturating_sub(from_index.unsigned_abs())
        } else {
            from_index as usize
        };
        if start >= len {
            return None;
        }
        if self.comparator.compare(value, &self.delimiters[0]) == std::cmp::Ordering::Less {
            return None;
        }
        Some(search::find_floor(
            &self.delimiters,
            &self.comparator,
            value,
            start,
            len - 1,
        ))
    }
}
impl<V, C> BinAllocator<V, C> {
    /// 各区切り値に`f`を昇順で適用し、その結果を同じ順番で返す.
    ///
    /// `f`には、区切り値と、その位置、および区切り値全体が渡される.
    ///
    /// # Examples
    ///
    /// ```
    /// use binalloc::BinAllocator;
    ///
    /// let bins = BinAllocator::new(vec![1, 2, 3]);
    /// assert_eq!(bins.map(|v, _, _| v * 2), [2, 4, 6]);
    /// assert_eq!(bins.map(|v, i, _| (i, *v)), [(0, 1), (1, 2), (2, 3)]);
    /// ```
    pub fn map<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&V, usize, &[V]) -> T,
    {
        self.delimiters
            .iter()
            .enumerate()
            .map(|(i, v)| f(v, i, &self.delimiters[..]))
            .collect()
    }

    /// 区切り値の数を返す.
    pub fn len(&self) -> usize {
        self.delimiters.len()
    }

    /// 区切り値が一つもない場合には`true`を返す.
    pub fn is_empty(&self) -> bool {
        self.delimiters.is_empty()
    }

    /// 昇順にソート済みの区切り値群を返す.
    pub fn delimiters(&self) -> &[V] {
        &self.delimiters
    }

    /// `index`番目の区切り値を返す.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.delimiters.get(index)
    }

    /// 区切り値を昇順に走査するイテレータを返す.
    pub fn iter(&self) -> slice::Iter<V> {
        self.delimiters.iter()
    }

    /// 束縛されている比較関数を返す.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// アロケータのメトリクスを返す.
    pub fn metrics(&self) -> &BinAllocatorMetrics {
        &self.metrics
    }
}
impl<V: fmt::Debug, C> fmt::Debug for BinAllocator<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BinAllocator")
            .field("delimiters", &self.delimiters)
            .field("logger", &self.logger)
            .field("metrics", &self.metrics)
            .finish()
    }
}
impl<'a, V, C> IntoIterator for &'a BinAllocator<V, C> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.delimiters.iter()
    }
}

/// 値が属するビン.
///
/// `lower`以上かつ`upper`未満の範囲を表す.
/// 最後のビンには上限がない.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bin<'a, V> {
    index: usize,
    lower: &'a V,
    upper: Option<&'a V>,
}
impl<'a, V> Bin<'a, V> {
    /// ビンの位置（下限となる区切り値の位置）.
    pub fn index(&self) -> usize {
        self.index
    }

    /// ビンの下限（この値を含む）.
    pub fn lower(&self) -> &'a V {
        self.lower
    }

    /// ビンの上限（この値を含まない）.
    pub fn upper(&self) -> Option<&'a V> {
        self.upper
    }
}
