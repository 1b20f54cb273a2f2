//! Ordered Bin Allocator.
//!
//! `binalloc`は、昇順に並んだ"区切り値"群を用いて、任意の値をビン(バケツ)に割り当てるためのライブラリ.
//!
//! # 特徴
//!
//! - 区切り値の列と比較関数から、不変な[BinAllocator]を構築する
//!   - 構築時に、区切り値は比較関数の順序で昇順にソートされる
//!   - 入力のコレクションは複製されるので、呼び出し側の領域が並び替えられることはない
//! - 任意の値に対して「その値以下で最大の区切り値の位置」を`O(log n)`で求めることが可能
//!   - i.e., 値が属するビンの位置
//!   - 最小の区切り値よりも小さい値は、どのビンにも属さない
//! - 比較関数を指定しない場合には、値の自然な順序([NaturalOrder])が使用される
//!   - 複合的な型を区切り値に用いる場合には、明示的に比較関数を指定する必要がある
//! - 構築後のアロケータは読み込み専用であり、複数スレッドから同時に検索を行っても安全
//! - 区切り値の挿入や削除、永続化は行わない
//!
//! # Examples
//!
//! ```
//! use binalloc::BinAllocator;
//!
//! // キー空間の分割
//! let shards = BinAllocator::new(vec!["n", "a", "g", "t"]);
//! assert_eq!(shards.len(), 4);
//! assert_eq!(shards.delimiters(), ["a", "g", "n", "t"]);
//!
//! assert_eq!(shards.index_of(&"example"), Some(0));
//! assert_eq!(shards.index_of(&"is"), Some(1));
//! assert_eq!(shards.index_of(&"this"), Some(3));
//! assert_eq!(shards.index_of(&"_"), None);
//! ```
//!
//! # モジュールの構成
//!
//! - [allocator]モジュール:
//!   - [BinAllocator]構造体と、そのビルダである[BinAllocatorBuilder]を提供
//! - [compare]モジュール:
//!   - 比較関数を表す[Comparator]トレイトと、デフォルト実装である[NaturalOrder]を提供
//! - [metrics]モジュール:
//!   - [Prometheus]用のメトリクスを提供
//!
//! [BinAllocator]: ./allocator/struct.BinAllocator.html
//! [BinAllocatorBuilder]: ./allocator/struct.BinAllocatorBuilder.html
//! [allocator]: ./allocator/index.html
//! [compare]: ./compare/index.html
//! [Comparator]: ./compare/trait.Comparator.html
//! [NaturalOrder]: ./compare/struct.NaturalOrder.html
//! [metrics]: ./metrics/index.html
//! [Prometheus]: https://prometheus.io/
#![warn(missing_docs)]
extern crate prometrics;
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate slog;
#[macro_use]
extern crate trackable;

pub use crate::allocator::{Bin, BinAllocator, BinAllocatorBuilder};
pub use crate::compare::{Comparator, NaturalOrder};
pub use crate::error::{Error, ErrorKind};

pub mod allocator;
pub mod compare;
pub mod metrics;

mod error;

/// crate固有の`Result`型.
pub type Result<T> = std::result::Result<T, Error>;
