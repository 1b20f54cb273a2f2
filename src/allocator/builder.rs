use prometrics::metrics::MetricBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use slog::{Discard, Logger};
use trackable::error::ErrorKindExt;

use super::BinAllocator;
use crate::compare::{Comparator, NaturalOrder};
use crate::metrics::{BinAllocatorBuilderMetrics, BinAllocatorMetrics};
use crate::{ErrorKind, Result};

/// `BinAllocator`のビルダ.
///
/// 比較関数はビルダの生成時に決定される:
///
/// - `new()`: 値の自然な順序(`NaturalOrder`)を使用する
/// - `with_comparator()`: 指定された比較関数を使用する
#[derive(Debug, Clone)]
pub struct BinAllocatorBuilder<C = NaturalOrder> {
    comparator: C,
    logger: Logger,
    metrics: MetricBuilder,
    builder_metrics: BinAllocatorBuilderMetrics,
}
impl BinAllocatorBuilder<NaturalOrder> {
    /// 新しい`BinAllocatorBuilder`インスタンスを生成する.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}
impl<C> BinAllocatorBuilder<C> {
    /// 指定された比較関数を使用する`BinAllocatorBuilder`インスタンスを生成する.
    ///
    /// 構築される全てのアロケータは、この比較関数の複製を保持する.
    pub fn with_comparator(comparator: C) -> Self {
        let metrics = MetricBuilder::new();
        BinAllocatorBuilder {
            comparator,
            logger: Logger::root(Discard, o!()),
            builder_metrics: BinAllocatorBuilderMetrics::new(&metrics),
            metrics,
        }
    }

    /// ロガーを登録する.
    ///
    /// デフォルト値は`Logger::root(Discard, o!())`.
    pub fn logger(&mut self, logger: Logger) -> &mut Self {
        self.logger = logger;
        self
    }

    /// メトリクス用の共通設定を登録する.
    ///
    /// デフォルト値は`MetricBuilder::new()`.
    pub fn metrics(&mut self, metrics: MetricBuilder) -> &mut Self {
        self.builder_metrics = BinAllocatorBuilderMetrics::new(&metrics);
        self.metrics = metrics;
        self
    }

    /// ビルダ自身のメトリクスを返す.
    pub fn builder_metrics(&self) -> &BinAllocatorBuilderMetrics {
        &self.builder_metrics
    }

    /// `delimiters`を区切り値とするアロケータを構築する.
    ///
    /// `delimiters`はアロケータ内部の領域に集められた上で、比較関数の順序で昇順にソートされる.
    ///
    /// 比較関数がパニックした場合には、そのパニックはそのまま呼び出し元に伝播する.
    pub fn build<V, I>(&self, delimiters: I) -> BinAllocator<V, C>
    where
        I: IntoIterator<Item = V>,
        C: Comparator<V> + Clone,
    {
        let allocator = BinAllocator::new_sorted(
            delimiters.into_iter().collect(),
            self.comparator.clone(),
            self.logger.clone(),
            BinAllocatorMetrics::new(&self.metrics),
        );
        self.builder_metrics.built_allocators.increment();
        allocator
    }

    /// JSONの値からアロケータを構築する.
    ///
    /// `value`は、各要素が`V`に変換可能な配列である必要がある.
    ///
    /// # Errors
    ///
    /// 以下のいずれかの場合には、種類が`ErrorKind::InvalidArgument`のエラーが返される.
    /// この検査はソートよりも前に行われる.
    ///
    /// - `value`が配列ではない（`null`, 真偽値, 数値, 文字列, オブジェクト）
    /// - 配列の要素が`V`に変換できない
    pub fn build_from_json<V>(&self, value: &Value) -> Result<BinAllocator<V, C>>
    where
        V: DeserializeOwned,
        C: Comparator<V> + Clone,
    {
        let items = match value.as_array() {
            Some(items) => items,
            None => {
                self.reject(json_kind(value));
                track_panic!(
                    ErrorKind::InvalidArgument,
                    "Not an array: {}",
                    json_kind(value)
                );
            }
        };

        let mut delimiters = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let delimiter = track!(
                V::deserialize(item).map_err(|e| {
                    self.reject(json_kind(item));
                    ErrorKind::InvalidArgument.cause(e)
                }),
                "index={}",
                i
            )?;
            delimiters.push(delimiter);
        }
        Ok(self.build(delimiters))
    }

    /// JSON文字列からアロケータを構築する.
    ///
    /// 文字列がJSONとして不正な場合にも、種類が`ErrorKind::InvalidArgument`のエラーが返される.
    /// それ以外は`build_from_json`と同様.
    pub fn build_from_json_str<V>(&self, json: &str) -> Result<BinAllocator<V, C>>
    where
        V: DeserializeOwned,
        C: Comparator<V> + Clone,
    {
        let value = track!(serde_json::from_str::<Value>(json).map_err(|e| {
            self.reject("malformed");
            ErrorKind::InvalidArgument.cause(e)
        }))?;
        track!(self.build_from_json(&value))
    }

    fn reject(&self, kind: &'static str) {
        warn!(self.logger, "Rejected a non-sequence input"; "kind" => kind);
        self.builder_metrics.rejected_inputs.increment();
    }
}
impl Default for BinAllocatorBuilder<NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match *value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
