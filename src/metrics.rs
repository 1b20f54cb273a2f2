//! [Prometheus][prometheus]用のメトリクス.
//!
//! [prometheus]: https://prometheus.io/
use prometrics::metrics::{Counter, Gauge, MetricBuilder};

/// `BinAllocator`のメトリクス.
#[derive(Debug, Clone)]
pub struct BinAllocatorMetrics {
    pub(crate) delimiters: Gauge,
    pub(crate) lookups: Counter,
    pub(crate) misses: Counter,
}
impl BinAllocatorMetrics {
    /// 保持している区切り値の数.
    ///
    /// # Prometheus
    ///
    /// ```prometheus
    /// binalloc_allocator_delimiters <GAUGE>
    /// ```
    pub fn delimiters(&self) -> usize {
        self.delimiters.value() as usize
    }

    /// 検索の実行回数.
    ///
    /// # Prometheus
    ///
    /// ```prometheus
    /// binalloc_allocator_lookups_total <COUNTER>
    /// ```
    pub fn lookups(&self) -> u64 {
        self.lookups.value() as u64
    }

    /// 該当するビンが存在しなかった検索の回数.
    ///
    /// # Prometheus
    ///
    /// ```prometheus
    /// binalloc_allocator_misses_total <COUNTER>
    /// ```
    pub fn misses(&self) -> u64 {
        self.misses.value() as u64
    }

    /// いずれかのビンに割り当てられた検索の回数.
    ///
    /// # Prometheus
    ///
    /// ```prometheus
    /// binalloc_allocator_lookups_total - binalloc_allocator_misses_total
    /// ```
    pub fn hits(&self) -> u64 {
        // NOTE: 以下の順番で値を取得しないとアンダーフローする可能性がある
        let dec = self.misses();
        let inc = self.lookups();
        inc - dec
    }

    pub(crate) fn new(builder: &MetricBuilder) -> Self {
        let mut builder = builder.clone();
        builder.namespace("binalloc").subsystem("allocator");
        BinAllocatorMetrics {
            delimiters: builder
                .gauge("delimiters")
                .help("Number of bin delimiters")
                .finish()
                .expect("Never fails"),
            lookups: builder
                .counter("lookups_total")
                .help("Number of nearest-lower-bound lookups")
                .finish()
                .expect("Never fails"),
            misses: builder
                .counter("misses_total")
                .help("Number of lookups that found no bin")
                .finish()
                .expect("Never fails"),
        }
    }
}

/// `BinAllocatorBuilder`のメトリクス.
#[derive(Debug, Clone)]
pub struct BinAllocatorBuilderMetrics {
    pub(crate) built_allocators: Counter,
    pub(crate) rejected_inputs: Counter,
}
impl BinAllocatorBuilderMetrics {
    /// 構築に成功したアロケータの数.
    ///
    /// # Prometheus
    ///
    /// ```prometheus
    /// binalloc_builder_built_allocators_total <COUNTER>
    /// ```
    pub fn built_allocators(&self) -> u64 {
        self.built_allocators.value() as u64
    }

    /// `ErrorKind::InvalidArgument`で拒否された入力の数.
    ///
    /// # Prometheus
    ///
    /// ```prometheus
    /// binalloc_builder_rejected_inputs_total <COUNTER>
    /// ```
    pub fn rejected_inputs(&self) -> u64 {
        self.rejected_inputs.value() as u64
    }

    pub(crate) fn new(builder: &MetricBuilder) -> Self {
        let mut builder = builder.clone();
        builder.namespace("binalloc").subsystem("builder");
        BinAllocatorBuilderMetrics {
            built_allocators: builder
                .counter("built_allocators_total")
                .help("Number of built allocators")
                .finish()
                .expect("Never fails"),
            rejected_inputs: builder
                .counter("rejected_inputs_total")
                .help("Number of inputs rejected as invalid arguments")
                .finish()
                .expect("Never fails"),
        }
    }
}

#[cfg(test)]
mod tests {
    use prometrics::metrics::MetricBuilder;

    use super::*;

    #[test]
    fn hits_works() {
        let metrics = BinAllocatorMetrics::new(&MetricBuilder::new());
        metrics.lookups.add_u64(5);
        metrics.misses.increment();
        assert_eq!(metrics.lookups(), 5);
        assert_eq!(metrics.misses(), 1);
        assert_eq!(metrics.hits(), 4);
        assert_eq!(metrics.delimiters(), 0);
    }
}
