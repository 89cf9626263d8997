use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use interspan::{Interval, IntervalTree};

#[derive(Debug, Clone, Copy)]
struct BenchName {
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new("n_values", v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("balance");

    for n_values in [100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to rebuild a tree of `n_values` intervals, inserted
/// in sorted order.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let t = (0..n_values as u32)
        .map(|v| Interval::valid(v, v + 10))
        .collect::<IntervalTree<u32, _>>();

    let bench_name = BenchName { n_values };
    g.throughput(Throughput::Elements(n_values as _)); // Values rebuilt per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || t.clone(),
            |mut t| {
                t.balance();
                t
            },
            BatchSize::LargeInput,
        );
    });
}
