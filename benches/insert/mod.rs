use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use interspan::{Interval, IntervalTree, ValuedInterval};

use crate::Lfsr;

type Tree = IntervalTree<u32, ValuedInterval<usize, u32>>;

/// The order in which values are fed to the tree.
#[derive(Debug, Clone, Copy)]
enum Order {
    /// LFSR-generated spans.
    Random,
    /// Spans with ascending begin offsets, the worst case for an unbalanced
    /// tree and the common case when indexing a document left to right.
    Sorted,
    /// Every value shares the same endpoints.
    SameSpan,
}

impl Order {
    fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::SameSpan => "same_span",
        }
    }

    fn values(self, n_values: usize) -> Vec<ValuedInterval<usize, u32>> {
        let mut rand = Lfsr::default();
        (0..n_values)
            .map(|i| {
                let span = match self {
                    Self::Random => rand.next_span(),
                    Self::Sorted => Interval::valid(i as u32, i as u32 + 8),
                    Self::SameSpan => Interval::valid(100, 200),
                };
                ValuedInterval::new(i, span)
            })
            .collect()
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for order in [Order::Random, Order::Sorted, Order::SameSpan] {
        for n_values in [100, 1_000, 10_000] {
            bench_param(&mut g, order, n_values)
        }
    }
}

/// Measure the time needed to insert `n_values` values, generated in the
/// given `order`, into an empty tree.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, order: Order, n_values: usize)
where
    M: Measurement,
{
    let values = order.values(n_values);

    g.throughput(Throughput::Elements(n_values as _)); // Values inserted per second
    g.bench_function(BenchmarkId::new(order.name(), n_values), |b| {
        b.iter_batched(
            || values.clone(),
            |values| values.into_iter().collect::<Tree>(),
            BatchSize::LargeInput,
        );
    });
}
