use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use interspan::{IntervalTree, ValuedInterval};

use crate::Lfsr;

type Tree = IntervalTree<u32, ValuedInterval<usize, u32>>;

/// The number of payloads stored under each generated span.
const PAYLOADS_PER_SPAN: usize = 4;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("lookup");

    for n_spans in [1_000, 10_000] {
        bench_param(&mut g, n_spans)
    }
}

/// Populate a tree with `n_spans` spans, each carrying [`PAYLOADS_PER_SPAN`]
/// payloads, then look up and remove individual payloads.
///
/// Every lookup must walk the values sharing a span to find the payload, so
/// these exercise the duplicate-endpoint search paths.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_spans: usize)
where
    M: Measurement,
{
    let mut rand = Lfsr::default();
    let spans = (0..n_spans).map(|_| rand.next_span()).collect::<Vec<_>>();

    let t = spans
        .iter()
        .flat_map(|s| (0..PAYLOADS_PER_SPAN).map(|p| ValuedInterval::new(p, *s)))
        .collect::<Tree>();

    // The last payload of each span, and one that was never stored.
    let hits = spans
        .iter()
        .map(|s| ValuedInterval::new(PAYLOADS_PER_SPAN - 1, *s))
        .collect::<Vec<_>>();
    let misses = spans
        .iter()
        .map(|s| ValuedInterval::new(PAYLOADS_PER_SPAN, *s))
        .collect::<Vec<_>>();

    g.throughput(Throughput::Elements(n_spans as _)); // Lookups per second

    g.bench_function(BenchmarkId::new("contains_hits", n_spans), |b| {
        b.iter(|| assert!(hits.iter().all(|v| t.contains(v))))
    });

    g.bench_function(BenchmarkId::new("contains_misses", n_spans), |b| {
        b.iter(|| assert!(!misses.iter().any(|v| t.contains(v))))
    });

    g.bench_function(BenchmarkId::new("remove_by", n_spans), |b| {
        b.iter_batched(
            || t.clone(),
            |mut t| {
                for s in &spans {
                    let got = t.remove_by(s, |v| *v.value() == PAYLOADS_PER_SPAN - 1);
                    assert!(got.is_some());
                }
                t
            },
            BatchSize::LargeInput,
        )
    });
}
