use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use interspan::{Interval, IntervalTree, ValuedInterval};

use crate::Lfsr;

type Tree = IntervalTree<u32, ValuedInterval<usize, u32>>;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = Tree::default();

    for _i in 0..n_values {
        t.insert(ValuedInterval::new(42_usize, rand.next_span()));
    }

    bench_iter(n_values, g, &t);
    bench_stab(n_values, g, &t);
    bench_overlapping(n_values, g, &t);
    bench_enclosed_by(n_values, g, &t);
}

fn bench_iter<M>(n_values: usize, g: &mut BenchmarkGroup<'_, M>, t: &Tree)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "iter",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.iter() {
                black_box(v);
            }
        })
    });
}

fn bench_stab<M>(n_values: usize, g: &mut BenchmarkGroup<'_, M>, t: &Tree)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "stab",
    };

    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.stab(&(u32::from(u16::MAX) / 2)) {
                black_box(v);
            }
        })
    });
}

macro_rules! query_bench {
    (
        $name:ident
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<'_, M>, t: &Tree)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                let query = Interval::valid(4_200, 10_000);

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        for v in t.$name(&query) {
                            black_box(v);
                        }
                    })
                });
            }
        }
    };
}

query_bench!(overlapping);
query_bench!(enclosed_by);
