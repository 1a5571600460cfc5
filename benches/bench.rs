use augmented_itree::{Interval, IntervalTree};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

const N: usize = 10_000;

fn intervals(n: usize) -> Vec<Interval<u32>> {
    let mut rng = StdRng::seed_from_u64(0xbe_ac);
    (0..n)
        .map(|_| {
            let low = rng.gen_range(0..1_000_000);
            Interval::new(low, low + rng.gen_range(0..500))
        })
        .collect()
}

fn build(intervals: &[Interval<u32>]) -> IntervalTree<u32, usize> {
    let mut tree = IntervalTree::with_capacity(intervals.len());
    for (i, interval) in intervals.iter().enumerate() {
        tree.insert(*interval, i);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let data = intervals(N);
    c.bench_function("insert 10k", |b| b.iter(|| build(black_box(&data))));
}

fn bench_search(c: &mut Criterion) {
    let data = intervals(N);
    let tree = build(&data);
    let queries = intervals(1_000);
    c.bench_function("search 1k", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(tree.search(*q));
            }
        })
    });
    c.bench_function("walk 1k", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for q in &queries {
                tree.walk(*q, |_, _| hits += 1);
            }
            black_box(hits)
        })
    });
}

fn bench_remove(c: &mut Criterion) {
    let data = intervals(N);
    c.bench_function("remove all 10k", |b| {
        b.iter_batched(
            || build(&data),
            |mut tree| {
                for q in &data {
                    let node = tree.find_exact(*q);
                    black_box(tree.remove(node));
                }
                tree
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_insert, bench_search, bench_remove);
criterion_main!(benches);
