use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hyperloglogpp::HyperLogLogPlusPlus;

/// Insert and estimate operations are benchmarked against cardinalities
/// ranging from 1 to `MAX_CARDINALITY`, doubled with every step.
const MAX_CARDINALITY: u64 = 1 << 16;

criterion_group!(benches, benchmark);
criterion_main!(benches);

fn cardinalities() -> Vec<u64> {
    (0..)
        .map(|c| 1u64 << c)
        .take_while(|&c| c <= MAX_CARDINALITY)
        .collect()
}

fn items(n: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(12345);
    (0..n).map(|_| rng.gen()).collect()
}

fn benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &cardinality in &cardinalities() {
        let items = items(cardinality);
        group.throughput(Throughput::Elements(cardinality));
        group.bench_with_input(BenchmarkId::new("p12", cardinality), &items, |b, items| {
            b.iter(|| {
                let mut counter = HyperLogLogPlusPlus::new(12).unwrap();
                for &item in black_box(items) {
                    counter.add(item);
                }
                counter
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("estimate");
    group.throughput(Throughput::Elements(1));
    for &cardinality in &cardinalities() {
        let mut counter = HyperLogLogPlusPlus::new(12).unwrap();
        counter.add_many(&items(cardinality));

        group.bench_with_input(
            BenchmarkId::new("hllpp", cardinality),
            &counter,
            |b, counter| b.iter(|| black_box(counter).cardinality()),
        );
        group.bench_with_input(
            BenchmarkId::new("ertl", cardinality),
            &counter,
            |b, counter| b.iter(|| black_box(counter).ertl_cardinality()),
        );
    }
    group.finish();

    let mut group = c.benchmark_group("merge");
    for &cardinality in &cardinalities() {
        let mut lhs = HyperLogLogPlusPlus::new(12).unwrap();
        lhs.add_many(&items(cardinality));
        let mut rhs = HyperLogLogPlusPlus::new(12).unwrap();
        rhs.add_many(&items(cardinality.max(2) / 2));

        group.bench_with_input(
            BenchmarkId::new("p12", cardinality),
            &(lhs, rhs),
            |b, (lhs, rhs)| {
                b.iter(|| {
                    let mut merged = lhs.clone();
                    merged.merge(black_box(rhs)).unwrap();
                    merged
                });
            },
        );
    }
    group.finish();
}
