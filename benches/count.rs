use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cyclic_peptides::prelude::*;

fn counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");
    for (length, alphabet_size) in [(6, 4), (13, 20), (40, 20), (360, 21)] {
        group.bench_with_input(
            BenchmarkId::new("burnside", format!("{length}x{alphabet_size}")),
            &(length, alphabet_size),
            |b, &(l, u)| b.iter(|| count_cyclic_sequences(black_box(l), black_box(u))),
        );
        group.bench_with_input(
            BenchmarkId::new("rotations", format!("{length}x{alphabet_size}")),
            &(length, alphabet_size),
            |b, &(l, u)| b.iter(|| count_by_rotations(black_box(l), black_box(u))),
        );
    }
    group.finish();
}

fn primitives(c: &mut Criterion) {
    c.bench_function("divisors 720720", |b| b.iter(|| math::divisors(black_box(720720))));
    c.bench_function("totient 4294967291", |b| {
        b.iter(|| math::totient(black_box(4294967291)))
    });
}

criterion_group!(benches, counting, primitives);
criterion_main!(benches);
