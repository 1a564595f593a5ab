//! Ambiguity resolution benchmarks using criterion.
//!
//! Run with: cargo bench --bench resolve_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use delegate_resolve::method::{Binding, MethodDescription};
use delegate_resolve::resolve::{AmbiguityResolver, ArgumentTypeResolver, Compound};
use delegate_resolve::select::select;
use delegate_resolve::ty::{PrimitiveKind, ReferenceType, TypeDescriptor};

fn kinds(n: usize, offset: usize) -> Vec<TypeDescriptor> {
    (0..n)
        .map(|i| PrimitiveKind::ALL[(i + offset) % PrimitiveKind::ALL.len()].into())
        .collect()
}

fn binding(owner: &ReferenceType, name: &str, params: Vec<TypeDescriptor>) -> Binding {
    let n = params.len();
    (0..n)
        .fold(
            Binding::builder(MethodDescription::new(owner, name, params)),
            |builder, i| builder.bind(i, i),
        )
        .build()
}

fn bench_argument_type_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("argument_type_resolver");
    let owner = ReferenceType::builder("com.example.Target").build();

    for n in [1usize, 4, 16, 64] {
        let source = MethodDescription::new(&owner, "source", vec![TypeDescriptor::int(); n]);
        let left = binding(&owner, "left", vec![TypeDescriptor::byte(); n]);
        let right = binding(&owner, "right", kinds(n, 1));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                black_box(ArgumentTypeResolver::INSTANCE.resolve(
                    black_box(&source),
                    black_box(&left),
                    black_box(&right),
                ))
            });
        });
    }

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    let owner = ReferenceType::builder("com.example.Target").build();
    let source = MethodDescription::new(&owner, "source", vec![TypeDescriptor::byte(); 2]);
    let chain = Compound::default();

    for count in [2usize, 8, 32] {
        let candidates: Vec<_> = (0..count)
            .map(|i| binding(&owner, &format!("target{}", i), kinds(2, i)))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(select(&chain, black_box(&source), black_box(&candidates)).is_ok()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_argument_type_resolver, bench_select);
criterion_main!(benches);
