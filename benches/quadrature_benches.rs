use RustedQuadrature::quadrature::{ReferenceShape, RuleCache, get_rule, integrate};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_cached_lookup(c: &mut Criterion) {
    c.bench_function("cube order 5 from cache", |b| {
        b.iter(|| get_rule::<3>(ReferenceShape::Cube, black_box(5)).unwrap())
    });
}

fn bench_on_demand(c: &mut Criterion) {
    c.bench_function("cube order 8 on demand", |b| {
        b.iter(|| get_rule::<3>(ReferenceShape::Cube, black_box(8)).unwrap())
    });
}

fn bench_build_cache(c: &mut Criterion) {
    c.bench_function("build rule cache", |b| b.iter(|| RuleCache::build().unwrap()));
}

fn bench_integrate(c: &mut Criterion) {
    let rule = get_rule::<3>(ReferenceShape::Cube, 5).unwrap();
    c.bench_function("integrate on cube order 5", |b| {
        b.iter(|| integrate(&rule, |p| (p[0] * p[1] * p[2]).exp()).unwrap())
    });
}

criterion_group!(
    benches,
    bench_cached_lookup,
    bench_on_demand,
    bench_build_cache,
    bench_integrate
);
criterion_main!(benches);
