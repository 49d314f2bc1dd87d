use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tropos_search::{cardinal_points, next_ingress, SearchConfig};
use tropos_time::UtcTime;

fn ingress_bench(c: &mut Criterion) {
    let config = SearchConfig::default();
    let utc = UtcTime::new(2025, 3, 1, 0, 0, 0.0);

    let mut group = c.benchmark_group("search_ingress");
    group.sample_size(50);
    group.bench_function("next_ingress", |b| {
        b.iter(|| {
            next_ingress(black_box(&utc), black_box(&config))
                .expect("search should succeed")
                .expect("event should exist")
        })
    });
    group.bench_function("cardinal_points", |b| {
        b.iter(|| cardinal_points(black_box(2025), black_box(&config)).expect("should succeed"))
    });
    group.finish();
}

criterion_group!(benches, ingress_bench);
criterion_main!(benches);
