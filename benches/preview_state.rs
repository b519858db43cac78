// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_preview::demo;
use iced_preview::preview::{classify, DerivedUrlCache, PreviewState, ViewerEndpoints};
use std::hint::black_box;

fn classification_benchmark(c: &mut Criterion) {
    let files = demo::demo_files();

    c.bench_function("classify_demo_list", |b| {
        b.iter(|| {
            for file in &files {
                black_box(classify(black_box(file)));
            }
        });
    });
}

fn url_cache_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived_urls");
    let files = demo::demo_files();

    // Every lookup after the first pass is a cache hit.
    group.bench_function("warm_cache_lookups", |b| {
        let cache = DerivedUrlCache::new(ViewerEndpoints::default(), 64);
        b.iter(|| {
            for file in &files {
                black_box(cache.is_local(file));
                black_box(cache.spreadsheet_viewer_url(file));
            }
        });
    });

    // Capacity 1 evicts on every lookup, so each one recomputes.
    group.bench_function("cold_cache_lookups", |b| {
        let cache = DerivedUrlCache::new(ViewerEndpoints::default(), 1);
        b.iter(|| {
            for file in &files {
                black_box(cache.spreadsheet_viewer_url(file));
            }
        });
    });

    group.finish();
}

fn navigation_benchmark(c: &mut Criterion) {
    c.bench_function("walk_demo_list", |b| {
        let mut state = PreviewState::default();
        state.set_files(demo::demo_files());
        b.iter(|| {
            while state.next() {
                black_box(state.current_viewer_url());
            }
            while state.prev() {}
        });
    });
}

criterion_group!(
    benches,
    classification_benchmark,
    url_cache_benchmark,
    navigation_benchmark
);
criterion_main!(benches);
