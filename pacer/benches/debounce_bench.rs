// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{Criterion, Throughput};
use pacer::Debouncer;
use std::hint::black_box;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::time::advance;

pub fn bench_debounce(c: &mut Criterion) {
    let mut group = c.benchmark_group("debounce_overhead");
    group.throughput(Throughput::Elements(1));

    group.bench_function("rearm_and_fire", |bencher| {
        bencher.iter(|| {
            let rt = Builder::new_current_thread()
                .enable_time()
                .start_paused(true)
                .build()
                .unwrap();

            rt.block_on(async {
                let debouncer = Debouncer::new(Duration::from_millis(10)).unwrap();

                // Three rapid calls coalesce into one fire.
                debouncer.call(|| {});
                debouncer.call(|| {});
                debouncer.call(|| {});

                advance(Duration::from_millis(11)).await;
                black_box(debouncer.call_count());
            });
        });
    });

    group.finish();
}
