use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use optional::Optional;

const BATCH: usize = 1024;

fn bench_unwrap_or(c: &mut Criterion) {
    let mut group = c.benchmark_group("unwrap_or");
    group.throughput(Throughput::Elements(BATCH as u64));

    group.bench_function("optional", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for i in 0..BATCH as u64 {
                let mut cell = if i % 3 == 0 { Optional::none() } else { Optional::some(i) };
                acc = acc.wrapping_add(cell.unwrap_or(|| 7));
            }
            black_box(acc)
        });
    });

    group.bench_function("core_option", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for i in 0..BATCH as u64 {
                let mut slot = if i % 3 == 0 { None } else { Some(i) };
                acc = acc.wrapping_add(slot.take().unwrap_or_else(|| 7));
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("match");
    group.throughput(Throughput::Elements(BATCH as u64));

    group.bench_function("optional", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for i in 0..BATCH as u64 {
                let mut cell = if i % 2 == 0 { Optional::none() } else { Optional::some(i) };
                acc = acc.wrapping_add(cell.match_with(|v| v * 2, || 1));
            }
            black_box(acc)
        });
    });

    group.bench_function("core_option", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for i in 0..BATCH as u64 {
                let mut slot = if i % 2 == 0 { None } else { Some(i) };
                acc = acc.wrapping_add(slot.take().map_or(1, |v| v * 2));
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for &len in &[16usize, 1024] {
        group.bench_with_input(BenchmarkId::new("optional", len), &len, |b, &len| {
            b.iter(|| {
                let mut src = Optional::some(vec![0u8; len]);
                let mut dst = Optional::none();
                dst.assign_from(&mut src);
                let moved = dst.transfer();
                black_box(moved)
            });
        });

        group.bench_with_input(BenchmarkId::new("core_option", len), &len, |b, &len| {
            b.iter(|| {
                let mut src = Some(vec![0u8; len]);
                let mut dst = None;
                dst = src.take().or(dst);
                let moved = dst.take();
                black_box(moved)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_unwrap_or, bench_match, bench_transfer);
criterion_main!(benches);
