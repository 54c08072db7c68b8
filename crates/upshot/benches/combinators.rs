// Combinator chain overhead.
// Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use upshot::Upshot;

fn bench_success_chain(c: &mut Criterion) {
    c.bench_function("success_chain", |b| {
        b.iter(|| {
            let res: Upshot<i64, String> = Upshot::from_value(black_box(12));
            let out = res
                .map(|v| v / 3)
                .and_then(|v| {
                    if v > 0 {
                        Upshot::from_value(v * 2)
                    } else {
                        Upshot::from_error("not positive".to_string())
                    }
                })
                .map(|v| v * v);
            black_box(out)
        });
    });
}

fn bench_error_short_circuit(c: &mut Criterion) {
    c.bench_function("error_short_circuit", |b| {
        b.iter(|| {
            let res: Upshot<i64, String> = Upshot::from_error(black_box("boom").to_string());
            let out = res
                .map(|v| v + 1)
                .and_then(Upshot::from_value)
                .map_error(|e| format!("{e}!"));
            black_box(out)
        });
    });
}

fn bench_clone(c: &mut Criterion) {
    let res: Upshot<Vec<u8>, String> = Upshot::from_value(vec![0u8; 256]);

    c.bench_function("clone_success_payload", |b| {
        b.iter(|| {
            let cloned = black_box(res.clone());
            black_box(cloned);
        });
    });
}

criterion_group!(
    benches,
    bench_success_chain,
    bench_error_short_circuit,
    bench_clone
);
criterion_main!(benches);
