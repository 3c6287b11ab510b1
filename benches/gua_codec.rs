use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use yijing_primitives::{Gua, Yinyang};

fn gen_gua(count: usize) -> Gua {
    // Deterministic but non-trivial pattern
    (0..count).map(|i| Yinyang::from(i * 31 % 7 < 3)).collect()
}

fn bench_gua_codec(c: &mut Criterion) {
    for &count in &[6usize, 64, 1024, 65536] {
        let gua = gen_gua(count);
        let bytes = gua.to_bytes();
        let text = gua.to_string();

        c.bench_function(&format!("to_bytes_{}_yaos", count), |b| {
            b.iter(|| black_box(&gua).to_bytes())
        });

        c.bench_function(&format!("from_bytes_{}_yaos", count), |b| {
            b.iter(|| Gua::from_bytes(black_box(&bytes)))
        });

        c.bench_function(&format!("parse_{}_yaos", count), |b| {
            b.iter(|| black_box(&text).parse::<Gua>().unwrap())
        });
    }
}

criterion_group!(benches, bench_gua_codec);
criterion_main!(benches);
