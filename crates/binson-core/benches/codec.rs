//! Encode/decode throughput.
//!
//! cargo bench --bench codec
//! cargo bench --bench codec -- "decode"   # one group

use std::hint::black_box;

use binson_core::{decode, encode, Array, Object, Value};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const N_RECORDS: usize = 1_000;
const N_BLOB: usize = 100_000;

/// A list of small, mixed-type records: the common message shape.
fn records() -> Value {
    let items: Array = (0..N_RECORDS)
        .map(|i| {
            Object::new()
                .with("id", i as i64)
                .with("name", format!("record-{i}"))
                .with("score", i as f64 / 7.0)
                .with("active", i % 3 == 0)
                .with("tag", vec![(i % 256) as u8; 16])
        })
        .collect();
    Value::from(Object::new().with("records", items))
}

/// A few large byte strings: payload-dominated messages.
fn blobs() -> Value {
    let items: Array = (0..10).map(|_| vec![0xabu8; N_BLOB]).collect();
    Value::from(items)
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for (name, value) in [("records", records()), ("blobs", blobs())] {
        group.throughput(Throughput::Bytes(encode(&value).len() as u64));
        group.bench_function(name, |b| b.iter(|| encode(black_box(&value))));
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for (name, value) in [("records", records()), ("blobs", blobs())] {
        let bytes = encode(&value);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_function(name, |b| b.iter(|| decode(black_box(&bytes))));
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
