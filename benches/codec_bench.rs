use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use opacode::codec::{spawn_encoder, Encoder};
use opacode::{compact, hash};

fn bench_hash(c: &mut Criterion) {
    let payload = vec![0xA5u8; 4096];

    let mut group = c.benchmark_group("hash");
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("murmur3_4k", |b| {
        b.iter(|| hash::hash_bytes(black_box(&payload)));
    });
    group.finish();
}

fn bench_compact(c: &mut Criterion) {
    let values: Vec<u64> = (0..1024).collect();
    let wire = compact::serialize(&values);

    let mut group = c.benchmark_group("compact");
    group.throughput(Throughput::Bytes(wire.len() as u64));
    group.bench_function("serialize_vec_u64", |b| {
        b.iter(|| compact::serialize(black_box(&values)));
    });
    group.bench_function("deserialize_vec_u64", |b| {
        b.iter(|| compact::deserialize::<Vec<u64>>(black_box(&wire)).expect("valid buffer"));
    });
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let plaintext = vec![0x42u8; 256];
    let mut codec = spawn_encoder(b"bench_secret");
    let sealed = codec.encode(&plaintext).expect("encode");

    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Bytes(plaintext.len() as u64));
    group.bench_function("encode_256", |b| {
        b.iter(|| codec.encode(black_box(&plaintext)).expect("encode"));
    });
    group.bench_function("decode_256", |b| {
        b.iter(|| codec.decode(black_box(&sealed)).expect("decode"));
    });
    group.finish();
}

criterion_group!(benches, bench_hash, bench_compact, bench_codec);
criterion_main!(benches);
