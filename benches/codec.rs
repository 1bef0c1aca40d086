use auracle_id::{decode_timestamp, encode_timestamp, validate, Generator, Id, IdType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_codec(c: &mut Criterion) {
    c.bench_function("encode_timestamp", |b| {
        b.iter(|| encode_timestamp(black_box(1741561683653)).unwrap())
    });

    c.bench_function("decode_timestamp", |b| {
        b.iter(|| decode_timestamp(black_box("01JNYJMQP5")).unwrap())
    });

    c.bench_function("validate", |b| {
        b.iter(|| validate(black_box("AURR01JNYJMQP5V")).unwrap())
    });

    c.bench_function("generate", |b| {
        let mut generator = Generator::new();
        b.iter(|| Id::generate_with(&mut generator, black_box(IdType::Recording)))
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
