use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lzma_header::{read_header, write_header, Parameters, HEADER_LEN};

fn criterion_benchmark(c: &mut Criterion) {
    let params = Parameters {
        dict_size: 1 << 22,
        size: 1 << 30,
        size_in_header: true,
        ..Parameters::default()
    };
    let mut encoded = Vec::new();
    write_header(&mut encoded, &params).unwrap();

    c.bench_function("write_header", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(HEADER_LEN);
            write_header(&mut buf, black_box(&params)).unwrap();
            buf
        })
    });

    c.bench_function("read_header", |b| {
        b.iter(|| read_header(black_box(encoded.as_slice())).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
