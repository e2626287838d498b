use criterion::{criterion_group, criterion_main};

mod http;

criterion_group!(
    benches,
    http::bench_parse,
    http::bench_parse_lf,
    http::bench_get_exchange
);
criterion_main!(benches);
