//! Conversion benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use shelflink_core::{to_book, to_online_book, Book};
use std::hint::black_box;

fn conversion_benchmark(c: &mut Criterion) {
    let book = Book::new(
        "The Name of the Rose",
        "Umberto Eco",
        "Central Branch Library",
        42,
        true,
    );
    let online = to_online_book(&book);

    c.bench_function("to_online_book", |b| {
        b.iter(|| to_online_book(black_box(&book)))
    });

    c.bench_function("to_book", |b| b.iter(|| to_book(black_box(&online))));
}

criterion_group!(benches, conversion_benchmark);
criterion_main!(benches);
