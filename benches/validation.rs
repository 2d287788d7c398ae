//! Benchmarks for the hot validation paths.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use argen_worker::service::checkdigit::calculate_check_digit;
use argen_worker::service::validator::{validate_cnpj, validate_cpf, validate_document};

fn bench_validators(c: &mut Criterion) {
    c.bench_function("validate_cpf", |b| {
        b.iter(|| validate_cpf(black_box("123.456.789-09")));
    });

    c.bench_function("validate_cnpj", |b| {
        b.iter(|| validate_cnpj(black_box("11.222.333/0001-81")));
    });

    c.bench_function("validate_document_padded", |b| {
        b.iter(|| validate_document(black_box("123456789")));
    });

    c.bench_function("calculate_check_digit", |b| {
        b.iter(|| calculate_check_digit(black_box("12345678")));
    });
}

criterion_group!(benches, bench_validators);
criterion_main!(benches);
