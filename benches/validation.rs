//! Benchmarks for contact form validation.
//!
//! The email check goes through a regex, so the valid and empty cases
//! take different paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portfolio::state::{validate, ContactForm};

fn bench_validate_empty(c: &mut Criterion) {
    let form = ContactForm::default();
    c.bench_function("validate_empty_form", |b| b.iter(|| validate(black_box(&form))));
}

fn bench_validate_valid(c: &mut Criterion) {
    let form = ContactForm {
        name: "Ann".to_string(),
        email: "ann@example.com".to_string(),
        subject: "Collaboration".to_string(),
        message: "I would like to talk about a project.".to_string(),
    };
    c.bench_function("validate_valid_form", |b| b.iter(|| validate(black_box(&form))));
}

criterion_group!(benches, bench_validate_empty, bench_validate_valid);
criterion_main!(benches);
