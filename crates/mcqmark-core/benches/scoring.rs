use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mcqmark_core::model::AnswerKey;
use mcqmark_core::scoring::{evaluate, evaluate_detailed, evaluate_mcq};

fn make_key(n: usize, shift: usize) -> AnswerKey {
    let mut key = AnswerKey::new();
    for i in 1..=n {
        let letter = (b'A' + ((i + shift) % 4) as u8) as char;
        key.insert(i.to_string(), letter);
    }
    key
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let model = make_key(200, 0);
    let perfect = make_key(200, 0);
    let wrong = make_key(200, 1);
    let sparse = make_key(20, 0);

    group.bench_function("perfect_200", |b| {
        b.iter(|| evaluate(black_box(&model), black_box(&perfect)))
    });

    group.bench_function("all_wrong_200", |b| {
        b.iter(|| evaluate(black_box(&model), black_box(&wrong)))
    });

    group.bench_function("sparse_student", |b| {
        b.iter(|| evaluate(black_box(&model), black_box(&sparse)))
    });

    group.bench_function("detailed_200", |b| {
        b.iter(|| evaluate_detailed(black_box(&model), black_box(&wrong)))
    });

    group.finish();
}

fn bench_evaluate_mcq(c: &mut Criterion) {
    c.bench_function("evaluate_mcq_text", |b| {
        b.iter(|| evaluate_mcq(black_box("1A 2B 3C 4D 5A"), black_box("1a 2b 3d 4c 5a")))
    });
}

criterion_group!(benches, bench_evaluate, bench_evaluate_mcq);
criterion_main!(benches);
