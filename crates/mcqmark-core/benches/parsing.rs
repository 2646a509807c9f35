use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mcqmark_core::parser::parse_answer_text;
use mcqmark_core::questions::extract_mcq_questions;

fn bench_parse_answers(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_answer_text");

    let newline = "1A\n2B\n3C\n4D";
    let spaced = "1 A 2 B 3 C 4 D";
    let run_together = "1a2b3c4d";
    let noisy = "Answers for set A: 1 a, 2 b (corrected), 3 c; 4 d. Question 12 is void.";

    let large = {
        let mut s = String::new();
        for i in 1..=500 {
            let letter = (b'a' + (i % 4) as u8) as char;
            s.push_str(&format!("{i} {letter}\n"));
        }
        s
    };

    group.bench_function("newline", |b| {
        b.iter(|| parse_answer_text(black_box(newline)))
    });

    group.bench_function("spaced", |b| b.iter(|| parse_answer_text(black_box(spaced))));

    group.bench_function("run_together", |b| {
        b.iter(|| parse_answer_text(black_box(run_together)))
    });

    group.bench_function("noisy", |b| b.iter(|| parse_answer_text(black_box(noisy))));

    group.bench_function("large_500", |b| {
        b.iter(|| parse_answer_text(black_box(&large)))
    });

    group.finish();
}

fn bench_split_questions(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_mcq_questions");

    let paper = {
        let mut s = String::new();
        for i in 1..=100 {
            s.push_str(&format!(
                "Question {i}. What is item {i}?\n a. one b. two c. three d. four\n\n"
            ));
        }
        s
    };

    group.bench_function("paper_100", |b| {
        b.iter(|| extract_mcq_questions(black_box(&paper)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_answers, bench_split_questions);
criterion_main!(benches);
