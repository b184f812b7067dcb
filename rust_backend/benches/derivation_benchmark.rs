use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lms_core::memo::Memo;
use lms_core::models::{CourseSnapshot, Enrollment, Lesson};
use lms_core::parsing::parse_lessons_json_str;
use lms_core::services::{classify_enrollments, group_lessons, summarize_curriculum};

fn make_lessons(count: usize) -> Vec<Lesson> {
    (0..count)
        .map(|i| {
            let i = i as i64;
            // Sections and orders deliberately out of input order
            Lesson::new(i, format!("Lesson {}", i), (i * 7) % 12, (i * 13) % 25)
                .with_duration(((i % 50) + 1) as u32)
                .with_completed(i % 3 == 0)
        })
        .collect()
}

fn make_enrollments(count: usize) -> Vec<Enrollment> {
    (0..count)
        .map(|i| {
            let course = if i % 10 == 0 {
                None
            } else {
                Some(CourseSnapshot::new(format!("Course {}", i), (i % 300) as u32))
            };
            Enrollment::new(i as i64, course)
                .with_progress((i % 101) as f64)
                .with_completed(i % 4 == 0)
        })
        .collect()
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("curriculum_grouping");

    for size in [10, 100, 1_000] {
        let lessons = make_lessons(size);
        group.bench_with_input(BenchmarkId::new("group_lessons", size), &lessons, |b, input| {
            b.iter(|| group_lessons(black_box(input)));
        });
    }

    let sections = group_lessons(&make_lessons(1_000));
    group.bench_function("summarize_curriculum", |b| {
        b.iter(|| summarize_curriculum(black_box(&sections)));
    });

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress_classification");

    for size in [10, 100, 1_000] {
        let enrollments = make_enrollments(size);
        group.bench_with_input(
            BenchmarkId::new("classify_enrollments", size),
            &enrollments,
            |b, input| {
                b.iter(|| classify_enrollments(black_box(input)));
            },
        );
    }

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_parsing");

    let payload = serde_json::to_string(&make_lessons(500)).unwrap();
    group.bench_function("parse_lessons_500", |b| {
        b.iter(|| parse_lessons_json_str(black_box(&payload)).unwrap());
    });

    group.finish();
}

fn bench_memo(c: &mut Criterion) {
    let mut group = c.benchmark_group("memoization");

    let lessons = make_lessons(1_000);
    let memo = Memo::new(true);
    group.bench_function("cached_group_1000", |b| {
        b.iter(|| {
            memo.get_or_derive(black_box(&lessons), |l: &Vec<Lesson>| group_lessons(l))
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_grouping,
    bench_classification,
    bench_parsing,
    bench_memo
);
criterion_main!(benches);
