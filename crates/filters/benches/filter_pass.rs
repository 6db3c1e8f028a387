//! Benchmarks for a full filtering pass
//!
//! Run with: cargo bench --package filters
//!
//! Uses a synthetic collection roughly the size of a full WaniKani
//! account (~9000 subjects) spread over every SRS stage.

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use filters::{EvaluationContext, FilterRegistry};
use item_data::{Assignment, Item, ReviewStatistics};

const CHARACTERS: [&str; 6] = ["金", "曜", "日", "髪", "月", "火"];

fn synthetic_items(count: u32) -> Vec<Item> {
    let now = Utc::now();
    (0..count)
        .map(|id| {
            let stage = (id % 10) as u8;
            Item::new(id, CHARACTERS[id as usize % CHARACTERS.len()])
                .with_assignment(Assignment {
                    started_at: (stage > 0).then(|| now - Duration::hours(i64::from(id % 500))),
                    srs_stage: stage,
                    level: id % 60 + 1,
                    available_at: (stage > 0 && stage < 9)
                        .then(|| now + Duration::hours(i64::from(id % 200))),
                })
                .with_review_statistics(ReviewStatistics {
                    meaning_incorrect: id % 7,
                    meaning_current_streak: id % 5,
                    reading_incorrect: id % 3,
                    reading_current_streak: id % 4,
                })
        })
        .collect()
}

fn bench_single_filters(c: &mut Criterion) {
    let items = synthetic_items(9000);
    let registry = FilterRegistry::builtin();
    let context = EvaluationContext::prepare();

    for spec in [
        "recent_lessons=24",
        "leech_training=1",
        "time_until_review=50",
        "failed_last_review=24",
        "related_items=金 -曜",
    ] {
        let pipeline = registry.build_pipeline([spec]).expect("Failed to build pipeline");
        c.bench_function(spec, |b| {
            b.iter(|| {
                let filtered = pipeline.apply(black_box(items.clone()), &context);
                black_box(filtered)
            })
        });
    }
}

fn bench_full_pipeline(c: &mut Criterion) {
    let items = synthetic_items(9000);
    let registry = FilterRegistry::builtin();
    let pipeline = registry
        .build_pipeline(["related_items=金 日", "leech_training=1", "time_until_review=25"])
        .expect("Failed to build pipeline");

    c.bench_function("full_pipeline_run", |b| {
        b.iter(|| {
            let filtered = pipeline.run(black_box(items.clone()));
            black_box(filtered)
        })
    });
}

criterion_group!(benches, bench_single_filters, bench_full_pipeline);
criterion_main!(benches);
