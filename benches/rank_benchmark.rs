//! Ranking throughput benchmarks.
//!
//! Measures a full score-and-sort pass per mode over synthetic feeds, plus the
//! filter-then-rank pipeline the TUI runs on every tab or mood change.
//!
//! Run with: cargo bench --bench rank_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tomodachi_feed::model::{Mood, Post, PostId, ScoringMode};
use tomodachi_feed::ranking::{build_feed, rank_at};

const FEED_SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Deterministic synthetic feed with spread-out engagement and ages.
fn synthetic_posts(n: usize) -> Vec<Post> {
    (0..n)
        .map(|i| {
            Post::new(
                PostId::new(format!("post-{i}")).unwrap(),
                now() - Duration::minutes(((i * 7919) % 50_000) as i64),
            )
            .with_likes(((i * 104_729) % 5_000) as u64)
            .with_comments(((i * 1_299_709) % 400) as u64)
            .with_mood(Mood::ALL.get(i % 5).copied())
        })
        .collect()
}

fn benchmark_rank_by_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_at");

    for size in FEED_SIZES {
        let posts = synthetic_posts(size);
        group.throughput(Throughput::Elements(size as u64));

        for mode in ScoringMode::ALL {
            group.bench_with_input(
                BenchmarkId::new(mode.as_str(), size),
                &posts,
                |b, posts| b.iter(|| rank_at(black_box(posts), mode, now())),
            );
        }
    }

    group.finish();
}

fn benchmark_build_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_feed");
    let posts = synthetic_posts(10_000);

    for mood in [None, Some(Mood::Hype), Some(Mood::Dark)] {
        let label = mood.map_or("all", |m| m.as_str());
        group.bench_with_input(BenchmarkId::new("hot", label), &posts, |b, posts| {
            b.iter(|| build_feed(black_box(posts), mood, ScoringMode::Hot, now()))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_rank_by_mode, benchmark_build_feed);
criterion_main!(benches);
