// ABOUTME: Criterion benchmarks for the fallback estimator and payload decoding
// ABOUTME: Measures the degraded-path cost per request at realistic stage counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the degraded analysis path.
//!
//! A night of 30-second epochs is roughly 1000 stage intervals, so the large
//! dataset covers a full night at the finest granularity wearables report.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;
use sleep_gateway::intelligence::FallbackEstimator;
use sleep_gateway::models::{SleepPayload, SleepStageType, StageInterval};

const STAGE_CYCLE: [SleepStageType; 5] = [
    SleepStageType::Light,
    SleepStageType::Deep,
    SleepStageType::Light,
    SleepStageType::Rem,
    SleepStageType::Awake,
];

#[allow(clippy::cast_precision_loss)]
fn generate_stages(count: usize) -> Vec<StageInterval> {
    (0..count)
        .map(|index| {
            StageInterval::new(
                STAGE_CYCLE[index % STAGE_CYCLE.len()],
                0.5 + (index % 7) as f64,
            )
        })
        .collect()
}

fn bench_fallback_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("fallback_estimate");

    for count in [8_usize, 120, 1000] {
        let stages = generate_stages(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("estimate", count), &stages, |b, stages| {
            b.iter(|| FallbackEstimator::estimate(black_box(stages)));
        });
    }

    group.finish();
}

fn bench_payload_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_decode");

    for count in [8_usize, 1000] {
        let body = serde_json::to_vec(&json!({
            "stages": generate_stages(count),
            "start_time": "2025-03-01T22:30:00Z",
            "end_time": "2025-03-02T06:40:00Z"
        }))
        .unwrap_or_default();

        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::new("decode", count), &body, |b, body| {
            b.iter(|| serde_json::from_slice::<SleepPayload>(black_box(body)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fallback_estimate, bench_payload_decode);
criterion_main!(benches);
