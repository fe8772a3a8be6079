// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for focus tour operations.
//!
//! Measures the performance of:
//! - Zoom transform computation (pure geometry)
//! - Focus point navigation (next/previous with observable updates)
//! - Progress ticking through a full tour on virtual time

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_spotlight::config::{default_focus_points, ZOOM_FACTOR};
use iced_spotlight::domain::{FocusPoint, ProgressDuration, ZoomTransform};
use iced_spotlight::ui::state::FocusPointSelector;
use iced_spotlight::ui::tour::{FocusTour, Message};
use std::hint::black_box;

/// Benchmark the clamped zoom computation for a spread of focus points.
fn bench_zoom_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus_tour");

    let points: Vec<FocusPoint> = (0..=10)
        .map(|i| {
            let step = i as f32 * 10.0;
            FocusPoint::new(step, 100.0 - step)
        })
        .collect();

    group.bench_function("zoom_transform", |b| {
        b.iter(|| {
            for point in &points {
                black_box(ZoomTransform::focused_on(
                    black_box(*point),
                    1920.0,
                    1080.0,
                    ZOOM_FACTOR,
                ));
            }
        });
    });

    group.finish();
}

/// Benchmark cyclic navigation, including observable notifications.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus_tour");

    let mut selector = FocusPointSelector::new(default_focus_points()).unwrap();
    let _index_rx = selector.subscribe_index();

    group.bench_function("next_focus_point", |b| {
        b.iter(|| {
            selector.next_focus_point();
            black_box(selector.current_focus_point());
        });
    });

    group.bench_function("previous_focus_point", |b| {
        b.iter(|| {
            selector.previous_focus_point();
            black_box(selector.current_focus_point());
        });
    });

    group.finish();
}

/// Benchmark a full pass over the default tour driven by host ticks.
fn bench_tour_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus_tour");

    group.bench_function("full_pass_1s_per_point", |b| {
        b.iter(|| {
            let mut tour =
                FocusTour::manual(default_focus_points(), ProgressDuration::from_millis(1_000))
                    .unwrap();
            tour.update(Message::ContainerResized(Size::new(1920.0, 1080.0)));
            tour.update(Message::Start);
            for _ in 0..50 {
                black_box(tour.update(Message::Tick));
            }
            black_box(tour.info());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_zoom_transform, bench_navigate, bench_tour_pass);
criterion_main!(benches);
