//! Criterion benchmarks for performance-critical hot paths
//!
//! Covers: per-tick trajectory stepping, full approach runs, scale layout
//! construction, and click handling on a response session.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use stimulus_rater::motion::{Approach, MotionParams, ScriptedJitter, TrajectoryState, UniformJitter};
use stimulus_rater::response::ResponseSession;
use stimulus_rater::scale::ScaleLayout;

fn numeric_legends(n: usize) -> Vec<String> {
    (1..=n).map(|i| i.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Trajectory benchmarks
// ---------------------------------------------------------------------------

fn bench_trajectory_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("trajectory_step");
    for speed in [10, 40, 70] {
        group.bench_with_input(BenchmarkId::from_parameter(speed), &speed, |b, &speed| {
            let params = MotionParams::new(speed, -75, (0, 400));
            let mut jitter = UniformJitter::seeded(1);
            let mut state = TrajectoryState::new(&params);

            b.iter(|| {
                let (next, pose) = state.step(black_box(&params), &mut jitter);
                state = next;
                black_box(pose);
            });
        });
    }
    group.finish();
}

fn bench_full_approach(c: &mut Criterion) {
    c.bench_function("approach_run_speed_40", |b| {
        let params = MotionParams::new(40, -75, (0, 400));
        b.iter(|| {
            let mut jitter = UniformJitter::seeded(7);
            let count = Approach::new(black_box(params), &mut jitter, -350).count();
            black_box(count);
        });
    });
}

fn bench_scripted_step(c: &mut Criterion) {
    c.bench_function("trajectory_step_scripted", |b| {
        let params = MotionParams::new(70, -75, (0, 400));
        let mut jitter = ScriptedJitter::zeros();
        let mut state = TrajectoryState::new(&params);

        b.iter(|| {
            let (next, pose) = state.step(black_box(&params), &mut jitter);
            state = next;
            black_box(pose);
        });
    });
}

// ---------------------------------------------------------------------------
// Scale layout benchmarks
// ---------------------------------------------------------------------------

fn bench_layout_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_build");
    for n in [3, 7, 11] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let layout = ScaleLayout::build(
                    black_box(n),
                    numeric_legends(n),
                    vec!["Q".to_string()],
                    800,
                );
                black_box(layout.unwrap());
            });
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let layout = ScaleLayout::build(7, numeric_legends(7), vec!["Q".into()], 800).unwrap();

    c.bench_function("hit_button_worst_case_miss", |b| {
        b.iter(|| {
            // A miss scans every button
            let hit = layout.hit_button(black_box((400, 300)));
            black_box(hit);
        });
    });
}

// ---------------------------------------------------------------------------
// Response session benchmarks
// ---------------------------------------------------------------------------

fn bench_click_burst(c: &mut Criterion) {
    let layout = Arc::new(
        ScaleLayout::build(7, numeric_legends(7), vec!["Q".into()], 800).unwrap(),
    );
    let clicks: Vec<(i32, i32)> = layout
        .points()
        .iter()
        .map(|p| p.center)
        .chain(std::iter::once((400, 300)))
        .collect();

    c.bench_function("session_click_burst", |b| {
        b.iter(|| {
            let mut session = ResponseSession::new(layout.clone());
            for &point in &clicks {
                black_box(session.handle_click(black_box(point)));
            }
            session.handle_click(layout.submit().center);
            black_box(session.score());
        });
    });
}

criterion_group!(
    benches,
    bench_trajectory_step,
    bench_full_approach,
    bench_scripted_step,
    bench_layout_build,
    bench_hit_test,
    bench_click_burst,
);
criterion_main!(benches);
