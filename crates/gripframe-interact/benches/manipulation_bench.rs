//! Benchmarks for the per-move hot paths.
//!
//! Run with: cargo bench -p gripframe-interact

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gripframe_core::event::SurfaceInput;
use gripframe_core::geometry::{Point, Rect, Size};
use gripframe_interact::{
    Anchor, ContainerBounds, InteractionConfig, Manipulator, NoopDelegate, pinch, resize_to,
    resolve_anchor, translate,
};
use std::hint::black_box;

fn bounds() -> ContainerBounds {
    ContainerBounds::new(Rect::new(0.0, 0.0, 1920.0, 1080.0))
}

fn bench_resolve_anchor(c: &mut Criterion) {
    let size = Size::new(320.0, 240.0);
    let touches = [
        Point::new(0.0, 0.0),
        Point::new(160.0, 120.0),
        Point::new(318.0, 119.0),
        Point::new(40.0, 200.0),
    ];
    c.bench_function("interact/resolve_anchor", |b| {
        b.iter(|| {
            for touch in touches {
                black_box(resolve_anchor(black_box(touch), size, 0.5));
            }
        })
    });
}

fn bench_engine_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("interact/step");
    let frame = Rect::new(400.0, 300.0, 320.0, 240.0);
    let bounds = bounds();

    for strict in [false, true] {
        let config = InteractionConfig {
            enable_drag_resizing: true,
            prevents_position_outside_bounds: strict,
            ..InteractionConfig::default()
        };
        let label = if strict { "strict" } else { "soft" };

        group.bench_with_input(BenchmarkId::new("resize", label), &config, |b, config| {
            b.iter(|| {
                black_box(resize_to(
                    frame,
                    Anchor::LowerRight,
                    Point::new(720.0, 540.0),
                    black_box(Point::new(731.0, 547.0)),
                    frame.size(),
                    &bounds,
                    config,
                ))
            })
        });
        group.bench_with_input(BenchmarkId::new("translate", label), &config, |b, config| {
            b.iter(|| {
                black_box(translate(
                    frame,
                    Point::new(160.0, 120.0),
                    black_box(Point::new(171.0, 113.0)),
                    &bounds,
                    config,
                ))
            })
        });
        group.bench_with_input(BenchmarkId::new("pinch", label), &config, |b, config| {
            b.iter(|| black_box(pinch(frame, black_box(-3.0), 0.9, &bounds, config)))
        });
    }
    group.finish();
}

fn bench_drag_session(c: &mut Criterion) {
    let bounds = bounds();
    let config = InteractionConfig {
        enable_drag_resizing: true,
        ..InteractionConfig::default()
    };
    let moves: Vec<SurfaceInput> = (0..120u32)
        .map(|i| SurfaceInput::PointerMoved {
            position: Point::new(720.0 + f64::from(i) * 2.0, 540.0 + f64::from(i)),
        })
        .collect();

    c.bench_function("interact/session/resize_120_moves", |b| {
        b.iter(|| {
            let mut m = Manipulator::new(Rect::new(400.0, 300.0, 320.0, 240.0), config.clone())
                .expect("valid config");
            m.apply(
                SurfaceInput::PointerDown {
                    position: Point::new(720.0, 540.0),
                },
                &bounds,
                &mut NoopDelegate,
            );
            for input in &moves {
                black_box(m.apply(*input, &bounds, &mut NoopDelegate));
            }
            m.apply(
                SurfaceInput::PointerUp {
                    position: Point::new(958.0, 659.0),
                },
                &bounds,
                &mut NoopDelegate,
            );
            black_box(m.frame())
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_anchor,
    bench_engine_steps,
    bench_drag_session
);
criterion_main!(benches);
