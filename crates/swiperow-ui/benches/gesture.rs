use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swiperow_testing::{SwipeRobot, TOUCH_ORIGIN};
use swiperow_ui::{DirectionMask, RevealStyle};

const MOVE_SAMPLES: &[usize] = &[16, 256];
const ROW_COUNT: usize = 64;

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    for &moves in MOVE_SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            let mut robot = SwipeRobot::new();
            let row = robot.add_row(DirectionMask::HORIZONTAL, RevealStyle::PullOut);
            b.iter(|| {
                robot.press(row, TOUCH_ORIGIN.x, TOUCH_ORIGIN.y);
                for i in 0..moves {
                    let dx = -((i % 280) as f32);
                    black_box(robot.move_to(row, TOUCH_ORIGIN.x + dx, TOUCH_ORIGIN.y));
                }
                robot.release(row, TOUCH_ORIGIN.x - 60.0, TOUCH_ORIGIN.y);
                robot.run_until_idle();
            });
        });
    }
    group.finish();
}

fn bench_commit_and_restore(c: &mut Criterion) {
    c.bench_function("commit_then_restore_across_rows", |b| {
        let mut robot = SwipeRobot::new();
        let rows: Vec<usize> = (0..ROW_COUNT)
            .map(|_| robot.add_row(DirectionMask::LEFT, RevealStyle::PullOut))
            .collect();
        b.iter(|| {
            for &row in &rows {
                robot.swipe(row, -260.0);
                black_box(robot.run_until_idle());
            }
        });
    });
}

criterion_group!(benches, bench_drag, bench_commit_and_restore);
criterion_main!(benches);
