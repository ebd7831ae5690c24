//! Scripted pointer input for the demo.

use crate::list::{ContactList, ROW_HEIGHT, ROW_WIDTH};
use swiperow_foundation::PointerDispatcher;
use swiperow_ui::PointerEvent;

const MOVE_STEPS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Press, drag horizontally by `dx` and release.
    Swipe { row: usize, dx: f32 },
    /// Press and release in place.
    Tap { row: usize },
    /// Press, drag by `dx`, then have the system cancel the stream.
    Interrupted { row: usize, dx: f32 },
}

impl Step {
    pub fn row(&self) -> usize {
        match *self {
            Step::Swipe { row, .. } | Step::Tap { row } | Step::Interrupted { row, .. } => row,
        }
    }
}

/// Reveal one row, tap another, open a second row (closing the first), let
/// one swipe fall short, interrupt another and leave the last row open.
pub fn demo_script() -> Vec<Step> {
    vec![
        Step::Swipe { row: 0, dx: -300.0 },
        Step::Tap { row: 2 },
        Step::Swipe { row: 1, dx: -260.0 },
        Step::Swipe { row: 3, dx: -90.0 },
        Step::Interrupted { row: 4, dx: -150.0 },
        Step::Swipe { row: 5, dx: -300.0 },
    ]
}

/// Queues the pointer events of `step`, stamped with `now_millis`, and drains
/// them into `list`. Returns whether the row handled the press.
pub fn perform(list: &ContactList, step: &Step, now_millis: u64) -> bool {
    let x = ROW_WIDTH as f32 * 0.75;
    let y = ROW_HEIGHT as f32 / 2.0;
    let mut queue = PointerDispatcher::new();

    queue.push(PointerEvent::down(x, y));
    match *step {
        Step::Tap { .. } => queue.push(PointerEvent::up(x, y)),
        Step::Swipe { dx, .. } | Step::Interrupted { dx, .. } => {
            for i in 1..=MOVE_STEPS {
                let t = i as f32 / MOVE_STEPS as f32;
                queue.push(PointerEvent::moved(x + dx * t, y));
            }
            if matches!(step, Step::Swipe { .. }) {
                queue.push(PointerEvent::up(x + dx, y));
            } else {
                queue.push(PointerEvent::cancel(x + dx, y));
            }
        }
    }

    let row = step.row();
    let mut pressed = None;
    queue.drain(|_, event| {
        let handled = list.dispatch(row, &event.at_time(now_millis));
        pressed.get_or_insert(handled);
    });
    pressed.unwrap_or(false)
}
