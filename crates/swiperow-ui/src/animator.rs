//! Stepwise settle animation for a released row.
//!
//! After release the row settles either back to rest (cancel) or out to the
//! full row width (commit). Each tick is one call to [`SmoothAnimator::step`];
//! the session applies the result and, unless it was terminal, posts the next
//! tick to the looper. There is never more than one tick outstanding per
//! session.

use crate::session::WeakGestureSession;
use swiperow_core::{LooperHandle, TaskRegistration};
use swiperow_foundation::SwipeDirection;
use web_time::Duration;

/// Where a released row is heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettlePath {
    /// Back to distance 0.
    Cancel,
    /// Out to the full row width.
    Commit,
}

/// Outcome of one animation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleStep {
    /// Not there yet; the row is now at this distance.
    Continue(i32),
    /// Landed exactly on the terminal distance.
    Finish(i32),
    /// Vertical swipes have no settle animation.
    Inert,
}

/// Fixed-step settle animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmoothAnimator {
    step: i32,
}

impl SmoothAnimator {
    pub fn new(step: i32) -> Self {
        Self { step: step.max(1) }
    }

    pub fn step_size(&self) -> i32 {
        self.step
    }

    /// Advances `distance` one step along `path`.
    ///
    /// `extent` is the row width; a commit ends at `-extent` for Left and
    /// `+extent` for Right. A step that reaches or crosses the terminal value
    /// lands on it exactly.
    pub fn step(
        &self,
        path: SettlePath,
        direction: SwipeDirection,
        distance: i32,
        extent: i32,
    ) -> SettleStep {
        let extent = extent.max(0);
        match (path, direction) {
            (SettlePath::Cancel, SwipeDirection::Left) => {
                let next = distance.saturating_add(self.step);
                if next >= 0 {
                    SettleStep::Finish(0)
                } else {
                    SettleStep::Continue(next)
                }
            }
            (SettlePath::Cancel, SwipeDirection::Right) => {
                let next = distance.saturating_sub(self.step);
                if next <= 0 {
                    SettleStep::Finish(0)
                } else {
                    SettleStep::Continue(next)
                }
            }
            (SettlePath::Commit, SwipeDirection::Left) => {
                let next = distance.saturating_sub(self.step);
                if next <= -extent {
                    SettleStep::Finish(-extent)
                } else {
                    SettleStep::Continue(next)
                }
            }
            (SettlePath::Commit, SwipeDirection::Right) => {
                let next = distance.saturating_add(self.step);
                if next >= extent {
                    SettleStep::Finish(extent)
                } else {
                    SettleStep::Continue(next)
                }
            }
            (_, SwipeDirection::Up | SwipeDirection::Down | SwipeDirection::Still) => {
                SettleStep::Inert
            }
        }
    }
}

/// Posts the next tick for `session`. The tick holds only a weak reference,
/// so a session dropped mid-animation simply never advances.
pub(crate) fn schedule_tick(
    looper: &LooperHandle,
    delay: Duration,
    session: WeakGestureSession,
) -> TaskRegistration {
    looper.post_delayed(delay, move || {
        if let Some(session) = session.upgrade() {
            session.advance_settle();
        }
    })
}
