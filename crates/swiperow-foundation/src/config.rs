//! Tunables for swipe gesture handling.

use crate::gesture_constants::{
    HORIZONTAL_COMMIT_RATIO, LONG_PRESS_TIMEOUT_MILLIS, SETTLE_STEP, SETTLE_TICK_MILLIS,
    SWIPE_SLOP, TAP_SLOP, VERTICAL_COMMIT_RATIO,
};
use web_time::Duration;

/// What a row does with a touch-cancel that arrives after a direction lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CancelPolicy {
    /// Settle back to rest through the stepwise cancel animation, as if the
    /// pointer had been released below the commit threshold.
    #[default]
    SettleBack,
    /// Only clear the pressed visual and leave the locked gesture in place.
    /// The next touch-down abandons it.
    Ignore,
}

/// Gesture tuning shared by every row attached through one context.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    pub horizontal_slop: i32,
    pub vertical_slop: i32,
    pub horizontal_commit_ratio: f32,
    pub vertical_commit_ratio: f32,
    pub settle_step: i32,
    pub settle_tick: Duration,
    pub tap_slop: f32,
    pub long_press_timeout_millis: u64,
    pub cancel_policy: CancelPolicy,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            horizontal_slop: SWIPE_SLOP,
            vertical_slop: SWIPE_SLOP,
            horizontal_commit_ratio: HORIZONTAL_COMMIT_RATIO,
            vertical_commit_ratio: VERTICAL_COMMIT_RATIO,
            settle_step: SETTLE_STEP,
            settle_tick: Duration::from_millis(SETTLE_TICK_MILLIS),
            tap_slop: TAP_SLOP,
            long_press_timeout_millis: LONG_PRESS_TIMEOUT_MILLIS,
            cancel_policy: CancelPolicy::default(),
        }
    }
}

impl SwipeConfig {
    pub fn with_slop(mut self, slop: i32) -> Self {
        self.horizontal_slop = slop;
        self.vertical_slop = slop;
        self
    }

    pub fn with_settle_step(mut self, step: i32) -> Self {
        // A non-positive step would never reach a terminal offset.
        self.settle_step = step.max(1);
        self
    }

    pub fn with_settle_tick(mut self, tick: Duration) -> Self {
        self.settle_tick = tick;
        self
    }

    pub fn with_cancel_policy(mut self, policy: CancelPolicy) -> Self {
        self.cancel_policy = policy;
        self
    }

    /// Release distance a horizontal swipe must exceed to commit.
    pub fn horizontal_commit_threshold(&self, width: i32) -> i32 {
        (width as f32 * self.horizontal_commit_ratio) as i32
    }

    /// Release distance a vertical swipe must exceed to commit.
    pub fn vertical_commit_threshold(&self, height: i32) -> i32 {
        (height as f32 * self.vertical_commit_ratio) as i32
    }
}
