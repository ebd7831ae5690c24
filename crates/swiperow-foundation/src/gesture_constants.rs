//! Shared gesture constants for swipeable rows.
//!
//! All distances are in whole pixels. They are the defaults behind
//! [`SwipeConfig`](crate::SwipeConfig); hosts with unusual densities override
//! them there rather than here.

/// Travel, in pixels, a drag must exceed along an axis before a direction is
/// locked. Applies to both axes.
pub const SWIPE_SLOP: i32 = 20;

/// Fraction of the row width a horizontal release must exceed to commit.
pub const HORIZONTAL_COMMIT_RATIO: f32 = 2.0 / 3.0;

/// Fraction of the row height a vertical release must exceed to commit.
pub const VERTICAL_COMMIT_RATIO: f32 = 1.0 / 2.0;

/// Pixels the settle animation moves per tick.
pub const SETTLE_STEP: i32 = 50;

/// Delay between settle animation ticks, in milliseconds.
pub const SETTLE_TICK_MILLIS: u64 = 1;

/// Movement, in logical pixels, after which a press is no longer a tap.
///
/// Matches the scroll/click drag threshold so a drag that starts scrolling
/// the list can never also fire a tap.
pub const TAP_SLOP: f32 = 8.0;

/// A press held longer than this is a long press, not a tap.
pub const LONG_PRESS_TIMEOUT_MILLIS: u64 = 500;
