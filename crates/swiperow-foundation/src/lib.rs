//! Pointer input, gesture detection and configuration for swiperow.

mod config;
mod direction;
pub mod gesture_constants;
pub mod input;

pub use config::*;
pub use direction::*;
pub use input::gestures::{TapGesture, TapOutcome};
pub use input::{PointerDispatcher, PointerEvent, PointerEventKind, PointerId};
pub use swiperow_graphics::{Axis, IntSize, PixelDelta, Point};

pub mod prelude {
    pub use crate::config::{CancelPolicy, SwipeConfig};
    pub use crate::direction::{DirectionMask, SwipeDirection};
    pub use crate::input::prelude::*;
}
