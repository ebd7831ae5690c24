//! Serial event loop and platform services for swiperow.
//!
//! Everything in swiperow runs on one cooperative queue: pointer events are
//! delivered by the host, and animation ticks are deferred tasks posted to a
//! [`Looper`]. Nothing blocks and nothing runs in parallel.

pub mod collections;
mod looper;
mod platform;

pub use looper::*;
pub use platform::*;

pub mod prelude {
    pub use crate::looper::{Looper, LooperHandle, TaskRegistration};
    pub use crate::platform::{Clock, SystemClock};
}
