//! Pure geometry for swiperow
//!
//! Pointer coordinates arrive as floating point logical pixels, while row
//! extents and swipe distances are whole pixels.

mod axis;
mod geometry;

pub use axis::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::geometry::{IntSize, PixelDelta, Point};
}
