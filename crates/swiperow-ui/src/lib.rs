//! Swipeable list rows.
//!
//! A row exposes five panes: a foreground ("center") and four backgrounds.
//! Attaching a [`GestureSession`] to the row lets the user drag the
//! foreground left or right to reveal the background behind it. On release
//! the row settles in fixed steps, either back to rest or out to the full row
//! width, reporting every phase to an [`OnSwipeListener`]. All rows attached
//! through the same [`SwipeContext`] share one [`ExclusivityCoordinator`], so
//! at most one row of a list is ever open.

mod animator;
mod attach;
mod context;
mod coordinator;
mod error;
mod host;
mod listener;
mod panes;
mod session;

pub use animator::{SettlePath, SettleStep, SmoothAnimator};
pub use attach::{attach, detach, SwipeAttachment};
pub use context::SwipeContext;
pub use coordinator::ExclusivityCoordinator;
pub use error::SwipeError;
pub use host::{HostScrollable, Pane, PaneId, RevealStyle, RowView, TouchHandler};
pub use listener::{OnSingleTap, OnSwipeListener, SwipeEvent};
pub use panes::background_for;
pub use session::{classify_drag, GestureSession, SwipePhase, WeakGestureSession};

pub use swiperow_foundation::{
    CancelPolicy, DirectionMask, PointerEvent, PointerEventKind, SwipeConfig, SwipeDirection,
};

pub mod prelude {
    pub use crate::attach::{attach, detach, SwipeAttachment};
    pub use crate::context::SwipeContext;
    pub use crate::host::{HostScrollable, Pane, PaneId, RevealStyle, RowView, TouchHandler};
    pub use crate::listener::{OnSingleTap, OnSwipeListener, SwipeEvent};
    pub use crate::session::{GestureSession, SwipePhase};
    pub use swiperow_foundation::prelude::*;
}
