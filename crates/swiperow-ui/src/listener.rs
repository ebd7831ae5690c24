//! Listener protocol for swipe gesture phases.
//!
//! Per locked gesture a listener sees `on_start` once, any number of
//! `on_move`, then either `on_go_cancelling`* followed by one `on_cancelled`,
//! or `on_go_swiping`* followed by one `on_swiped`. Listeners are called after
//! the session has released its internal state, so they may query it.

use smallvec::SmallVec;
use swiperow_foundation::SwipeDirection;

pub trait OnSwipeListener {
    /// Touch-down on the row, before any direction is known.
    fn on_ready(&self) {}

    fn on_start(&self, direction: SwipeDirection, distance: i32);

    fn on_move(&self, direction: SwipeDirection, distance: i32);

    fn on_go_cancelling(&self, direction: SwipeDirection, distance: i32);

    fn on_cancelled(&self, direction: SwipeDirection, distance: i32);

    fn on_go_swiping(&self, direction: SwipeDirection, distance: i32);

    fn on_swiped(&self, direction: SwipeDirection, distance: i32);

    /// A committed row was closed without animation because another row of
    /// the same list was touched.
    fn on_restored(&self, _direction: SwipeDirection) {}
}

/// Optional single-tap interception hook.
pub trait OnSingleTap {
    fn on_single_tap_up(&self);
}

impl<F: Fn()> OnSingleTap for F {
    fn on_single_tap_up(&self) {
        self()
    }
}

/// A listener notification captured while the session is borrowed and
/// delivered once it is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeEvent {
    Ready,
    Start(SwipeDirection, i32),
    Move(SwipeDirection, i32),
    GoCancelling(SwipeDirection, i32),
    Cancelled(SwipeDirection, i32),
    GoSwiping(SwipeDirection, i32),
    Swiped(SwipeDirection, i32),
    Restored(SwipeDirection),
}

impl SwipeEvent {
    pub fn dispatch(self, listener: &dyn OnSwipeListener) {
        match self {
            SwipeEvent::Ready => listener.on_ready(),
            SwipeEvent::Start(direction, distance) => listener.on_start(direction, distance),
            SwipeEvent::Move(direction, distance) => listener.on_move(direction, distance),
            SwipeEvent::GoCancelling(direction, distance) => {
                listener.on_go_cancelling(direction, distance)
            }
            SwipeEvent::Cancelled(direction, distance) => {
                listener.on_cancelled(direction, distance)
            }
            SwipeEvent::GoSwiping(direction, distance) => {
                listener.on_go_swiping(direction, distance)
            }
            SwipeEvent::Swiped(direction, distance) => listener.on_swiped(direction, distance),
            SwipeEvent::Restored(direction) => listener.on_restored(direction),
        }
    }

    /// True for the two events that end a locked gesture.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SwipeEvent::Cancelled(..) | SwipeEvent::Swiped(..))
    }

    pub fn direction(&self) -> Option<SwipeDirection> {
        match *self {
            SwipeEvent::Ready => None,
            SwipeEvent::Start(direction, _)
            | SwipeEvent::Move(direction, _)
            | SwipeEvent::GoCancelling(direction, _)
            | SwipeEvent::Cancelled(direction, _)
            | SwipeEvent::GoSwiping(direction, _)
            | SwipeEvent::Swiped(direction, _)
            | SwipeEvent::Restored(direction) => Some(direction),
        }
    }

    pub fn distance(&self) -> Option<i32> {
        match *self {
            SwipeEvent::Ready | SwipeEvent::Restored(_) => None,
            SwipeEvent::Start(_, distance)
            | SwipeEvent::Move(_, distance)
            | SwipeEvent::GoCancelling(_, distance)
            | SwipeEvent::Cancelled(_, distance)
            | SwipeEvent::GoSwiping(_, distance)
            | SwipeEvent::Swiped(_, distance) => Some(distance),
        }
    }
}

pub(crate) type EventBatch = SmallVec<[SwipeEvent; 2]>;

pub(crate) fn deliver(listener: &dyn OnSwipeListener, events: EventBatch) {
    for event in events {
        log::trace!("listener <- {event:?}");
        event.dispatch(listener);
    }
}
