//! Per-row gesture session.
//!
//! A session turns the raw pointer stream of one row into a swipe:
//!
//! ```text
//!   Idle --(move past slop in an accepted direction)--> Locked
//!   Locked --(up)--> Animating --(terminal tick)--> Idle
//! ```
//!
//! The locked direction never changes until the gesture has settled. While
//! animating, pointer events are acknowledged and dropped. Listener callbacks
//! are collected while the session state is borrowed and delivered after it
//! is released.

use crate::animator::{schedule_tick, SettlePath, SettleStep, SmoothAnimator};
use crate::listener::{deliver, EventBatch, OnSingleTap, OnSwipeListener, SwipeEvent};
use crate::panes::RowPanes;
use crate::{ExclusivityCoordinator, HostScrollable, RevealStyle, RowView, TouchHandler};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use swiperow_core::{LooperHandle, TaskRegistration};
use swiperow_foundation::{
    Axis, CancelPolicy, DirectionMask, IntSize, PixelDelta, Point, PointerEvent,
    PointerEventKind, SwipeConfig, SwipeDirection, TapGesture, TapOutcome,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwipePhase {
    /// No direction locked; accepting touch input.
    #[default]
    Idle,
    /// A direction is locked and the row follows the pointer.
    Locked,
    /// Released; the settle animation owns the row.
    Animating,
}

/// Decides which direction, if any, a drag of `delta` from the down point
/// locks onto, together with the signed distance along that direction's axis.
///
/// Horizontal wins over vertical, and Right/Down are tested before Left/Up.
pub fn classify_drag(
    delta: PixelDelta,
    accepted: DirectionMask,
    config: &SwipeConfig,
) -> Option<(SwipeDirection, i32)> {
    let PixelDelta { dx, dy } = delta;
    if i64::from(dx).abs() > i64::from(config.horizontal_slop) {
        if dx > 0 && accepted.contains(SwipeDirection::Right) {
            return Some((SwipeDirection::Right, dx));
        }
        if dx < 0 && accepted.contains(SwipeDirection::Left) {
            return Some((SwipeDirection::Left, dx));
        }
    }
    if i64::from(dy).abs() > i64::from(config.vertical_slop) {
        if dy > 0 && accepted.contains(SwipeDirection::Down) {
            return Some((SwipeDirection::Down, dy));
        }
        if dy < 0 && accepted.contains(SwipeDirection::Up) {
            return Some((SwipeDirection::Up, dy));
        }
    }
    None
}

struct Settle {
    path: SettlePath,
    pending: Option<TaskRegistration>,
}

struct SessionState {
    size: IntSize,
    commit_threshold_h: i32,
    commit_threshold_v: i32,
    direction: SwipeDirection,
    phase: SwipePhase,
    distance: i32,
    down_point: Point,
    move_point: Point,
    revealed: Option<SwipeDirection>,
    settle: Option<Settle>,
    tap: TapGesture,
    intercept_disallowed: bool,
    detached: bool,
}

impl SessionState {
    fn extent(&self, direction: SwipeDirection) -> i32 {
        match direction.axis() {
            Some(Axis::Horizontal) => self.size.width,
            Some(Axis::Vertical) => self.size.height,
            None => 0,
        }
    }

    fn commit_threshold(&self, direction: SwipeDirection) -> i32 {
        if direction.is_vertical() {
            self.commit_threshold_v
        } else {
            self.commit_threshold_h
        }
    }
}

struct SessionInner {
    state: RefCell<SessionState>,
    row: Weak<dyn RowView>,
    panes: RowPanes,
    scrollable: Rc<dyn HostScrollable>,
    accepted: DirectionMask,
    style: RevealStyle,
    listener: Rc<dyn OnSwipeListener>,
    tap_callback: Option<Rc<dyn OnSingleTap>>,
    looper: LooperHandle,
    coordinator: ExclusivityCoordinator,
    config: SwipeConfig,
    animator: SmoothAnimator,
}

impl SessionInner {
    fn apply_offset(&self, state: &SessionState, direction: SwipeDirection, distance: i32) {
        self.panes
            .apply_offset(direction, distance, state.size.width, self.style);
    }

    fn set_intercept_disallowed(&self, state: &mut SessionState, disallow: bool) {
        if state.intercept_disallowed != disallow {
            state.intercept_disallowed = disallow;
            self.scrollable.request_disallow_intercept(disallow);
        }
    }

    /// Ends the current gesture and reopens the row to touch input.
    fn return_to_idle(&self, state: &mut SessionState) {
        state.phase = SwipePhase::Idle;
        state.direction = SwipeDirection::Still;
        self.set_intercept_disallowed(state, false);
    }
}

/// Gesture state for one attached row. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct GestureSession {
    inner: Rc<SessionInner>,
}

/// Non-owning reference to a [`GestureSession`].
#[derive(Clone)]
pub struct WeakGestureSession {
    inner: Weak<SessionInner>,
}

impl WeakGestureSession {
    pub fn upgrade(&self) -> Option<GestureSession> {
        self.inner.upgrade().map(|inner| GestureSession { inner })
    }
}

pub(crate) struct SessionParts {
    pub row: Weak<dyn RowView>,
    pub panes: RowPanes,
    pub scrollable: Rc<dyn HostScrollable>,
    pub accepted: DirectionMask,
    pub style: RevealStyle,
    pub listener: Rc<dyn OnSwipeListener>,
    pub tap_callback: Option<Rc<dyn OnSingleTap>>,
    pub looper: LooperHandle,
    pub coordinator: ExclusivityCoordinator,
    pub config: SwipeConfig,
}

impl GestureSession {
    pub(crate) fn new(parts: SessionParts) -> Self {
        let SessionParts {
            row,
            panes,
            scrollable,
            accepted,
            style,
            listener,
            tap_callback,
            looper,
            coordinator,
            config,
        } = parts;

        if style == RevealStyle::OpenPage {
            log::debug!("open-page reveal only toggles visibility and moves the foreground");
        }
        panes.reset_to_rest();

        let state = SessionState {
            size: IntSize::ZERO,
            commit_threshold_h: 0,
            commit_threshold_v: 0,
            direction: SwipeDirection::Still,
            phase: SwipePhase::Idle,
            distance: 0,
            down_point: Point::ZERO,
            move_point: Point::ZERO,
            revealed: None,
            settle: None,
            tap: TapGesture::from_config(&config),
            intercept_disallowed: false,
            detached: false,
        };

        Self {
            inner: Rc::new(SessionInner {
                state: RefCell::new(state),
                row,
                panes,
                scrollable,
                accepted,
                style,
                listener,
                tap_callback,
                looper,
                coordinator,
                animator: SmoothAnimator::new(config.settle_step),
                config,
            }),
        }
    }

    pub fn downgrade(&self) -> WeakGestureSession {
        WeakGestureSession {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn ptr_eq(&self, other: &GestureSession) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Sets the laid-out row width and recomputes the horizontal threshold.
    pub fn set_width(&self, width: i32) {
        let mut state = self.inner.state.borrow_mut();
        state.size.width = width.max(0);
        state.commit_threshold_h = self
            .inner
            .config
            .horizontal_commit_threshold(state.size.width);
        log::trace!(
            "row width {} -> commit threshold {}",
            state.size.width,
            state.commit_threshold_h
        );
    }

    /// Sets the laid-out row height and recomputes the vertical threshold.
    pub fn set_height(&self, height: i32) {
        let mut state = self.inner.state.borrow_mut();
        state.size.height = height.max(0);
        state.commit_threshold_v = self
            .inner
            .config
            .vertical_commit_threshold(state.size.height);
    }

    pub fn size(&self) -> IntSize {
        self.inner.state.borrow().size
    }

    /// `(horizontal, vertical)` release distances a swipe must exceed to commit.
    pub fn commit_thresholds(&self) -> (i32, i32) {
        let state = self.inner.state.borrow();
        (state.commit_threshold_h, state.commit_threshold_v)
    }

    pub fn direction(&self) -> SwipeDirection {
        self.inner.state.borrow().direction
    }

    pub fn phase(&self) -> SwipePhase {
        self.inner.state.borrow().phase
    }

    pub fn distance(&self) -> i32 {
        self.inner.state.borrow().distance
    }

    /// Last pointer position seen by this session.
    pub fn last_point(&self) -> Point {
        self.inner.state.borrow().move_point
    }

    /// Direction of a committed reveal that is still showing.
    pub fn revealed(&self) -> Option<SwipeDirection> {
        self.inner.state.borrow().revealed
    }

    pub fn accepted_directions(&self) -> DirectionMask {
        self.inner.accepted
    }

    pub fn reveal_style(&self) -> RevealStyle {
        self.inner.style
    }

    /// Idle with nothing revealed.
    pub fn is_at_rest(&self) -> bool {
        let state = self.inner.state.borrow();
        state.phase == SwipePhase::Idle && state.revealed.is_none()
    }

    pub fn is_detached(&self) -> bool {
        self.inner.state.borrow().detached
    }

    /// True while a settle tick is queued on the looper.
    pub fn has_pending_tick(&self) -> bool {
        self.inner
            .state
            .borrow()
            .settle
            .as_ref()
            .and_then(|settle| settle.pending.as_ref())
            .is_some_and(TaskRegistration::is_pending)
    }

    /// Snaps the row back to rest immediately, skipping the settle animation
    /// and cancelling any queued tick.
    ///
    /// An interrupted gesture gets its `on_cancelled` terminal; a committed
    /// row that was already settled reports `on_restored` instead.
    pub fn restore(&self) {
        let mut events = EventBatch::new();
        {
            let inner = &*self.inner;
            let mut state = inner.state.borrow_mut();
            if state.detached {
                return;
            }
            let interrupted = state.phase != SwipePhase::Idle;
            let direction = match (state.direction, state.revealed) {
                (SwipeDirection::Still, Some(revealed)) => revealed,
                (SwipeDirection::Still, None) => return,
                (locked, _) => locked,
            };

            state.settle = None;
            state.distance = 0;
            inner.apply_offset(&state, direction, 0);
            inner.panes.hide_backgrounds();
            inner.panes.set_pressed(false);
            state.revealed = None;
            inner.return_to_idle(&mut state);

            log::debug!("restored {direction:?} row to rest (interrupted: {interrupted})");
            if interrupted {
                events.push(SwipeEvent::Cancelled(direction, 0));
            } else {
                events.push(SwipeEvent::Restored(direction));
            }
        }
        deliver(&*self.inner.listener, events);
    }

    /// Feeds one pointer event to the session. Returns whether it was handled.
    pub fn handle_touch(&self, event: &PointerEvent) -> bool {
        let tap = {
            let mut state = self.inner.state.borrow_mut();
            if state.detached {
                return false;
            }
            if state.phase == SwipePhase::Animating {
                log::trace!("{:?} ignored while settling", event.kind);
                return true;
            }
            state.tap.on_event(event)
        };

        log::trace!("touch {:?} at {:?}", event.kind, event.position);
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up(event, tap),
            PointerEventKind::Cancel => self.on_cancel(),
            PointerEventKind::Other(action) => {
                log::debug!("unhandled pointer action {action}");
                false
            }
        }
    }

    fn on_down(&self, event: &PointerEvent) -> bool {
        self.inner.coordinator.activate(self);

        if self.phase() == SwipePhase::Locked {
            // Only reachable when a touch-cancel was ignored mid-swipe.
            log::warn!("new touch-down while a swipe was still locked; abandoning it");
            self.restore();
        }

        {
            let mut state = self.inner.state.borrow_mut();
            state.down_point = event.position;
            state.move_point = event.position;
            state.direction = SwipeDirection::Still;
            self.inner.panes.set_pressed(true);
        }

        let mut events = EventBatch::new();
        events.push(SwipeEvent::Ready);
        deliver(&*self.inner.listener, events);
        true
    }

    fn on_move(&self, event: &PointerEvent) -> bool {
        let mut events = EventBatch::new();
        {
            let inner = &*self.inner;
            let mut state = inner.state.borrow_mut();
            state.move_point = event.position;
            let delta = event.position - state.down_point;

            if state.direction == SwipeDirection::Still {
                if let Some((direction, raw)) = classify_drag(delta, inner.accepted, &inner.config)
                {
                    let extent = state.extent(direction);
                    if extent == 0 {
                        log::warn!("{direction:?} swipe locked before the row size is known");
                    }
                    let distance = direction.clamp_distance(raw, extent);
                    state.direction = direction;
                    state.phase = SwipePhase::Locked;
                    state.distance = distance;
                    state.revealed = None;

                    inner.panes.show_background_for(direction);
                    inner.set_intercept_disallowed(&mut state, true);
                    inner.apply_offset(&state, direction, distance);
                    events.push(SwipeEvent::Start(direction, distance));
                    inner.panes.set_pressed(false);
                    log::debug!("locked {direction:?} at {distance}");
                }
            } else if state.phase == SwipePhase::Locked {
                let direction = state.direction;
                let raw = direction.axis().map_or(0, |axis| delta.along(axis));
                let distance = direction.clamp_distance(raw, state.extent(direction));
                state.distance = distance;
                inner.apply_offset(&state, direction, distance);
                events.push(SwipeEvent::Move(direction, distance));
            }
        }
        deliver(&*self.inner.listener, events);
        true
    }

    fn on_up(&self, event: &PointerEvent, tap: TapOutcome) -> bool {
        if tap == TapOutcome::SingleTapUp && self.direction() == SwipeDirection::Still {
            self.fire_single_tap();
        }

        let path = {
            let inner = &*self.inner;
            let mut state = inner.state.borrow_mut();
            inner.panes.set_pressed(false);
            state.move_point = event.position;
            if state.phase != SwipePhase::Locked {
                return true;
            }

            let direction = state.direction;
            let raw = direction
                .axis()
                .map_or(0, |axis| (event.position - state.down_point).along(axis));
            let distance = direction.clamp_distance(raw, state.extent(direction));
            state.distance = distance;
            inner.apply_offset(&state, direction, distance);

            if distance.abs() > state.commit_threshold(direction) {
                SettlePath::Commit
            } else {
                SettlePath::Cancel
            }
        };
        self.start_settle(path);
        true
    }

    fn on_cancel(&self) -> bool {
        self.inner.panes.set_pressed(false);
        if self.phase() != SwipePhase::Locked {
            return true;
        }
        match self.inner.config.cancel_policy {
            CancelPolicy::SettleBack => {
                log::debug!("touch-cancel during a locked swipe; settling back");
                self.start_settle(SettlePath::Cancel);
            }
            CancelPolicy::Ignore => {
                log::debug!("touch-cancel during a locked swipe ignored");
            }
        }
        true
    }

    fn fire_single_tap(&self) {
        if let Some(hook) = &self.inner.tap_callback {
            hook.on_single_tap_up();
            return;
        }
        match self.inner.row.upgrade() {
            Some(row) => {
                let clicked = self.inner.scrollable.perform_item_click(&row);
                log::trace!("tap forwarded as item click (handled: {clicked})");
            }
            None => log::debug!("tap on a row that no longer exists"),
        }
    }

    fn start_settle(&self, path: SettlePath) {
        let inner = &*self.inner;
        let mut state = inner.state.borrow_mut();
        let direction = state.direction;

        if !direction.is_horizontal() {
            log::debug!("{direction:?} swipe released; vertical swipes do not settle");
            inner.panes.hide_backgrounds();
            inner.return_to_idle(&mut state);
            return;
        }
        if state.size.width == 0 {
            log::warn!("settling a {direction:?} swipe on a row with zero width");
        }

        log::debug!("settling {direction:?} via {path:?} from {}", state.distance);
        state.phase = SwipePhase::Animating;
        let registration = schedule_tick(&inner.looper, inner.config.settle_tick, self.downgrade());
        state.settle = Some(Settle {
            path,
            pending: Some(registration),
        });
    }

    /// Runs one settle tick. Called from the looper.
    pub(crate) fn advance_settle(&self) {
        let mut events = EventBatch::new();
        {
            let inner = &*self.inner;
            let mut state = inner.state.borrow_mut();
            if state.phase != SwipePhase::Animating {
                return;
            }
            let Some(path) = state.settle.as_ref().map(|settle| settle.path) else {
                return;
            };
            let direction = state.direction;
            let width = state.size.width;

            match inner.animator.step(path, direction, state.distance, width) {
                SettleStep::Continue(next) => {
                    state.distance = next;
                    inner.apply_offset(&state, direction, next);
                    events.push(match path {
                        SettlePath::Cancel => SwipeEvent::GoCancelling(direction, next),
                        SettlePath::Commit => SwipeEvent::GoSwiping(direction, next),
                    });
                    let registration =
                        schedule_tick(&inner.looper, inner.config.settle_tick, self.downgrade());
                    if let Some(settle) = state.settle.as_mut() {
                        settle.pending = Some(registration);
                    }
                }
                SettleStep::Finish(terminal) => {
                    state.distance = terminal;
                    inner.apply_offset(&state, direction, terminal);
                    state.settle = None;
                    match path {
                        SettlePath::Cancel => {
                            inner.panes.hide_backgrounds();
                            state.revealed = None;
                            events.push(SwipeEvent::Cancelled(direction, terminal));
                        }
                        SettlePath::Commit => {
                            state.revealed = Some(direction);
                            events.push(SwipeEvent::Swiped(direction, terminal));
                        }
                    }
                    inner.return_to_idle(&mut state);
                    log::debug!("{direction:?} swipe settled at {terminal}");
                }
                SettleStep::Inert => {
                    state.settle = None;
                    inner.return_to_idle(&mut state);
                }
            }
        }
        deliver(&*self.inner.listener, events);
    }

    /// Tears the session down: cancels any queued tick, hands scrolling back
    /// to the list and forgets the session in the coordinator.
    pub(crate) fn detach(&self) {
        {
            let inner = &*self.inner;
            let mut state = inner.state.borrow_mut();
            if state.detached {
                return;
            }
            state.detached = true;
            state.settle = None;
            state.tap.reset();
            inner.return_to_idle(&mut state);
        }
        self.inner.coordinator.release(self);
        log::debug!("gesture session detached");
    }
}

impl TouchHandler for GestureSession {
    fn on_touch(&self, event: &PointerEvent) -> bool {
        self.handle_touch(event)
    }

    fn on_detach(&self) {
        self.detach();
    }
}

impl std::fmt::Debug for GestureSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("GestureSession")
            .field("phase", &state.phase)
            .field("direction", &state.direction)
            .field("distance", &state.distance)
            .field("revealed", &state.revealed)
            .field("size", &state.size)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
