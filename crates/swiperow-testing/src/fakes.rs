//! In-memory stand-ins for the host view system.
//!
//! The fakes record everything the gesture layer does to them so tests can
//! assert on pane offsets, visibility, intercept requests and item clicks
//! without a real widget tree.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swiperow_core::collections::map::HashMap;
use swiperow_foundation::{PointerEvent, SwipeDirection};
use swiperow_ui::{
    HostScrollable, OnSwipeListener, Pane, PaneId, RowView, SwipeEvent, TouchHandler,
};

#[derive(Debug)]
pub struct FakePane {
    id: PaneId,
    offset: Cell<i32>,
    // Host panes start out visible until the session hides them.
    visible: Cell<bool>,
    pressed: Cell<bool>,
}

impl FakePane {
    pub fn new(id: PaneId) -> Self {
        Self {
            id,
            offset: Cell::new(0),
            visible: Cell::new(true),
            pressed: Cell::new(false),
        }
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.get()
    }
}

impl Pane for FakePane {
    fn set_offset(&self, x: i32) {
        self.offset.set(x);
    }

    fn offset(&self) -> i32 {
        self.offset.get()
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    fn set_pressed(&self, pressed: bool) {
        self.pressed.set(pressed);
    }
}

/// A row with a registry of named panes and a touch-handler slot.
#[derive(Default)]
pub struct FakeRow {
    panes: HashMap<PaneId, Rc<FakePane>>,
    handler: RefCell<Option<Rc<dyn TouchHandler>>>,
}

impl FakeRow {
    /// A row exposing all five panes.
    pub fn new() -> Self {
        Self::with_panes(&PaneId::ALL)
    }

    pub fn with_panes(ids: &[PaneId]) -> Self {
        Self {
            panes: ids
                .iter()
                .map(|id| (*id, Rc::new(FakePane::new(*id))))
                .collect(),
            handler: RefCell::new(None),
        }
    }

    /// A full row missing `pane`.
    pub fn without(pane: PaneId) -> Self {
        let ids: Vec<PaneId> = PaneId::ALL.into_iter().filter(|id| *id != pane).collect();
        Self::with_panes(&ids)
    }

    /// # Panics
    ///
    /// If the row was built without `id`.
    pub fn pane(&self, id: PaneId) -> Rc<FakePane> {
        match self.panes.get(&id) {
            Some(pane) => Rc::clone(pane),
            None => panic!("row has no {} pane", id.name()),
        }
    }

    pub fn center_offset(&self) -> i32 {
        self.pane(PaneId::Center).offset()
    }

    /// Background panes currently visible.
    pub fn visible_backgrounds(&self) -> Vec<PaneId> {
        PaneId::BACKGROUNDS
            .into_iter()
            .filter(|id| self.panes.get(id).is_some_and(|pane| pane.is_visible()))
            .collect()
    }

    pub fn has_touch_handler(&self) -> bool {
        self.handler.borrow().is_some()
    }

    /// Delivers `event` to the installed handler the way a host would.
    /// Returns false when nothing is installed.
    pub fn dispatch(&self, event: &PointerEvent) -> bool {
        let handler = self.handler.borrow().clone();
        match handler {
            Some(handler) => handler.on_touch(event),
            None => false,
        }
    }
}

impl RowView for FakeRow {
    fn find_pane(&self, pane: PaneId) -> Option<Rc<dyn Pane>> {
        self.panes
            .get(&pane)
            .map(|pane| Rc::clone(pane) as Rc<dyn Pane>)
    }

    fn set_touch_handler(&self, handler: Option<Rc<dyn TouchHandler>>) {
        *self.handler.borrow_mut() = handler;
    }

    fn take_touch_handler(&self) -> Option<Rc<dyn TouchHandler>> {
        self.handler.borrow_mut().take()
    }
}

/// The enclosing list. Records intercept requests and item clicks.
#[derive(Default)]
pub struct FakeScrollable {
    disallowed: Cell<bool>,
    intercept_requests: RefCell<Vec<bool>>,
    clicks: Cell<usize>,
}

impl FakeScrollable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intercept_disallowed(&self) -> bool {
        self.disallowed.get()
    }

    pub fn intercept_requests(&self) -> Vec<bool> {
        self.intercept_requests.borrow().clone()
    }

    pub fn click_count(&self) -> usize {
        self.clicks.get()
    }
}

impl HostScrollable for FakeScrollable {
    fn request_disallow_intercept(&self, disallow: bool) {
        self.disallowed.set(disallow);
        self.intercept_requests.borrow_mut().push(disallow);
    }

    fn perform_item_click(&self, _row: &Rc<dyn RowView>) -> bool {
        self.clicks.set(self.clicks.get() + 1);
        true
    }
}

/// Listener that records every notification as a [`SwipeEvent`].
#[derive(Default)]
pub struct RecordingListener {
    events: RefCell<Vec<SwipeEvent>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SwipeEvent> {
        self.events.borrow().clone()
    }

    /// Returns the recorded events and starts a fresh recording.
    pub fn take(&self) -> Vec<SwipeEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Recorded events without the `Ready` notifications.
    pub fn gesture_events(&self) -> Vec<SwipeEvent> {
        self.events
            .borrow()
            .iter()
            .copied()
            .filter(|event| *event != SwipeEvent::Ready)
            .collect()
    }

    pub fn last(&self) -> Option<SwipeEvent> {
        self.events.borrow().last().copied()
    }

    fn push(&self, event: SwipeEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl OnSwipeListener for RecordingListener {
    fn on_ready(&self) {
        self.push(SwipeEvent::Ready);
    }

    fn on_start(&self, direction: SwipeDirection, distance: i32) {
        self.push(SwipeEvent::Start(direction, distance));
    }

    fn on_move(&self, direction: SwipeDirection, distance: i32) {
        self.push(SwipeEvent::Move(direction, distance));
    }

    fn on_go_cancelling(&self, direction: SwipeDirection, distance: i32) {
        self.push(SwipeEvent::GoCancelling(direction, distance));
    }

    fn on_cancelled(&self, direction: SwipeDirection, distance: i32) {
        self.push(SwipeEvent::Cancelled(direction, distance));
    }

    fn on_go_swiping(&self, direction: SwipeDirection, distance: i32) {
        self.push(SwipeEvent::GoSwiping(direction, distance));
    }

    fn on_swiped(&self, direction: SwipeDirection, distance: i32) {
        self.push(SwipeEvent::Swiped(direction, distance));
    }

    fn on_restored(&self, direction: SwipeDirection) {
        self.push(SwipeEvent::Restored(direction));
    }
}
