//! Headless contact list: rows built from [`Contact`]s, each swipeable to the
//! left to pull out a "Delete" action.

use crate::contacts::Contact;
use std::cell::{Cell, RefCell};
use std::fmt::Write as _;
use std::rc::{Rc, Weak};
use swiperow_core::collections::map::HashMap;
use swiperow_ui::{
    detach, DirectionMask, GestureSession, HostScrollable, OnSwipeListener, Pane, PaneId,
    PointerEvent, RevealStyle, RowView, SwipeAttachment, SwipeContext, SwipeDirection, SwipeError,
    TouchHandler,
};

pub const ROW_WIDTH: i32 = 360;
pub const ROW_HEIGHT: i32 = 64;

struct LabelPane {
    label: String,
    offset: Cell<i32>,
    visible: Cell<bool>,
    pressed: Cell<bool>,
}

impl LabelPane {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            offset: Cell::new(0),
            visible: Cell::new(true),
            pressed: Cell::new(false),
        }
    }
}

impl Pane for LabelPane {
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

pub struct ContactRow {
    contact: Contact,
    panes: HashMap<PaneId, Rc<LabelPane>>,
    handler: RefCell<Option<Rc<dyn TouchHandler>>>,
}

impl ContactRow {
    fn new(contact: Contact) -> Self {
        let mut panes = HashMap::default();
        panes.insert(
            PaneId::Center,
            Rc::new(LabelPane::new(contact.display_name.clone())),
        );
        panes.insert(PaneId::Right, Rc::new(LabelPane::new("Delete")));
        panes.insert(PaneId::Left, Rc::new(LabelPane::new("Call")));
        panes.insert(PaneId::Top, Rc::new(LabelPane::new("")));
        panes.insert(PaneId::Bottom, Rc::new(LabelPane::new("")));
        Self {
            contact,
            panes,
            handler: RefCell::new(None),
        }
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn foreground_offset(&self) -> i32 {
        self.panes.get(&PaneId::Center).map_or(0, |pane| pane.offset())
    }

    fn visible_action(&self) -> Option<&str> {
        [PaneId::Left, PaneId::Right]
            .into_iter()
            .filter_map(|id| self.panes.get(&id))
            .find(|pane| pane.visible.get())
            .map(|pane| pane.label.as_str())
    }

    fn is_pressed(&self) -> bool {
        self.panes
            .get(&PaneId::Center)
            .is_some_and(|pane| pane.pressed.get())
    }

    /// Delivers a pointer event the way the host's touch dispatch would.
    pub fn dispatch(&self, event: &PointerEvent) -> bool {
        let handler = self.handler.borrow().clone();
        handler.is_some_and(|handler| handler.on_touch(event))
    }
}

impl RowView for ContactRow {
    fn find_pane(&self, pane: PaneId) -> Option<Rc<dyn Pane>> {
        self.panes.get(&pane).map(|pane| Rc::clone(pane) as Rc<dyn Pane>)
    }

    fn set_touch_handler(&self, handler: Option<Rc<dyn TouchHandler>>) {
        *self.handler.borrow_mut() = handler;
    }

    fn take_touch_handler(&self) -> Option<Rc<dyn TouchHandler>> {
        self.handler.borrow_mut().take()
    }
}

/// The scrolling container side of the list. Holds rows weakly; the rows'
/// sessions hold the host.
#[derive(Default)]
struct ListHost {
    intercept_disallowed: Cell<bool>,
    rows: RefCell<Vec<Weak<ContactRow>>>,
    clicked: RefCell<Vec<u64>>,
}

impl HostScrollable for ListHost {
    fn request_disallow_intercept(&self, disallow: bool) {
        log::trace!("list intercept disallowed: {disallow}");
        self.intercept_disallowed.set(disallow);
    }

    fn perform_item_click(&self, row: &Rc<dyn RowView>) -> bool {
        let target = Rc::as_ptr(row).cast::<()>();
        let clicked = self
            .rows
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .find(|candidate| Rc::as_ptr(candidate).cast::<()>() == target);
        match clicked {
            Some(row) => {
                log::info!("clicked {}", row.contact.display_name);
                self.clicked.borrow_mut().push(row.contact.id);
                true
            }
            None => false,
        }
    }
}

struct ContactListener {
    name: String,
}

impl OnSwipeListener for ContactListener {
    fn on_start(&self, direction: SwipeDirection, distance: i32) {
        log::debug!("{}: start {direction:?} at {distance}", self.name);
    }

    fn on_move(&self, direction: SwipeDirection, distance: i32) {
        log::trace!("{}: move {direction:?} to {distance}", self.name);
    }

    fn on_go_cancelling(&self, _direction: SwipeDirection, distance: i32) {
        log::trace!("{}: cancelling, at {distance}", self.name);
    }

    fn on_cancelled(&self, _direction: SwipeDirection, _distance: i32) {
        log::info!("{}: back to rest", self.name);
    }

    fn on_go_swiping(&self, _direction: SwipeDirection, distance: i32) {
        log::trace!("{}: swiping, at {distance}", self.name);
    }

    fn on_swiped(&self, _direction: SwipeDirection, _distance: i32) {
        log::info!("{}: actions revealed", self.name);
    }

    fn on_restored(&self, _direction: SwipeDirection) {
        log::info!("{}: closed by another row", self.name);
    }
}

pub struct ContactList {
    host: Rc<ListHost>,
    rows: Vec<Rc<ContactRow>>,
    sessions: HashMap<u64, GestureSession>,
}

impl ContactList {
    /// Builds one row per contact and attaches a left, pull-out swipe to
    /// each. Row sizes are applied right after attach, standing in for the
    /// first layout pass.
    pub fn bind(context: &SwipeContext, contacts: Vec<Contact>) -> Result<Self, SwipeError> {
        let host = Rc::new(ListHost::default());
        let mut rows = Vec::with_capacity(contacts.len());
        let mut sessions = HashMap::default();

        for contact in contacts {
            let row = Rc::new(ContactRow::new(contact));
            let listener = Rc::new(ContactListener {
                name: row.contact.display_name.clone(),
            });
            let session = SwipeAttachment::new()
                .context(context)
                .scrollable(Rc::clone(&host) as Rc<dyn HostScrollable>)
                .row(Rc::clone(&row) as Rc<dyn RowView>)
                .directions(DirectionMask::LEFT)
                .style(RevealStyle::PullOut)
                .listener(listener)
                .attach()?;
            session.set_width(ROW_WIDTH);
            session.set_height(ROW_HEIGHT);

            host.rows.borrow_mut().push(Rc::downgrade(&row));
            sessions.insert(row.contact.id, session);
            rows.push(row);
        }

        log::info!("bound {} contact rows", rows.len());
        Ok(Self {
            host,
            rows,
            sessions,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&Rc<ContactRow>> {
        self.rows.get(index)
    }

    pub fn session(&self, contact_id: u64) -> Option<&GestureSession> {
        self.sessions.get(&contact_id)
    }

    /// Sends `event` to the row at `index`; false if there is no such row or
    /// it did not handle the event.
    pub fn dispatch(&self, index: usize, event: &PointerEvent) -> bool {
        self.rows
            .get(index)
            .is_some_and(|row| row.dispatch(event))
    }

    pub fn intercept_disallowed(&self) -> bool {
        self.host.intercept_disallowed.get()
    }

    /// Contact ids clicked so far, in order.
    pub fn clicked(&self) -> Vec<u64> {
        self.host.clicked.borrow().clone()
    }

    /// Contacts whose row currently shows its actions.
    pub fn open_rows(&self) -> Vec<u64> {
        self.rows
            .iter()
            .map(|row| row.contact.id)
            .filter(|id| {
                self.sessions
                    .get(id)
                    .is_some_and(|session| session.revealed().is_some())
            })
            .collect()
    }

    /// One text line per row: name, foreground offset and visible action.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{} {:<18} {:>5}  {}",
                if row.is_pressed() { '*' } else { ' ' },
                row.contact.display_name,
                row.foreground_offset(),
                row.visible_action().unwrap_or("")
            );
        }
        out
    }

    /// Detaches every row.
    pub fn unbind(&mut self) {
        for row in &self.rows {
            detach(&**row);
        }
        self.sessions.clear();
        log::info!("unbound contact rows");
    }
}

impl Drop for ContactList {
    fn drop(&mut self) {
        if !self.sessions.is_empty() {
            self.unbind();
        }
    }
}
