//! Installing and removing swipe behavior on a row.

use crate::panes::RowPanes;
use crate::session::{GestureSession, SessionParts};
use crate::{
    HostScrollable, OnSingleTap, OnSwipeListener, RevealStyle, RowView, SwipeContext, SwipeError,
    TouchHandler,
};
use std::rc::Rc;
use swiperow_foundation::DirectionMask;

/// Builder for attaching swipe behavior to one row.
///
/// ```ignore
/// let session = SwipeAttachment::new()
///     .context(&context)
///     .scrollable(list)
///     .row(row)
///     .directions(DirectionMask::LEFT)
///     .listener(listener)
///     .attach()?;
/// session.set_width(320);
/// ```
#[derive(Default)]
pub struct SwipeAttachment {
    context: Option<SwipeContext>,
    scrollable: Option<Rc<dyn HostScrollable>>,
    row: Option<Rc<dyn RowView>>,
    accepted: DirectionMask,
    style: RevealStyle,
    listener: Option<Rc<dyn OnSwipeListener>>,
    tap: Option<Rc<dyn OnSingleTap>>,
}

impl SwipeAttachment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(mut self, context: &SwipeContext) -> Self {
        self.context = Some(context.clone());
        self
    }

    pub fn scrollable(mut self, scrollable: Rc<dyn HostScrollable>) -> Self {
        self.scrollable = Some(scrollable);
        self
    }

    pub fn row(mut self, row: Rc<dyn RowView>) -> Self {
        self.row = Some(row);
        self
    }

    /// Directions the row may be swiped in. Defaults to none, which leaves
    /// the row tappable but never swipeable.
    pub fn directions(mut self, accepted: DirectionMask) -> Self {
        self.accepted = accepted;
        self
    }

    pub fn style(mut self, style: RevealStyle) -> Self {
        self.style = style;
        self
    }

    pub fn listener(mut self, listener: Rc<dyn OnSwipeListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Replaces the list's item click for single taps on this row.
    pub fn on_single_tap(mut self, hook: Rc<dyn OnSingleTap>) -> Self {
        self.tap = Some(hook);
        self
    }

    /// Validates the configuration, hides every background pane and installs
    /// a fresh session as the row's touch handler.
    ///
    /// A handler already installed on the row is detached first.
    pub fn attach(self) -> Result<GestureSession, SwipeError> {
        let context = self.context.ok_or(SwipeError::NullArgument { what: "context" })?;
        let scrollable = self
            .scrollable
            .ok_or(SwipeError::NullArgument { what: "scrollable" })?;
        let row = self.row.ok_or(SwipeError::NullArgument { what: "row" })?;
        let listener = self
            .listener
            .ok_or(SwipeError::NullArgument { what: "listener" })?;
        let panes = RowPanes::resolve(&*row)?;

        if let Some(previous) = row.take_touch_handler() {
            log::debug!("row already had a touch handler; detaching it");
            previous.on_detach();
        }

        let session = GestureSession::new(SessionParts {
            row: Rc::downgrade(&row),
            panes,
            scrollable,
            accepted: self.accepted,
            style: self.style,
            listener,
            tap_callback: self.tap,
            looper: context.looper().clone(),
            coordinator: context.coordinator().clone(),
            config: context.config().clone(),
        });
        let handler: Rc<dyn TouchHandler> = Rc::new(session.clone());
        row.set_touch_handler(Some(handler));
        log::debug!(
            "attached swipe session (directions {:#06b}, {:?})",
            self.accepted.bits(),
            self.style
        );
        Ok(session)
    }
}

/// Attaches swipe behavior to `row` without a tap hook.
pub fn attach(
    context: &SwipeContext,
    scrollable: Rc<dyn HostScrollable>,
    row: Rc<dyn RowView>,
    accepted: DirectionMask,
    style: RevealStyle,
    listener: Rc<dyn OnSwipeListener>,
) -> Result<GestureSession, SwipeError> {
    SwipeAttachment::new()
        .context(context)
        .scrollable(scrollable)
        .row(row)
        .directions(accepted)
        .style(style)
        .listener(listener)
        .attach()
}

/// Removes the row's touch handler and tears its session down. Safe to call
/// on a row that has nothing attached.
pub fn detach(row: &dyn RowView) {
    if let Some(handler) = row.take_touch_handler() {
        handler.on_detach();
    }
}
