//! Contracts the host view system fulfils for a swipeable row.
//!
//! The row, its panes and the enclosing list are owned by the host. They are
//! shared handles, so every method takes `&self` and implementations use
//! interior mutability. They are called while the session is busy and must
//! not call back into it.

use std::rc::Rc;
use swiperow_foundation::PointerEvent;

/// The five named regions a swipeable row must expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneId {
    /// Foreground, shown at rest.
    Center,
    /// Revealed by a downward swipe.
    Top,
    /// Revealed by an upward swipe.
    Bottom,
    /// Revealed by a rightward swipe.
    Left,
    /// Revealed by a leftward swipe.
    Right,
}

impl PaneId {
    pub const ALL: [PaneId; 5] = [
        PaneId::Center,
        PaneId::Top,
        PaneId::Bottom,
        PaneId::Left,
        PaneId::Right,
    ];

    pub const BACKGROUNDS: [PaneId; 4] = [PaneId::Top, PaneId::Bottom, PaneId::Left, PaneId::Right];

    pub fn name(self) -> &'static str {
        match self {
            PaneId::Center => "center",
            PaneId::Top => "top",
            PaneId::Bottom => "bottom",
            PaneId::Left => "left",
            PaneId::Right => "right",
        }
    }
}

/// How a swipe reveals the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealStyle {
    /// Foreground and the revealed background move together, the background
    /// sliding in from beyond the row edge.
    #[default]
    PullOut,
    /// Backgrounds sit under the foreground and are only shown or hidden;
    /// the foreground moves alone.
    OpenPage,
}

/// One region of a row.
pub trait Pane {
    /// Places the pane's left edge `x` pixels from the row's left edge.
    fn set_offset(&self, x: i32);

    fn offset(&self) -> i32;

    fn set_visible(&self, visible: bool);

    /// Pressed visual feedback. Only the foreground receives it.
    fn set_pressed(&self, _pressed: bool) {}
}

/// Receives the pointer events delivered to a row.
pub trait TouchHandler {
    /// Returns whether the event was handled.
    fn on_touch(&self, event: &PointerEvent) -> bool;

    /// Called when the handler is removed from its row.
    fn on_detach(&self) {}
}

/// The row's root container.
pub trait RowView {
    fn find_pane(&self, pane: PaneId) -> Option<Rc<dyn Pane>>;

    /// Installs (or with `None`, clears) the row's touch handler.
    fn set_touch_handler(&self, handler: Option<Rc<dyn TouchHandler>>);

    /// Removes and returns the installed touch handler.
    fn take_touch_handler(&self) -> Option<Rc<dyn TouchHandler>>;
}

/// The vertically scrolling list that contains the rows.
pub trait HostScrollable {
    /// While `disallow` is true the list must not intercept the current
    /// pointer stream to scroll.
    fn request_disallow_intercept(&self, disallow: bool);

    /// Performs the list's item click for `row`. Returns false when the row
    /// is not currently part of the list.
    fn perform_item_click(&self, row: &Rc<dyn RowView>) -> bool;
}
