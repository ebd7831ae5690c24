//! Robot-style harness for driving swipeable rows.
//!
//! A [`SwipeRobot`] owns a looper, one list and any number of rows attached
//! through a shared context. Tests script pointer input against a row and
//! advance virtual time to run the settle animation.
//!
//! # Example
//!
//! ```
//! use swiperow_testing::SwipeRobot;
//! use swiperow_ui::{DirectionMask, RevealStyle};
//!
//! let mut robot = SwipeRobot::new();
//! let row = robot.add_row(DirectionMask::LEFT, RevealStyle::PullOut);
//! robot.swipe(row, -250.0);
//! robot.run_until_idle();
//! assert_eq!(robot.row(row).row.center_offset(), -300);
//! ```

use crate::fakes::{FakeRow, FakeScrollable, RecordingListener};
use std::rc::Rc;
use swiperow_core::Looper;
use swiperow_foundation::{DirectionMask, PointerEvent, PointerEventKind, SwipeConfig};
use swiperow_graphics::Point;
use swiperow_ui::{
    GestureSession, HostScrollable, OnSingleTap, OnSwipeListener, RevealStyle, RowView,
    SwipeAttachment, SwipeContext,
};
use web_time::Duration;

/// Default laid-out row width.
pub const ROW_WIDTH: i32 = 300;
/// Default laid-out row height.
pub const ROW_HEIGHT: i32 = 72;

/// Where scripted gestures start, in row-local coordinates.
pub const TOUCH_ORIGIN: Point = Point::new(150.0, 36.0);

/// One row under test.
pub struct RobotRow {
    pub row: Rc<FakeRow>,
    pub listener: Rc<RecordingListener>,
    pub session: GestureSession,
}

pub struct SwipeRobot {
    looper: Looper,
    context: SwipeContext,
    list: Rc<FakeScrollable>,
    rows: Vec<RobotRow>,
}

impl SwipeRobot {
    pub fn new() -> Self {
        Self::with_config(SwipeConfig::default())
    }

    pub fn with_config(config: SwipeConfig) -> Self {
        let looper = Looper::new();
        let context = SwipeContext::with_config(looper.handle(), config);
        Self {
            looper,
            context,
            list: Rc::new(FakeScrollable::new()),
            rows: Vec::new(),
        }
    }

    pub fn context(&self) -> &SwipeContext {
        &self.context
    }

    pub fn looper(&self) -> &Looper {
        &self.looper
    }

    pub fn list(&self) -> &Rc<FakeScrollable> {
        &self.list
    }

    /// Attaches a full row of [`ROW_WIDTH`] x [`ROW_HEIGHT`]. Returns its index.
    pub fn add_row(&mut self, accepted: DirectionMask, style: RevealStyle) -> usize {
        self.add_row_with(accepted, style, None)
    }

    /// Like [`add_row`](Self::add_row), with a single-tap hook.
    pub fn add_row_with_tap(
        &mut self,
        accepted: DirectionMask,
        style: RevealStyle,
        hook: Rc<dyn OnSingleTap>,
    ) -> usize {
        self.add_row_with(accepted, style, Some(hook))
    }

    fn add_row_with(
        &mut self,
        accepted: DirectionMask,
        style: RevealStyle,
        hook: Option<Rc<dyn OnSingleTap>>,
    ) -> usize {
        let row = Rc::new(FakeRow::new());
        let listener = Rc::new(RecordingListener::new());
        let mut attachment = SwipeAttachment::new()
            .context(&self.context)
            .scrollable(Rc::clone(&self.list) as Rc<dyn HostScrollable>)
            .row(Rc::clone(&row) as Rc<dyn RowView>)
            .directions(accepted)
            .style(style)
            .listener(Rc::clone(&listener) as Rc<dyn OnSwipeListener>);
        if let Some(hook) = hook {
            attachment = attachment.on_single_tap(hook);
        }
        let session = match attachment.attach() {
            Ok(session) => session,
            Err(err) => panic!("attach failed: {err}"),
        };
        session.set_width(ROW_WIDTH);
        session.set_height(ROW_HEIGHT);
        self.rows.push(RobotRow {
            row,
            listener,
            session,
        });
        self.rows.len() - 1
    }

    /// # Panics
    ///
    /// If `index` was not returned by `add_row`.
    pub fn row(&self, index: usize) -> &RobotRow {
        &self.rows[index]
    }

    /// Delivers a raw event to row `index`, stamped with the current time.
    pub fn send(&self, index: usize, event: PointerEvent) -> bool {
        let event = event.at_time(self.looper.now_millis());
        self.rows[index].row.dispatch(&event)
    }

    pub fn press(&self, index: usize, x: f32, y: f32) -> bool {
        self.send(index, PointerEvent::down(x, y))
    }

    pub fn move_to(&self, index: usize, x: f32, y: f32) -> bool {
        self.send(index, PointerEvent::moved(x, y))
    }

    pub fn release(&self, index: usize, x: f32, y: f32) -> bool {
        self.send(index, PointerEvent::up(x, y))
    }

    pub fn cancel(&self, index: usize) -> bool {
        self.send(index, PointerEvent::cancel(TOUCH_ORIGIN.x, TOUCH_ORIGIN.y))
    }

    pub fn send_other(&self, index: usize, action: u16) -> bool {
        self.send(
            index,
            PointerEvent::new(PointerEventKind::Other(action), TOUCH_ORIGIN),
        )
    }

    /// Presses at [`TOUCH_ORIGIN`] and moves horizontally by `dx` in ten
    /// steps, without releasing.
    pub fn drag_horizontally(&self, index: usize, dx: f32) {
        self.drag_by(index, dx, 0.0);
    }

    /// Presses at [`TOUCH_ORIGIN`] and moves by `(dx, dy)` in ten steps,
    /// without releasing.
    pub fn drag_by(&self, index: usize, dx: f32, dy: f32) {
        self.press(index, TOUCH_ORIGIN.x, TOUCH_ORIGIN.y);
        let steps = 10;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_to(index, TOUCH_ORIGIN.x + dx * t, TOUCH_ORIGIN.y + dy * t);
        }
    }

    /// Full horizontal swipe: press, move by `dx`, release. Does not advance
    /// time.
    pub fn swipe(&self, index: usize, dx: f32) {
        self.drag_horizontally(index, dx);
        self.release(index, TOUCH_ORIGIN.x + dx, TOUCH_ORIGIN.y);
    }

    /// Press and release in place.
    pub fn tap(&self, index: usize) {
        self.press(index, TOUCH_ORIGIN.x, TOUCH_ORIGIN.y);
        self.release(index, TOUCH_ORIGIN.x, TOUCH_ORIGIN.y);
    }

    /// Advances virtual time; returns the number of ticks that ran.
    pub fn advance_ms(&self, millis: u64) -> usize {
        self.looper.advance_by(Duration::from_millis(millis))
    }

    /// Runs every queued tick, including those queued by ticks.
    pub fn run_until_idle(&self) -> usize {
        self.looper.run_until_idle()
    }
}

impl Default for SwipeRobot {
    fn default() -> Self {
        Self::new()
    }
}
