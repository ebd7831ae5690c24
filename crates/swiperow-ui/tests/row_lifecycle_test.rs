use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swiperow_core::Looper;
use swiperow_testing::prelude::*;
use swiperow_ui::{
    detach, CancelPolicy, DirectionMask, GestureSession, HostScrollable, OnSingleTap,
    OnSwipeListener, PaneId, RevealStyle, RowView, SwipeAttachment, SwipeConfig, SwipeContext,
    SwipeDirection, SwipeError, SwipeEvent, SwipePhase,
};

const X: f32 = TOUCH_ORIGIN.x;
const Y: f32 = TOUCH_ORIGIN.y;

fn two_left_rows() -> (SwipeRobot, usize, usize) {
    let mut robot = SwipeRobot::new();
    let first = robot.add_row(DirectionMask::LEFT, RevealStyle::PullOut);
    let second = robot.add_row(DirectionMask::LEFT, RevealStyle::PullOut);
    (robot, first, second)
}

#[test]
fn touching_another_row_closes_the_open_one() {
    let (robot, first, second) = two_left_rows();

    robot.swipe(first, -260.0);
    robot.run_until_idle();
    assert_eq!(robot.row(first).row.center_offset(), -300);

    robot.press(second, X, Y);

    let open = robot.row(first);
    assert_eq!(open.row.center_offset(), 0);
    assert!(open.row.visible_backgrounds().is_empty());
    assert!(open.session.is_at_rest());
    assert_eq!(
        open.listener.last(),
        Some(SwipeEvent::Restored(SwipeDirection::Left))
    );
    assert_eq!(robot.row(second).listener.events(), vec![SwipeEvent::Ready]);
    assert!(robot
        .context()
        .coordinator()
        .active()
        .is_some_and(|active| active.ptr_eq(&robot.row(second).session)));
}

#[test]
fn touching_another_row_interrupts_a_settling_one() {
    let (robot, first, second) = two_left_rows();

    robot.swipe(first, -260.0);
    assert_eq!(robot.row(first).session.phase(), SwipePhase::Animating);

    robot.press(second, X, Y);

    let interrupted = robot.row(first);
    assert_eq!(interrupted.session.phase(), SwipePhase::Idle);
    assert!(!interrupted.session.has_pending_tick());
    assert_eq!(interrupted.row.center_offset(), 0);
    assert_eq!(
        interrupted.listener.last(),
        Some(SwipeEvent::Cancelled(SwipeDirection::Left, 0))
    );
    assert_eq!(robot.run_until_idle(), 0);
    robot_assertions::assert_terminal_count(&interrupted.listener.events(), 1, "interrupted");
    robot_assertions::assert_well_formed(&interrupted.listener.events(), "interrupted");
}

#[test]
fn touching_a_row_at_rest_does_not_notify_the_previous_one() {
    let (robot, first, second) = two_left_rows();

    robot.swipe(first, -60.0);
    robot.run_until_idle();
    let before = robot.row(first).listener.events();

    robot.press(second, X, Y);
    assert_eq!(robot.row(first).listener.events(), before);
}

#[test]
fn detach_is_idempotent_and_leaves_no_tick() {
    let mut robot = SwipeRobot::new();
    let row = robot.add_row(DirectionMask::LEFT, RevealStyle::PullOut);
    let handle = robot.row(row);

    robot.swipe(row, -120.0);
    assert!(handle.session.has_pending_tick());

    detach(&*handle.row);
    assert!(handle.session.is_detached());
    assert!(!handle.session.has_pending_tick());
    assert_eq!(robot.looper().pending_task_count(), 0);
    assert!(!handle.row.has_touch_handler());
    assert!(!robot.list().intercept_disallowed());
    assert!(robot.context().coordinator().active().is_none());

    detach(&*handle.row);
    assert!(!robot.press(row, X, Y));
    assert_eq!(robot.run_until_idle(), 0);
}

#[test]
fn detaching_a_never_attached_row_is_a_no_op() {
    let looper = Looper::new();
    let row = FakeRow::new();

    detach(&row);
    detach(&row);
    assert!(!row.has_touch_handler());
    assert_eq!(looper.pending_task_count(), 0);
    assert_eq!(row.center_offset(), 0);
}

#[test]
fn reattaching_a_committed_row_starts_from_rest() {
    let mut robot = SwipeRobot::new();
    let row = robot.add_row(DirectionMask::LEFT, RevealStyle::PullOut);
    let handle = robot.row(row);

    robot.swipe(row, -260.0);
    robot.run_until_idle();
    assert_eq!(handle.row.center_offset(), -ROW_WIDTH);
    assert_eq!(handle.row.visible_backgrounds(), vec![PaneId::Right]);

    let list: Rc<dyn HostScrollable> = Rc::clone(robot.list()) as Rc<dyn HostScrollable>;
    let session = SwipeAttachment::new()
        .context(robot.context())
        .scrollable(list)
        .row(Rc::clone(&handle.row) as Rc<dyn RowView>)
        .directions(DirectionMask::LEFT)
        .style(RevealStyle::PullOut)
        .listener(Rc::new(RecordingListener::new()))
        .attach()
        .expect("re-attach");
    session.set_width(ROW_WIDTH);
    session.set_height(ROW_HEIGHT);

    assert!(handle.session.is_detached());
    assert!(session.is_at_rest());
    assert_eq!(handle.row.center_offset(), 0);
    assert!(handle.row.visible_backgrounds().is_empty());

    robot.drag_horizontally(row, -80.0);
    assert_eq!(session.distance(), -80);
    assert_eq!(handle.row.center_offset(), -80);
}

#[test]
fn detach_mid_drag_hands_scrolling_back() {
    let mut robot = SwipeRobot::new();
    let row = robot.add_row(DirectionMask::LEFT, RevealStyle::PullOut);
    let handle = robot.row(row);

    robot.drag_horizontally(row, -80.0);
    assert!(robot.list().intercept_disallowed());

    detach(&*handle.row);
    assert_eq!(robot.list().intercept_requests(), vec![true, false]);
    assert_eq!(handle.session.phase(), SwipePhase::Idle);
}

#[test]
fn reattaching_detaches_the_previous_session() {
    let looper = Looper::new();
    let context = SwipeContext::new(looper.handle());
    let list: Rc<dyn HostScrollable> = Rc::new(FakeScrollable::new());
    let row = Rc::new(FakeRow::new());
    let attach = || {
        SwipeAttachment::new()
            .context(&context)
            .scrollable(Rc::clone(&list))
            .row(Rc::clone(&row) as Rc<dyn RowView>)
            .directions(DirectionMask::LEFT)
            .listener(Rc::new(RecordingListener::new()))
            .attach()
    };

    let first = attach().expect("first attach");
    let second = attach().expect("second attach");
    assert!(first.is_detached());
    assert!(!second.is_detached());
    assert!(row.has_touch_handler());
}

#[test]
fn attach_reports_configuration_errors() {
    let looper = Looper::new();
    let context = SwipeContext::new(looper.handle());
    let list: Rc<dyn HostScrollable> = Rc::new(FakeScrollable::new());
    let listener: Rc<dyn OnSwipeListener> = Rc::new(RecordingListener::new());

    let missing_pane = Rc::new(FakeRow::without(PaneId::Bottom));
    let err = SwipeAttachment::new()
        .context(&context)
        .scrollable(Rc::clone(&list))
        .row(Rc::clone(&missing_pane) as Rc<dyn RowView>)
        .listener(Rc::clone(&listener))
        .attach()
        .err();
    assert_eq!(err, Some(SwipeError::MissingChildPane { pane: PaneId::Bottom }));
    assert!(!missing_pane.has_touch_handler());

    let err = SwipeAttachment::new()
        .context(&context)
        .scrollable(Rc::clone(&list))
        .row(Rc::new(FakeRow::new()) as Rc<dyn RowView>)
        .attach()
        .err();
    assert_eq!(err, Some(SwipeError::NullArgument { what: "listener" }));

    let err = SwipeAttachment::new()
        .row(Rc::new(FakeRow::new()) as Rc<dyn RowView>)
        .listener(listener)
        .attach()
        .err();
    assert_eq!(err, Some(SwipeError::NullArgument { what: "context" }));
}

#[test]
fn tap_without_hook_performs_item_click() {
    let mut robot = SwipeRobot::new();
    let row = robot.add_row(DirectionMask::LEFT, RevealStyle::PullOut);

    robot.tap(row);
    assert_eq!(robot.list().click_count(), 1);
}

#[test]
fn tap_hook_replaces_item_click() {
    let taps = Rc::new(Cell::new(0));
    let counter = Rc::clone(&taps);
    let hook: Rc<dyn OnSingleTap> = Rc::new(move || counter.set(counter.get() + 1));

    let mut robot = SwipeRobot::new();
    let row = robot.add_row_with_tap(DirectionMask::LEFT, RevealStyle::PullOut, hook);

    robot.tap(row);
    assert_eq!(taps.get(), 1);
    assert_eq!(robot.list().click_count(), 0);

    robot.swipe(row, -120.0);
    robot.run_until_idle();
    assert_eq!(taps.get(), 1);
}

#[test]
fn wide_tap_slop_still_never_taps_a_locked_swipe() {
    let config = SwipeConfig {
        tap_slop: 100.0,
        ..SwipeConfig::default()
    };
    let mut robot = SwipeRobot::with_config(config);
    let row = robot.add_row(DirectionMask::LEFT, RevealStyle::PullOut);

    robot.press(row, X, Y);
    robot.move_to(row, X - 40.0, Y);
    robot.release(row, X - 40.0, Y);
    assert_eq!(robot.list().click_count(), 0);
}

#[test]
fn cancel_while_locked_settles_back_by_default() {
    let mut robot = SwipeRobot::new();
    let row = robot.add_row(DirectionMask::LEFT, RevealStyle::PullOut);
    let handle = robot.row(row);

    robot.drag_horizontally(row, -150.0);
    robot.cancel(row);
    assert_eq!(handle.session.phase(), SwipePhase::Animating);

    robot.run_until_idle();
    assert_eq!(
        handle.listener.last(),
        Some(SwipeEvent::Cancelled(SwipeDirection::Left, 0))
    );
    assert!(!robot.list().intercept_disallowed());
}

#[test]
fn ignored_cancel_is_abandoned_on_next_press() {
    let config = SwipeConfig::default().with_cancel_policy(CancelPolicy::Ignore);
    let mut robot = SwipeRobot::with_config(config);
    let row = robot.add_row(DirectionMask::LEFT, RevealStyle::PullOut);
    let handle = robot.row(row);

    robot.drag_horizontally(row, -150.0);
    robot.cancel(row);
    assert_eq!(handle.session.phase(), SwipePhase::Locked);
    assert!(!handle.row.pane(PaneId::Center).is_pressed());

    handle.listener.take();
    robot.press(row, X, Y);
    assert_eq!(
        handle.listener.events(),
        vec![
            SwipeEvent::Cancelled(SwipeDirection::Left, 0),
            SwipeEvent::Ready,
        ]
    );
    assert_eq!(handle.session.phase(), SwipePhase::Idle);
    assert_eq!(handle.row.center_offset(), 0);
}

#[test]
fn cancel_before_lock_only_clears_pressed() {
    let mut robot = SwipeRobot::new();
    let row = robot.add_row(DirectionMask::LEFT, RevealStyle::PullOut);
    let handle = robot.row(row);

    robot.press(row, X, Y);
    assert!(robot.cancel(row));
    assert!(!handle.row.pane(PaneId::Center).is_pressed());
    assert_eq!(handle.session.phase(), SwipePhase::Idle);
    assert_eq!(robot.looper().pending_task_count(), 0);
}

/// Listener that inspects and drives its own session from inside callbacks.
struct ReentrantListener {
    session: RefCell<Option<GestureSession>>,
    seen: RefCell<Vec<(SwipePhase, Option<SwipeDirection>)>>,
}

impl OnSwipeListener for ReentrantListener {
    fn on_start(&self, _: SwipeDirection, _: i32) {}

    fn on_move(&self, _: SwipeDirection, _: i32) {}

    fn on_go_cancelling(&self, _: SwipeDirection, _: i32) {}

    fn on_cancelled(&self, _: SwipeDirection, _: i32) {}

    fn on_go_swiping(&self, _: SwipeDirection, _: i32) {}

    fn on_swiped(&self, _: SwipeDirection, _: i32) {
        let session = self.session.borrow().clone();
        if let Some(session) = session {
            self.seen
                .borrow_mut()
                .push((session.phase(), session.revealed()));
            session.restore();
        }
    }
}

#[test]
fn listeners_may_call_back_into_the_session() {
    let looper = Looper::new();
    let context = SwipeContext::new(looper.handle());
    let row = Rc::new(FakeRow::new());
    let listener = Rc::new(ReentrantListener {
        session: RefCell::new(None),
        seen: RefCell::new(Vec::new()),
    });
    let session = SwipeAttachment::new()
        .context(&context)
        .scrollable(Rc::new(FakeScrollable::new()))
        .row(Rc::clone(&row) as Rc<dyn RowView>)
        .directions(DirectionMask::LEFT)
        .listener(Rc::clone(&listener) as Rc<dyn OnSwipeListener>)
        .attach()
        .expect("attach");
    session.set_width(300);
    *listener.session.borrow_mut() = Some(session.clone());

    let send = |event: swiperow_ui::PointerEvent| row.dispatch(&event);
    send(swiperow_ui::PointerEvent::down(X, Y));
    send(swiperow_ui::PointerEvent::moved(X - 30.0, Y));
    send(swiperow_ui::PointerEvent::up(X - 280.0, Y));
    looper.run_until_idle();

    assert_eq!(
        listener.seen.borrow().as_slice(),
        &[(SwipePhase::Idle, Some(SwipeDirection::Left))]
    );
    assert!(session.is_at_rest());
    assert_eq!(row.center_offset(), 0);
    *listener.session.borrow_mut() = None;
}
