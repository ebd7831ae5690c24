//! Assertion helpers for recorded listener traces.

use swiperow_foundation::SwipeDirection;
use swiperow_ui::SwipeEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TraceState {
    Between,
    Dragging(SwipeDirection),
    Cancelling(SwipeDirection),
    Swiping(SwipeDirection),
}

/// Assert that `events` is a sequence of well-formed gestures.
///
/// Each gesture is `Start`, any number of `Move`, then either
/// `GoCancelling`* `Cancelled` or `GoSwiping`* `Swiped`, all in one
/// direction. An interrupted gesture may end with `Cancelled(_, 0)` at any
/// point. `Ready` and `Restored` may only appear between gestures.
pub fn assert_well_formed(events: &[SwipeEvent], msg: &str) {
    let mut state = TraceState::Between;
    for (index, event) in events.iter().enumerate() {
        let next = match (state, *event) {
            (TraceState::Between, SwipeEvent::Ready | SwipeEvent::Restored(_)) => {
                Some(TraceState::Between)
            }
            (TraceState::Between, SwipeEvent::Start(d, _)) => Some(TraceState::Dragging(d)),
            (TraceState::Dragging(d), SwipeEvent::Move(e, _)) if d == e => {
                Some(TraceState::Dragging(d))
            }
            (
                TraceState::Dragging(d) | TraceState::Cancelling(d),
                SwipeEvent::GoCancelling(e, _),
            ) if d == e => Some(TraceState::Cancelling(d)),
            (TraceState::Dragging(d) | TraceState::Swiping(d), SwipeEvent::GoSwiping(e, _))
                if d == e =>
            {
                Some(TraceState::Swiping(d))
            }
            (TraceState::Dragging(d) | TraceState::Cancelling(d), SwipeEvent::Cancelled(e, _))
                if d == e =>
            {
                Some(TraceState::Between)
            }
            (TraceState::Swiping(d), SwipeEvent::Cancelled(e, 0)) if d == e => {
                Some(TraceState::Between)
            }
            (TraceState::Dragging(d) | TraceState::Swiping(d), SwipeEvent::Swiped(e, _))
                if d == e =>
            {
                Some(TraceState::Between)
            }
            _ => None,
        };
        match next {
            Some(next) => state = next,
            None => panic!(
                "{}: unexpected {:?} at index {} (state {:?}) in {:?}",
                msg, event, index, state, events
            ),
        }
    }
}

/// Assert that the trace contains exactly `expected` terminal notifications.
pub fn assert_terminal_count(events: &[SwipeEvent], expected: usize, msg: &str) {
    let terminals = events.iter().filter(|event| event.is_terminal()).count();
    assert_eq!(
        terminals, expected,
        "{}: expected {} terminal events, got {} in {:?}",
        msg, expected, terminals, events
    );
}

/// Assert that consecutive settle notifications never move further than
/// `step` pixels.
pub fn assert_step_bounded(events: &[SwipeEvent], step: i32, msg: &str) {
    let mut previous: Option<i32> = None;
    for event in events {
        match event {
            SwipeEvent::GoCancelling(_, d)
            | SwipeEvent::GoSwiping(_, d)
            | SwipeEvent::Cancelled(_, d)
            | SwipeEvent::Swiped(_, d) => {
                if let Some(prev) = previous {
                    assert!(
                        (d - prev).abs() <= step,
                        "{}: settle jumped from {} to {} (step {})",
                        msg,
                        prev,
                        d,
                        step
                    );
                }
                previous = if event.is_terminal() { None } else { Some(*d) };
            }
            _ => previous = None,
        }
    }
}

/// Assert that every reported distance lies on the side of zero its
/// direction travels and within `extent`.
pub fn assert_distances_clamped(events: &[SwipeEvent], extent: i32, msg: &str) {
    for event in events {
        if let (Some(direction), Some(distance)) = (event.direction(), event.distance()) {
            let ok = match direction {
                SwipeDirection::Left | SwipeDirection::Up => (-extent..=0).contains(&distance),
                SwipeDirection::Right | SwipeDirection::Down => (0..=extent).contains(&distance),
                SwipeDirection::Still => distance == 0,
            };
            assert!(
                ok,
                "{}: {:?} out of range for extent {}",
                msg, event, extent
            );
        }
    }
}
