//! The five panes of a row and the offset primitive that moves them.

use crate::{Pane, PaneId, RevealStyle, RowView, SwipeError};
use std::rc::Rc;
use swiperow_foundation::SwipeDirection;

/// Background pane a swipe in `direction` reveals.
pub fn background_for(direction: SwipeDirection) -> Option<PaneId> {
    match direction {
        SwipeDirection::Still => None,
        SwipeDirection::Down => Some(PaneId::Top),
        SwipeDirection::Up => Some(PaneId::Bottom),
        SwipeDirection::Right => Some(PaneId::Left),
        SwipeDirection::Left => Some(PaneId::Right),
    }
}

pub(crate) struct RowPanes {
    center: Rc<dyn Pane>,
    top: Rc<dyn Pane>,
    bottom: Rc<dyn Pane>,
    left: Rc<dyn Pane>,
    right: Rc<dyn Pane>,
}

impl RowPanes {
    /// Looks up all five panes, failing on the first one the row lacks.
    pub(crate) fn resolve(row: &dyn RowView) -> Result<Self, SwipeError> {
        let find = |pane: PaneId| {
            row.find_pane(pane)
                .ok_or(SwipeError::MissingChildPane { pane })
        };
        Ok(Self {
            center: find(PaneId::Center)?,
            top: find(PaneId::Top)?,
            bottom: find(PaneId::Bottom)?,
            left: find(PaneId::Left)?,
            right: find(PaneId::Right)?,
        })
    }

    pub(crate) fn get(&self, pane: PaneId) -> &Rc<dyn Pane> {
        match pane {
            PaneId::Center => &self.center,
            PaneId::Top => &self.top,
            PaneId::Bottom => &self.bottom,
            PaneId::Left => &self.left,
            PaneId::Right => &self.right,
        }
    }

    pub(crate) fn set_pressed(&self, pressed: bool) {
        self.center.set_pressed(pressed);
    }

    pub(crate) fn hide_backgrounds(&self) {
        for pane in PaneId::BACKGROUNDS {
            self.get(pane).set_visible(false);
        }
    }

    /// Puts the foreground back at 0, unpressed, with every background
    /// hidden. A row detached while committed is still pushed out until this
    /// runs.
    pub(crate) fn reset_to_rest(&self) {
        self.center.set_offset(0);
        self.center.set_pressed(false);
        self.hide_backgrounds();
    }

    /// Hides every background, then shows the one `direction` reveals.
    pub(crate) fn show_background_for(&self, direction: SwipeDirection) {
        self.hide_backgrounds();
        if let Some(pane) = background_for(direction) {
            self.get(pane).set_visible(true);
        }
    }

    /// Moves the foreground (and in pull-out style the revealed background)
    /// to `distance`. Distances on the wrong side of zero are pinned to zero.
    /// Vertical directions are not laid out yet and leave the panes alone.
    pub(crate) fn apply_offset(
        &self,
        direction: SwipeDirection,
        distance: i32,
        width: i32,
        style: RevealStyle,
    ) {
        match direction {
            SwipeDirection::Left => {
                let distance = distance.min(0);
                self.center.set_offset(distance);
                if style == RevealStyle::PullOut {
                    self.right.set_offset(distance + width);
                }
            }
            SwipeDirection::Right => {
                let distance = distance.max(0);
                self.center.set_offset(distance);
                if style == RevealStyle::PullOut {
                    self.left.set_offset(distance - width);
                }
            }
            SwipeDirection::Up | SwipeDirection::Down | SwipeDirection::Still => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct TestPane {
        offset: Cell<i32>,
        visible: Cell<bool>,
    }

    impl Pane for TestPane {
        fn set_offset(&self, x: i32) {
            self.offset.set(x);
        }

        fn offset(&self) -> i32 {
            self.offset.get()
        }

        fn set_visible(&self, visible: bool) {
            self.visible.set(visible);
        }
    }

    struct TestRow {
        panes: Vec<(PaneId, Rc<TestPane>)>,
    }

    impl TestRow {
        fn with(ids: &[PaneId]) -> Self {
            Self {
                panes: ids
                    .iter()
                    .map(|id| (*id, Rc::new(TestPane::default())))
                    .collect(),
            }
        }

        fn pane(&self, id: PaneId) -> &TestPane {
            &self.panes.iter().find(|(p, _)| *p == id).expect("pane").1
        }
    }

    impl RowView for TestRow {
        fn find_pane(&self, pane: PaneId) -> Option<Rc<dyn Pane>> {
            self.panes
                .iter()
                .find(|(id, _)| *id == pane)
                .map(|(_, p)| Rc::clone(p) as Rc<dyn Pane>)
        }

        fn set_touch_handler(&self, _handler: Option<Rc<dyn crate::TouchHandler>>) {}

        fn take_touch_handler(&self) -> Option<Rc<dyn crate::TouchHandler>> {
            None
        }
    }

    #[test]
    fn resolve_reports_first_missing_pane() {
        let row = TestRow::with(&[PaneId::Center, PaneId::Top, PaneId::Left, PaneId::Right]);
        let err = RowPanes::resolve(&row).err();
        assert_eq!(err, Some(SwipeError::MissingChildPane { pane: PaneId::Bottom }));
    }

    #[test]
    fn pull_out_left_moves_center_and_right_together() {
        let row = TestRow::with(&PaneId::ALL);
        let panes = RowPanes::resolve(&row).expect("all panes");
        panes.apply_offset(SwipeDirection::Left, -120, 300, RevealStyle::PullOut);
        assert_eq!(row.pane(PaneId::Center).offset(), -120);
        assert_eq!(row.pane(PaneId::Right).offset(), 180);
    }

    #[test]
    fn pull_out_right_pins_negative_distance() {
        let row = TestRow::with(&PaneId::ALL);
        let panes = RowPanes::resolve(&row).expect("all panes");
        panes.apply_offset(SwipeDirection::Right, -40, 300, RevealStyle::PullOut);
        assert_eq!(row.pane(PaneId::Center).offset(), 0);
        assert_eq!(row.pane(PaneId::Left).offset(), -300);
    }

    #[test]
    fn open_page_moves_only_the_foreground() {
        let row = TestRow::with(&PaneId::ALL);
        let panes = RowPanes::resolve(&row).expect("all panes");
        row.pane(PaneId::Right).set_offset(7);
        panes.apply_offset(SwipeDirection::Left, -90, 300, RevealStyle::OpenPage);
        assert_eq!(row.pane(PaneId::Center).offset(), -90);
        assert_eq!(row.pane(PaneId::Right).offset(), 7);
    }

    #[test]
    fn vertical_offsets_are_inert() {
        let row = TestRow::with(&PaneId::ALL);
        let panes = RowPanes::resolve(&row).expect("all panes");
        panes.apply_offset(SwipeDirection::Down, 40, 300, RevealStyle::PullOut);
        assert_eq!(row.pane(PaneId::Center).offset(), 0);
        assert_eq!(row.pane(PaneId::Top).offset(), 0);
    }

    #[test]
    fn exactly_one_background_visible() {
        let row = TestRow::with(&PaneId::ALL);
        let panes = RowPanes::resolve(&row).expect("all panes");
        for direction in [
            SwipeDirection::Left,
            SwipeDirection::Right,
            SwipeDirection::Up,
            SwipeDirection::Down,
        ] {
            panes.show_background_for(direction);
            let visible: Vec<PaneId> = PaneId::BACKGROUNDS
                .into_iter()
                .filter(|id| row.pane(*id).visible.get())
                .collect();
            assert_eq!(visible, vec![background_for(direction).unwrap()]);
        }
        panes.hide_backgrounds();
        assert!(PaneId::BACKGROUNDS.iter().all(|id| !row.pane(*id).visible.get()));
    }
}
