//! Single-tap recogniser.
//!
//! A press is a tap when the pointer goes up without ever leaving the tap slop
//! around its down position and before the long-press timeout. The recogniser
//! only reports; whether a tap is acted on is the caller's decision.

use crate::input::types::{PointerEvent, PointerEventKind};
use crate::SwipeConfig;
use swiperow_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing to report for this event.
    None,
    /// The pointer went up and the press qualified as a tap.
    SingleTapUp,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Press {
    origin: Point,
    time_millis: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TapGesture {
    slop: f32,
    long_press_timeout_millis: u64,
    press: Option<Press>,
}

impl TapGesture {
    pub fn new(slop: f32, long_press_timeout_millis: u64) -> Self {
        Self {
            slop,
            long_press_timeout_millis,
            press: None,
        }
    }

    pub fn from_config(config: &SwipeConfig) -> Self {
        Self::new(config.tap_slop, config.long_press_timeout_millis)
    }

    /// True while a press is still eligible to become a tap.
    pub fn is_candidate(&self) -> bool {
        self.press.is_some()
    }

    pub fn reset(&mut self) {
        self.press = None;
    }

    pub fn on_event(&mut self, event: &PointerEvent) -> TapOutcome {
        match event.kind {
            PointerEventKind::Down => {
                self.press = Some(Press {
                    origin: event.position,
                    time_millis: event.time_millis,
                });
                TapOutcome::None
            }
            PointerEventKind::Move => {
                if let Some(press) = self.press {
                    if press.origin.distance_to(event.position) > self.slop {
                        self.press = None;
                    }
                }
                TapOutcome::None
            }
            PointerEventKind::Up => match self.press.take() {
                Some(press)
                    if press.origin.distance_to(event.position) <= self.slop
                        && event.time_millis.saturating_sub(press.time_millis)
                            < self.long_press_timeout_millis =>
                {
                    TapOutcome::SingleTapUp
                }
                _ => TapOutcome::None,
            },
            PointerEventKind::Cancel => {
                self.press = None;
                TapOutcome::None
            }
            PointerEventKind::Other(_) => TapOutcome::None,
        }
    }
}

impl Default for TapGesture {
    fn default() -> Self {
        Self::from_config(&SwipeConfig::default())
    }
}
