//! Pointer event queue.
//!
//! Hosts that receive input on a different cadence than they process it
//! enqueue events here and drain them in order on the UI queue.

use super::types::{PointerEvent, PointerId};
use smallvec::SmallVec;

#[derive(Default)]
pub struct PointerDispatcher {
    queue: SmallVec<[(PointerId, PointerEvent); 8]>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            queue: SmallVec::new(),
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push((event.id, event));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerId, PointerEvent),
    {
        log::trace!("draining {} pointer events", self.queue.len());
        for (id, event) in self.queue.drain(..) {
            handler(id, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_arrival_order() {
        let mut dispatcher = PointerDispatcher::new();
        dispatcher.push(PointerEvent::down(1.0, 1.0).with_id(7));
        dispatcher.push(PointerEvent::moved(2.0, 1.0).with_id(7));
        dispatcher.push(PointerEvent::up(3.0, 1.0).with_id(7));

        let mut seen = Vec::new();
        dispatcher.drain(|id, event| seen.push((id, event.kind)));

        assert!(dispatcher.is_empty());
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|(id, _)| *id == 7));
        assert_eq!(seen[0].1, crate::PointerEventKind::Down);
        assert_eq!(seen[2].1, crate::PointerEventKind::Up);
    }
}
