//! Single-open-row policy for one list.
//!
//! The coordinator remembers, without owning it, the session that last saw a
//! touch-down. When a different row is touched, a previously touched row that
//! is still open or moving is snapped back to rest first.

use crate::session::{GestureSession, WeakGestureSession};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct ExclusivityCoordinator {
    active: Rc<RefCell<Option<WeakGestureSession>>>,
}

impl ExclusivityCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `session` as the active row, restoring the previously active
    /// row if it is a different one and not at rest.
    pub fn activate(&self, session: &GestureSession) {
        let previous = self.active.borrow_mut().take();
        if let Some(previous) = previous.and_then(|weak| weak.upgrade()) {
            if !previous.ptr_eq(session) && !previous.is_at_rest() {
                log::debug!("restoring previously active row before new gesture");
                previous.restore();
            }
        }
        *self.active.borrow_mut() = Some(session.downgrade());
    }

    /// Forgets `session` if it is the active row.
    pub fn release(&self, session: &GestureSession) {
        let mut active = self.active.borrow_mut();
        let is_active = active
            .as_ref()
            .and_then(|weak| weak.upgrade())
            .is_some_and(|current| current.ptr_eq(session));
        if is_active {
            *active = None;
        }
    }

    /// The active row, if it is still alive.
    pub fn active(&self) -> Option<GestureSession> {
        self.active.borrow().as_ref().and_then(|weak| weak.upgrade())
    }
}

impl std::fmt::Debug for ExclusivityCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExclusivityCoordinator")
            .field("has_active", &self.active().is_some())
            .finish()
    }
}
