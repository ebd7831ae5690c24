//! Serial, millisecond-resolution task queue.
//!
//! A [`Looper`] owns the queue and its virtual time. Code that needs to defer
//! work holds a [`LooperHandle`] (a weak reference, so a handle never keeps a
//! torn-down loop alive) and receives a [`TaskRegistration`] that cancels the
//! task when dropped. Rescheduling is always an explicit new post; there are
//! no recurring timers.

use crate::Clock;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use web_time::Duration;

pub type TaskId = u64;

/// Upper bound on tasks executed by a single [`Looper::run_until_idle`].
///
/// A task chain that keeps rescheduling itself forever would otherwise spin
/// the caller.
pub const MAX_IDLE_TASKS: usize = 100_000;

struct ScheduledTask {
    id: TaskId,
    due_millis: u64,
    task: Box<dyn FnOnce() + 'static>,
}

struct LooperInner {
    now_millis: Cell<u64>,
    next_task_id: Cell<TaskId>,
    // Sorted by (due_millis, id) so equal deadlines run in posting order.
    queue: RefCell<SmallVec<[ScheduledTask; 4]>>,
    draining: Cell<bool>,
}

impl LooperInner {
    fn new() -> Self {
        Self {
            now_millis: Cell::new(0),
            next_task_id: Cell::new(1),
            queue: RefCell::new(SmallVec::new()),
            draining: Cell::new(false),
        }
    }

    fn post(&self, delay_millis: u64, task: Box<dyn FnOnce() + 'static>) -> TaskId {
        let id = self.next_task_id.get();
        self.next_task_id.set(id + 1);
        let due_millis = self.now_millis.get().saturating_add(delay_millis);
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .position(|entry| entry.due_millis > due_millis)
            .unwrap_or(queue.len());
        queue.insert(
            index,
            ScheduledTask {
                id,
                due_millis,
                task,
            },
        );
        log::trace!("posted task {id} due at {due_millis}ms");
        id
    }

    fn cancel(&self, id: TaskId) {
        let mut queue = self.queue.borrow_mut();
        if let Some(index) = queue.iter().position(|entry| entry.id == id) {
            queue.remove(index);
            log::trace!("cancelled task {id}");
        }
    }

    fn is_pending(&self, id: TaskId) -> bool {
        self.queue.borrow().iter().any(|entry| entry.id == id)
    }

    fn pop_due(&self, target_millis: u64) -> Option<ScheduledTask> {
        let mut queue = self.queue.borrow_mut();
        match queue.first() {
            Some(entry) if entry.due_millis <= target_millis => Some(queue.remove(0)),
            _ => None,
        }
    }

    fn next_deadline(&self) -> Option<u64> {
        self.queue.borrow().first().map(|entry| entry.due_millis)
    }

    fn advance_to(&self, target_millis: u64) -> usize {
        if self.draining.get() {
            log::warn!("advance requested from inside a looper task; ignored");
            return 0;
        }
        self.draining.set(true);
        let mut executed = 0;
        // The queue borrow is released before each task runs so tasks can post.
        while let Some(entry) = self.pop_due(target_millis) {
            if entry.due_millis > self.now_millis.get() {
                self.now_millis.set(entry.due_millis);
            }
            (entry.task)();
            executed += 1;
        }
        if target_millis > self.now_millis.get() {
            self.now_millis.set(target_millis);
        }
        self.draining.set(false);
        executed
    }
}

/// Owner of the serial queue.
///
/// Dropping the looper drops every pending task; outstanding handles and
/// registrations become inert.
pub struct Looper {
    inner: Rc<LooperInner>,
}

impl Looper {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(LooperInner::new()),
        }
    }

    pub fn handle(&self) -> LooperHandle {
        LooperHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now_millis(&self) -> u64 {
        self.inner.now_millis.get()
    }

    /// Earliest deadline among pending tasks. Hosts use this for `WaitUntil`
    /// style scheduling.
    pub fn next_deadline(&self) -> Option<u64> {
        self.inner.next_deadline()
    }

    pub fn has_pending_tasks(&self) -> bool {
        self.inner.next_deadline().is_some()
    }

    pub fn pending_task_count(&self) -> usize {
        self.inner.queue.borrow().len()
    }

    /// Moves time forward by `delay`, running every task that falls due,
    /// including tasks posted by those tasks. Returns the number executed.
    pub fn advance_by(&self, delay: Duration) -> usize {
        let target = self
            .inner
            .now_millis
            .get()
            .saturating_add(delay.as_millis() as u64);
        self.inner.advance_to(target)
    }

    /// Moves time forward to `target_millis` (no-op when in the past).
    pub fn advance_to(&self, target_millis: u64) -> usize {
        let target = target_millis.max(self.inner.now_millis.get());
        self.inner.advance_to(target)
    }

    /// Runs tasks deadline by deadline until the queue is empty.
    pub fn run_until_idle(&self) -> usize {
        let mut executed = 0;
        while let Some(deadline) = self.inner.next_deadline() {
            if executed >= MAX_IDLE_TASKS {
                log::warn!(
                    "looper still busy after {MAX_IDLE_TASKS} tasks; giving up on idle"
                );
                break;
            }
            let ran = self.inner.advance_to(deadline);
            if ran == 0 {
                break;
            }
            executed += ran;
        }
        executed
    }

    /// Syncs virtual time with `clock`, measured from `origin`, and runs due
    /// tasks.
    pub fn pump<C: Clock>(&self, clock: &C, origin: C::Instant) -> usize {
        self.advance_to(clock.elapsed_millis(origin))
    }
}

impl Default for Looper {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-owning access to a [`Looper`] for posting deferred work.
#[derive(Clone)]
pub struct LooperHandle {
    inner: Weak<LooperInner>,
}

impl LooperHandle {
    /// A handle that is not connected to any looper. Posts are dropped.
    pub fn detached() -> Self {
        Self { inner: Weak::new() }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn now_millis(&self) -> Option<u64> {
        self.inner.upgrade().map(|inner| inner.now_millis.get())
    }

    /// Posts `task` to run after `delay`. The returned registration cancels
    /// the task when dropped or explicitly cancelled.
    pub fn post_delayed(
        &self,
        delay: Duration,
        task: impl FnOnce() + 'static,
    ) -> TaskRegistration {
        match self.inner.upgrade() {
            Some(inner) => {
                let id = inner.post(delay.as_millis() as u64, Box::new(task));
                TaskRegistration::new(self.clone(), id)
            }
            None => {
                log::debug!("post on a dropped looper ignored");
                TaskRegistration::inactive(self.clone())
            }
        }
    }

    /// Posts `task` to run on the next drain.
    pub fn post(&self, task: impl FnOnce() + 'static) -> TaskRegistration {
        self.post_delayed(Duration::ZERO, task)
    }

    fn cancel(&self, id: TaskId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel(id);
        }
    }

    fn is_pending(&self, id: TaskId) -> bool {
        self.inner
            .upgrade()
            .is_some_and(|inner| inner.is_pending(id))
    }
}

impl std::fmt::Debug for LooperHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LooperHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Keeps a posted task alive; dropping it cancels the task.
pub struct TaskRegistration {
    handle: LooperHandle,
    id: Option<TaskId>,
}

impl TaskRegistration {
    fn new(handle: LooperHandle, id: TaskId) -> Self {
        Self {
            handle,
            id: Some(id),
        }
    }

    fn inactive(handle: LooperHandle) -> Self {
        Self { handle, id: None }
    }

    pub fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// True while the task is still queued.
    pub fn is_pending(&self) -> bool {
        self.id.is_some_and(|id| self.handle.is_pending(id))
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.handle.cancel(id);
        }
    }
}

impl Drop for TaskRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.handle.cancel(id);
        }
    }
}

impl std::fmt::Debug for TaskRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRegistration")
            .field("id", &self.id)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/looper_tests.rs"]
mod tests;
