//! Deferred task scheduling on the UI timeline
//!
//! Time is passed in explicitly as `now_ms`; the host drives `drain_due`
//! from its frame loop. Handles make every scheduled task cancellable.

/// Handle identifying a scheduled task
pub type TaskHandle = u64;

/// Work deferred to a later point on the UI timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    /// Restore the requested orientation to follow the sensor
    RestoreOrientation,
}

#[derive(Clone, Debug)]
struct ScheduledTask {
    handle: TaskHandle,
    due_ms: f64,
    action: DeferredAction,
}

/// Single-threaded scheduler for cancellable deferred actions
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    next_handle: TaskHandle,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an action to run once `now_ms` reaches `due_ms`
    pub fn schedule(&mut self, action: DeferredAction, due_ms: f64) -> TaskHandle {
        self.next_handle += 1;
        let handle = self.next_handle;
        self.tasks.push(ScheduledTask {
            handle,
            due_ms,
            action,
        });
        handle
    }

    /// Cancel a scheduled task; returns whether it was still pending
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.handle != handle);
        self.tasks.len() != before
    }

    /// Check if a task is still pending
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|task| task.handle == handle)
    }

    /// Number of pending tasks
    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if no tasks are pending
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Remove and return all actions due at `now_ms`, in scheduling order
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<DeferredAction> {
        let mut due = Vec::new();
        self.tasks.retain(|task| {
            if task.due_ms <= now_ms {
                due.push(task.action);
                false
            } else {
                true
            }
        });
        due
    }
}
