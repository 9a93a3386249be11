//! Buffering mode for shortcut requests

use std::mem;

use log::debug;

use crate::ShortcutRequest;

/// Reason bits for keeping the install queue buffering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueueReason(u32);

impl QueueReason {
    /// No reason set
    pub const NONE: QueueReason = QueueReason(0);
    /// The launcher activity is paused
    pub const ACTIVITY_PAUSED: QueueReason = QueueReason(1 << 0);
    /// The workspace loader is running
    pub const LOADER_RUNNING: QueueReason = QueueReason(1 << 1);
    /// A drag-and-drop operation is in progress
    pub const DRAG_AND_DROP: QueueReason = QueueReason(1 << 2);

    /// Check if no reason is set
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if all bits of `other` are set
    #[inline]
    pub const fn contains(self, other: QueueReason) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two reason sets
    #[inline]
    pub const fn with(self, other: QueueReason) -> QueueReason {
        QueueReason(self.0 | other.0)
    }

    /// Remove the bits of `other`
    #[inline]
    pub const fn without(self, other: QueueReason) -> QueueReason {
        QueueReason(self.0 & !other.0)
    }
}

/// Buffer for shortcut requests arriving while the workspace must not change
///
/// While any reason bit is set, submitted requests are held in arrival order
/// instead of being applied. Dropping the last reason flushes the buffer.
#[derive(Clone, Debug, Default)]
pub struct InstallQueue {
    reasons: QueueReason,
    pending: Vec<ShortcutRequest>,
}

impl InstallQueue {
    /// Create a queue with buffering off
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if requests are currently being buffered
    #[inline]
    pub fn is_queueing(&self) -> bool {
        !self.reasons.is_empty()
    }

    /// Requests waiting for the next flush
    #[inline]
    pub fn pending(&self) -> &[ShortcutRequest] {
        &self.pending
    }

    /// Active reason bits
    #[inline]
    pub fn reasons(&self) -> QueueReason {
        self.reasons
    }

    /// Start buffering for the given reason
    pub fn enable(&mut self, reason: QueueReason) {
        self.reasons = self.reasons.with(reason);
        debug!("install queue buffering: {:?}", self.reasons);
    }

    /// Drop the given reason; drains the buffer once no reason remains
    pub fn disable_and_flush(&mut self, reason: QueueReason) -> Vec<ShortcutRequest> {
        self.reasons = self.reasons.without(reason);
        if !self.reasons.is_empty() {
            return Vec::new();
        }

        let drained = mem::take(&mut self.pending);
        if !drained.is_empty() {
            debug!("install queue flushing {} requests", drained.len());
        }
        drained
    }

    /// Submit a request
    ///
    /// Returns the request back when the queue is not buffering and the
    /// caller should apply it immediately.
    #[must_use]
    pub fn submit(&mut self, request: ShortcutRequest) -> Option<ShortcutRequest> {
        if self.is_queueing() {
            self.pending.push(request);
            None
        } else {
            Some(request)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_queue_passes_requests_through() {
        let mut queue = InstallQueue::new();

        let request = ShortcutRequest::install("com.example.mail");
        let passed = queue.submit(request.clone());

        assert_eq!(passed, Some(request));
        assert!(queue.pending().is_empty());
    }

    #[test]
    fn test_buffering_holds_requests_in_order() {
        let mut queue = InstallQueue::new();
        queue.enable(QueueReason::DRAG_AND_DROP);

        assert!(queue.submit(ShortcutRequest::install("a")).is_none());
        assert!(queue.submit(ShortcutRequest::uninstall("b")).is_none());

        assert_eq!(queue.pending().len(), 2);
        assert_eq!(queue.pending()[0].id(), "a");
        assert_eq!(queue.pending()[1].id(), "b");
    }

    #[test]
    fn test_flush_drains_buffer() {
        let mut queue = InstallQueue::new();
        queue.enable(QueueReason::DRAG_AND_DROP);
        let _ = queue.submit(ShortcutRequest::install("a"));

        let flushed = queue.disable_and_flush(QueueReason::DRAG_AND_DROP);

        assert_eq!(flushed.len(), 1);
        assert!(!queue.is_queueing());
        assert!(queue.pending().is_empty());
    }

    #[test]
    fn test_flush_waits_for_last_reason() {
        let mut queue = InstallQueue::new();
        queue.enable(QueueReason::DRAG_AND_DROP);
        queue.enable(QueueReason::LOADER_RUNNING);
        let _ = queue.submit(ShortcutRequest::install("a"));

        // Dropping one of two reasons must not flush.
        let flushed = queue.disable_and_flush(QueueReason::DRAG_AND_DROP);
        assert!(flushed.is_empty());
        assert!(queue.is_queueing());
        assert_eq!(queue.pending().len(), 1);

        let flushed = queue.disable_and_flush(QueueReason::LOADER_RUNNING);
        assert_eq!(flushed.len(), 1);
        assert!(!queue.is_queueing());
    }

    #[test]
    fn test_enable_same_reason_twice_is_idempotent() {
        let mut queue = InstallQueue::new();
        queue.enable(QueueReason::DRAG_AND_DROP);
        queue.enable(QueueReason::DRAG_AND_DROP);

        let flushed = queue.disable_and_flush(QueueReason::DRAG_AND_DROP);
        assert!(flushed.is_empty());
        assert!(!queue.is_queueing());
    }

    #[test]
    fn test_reason_bit_operations() {
        let both = QueueReason::DRAG_AND_DROP.with(QueueReason::LOADER_RUNNING);

        assert!(both.contains(QueueReason::DRAG_AND_DROP));
        assert!(both.contains(QueueReason::LOADER_RUNNING));
        assert!(!both.contains(QueueReason::ACTIVITY_PAUSED));
        assert!(both.without(QueueReason::DRAG_AND_DROP).contains(QueueReason::LOADER_RUNNING));
        assert!(QueueReason::NONE.is_empty());
    }
}
