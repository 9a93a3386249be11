//! State transitions and deferred work

use log::debug;

use homeshell_install::ShortcutRequest;

use super::Launcher;
use crate::rotation::RequestedOrientation;
use crate::scheduler::DeferredAction;
use crate::state::StateKind;

impl Launcher {
    /// Switch to another state, running exit and entry side effects in order
    ///
    /// Re-requesting the active state is a no-op.
    pub fn goto_state(&mut self, kind: StateKind, now_ms: f64) {
        if kind == self.current {
            return;
        }
        let outgoing = self.states.by_kind(self.current);
        let incoming = self.states.by_kind(kind);
        debug!("state {:?} -> {:?}", outgoing.kind, incoming.kind);

        outgoing.on_disabled(self, now_ms);
        self.current = kind;
        incoming.on_enabled(self, now_ms);
    }

    /// Run deferred actions that have come due
    pub fn tick(&mut self, now_ms: f64) {
        for action in self.scheduler.drain_due(now_ms) {
            match action {
                DeferredAction::RestoreOrientation => {
                    self.orientation.pending_restore = None;
                    self.orientation
                        .set_requested(RequestedOrientation::Unspecified);
                }
            }
        }
    }

    /// Submit a shortcut change; buffered while the install queue is active
    pub fn submit_shortcut_request(&mut self, request: ShortcutRequest) {
        if let Some(request) = self.install_queue.submit(request) {
            self.apply_shortcut_request(request);
        }
    }

    /// Apply a shortcut change to the workspace model
    pub(crate) fn apply_shortcut_request(&mut self, request: ShortcutRequest) {
        match request {
            ShortcutRequest::Install { id } => self.workspace.add_shortcut(id),
            ShortcutRequest::Uninstall { id } => {
                self.workspace.remove_shortcut(&id);
            }
        }
    }

    /// Lock the orientation to the current one if rotation is user enabled
    ///
    /// A pending restore is cancelled first so an earlier exit's delayed
    /// task cannot unlock a re-entered drag.
    pub(crate) fn lock_orientation(&mut self) {
        if !self.orientation.rotation_enabled {
            return;
        }
        if let Some(handle) = self.orientation.pending_restore.take() {
            self.scheduler.cancel(handle);
        }
        self.orientation.set_requested(RequestedOrientation::Locked);
    }

    /// Schedule the orientation to follow the sensor again at `due_ms`
    pub(crate) fn schedule_orientation_restore(&mut self, due_ms: f64) {
        if !self.orientation.rotation_enabled {
            return;
        }
        if let Some(handle) = self.orientation.pending_restore.take() {
            self.scheduler.cancel(handle);
        }
        let handle = self
            .scheduler
            .schedule(DeferredAction::RestoreOrientation, due_ms);
        self.orientation.pending_restore = Some(handle);
    }
}
