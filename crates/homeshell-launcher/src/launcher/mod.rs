//! Launcher host context
//!
//! This module is split into focused submodules:
//! - `lifecycle`: state transitions, deferred actions, shortcut routing

mod lifecycle;

use homeshell_install::InstallQueue;

use crate::device::DeviceProfile;
use crate::drag_layer::DragLayer;
use crate::rotation::OrientationController;
use crate::scheduler::Scheduler;
use crate::state::{LauncherStates, StateDefinition, StateKind};
use crate::workspace::Workspace;

/// Launcher host context the state definitions read and mutate
///
/// Owns everything the states touch on entry and exit:
/// - Device profile (grid/layout metrics)
/// - Workspace (pages, shortcut model, page indicator)
/// - Drag layer (overlay insets)
/// - Orientation controller plus the deferred-task scheduler
/// - Shortcut install queue
pub struct Launcher {
    /// Layout metrics for the current device configuration
    pub device: DeviceProfile,
    /// Paged workspace
    pub workspace: Workspace,
    /// Drag overlay
    pub drag_layer: DragLayer,
    /// Orientation lock control
    pub orientation: OrientationController,
    /// Shortcut install queue
    pub install_queue: InstallQueue,
    /// Fixed state definitions
    pub states: LauncherStates,
    /// Currently active state
    pub(crate) current: StateKind,
    /// Deferred-task scheduler driven by `tick`
    pub(crate) scheduler: Scheduler,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher {
    /// Create a launcher in the normal state with default metrics
    pub fn new() -> Self {
        Self {
            device: DeviceProfile::default(),
            workspace: Workspace::new(),
            drag_layer: DragLayer::new(),
            orientation: OrientationController::new(),
            install_queue: InstallQueue::new(),
            states: LauncherStates::new(),
            current: StateKind::Normal,
            scheduler: Scheduler::new(),
        }
    }

    /// Currently active state kind
    #[inline]
    pub fn state_kind(&self) -> StateKind {
        self.current
    }

    /// Definition of the currently active state
    #[inline]
    pub fn state(&self) -> StateDefinition {
        self.states.by_kind(self.current)
    }

    /// Check if a restore-to-sensor task is still pending
    #[inline]
    pub fn has_pending_orientation_restore(&self) -> bool {
        self.orientation.has_pending_restore()
    }
}
