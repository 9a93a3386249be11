//! Snapshot of restorable launcher state

use serde::{Deserialize, Serialize};

use crate::launcher::Launcher;
use crate::state::{StateFlags, StateKind};

/// Snapshot of launcher state for persistence across recreation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version for migration support
    pub version: u32,
    /// State to restore into
    pub state: StateKind,
    /// Workspace scroll position in px
    pub scroll_x: f32,
    /// Pinned shortcut ids in workspace order
    pub shortcuts: Vec<String>,
}

impl Snapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Capture the restorable parts of a launcher
    ///
    /// A state flagged do-not-restore is captured as the normal state.
    pub fn capture(launcher: &Launcher) -> Self {
        let state = if launcher.state().flags.contains(StateFlags::DO_NOT_RESTORE) {
            StateKind::Normal
        } else {
            launcher.state_kind()
        };
        Self {
            version: Self::CURRENT_VERSION,
            state,
            scroll_x: launcher.workspace.scroll_x,
            shortcuts: launcher.workspace.shortcuts().to_vec(),
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // Add migration logic as versions increase
        self.version = Self::CURRENT_VERSION;
    }

    /// Apply this snapshot to a freshly created launcher
    pub fn restore(&self, launcher: &mut Launcher, now_ms: f64) {
        launcher.workspace.scroll_x = self.scroll_x;
        for id in &self.shortcuts {
            launcher.workspace.add_shortcut(id.clone());
        }
        launcher.goto_state(self.state, now_ms);
    }
}
