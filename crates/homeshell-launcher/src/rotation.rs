//! Screen orientation lock control

use serde::{Deserialize, Serialize};

use crate::scheduler::TaskHandle;

/// Orientation requested from the platform window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestedOrientation {
    /// Follow the sensor
    #[default]
    Unspecified,
    /// Stay in the current orientation
    Locked,
}

/// Tracks the orientation request and the pending restore task
#[derive(Clone, Debug, Default)]
pub struct OrientationController {
    /// Whether the user has enabled rotation for the launcher
    pub rotation_enabled: bool,
    requested: RequestedOrientation,
    pub(crate) pending_restore: Option<TaskHandle>,
}

impl OrientationController {
    /// Create a controller with rotation disabled and no lock requested
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently requested orientation
    #[inline]
    pub fn requested(&self) -> RequestedOrientation {
        self.requested
    }

    /// Check if a restore to `Unspecified` is scheduled
    #[inline]
    pub fn has_pending_restore(&self) -> bool {
        self.pending_restore.is_some()
    }

    pub(crate) fn set_requested(&mut self, requested: RequestedOrientation) {
        self.requested = requested;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_defaults() {
        let controller = OrientationController::new();

        assert!(!controller.rotation_enabled);
        assert_eq!(controller.requested(), RequestedOrientation::Unspecified);
        assert!(!controller.has_pending_restore());
    }
}
