//! Drag overlay layer geometry

use serde::{Deserialize, Serialize};

use crate::math::Insets;

/// The overlay layer hosting drag-and-drop visuals
///
/// Only its window insets matter to the state engine; rendering and event
/// routing stay on the platform side.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DragLayer {
    /// Current window insets of the overlay
    pub insets: Insets,
}

impl DragLayer {
    /// Create a drag layer with zero insets
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the window insets
    #[inline]
    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
    }
}
