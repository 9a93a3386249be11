//! Device profile with grid and layout metrics

use serde::{Deserialize, Serialize};

use crate::math::Insets;

/// Layout metrics for the current device configuration
///
/// Computed by the platform layer on every configuration change and treated
/// as read-only by the state engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Landscape phone layout with the hotseat along the side
    pub vertical_bar_layout: bool,
    /// Width of one workspace cell in px
    pub cell_width: f32,
    /// Height of one workspace cell in px
    pub cell_height: f32,
    /// Height of the drop target bar shown during drag in px
    pub drop_target_bar_px: f32,
    /// Padding around the workspace content
    pub workspace_padding: Insets,
    /// Workspace scale while spring loaded
    pub spring_load_shrink_factor: f32,
    /// Space kept clear under the shrunk workspace while spring loaded in px
    pub spring_load_bottom_space_px: f32,
    /// Workspace scale in overview
    pub overview_shrink_factor: f32,
    /// Height of the overview panel under the workspace in px
    pub overview_panel_px: f32,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            vertical_bar_layout: false,
            cell_width: 180.0,
            cell_height: 210.0,
            drop_target_bar_px: 140.0,
            workspace_padding: Insets::new(110.0, 150.0, 60.0, 60.0),
            spring_load_shrink_factor: 0.8,
            spring_load_bottom_space_px: 24.0,
            overview_shrink_factor: 0.7,
            overview_panel_px: 160.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_portrait_phone() {
        let profile = DeviceProfile::default();

        assert!(!profile.vertical_bar_layout);
        assert!(profile.spring_load_shrink_factor > 0.0);
        assert!(profile.spring_load_shrink_factor < 1.0);
        assert!(profile.overview_shrink_factor < profile.spring_load_shrink_factor);
    }
}
