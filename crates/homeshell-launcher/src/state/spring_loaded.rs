//! Spring loaded state used during drag and drop

use homeshell_install::QueueReason;

use super::{
    centered_band_translation, FocusTarget, ScaleAndTranslation, StateDefinition,
    RESTORE_ORIENTATION_DELAY_MS,
};
use crate::launcher::Launcher;

impl StateDefinition {
    /// Shrink the workspace into the band between the drop target bar and
    /// the reserved space above the bottom inset
    ///
    /// Falls back to the identity transform when the device is in
    /// vertical-bar layout or the workspace has no pages.
    pub(crate) fn spring_loaded_scale_and_translation(
        &self,
        launcher: &Launcher,
    ) -> ScaleAndTranslation {
        let grid = &launcher.device;
        let ws = &launcher.workspace;
        if grid.vertical_bar_layout || ws.page_count() == 0 {
            return ScaleAndTranslation::IDENTITY;
        }

        let scale = grid.spring_load_shrink_factor;
        let insets = launcher.drag_layer.insets;

        let shrunk_top = insets.top + grid.drop_target_bar_px;
        let shrunk_bottom = ws.viewport_height
            - insets.bottom
            - grid.workspace_padding.bottom
            - grid.spring_load_bottom_space_px;

        ScaleAndTranslation {
            scale,
            translation_y: centered_band_translation(ws, scale, shrunk_top, shrunk_bottom),
        }
    }

    pub(crate) fn spring_loaded_on_enabled(&self, launcher: &mut Launcher, _now_ms: f64) {
        let scroll_x = launcher.workspace.scroll_x;
        launcher.workspace.page_indicator.show_at_scroll(scroll_x);
        launcher.workspace.page_indicator.set_should_auto_hide(false);

        // Keep the screen from rotating under an active drag.
        launcher.lock_orientation();

        // Shortcut changes arriving mid drag wait until the state exits.
        launcher.install_queue.enable(QueueReason::DRAG_AND_DROP);
    }

    pub(crate) fn spring_loaded_on_disabled(&self, launcher: &mut Launcher, now_ms: f64) {
        launcher.workspace.page_indicator.set_should_auto_hide(true);

        // Restore after a short delay so releasing a drag does not rotate
        // the screen immediately.
        launcher.schedule_orientation_restore(now_ms + RESTORE_ORIENTATION_DELAY_MS as f64);

        let flushed = launcher
            .install_queue
            .disable_and_flush(QueueReason::DRAG_AND_DROP);
        for request in flushed {
            launcher.apply_shortcut_request(request);
        }
    }

    /// Spring loaded never forces focus anywhere
    pub(crate) fn spring_loaded_final_focus(&self, _launcher: &Launcher) -> Option<FocusTarget> {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::launcher::Launcher;
    use crate::math::Insets;
    use crate::state::ScaleAndTranslation;
    use crate::workspace::WorkspacePage;

    /// Host with the fixed metrics used by the arithmetic tests
    fn shrink_fixture() -> Launcher {
        let mut launcher = Launcher::new();
        launcher.device.spring_load_shrink_factor = 0.5;
        launcher.device.drop_target_bar_px = 30.0;
        launcher.device.workspace_padding = Insets::new(0.0, 10.0, 0.0, 0.0);
        launcher.device.spring_load_bottom_space_px = 40.0;
        launcher.drag_layer.insets = Insets::new(50.0, 20.0, 0.0, 0.0);
        launcher.workspace.top = 0.0;
        launcher.workspace.height = 800.0;
        launcher.workspace.viewport_height = 1500.0;
        launcher.workspace.normal_child_height = 1000.0;
        launcher.workspace.add_page(WorkspacePage::new(100.0, 1000.0));
        launcher
    }

    #[test]
    fn test_transform_exact_arithmetic() {
        let launcher = shrink_fixture();
        let transform = launcher
            .states
            .spring_loaded
            .workspace_scale_and_translation(&launcher);

        // scaled height 500, band [80, 1430], desired cell top 505,
        // naive cell top 250 -> (505 - 250) / 0.5
        assert!((transform.scale - 0.5).abs() < 1e-6);
        assert!((transform.translation_y - 510.0).abs() < 1e-6);
    }

    #[test]
    fn test_vertical_bar_layout_uses_identity() {
        let mut launcher = shrink_fixture();
        launcher.device.vertical_bar_layout = true;

        let transform = launcher
            .states
            .spring_loaded
            .workspace_scale_and_translation(&launcher);

        assert_eq!(transform, ScaleAndTranslation::IDENTITY);
    }

    #[test]
    fn test_zero_pages_uses_identity() {
        let mut launcher = shrink_fixture();
        launcher.workspace.pages.clear();

        let transform = launcher
            .states
            .spring_loaded
            .workspace_scale_and_translation(&launcher);

        assert_eq!(transform, ScaleAndTranslation::IDENTITY);
    }

    #[test]
    fn test_scale_is_always_the_shrink_factor() {
        let mut launcher = shrink_fixture();
        launcher.device.spring_load_shrink_factor = 0.8;

        let transform = launcher
            .states
            .spring_loaded
            .workspace_scale_and_translation(&launcher);

        assert!((transform.scale - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_final_focus_is_none() {
        let mut launcher = shrink_fixture();

        let state = launcher.states.spring_loaded;
        assert!(state.final_focus(&launcher).is_none());

        // Stays none regardless of host configuration.
        launcher.device.vertical_bar_layout = true;
        launcher.orientation.rotation_enabled = true;
        launcher.workspace.pages.clear();
        assert!(state.final_focus(&launcher).is_none());
    }
}
