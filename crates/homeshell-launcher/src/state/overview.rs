//! Overview state for workspace editing

use super::{centered_band_translation, ScaleAndTranslation, StateDefinition};
use crate::launcher::Launcher;

impl StateDefinition {
    /// Shrink the workspace into the band above the overview panel
    pub(crate) fn overview_scale_and_translation(&self, launcher: &Launcher) -> ScaleAndTranslation {
        let grid = &launcher.device;
        let ws = &launcher.workspace;
        if ws.page_count() == 0 {
            return ScaleAndTranslation::IDENTITY;
        }

        let scale = grid.overview_shrink_factor;
        let insets = launcher.drag_layer.insets;

        let shrunk_top = insets.top;
        let shrunk_bottom = ws.viewport_height - insets.bottom - grid.overview_panel_px;

        ScaleAndTranslation {
            scale,
            translation_y: centered_band_translation(ws, scale, shrunk_top, shrunk_bottom),
        }
    }
}
