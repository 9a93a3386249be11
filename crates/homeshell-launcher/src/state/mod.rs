//! Launcher UI states
//!
//! Each state is an immutable `StateDefinition` record; behavior dispatches
//! on the state kind:
//! - `Normal`: the default workspace view
//! - `SpringLoaded`: shrunk workspace shown during drag and drop
//! - `Overview`: workspace editing view

mod overview;
mod spring_loaded;

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::launcher::Launcher;
use crate::workspace::Workspace;

/// Transition duration into the normal state in ms
pub const NORMAL_TRANSITION_MS: u32 = 270;
/// Transition duration into the spring loaded state in ms
pub const SPRING_LOADED_TRANSITION_MS: u32 = 150;
/// Transition duration into the overview state in ms
pub const OVERVIEW_TRANSITION_MS: u32 = 250;
/// Delay before the orientation follows the sensor again after a drag ends
pub const RESTORE_ORIENTATION_DELAY_MS: u32 = 500;

/// Kind of launcher state, used to dispatch state behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateKind {
    /// Default workspace view
    #[default]
    Normal,
    /// Shrunk workspace shown during drag and drop
    SpringLoaded,
    /// Workspace editing view
    Overview,
}

/// Display category a state belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerType {
    /// The workspace pager
    Workspace,
    /// The pinned shortcut row
    Hotseat,
    /// An open folder
    Folder,
    /// The overview meta view
    Overview,
}

/// Behavior flag bits for a state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateFlags(u32);

impl StateFlags {
    /// No flags set
    pub const NONE: StateFlags = StateFlags(0);
    /// Dim the wallpaper behind the workspace
    pub const SHOW_SCRIM: StateFlags = StateFlags(1 << 0);
    /// Show neighboring pages alongside the current one
    pub const MULTI_PAGE: StateFlags = StateFlags(1 << 1);
    /// Suppress accessibility focus on workspace items
    pub const DISABLE_ACCESSIBILITY: StateFlags = StateFlags(1 << 2);
    /// Never restore into this state after recreation
    pub const DO_NOT_RESTORE: StateFlags = StateFlags(1 << 3);

    /// Check if all bits of `other` are set
    #[inline]
    pub const fn contains(self, other: StateFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check if no flag is set
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for StateFlags {
    type Output = StateFlags;

    fn bitor(self, rhs: StateFlags) -> StateFlags {
        StateFlags(self.0 | rhs.0)
    }
}

/// View the host should focus once a state is fully active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    /// The workspace pager
    Workspace,
}

/// Scale and vertical translation applied to the workspace in a state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleAndTranslation {
    /// Uniform scale factor
    pub scale: f32,
    /// Vertical translation in pre-scale px
    pub translation_y: f32,
}

impl ScaleAndTranslation {
    /// No scaling and no translation
    pub const IDENTITY: ScaleAndTranslation = ScaleAndTranslation {
        scale: 1.0,
        translation_y: 0.0,
    };
}

/// Immutable definition of one launcher UI state
///
/// Constructed once at launcher init and never mutated. The host state
/// machine queries the transform during transitions and invokes the
/// enable/disable hooks at its transition points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateDefinition {
    /// Ordinal used by the host state machine
    pub id: u32,
    /// Kind the behavior dispatches on
    pub kind: StateKind,
    /// Display category
    pub container: ContainerType,
    /// Transition duration into this state in ms
    pub transition_ms: u32,
    /// Workspace opacity once the state is settled
    pub final_opacity: f32,
    /// Behavior flags
    pub flags: StateFlags,
}

impl StateDefinition {
    /// Definition of the normal state
    pub fn normal(id: u32) -> Self {
        Self {
            id,
            kind: StateKind::Normal,
            container: ContainerType::Workspace,
            transition_ms: NORMAL_TRANSITION_MS,
            final_opacity: 1.0,
            flags: StateFlags::NONE,
        }
    }

    /// Definition of the spring loaded state
    pub fn spring_loaded(id: u32) -> Self {
        Self {
            id,
            kind: StateKind::SpringLoaded,
            container: ContainerType::Overview,
            transition_ms: SPRING_LOADED_TRANSITION_MS,
            final_opacity: 1.0,
            flags: StateFlags::SHOW_SCRIM
                | StateFlags::MULTI_PAGE
                | StateFlags::DISABLE_ACCESSIBILITY
                | StateFlags::DO_NOT_RESTORE,
        }
    }

    /// Definition of the overview state
    pub fn overview(id: u32) -> Self {
        Self {
            id,
            kind: StateKind::Overview,
            container: ContainerType::Overview,
            transition_ms: OVERVIEW_TRANSITION_MS,
            final_opacity: 1.0,
            flags: StateFlags::SHOW_SCRIM | StateFlags::MULTI_PAGE,
        }
    }

    /// Scale and translation the workspace takes in this state
    pub fn workspace_scale_and_translation(&self, launcher: &Launcher) -> ScaleAndTranslation {
        match self.kind {
            StateKind::Normal => ScaleAndTranslation::IDENTITY,
            StateKind::SpringLoaded => self.spring_loaded_scale_and_translation(launcher),
            StateKind::Overview => self.overview_scale_and_translation(launcher),
        }
    }

    /// Side effects when the host transitions into this state
    pub fn on_enabled(&self, launcher: &mut Launcher, now_ms: f64) {
        match self.kind {
            StateKind::SpringLoaded => self.spring_loaded_on_enabled(launcher, now_ms),
            StateKind::Normal | StateKind::Overview => {}
        }
    }

    /// Side effects when the host transitions out of this state
    pub fn on_disabled(&self, launcher: &mut Launcher, now_ms: f64) {
        match self.kind {
            StateKind::SpringLoaded => self.spring_loaded_on_disabled(launcher, now_ms),
            StateKind::Normal | StateKind::Overview => {}
        }
    }

    /// View to focus once this state is fully active
    pub fn final_focus(&self, launcher: &Launcher) -> Option<FocusTarget> {
        match self.kind {
            StateKind::SpringLoaded => self.spring_loaded_final_focus(launcher),
            StateKind::Normal | StateKind::Overview => Some(FocusTarget::Workspace),
        }
    }
}

/// The fixed set of state definitions for one launcher instance
#[derive(Clone, Copy, Debug)]
pub struct LauncherStates {
    /// Default workspace view
    pub normal: StateDefinition,
    /// Shrunk workspace shown during drag and drop
    pub spring_loaded: StateDefinition,
    /// Workspace editing view
    pub overview: StateDefinition,
}

impl Default for LauncherStates {
    fn default() -> Self {
        Self::new()
    }
}

impl LauncherStates {
    /// Build the definitions with sequential ids
    pub fn new() -> Self {
        Self {
            normal: StateDefinition::normal(0),
            spring_loaded: StateDefinition::spring_loaded(1),
            overview: StateDefinition::overview(2),
        }
    }

    /// Definition for a state kind
    pub fn by_kind(&self, kind: StateKind) -> StateDefinition {
        match kind {
            StateKind::Normal => self.normal,
            StateKind::SpringLoaded => self.spring_loaded,
            StateKind::Overview => self.overview,
        }
    }
}

/// Translation placing the first page centered inside a vertical band
///
/// `shrunk_top` and `shrunk_bottom` bound the band in viewport px. Scaling
/// happens about the container center, so the translation compensates for
/// where the first page lands after that naive scale. The result is in
/// pre-scale px, matching how the host applies workspace translation.
pub(crate) fn centered_band_translation(
    ws: &Workspace,
    scale: f32,
    shrunk_top: f32,
    shrunk_bottom: f32,
) -> f32 {
    let scaled_height = scale * ws.normal_child_height;
    let total_shrunk_space = shrunk_bottom - shrunk_top;
    let desired_cell_top = shrunk_top + (total_shrunk_space - scaled_height) / 2.0;

    let half_height = ws.height / 2.0;
    let my_center = ws.top + half_height;
    let cell_top_from_center = half_height - ws.first_page().map(|page| page.top).unwrap_or(0.0);
    let actual_cell_top = my_center - cell_top_from_center * scale;

    (desired_cell_top - actual_cell_top) / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_flags_bits() {
        let flags = StateFlags::SHOW_SCRIM | StateFlags::DO_NOT_RESTORE;

        assert!(flags.contains(StateFlags::SHOW_SCRIM));
        assert!(flags.contains(StateFlags::DO_NOT_RESTORE));
        assert!(!flags.contains(StateFlags::MULTI_PAGE));
        assert!(StateFlags::NONE.is_empty());
    }

    #[test]
    fn test_spring_loaded_definition() {
        let state = StateDefinition::spring_loaded(1);

        assert_eq!(state.kind, StateKind::SpringLoaded);
        assert_eq!(state.container, ContainerType::Overview);
        assert_eq!(state.transition_ms, SPRING_LOADED_TRANSITION_MS);
        assert!((state.final_opacity - 1.0).abs() < 0.001);
        assert!(state.flags.contains(StateFlags::SHOW_SCRIM));
        assert!(state.flags.contains(StateFlags::MULTI_PAGE));
        assert!(state.flags.contains(StateFlags::DISABLE_ACCESSIBILITY));
        assert!(state.flags.contains(StateFlags::DO_NOT_RESTORE));
    }

    #[test]
    fn test_states_by_kind() {
        let states = LauncherStates::new();

        assert_eq!(states.by_kind(StateKind::Normal).id, 0);
        assert_eq!(states.by_kind(StateKind::SpringLoaded).id, 1);
        assert_eq!(states.by_kind(StateKind::Overview).id, 2);
    }

    #[test]
    fn test_normal_state_is_identity() {
        let launcher = Launcher::new();
        let transform = launcher
            .states
            .normal
            .workspace_scale_and_translation(&launcher);

        assert_eq!(transform, ScaleAndTranslation::IDENTITY);
    }
}
