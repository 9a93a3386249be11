//! Home screen launcher state engine
//!
//! State definitions for the launcher UI (normal, spring loaded, overview),
//! the host context they act on, and the workspace transform math. The
//! platform layer owns rendering, input, and the state machine driving
//! transitions; this crate supplies the per-state behavior it dispatches to.

pub mod device;
pub mod drag_layer;
pub mod launcher;
pub mod math;
pub mod persistence;
pub mod rotation;
pub mod scheduler;
pub mod state;
pub mod workspace;

pub use device::DeviceProfile;
pub use drag_layer::DragLayer;
pub use launcher::Launcher;
pub use math::Insets;
pub use persistence::Snapshot;
pub use rotation::{OrientationController, RequestedOrientation};
pub use scheduler::{DeferredAction, Scheduler, TaskHandle};
pub use state::{
    ContainerType, FocusTarget, LauncherStates, ScaleAndTranslation, StateDefinition, StateFlags,
    StateKind, NORMAL_TRANSITION_MS, OVERVIEW_TRANSITION_MS, RESTORE_ORIENTATION_DELAY_MS,
    SPRING_LOADED_TRANSITION_MS,
};
pub use workspace::{PageIndicator, Workspace, WorkspacePage};

pub use homeshell_install::{InstallQueue, QueueReason, ShortcutRequest};
