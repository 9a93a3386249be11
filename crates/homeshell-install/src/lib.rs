//! Shortcut install queueing for Homeshell
//!
//! The system delivers shortcut install/uninstall requests at arbitrary
//! times. During phases where the workspace data model must not change
//! (an active drag, a paused activity, a running loader) the launcher puts
//! this queue into a buffering mode; dropping the last buffering reason
//! flushes everything that arrived in the meantime.

mod queue;
mod request;

pub use queue::{InstallQueue, QueueReason};
pub use request::ShortcutRequest;
