//! Shortcut install/uninstall requests

use serde::{Deserialize, Serialize};

/// A pending shortcut change submitted by the system
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShortcutRequest {
    /// Add a shortcut to the workspace
    Install {
        /// Stable shortcut identifier (package or component name)
        id: String,
    },
    /// Remove a shortcut from the workspace
    Uninstall {
        /// Stable shortcut identifier (package or component name)
        id: String,
    },
}

impl ShortcutRequest {
    /// Create an install request
    pub fn install(id: impl Into<String>) -> Self {
        ShortcutRequest::Install { id: id.into() }
    }

    /// Create an uninstall request
    pub fn uninstall(id: impl Into<String>) -> Self {
        ShortcutRequest::Uninstall { id: id.into() }
    }

    /// The shortcut identifier this request refers to
    pub fn id(&self) -> &str {
        match self {
            ShortcutRequest::Install { id } => id,
            ShortcutRequest::Uninstall { id } => id,
        }
    }
}
