//! Paged workspace model
//!
//! Holds the page geometry the transform math reads and the shortcut data
//! model the install queue flushes into. Rendering lives on the platform
//! side.

mod page_indicator;

pub use page_indicator::PageIndicator;

use serde::{Deserialize, Serialize};

/// Geometry of one workspace page as laid out by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspacePage {
    /// Top offset of the page inside the workspace in px
    pub top: f32,
    /// Laid-out page height in px
    pub height: f32,
}

impl WorkspacePage {
    /// Create a page from its layout
    #[inline]
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }
}

/// Paged workspace container
#[derive(Clone, Debug, Default)]
pub struct Workspace {
    /// Top offset of the container in its parent in px
    pub top: f32,
    /// Laid-out container height in px
    pub height: f32,
    /// Height of the scrollable viewport in px
    pub viewport_height: f32,
    /// Height of a page child in the normal state in px
    pub normal_child_height: f32,
    /// Current horizontal scroll position in px
    pub scroll_x: f32,
    /// Pages in layout order
    pub pages: Vec<WorkspacePage>,
    /// Page indicator shown under the pages
    pub page_indicator: PageIndicator,
    shortcuts: Vec<String>,
}

impl Workspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages
    #[inline]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// First page, if any
    #[inline]
    pub fn first_page(&self) -> Option<&WorkspacePage> {
        self.pages.first()
    }

    /// Append a page
    pub fn add_page(&mut self, page: WorkspacePage) {
        self.pages.push(page);
    }

    /// Pinned shortcut ids in workspace order
    #[inline]
    pub fn shortcuts(&self) -> &[String] {
        &self.shortcuts
    }

    /// Pin a shortcut; duplicates are ignored
    pub fn add_shortcut(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.shortcuts.iter().any(|existing| *existing == id) {
            self.shortcuts.push(id);
        }
    }

    /// Unpin a shortcut; returns whether it was present
    pub fn remove_shortcut(&mut self, id: &str) -> bool {
        let before = self.shortcuts.len();
        self.shortcuts.retain(|existing| existing != id);
        self.shortcuts.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_pages() {
        let mut workspace = Workspace::new();
        assert_eq!(workspace.page_count(), 0);
        assert!(workspace.first_page().is_none());

        workspace.add_page(WorkspacePage::new(100.0, 1000.0));
        workspace.add_page(WorkspacePage::new(100.0, 1000.0));

        assert_eq!(workspace.page_count(), 2);
        assert!((workspace.first_page().unwrap().top - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_workspace_shortcuts() {
        let mut workspace = Workspace::new();

        workspace.add_shortcut("com.example.mail");
        workspace.add_shortcut("com.example.camera");
        workspace.add_shortcut("com.example.mail");

        assert_eq!(workspace.shortcuts().len(), 2);
        assert!(workspace.remove_shortcut("com.example.mail"));
        assert!(!workspace.remove_shortcut("com.example.mail"));
        assert_eq!(workspace.shortcuts(), ["com.example.camera"]);
    }
}
