//! Page indicator visibility control

/// Dots under the workspace marking the active page
#[derive(Clone, Debug)]
pub struct PageIndicator {
    /// Whether the indicator is currently shown
    pub visible: bool,
    /// Last scroll position the indicator was shown at in px
    pub scroll_position: f32,
    auto_hide: bool,
}

impl Default for PageIndicator {
    fn default() -> Self {
        Self {
            visible: false,
            scroll_position: 0.0,
            auto_hide: true,
        }
    }
}

impl PageIndicator {
    /// Create a hidden indicator with auto-hide on
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the indicator at the given scroll position
    pub fn show_at_scroll(&mut self, scroll_x: f32) {
        self.visible = true;
        self.scroll_position = scroll_x;
    }

    /// Control whether the indicator fades out after inactivity
    pub fn set_should_auto_hide(&mut self, auto_hide: bool) {
        self.auto_hide = auto_hide;
    }

    /// Whether the indicator fades out after inactivity
    #[inline]
    pub fn should_auto_hide(&self) -> bool {
        self.auto_hide
    }
}
