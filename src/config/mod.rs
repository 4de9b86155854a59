//! Configuration module.

/// Border strip thickness, in pixels, used when nothing else is configured.
pub const DEFAULT_BORDER_WIDTH: f64 = 4.0;

/// Per-instance spotlight configuration.
///
/// Read once at each `show()`: mutating the configuration while a panel set
/// is on screen takes effect at the next hide/show cycle, never mid-flight.
///
/// Built with consuming setters; numeric setters clamp negatives to zero so
/// the non-negative invariant on `indent` and `border_width` holds by
/// construction.
///
/// # Examples
///
/// ```
/// use spotlight_core::SpotlightConfig;
///
/// let config = SpotlightConfig::default().border(true).indent(10.0);
/// assert!(config.has_border());
/// assert_eq!(config.indent_px(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightConfig {
    border: bool,
    overlay: bool,
    indent: f64,
    border_width: f64,
    scroll_to_top: bool,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            border: false,
            overlay: true,
            indent: 0.0,
            border_width: DEFAULT_BORDER_WIDTH,
            scroll_to_top: false,
        }
    }
}

impl SpotlightConfig {
    /// Alias for [`SpotlightConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the four border strips.
    #[must_use]
    pub fn border(mut self, enabled: bool) -> Self {
        self.border = enabled;
        self
    }

    /// Enables or disables the transparent click-intercepting cover.
    #[must_use]
    pub fn overlay(mut self, enabled: bool) -> Self {
        self.overlay = enabled;
        self
    }

    /// Gap, in pixels, between the target's true bounds and the panels.
    /// Negative values clamp to zero.
    #[must_use]
    pub fn indent(mut self, px: f64) -> Self {
        self.indent = px.max(0.0);
        self
    }

    /// Border strip thickness in pixels. Negative values clamp to zero.
    #[must_use]
    pub fn border_width(mut self, px: f64) -> Self {
        self.border_width = px.max(0.0);
        self
    }

    /// Scrolls the page to the top before presenting the panel set.
    #[must_use]
    pub fn scroll_to_top(mut self, enabled: bool) -> Self {
        self.scroll_to_top = enabled;
        self
    }

    /// Whether border strips are created on show.
    pub fn has_border(&self) -> bool {
        self.border
    }

    /// Whether the overlay cover is created on show.
    pub fn has_overlay(&self) -> bool {
        self.overlay
    }

    /// The configured indent in pixels, never negative.
    pub fn indent_px(&self) -> f64 {
        self.indent
    }

    /// The configured border strip thickness in pixels, never negative.
    pub fn border_width_px(&self) -> f64 {
        self.border_width
    }

    /// Whether show() scrolls the page to the top first.
    pub fn scrolls_to_top(&self) -> bool {
        self.scroll_to_top
    }
}
