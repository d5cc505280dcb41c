//! Core dialog types: identifiers, options, lifecycle hooks and layout
//!
//! A dialog owns two rectangles: the backdrop covering the whole viewport
//! (outside-click detection, initial invisibility) and the content box the
//! body is rendered into. Layout resolves the configured size against the
//! viewport and centers the content box unless an explicit position or an
//! anchor is given.

use rand::distributions::Alphanumeric;
use rand::Rng;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Opaque identifier assigned to each dialog at creation.
///
/// Randomly generated; used only as a registry key, not as a uniqueness
/// guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialogId(String);

impl DialogId {
    /// Generate a new random identifier
    pub fn generate() -> Self {
        let id: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(7)
            .map(|c| (c as char).to_ascii_lowercase())
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DialogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One configured size dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// Exact size in terminal cells
    Cells(u16),
    /// Percentage of the corresponding viewport dimension
    Percent(u16),
}

impl Extent {
    /// Resolve against a viewport dimension
    pub fn resolve(self, viewport_dim: u16) -> u16 {
        match self {
            Self::Cells(n) => n,
            Self::Percent(p) => ((viewport_dim as u32 * p as u32) / 100) as u16,
        }
    }
}

/// Zero-argument lifecycle callback
pub type DialogHook = Box<dyn FnMut() + Send>;

/// Lifecycle hooks invoked at show/close transitions
#[derive(Default)]
pub struct DialogHooks {
    pub on_before_show: Option<DialogHook>,
    pub on_show: Option<DialogHook>,
    pub on_close: Option<DialogHook>,
}

impl DialogHooks {
    pub fn on_before_show(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.on_before_show = Some(Box::new(hook));
        self
    }

    pub fn on_show(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.on_show = Some(Box::new(hook));
        self
    }

    pub fn on_close(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for DialogHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogHooks")
            .field("on_before_show", &self.on_before_show.is_some())
            .field("on_show", &self.on_show.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// Dialog configuration, captured immutably at construction.
///
/// Explicit settings always win over defaults; concerns a dialog does not
/// recognize are simply absent from this struct and therefore inert.
#[derive(Debug)]
pub struct DialogOptions {
    /// Extra styling for the content box
    pub content_style: Option<Style>,

    /// Extra styling for the backdrop
    pub backdrop_style: Option<Style>,

    /// Explicit size; if absent, computed from the rendered content size
    pub size: Option<(Extent, Extent)>,

    /// Explicit offset from the viewport top-left; if absent, centered
    pub position: Option<(u16, u16)>,

    /// Show immediately after construction
    pub auto_show: bool,

    /// Self-close after this many seconds
    pub auto_close: Option<u64>,

    /// Close when Escape is pressed outside a text input
    pub close_on_esc: bool,

    /// Close when the backdrop is clicked outside the content box
    pub close_on_outside_click: bool,

    /// Lifecycle hooks
    pub hooks: DialogHooks,

    /// Anchor rect; the dialog is placed adjacent to it instead of centered
    pub link_to: Option<Rect>,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            content_style: None,
            backdrop_style: None,
            size: None,
            position: None,
            auto_show: true,
            auto_close: None,
            close_on_esc: true,
            close_on_outside_click: true,
            hooks: DialogHooks::default(),
            link_to: None,
        }
    }
}

impl DialogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_style(mut self, style: Style) -> Self {
        self.content_style = Some(style);
        self
    }

    pub fn backdrop_style(mut self, style: Style) -> Self {
        self.backdrop_style = Some(style);
        self
    }

    pub fn size(mut self, width: Extent, height: Extent) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn position(mut self, x: u16, y: u16) -> Self {
        self.position = Some((x, y));
        self
    }

    pub fn auto_show(mut self, auto_show: bool) -> Self {
        self.auto_show = auto_show;
        self
    }

    pub fn auto_close(mut self, seconds: u64) -> Self {
        self.auto_close = Some(seconds);
        self
    }

    pub fn close_on_esc(mut self, close: bool) -> Self {
        self.close_on_esc = close;
        self
    }

    pub fn close_on_outside_click(mut self, close: bool) -> Self {
        self.close_on_outside_click = close;
        self
    }

    pub fn hooks(mut self, hooks: DialogHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn link_to(mut self, anchor: Rect) -> Self {
        self.link_to = Some(anchor);
        self
    }
}

/// Resolved placement of a dialog's two rectangles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    /// Outer backdrop, always the full viewport
    pub backdrop: Rect,
    /// Inner content box
    pub content: Rect,
}

impl DialogLayout {
    /// Resolve the layout for the given options and measured content size.
    ///
    /// Size resolution per axis: an exact cell count is used directly, a
    /// percentage is resolved against the viewport dimension, otherwise the
    /// measured content box is the fallback. Without an explicit position
    /// the content box is centered; with an anchor it is placed directly
    /// below the anchor with position offsets as plain margins.
    pub fn calculate(options: &DialogOptions, content_size: (u16, u16), viewport: Rect) -> Self {
        let width = options
            .size
            .map(|(w, _)| w.resolve(viewport.width))
            .unwrap_or(content_size.0)
            .min(viewport.width);
        let height = options
            .size
            .map(|(_, h)| h.resolve(viewport.height))
            .unwrap_or(content_size.1)
            .min(viewport.height);

        let (x, y) = if let Some(anchor) = options.link_to {
            let (off_x, off_y) = options.position.unwrap_or((0, 0));
            (
                anchor.x.saturating_add(off_x),
                anchor.y.saturating_add(anchor.height).saturating_add(off_y),
            )
        } else {
            match options.position {
                Some((x, y)) => (viewport.x.saturating_add(x), viewport.y.saturating_add(y)),
                None => (
                    viewport.x + viewport.width.saturating_sub(width) / 2,
                    viewport.y + viewport.height.saturating_sub(height) / 2,
                ),
            }
        };

        Self {
            backdrop: viewport,
            content: Rect {
                x,
                y,
                width,
                height,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: u16, height: u16) -> Rect {
        Rect::new(0, 0, width, height)
    }

    #[test]
    fn test_id_generation_shape() {
        let id = DialogId::generate();
        assert_eq!(id.as_str().len(), 7);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_extent_resolution() {
        assert_eq!(Extent::Cells(42).resolve(100), 42);
        assert_eq!(Extent::Percent(50).resolve(200), 100);
        // Percentage law: 30% of 800 resolves to 240
        assert_eq!(Extent::Percent(30).resolve(800), 240);
    }

    #[test]
    fn test_centering_law() {
        let options = DialogOptions::new().size(Extent::Cells(40), Extent::Cells(10));
        let layout = DialogLayout::calculate(&options, (0, 0), viewport(100, 30));

        assert_eq!(layout.content.x, (100 - 40) / 2);
        assert_eq!(layout.content.y, (30 - 10) / 2);
        assert_eq!(layout.backdrop, viewport(100, 30));
    }

    #[test]
    fn test_percentage_height_centers() {
        // Viewport area must stay under Rect::new's u16::MAX clamp
        let options = DialogOptions::new().size(Extent::Percent(50), Extent::Percent(30));
        let layout = DialogLayout::calculate(&options, (0, 0), viewport(80, 800));

        assert_eq!(layout.content.width, 40);
        assert_eq!(layout.content.height, 240);
        assert_eq!(layout.content.y, (800 - 240) / 2);
    }

    #[test]
    fn test_explicit_position_is_margin() {
        let options = DialogOptions::new()
            .size(Extent::Cells(10), Extent::Cells(5))
            .position(3, 4);
        let layout = DialogLayout::calculate(&options, (0, 0), viewport(100, 30));

        assert_eq!(layout.content.x, 3);
        assert_eq!(layout.content.y, 4);
    }

    #[test]
    fn test_measured_fallback() {
        let options = DialogOptions::new();
        let layout = DialogLayout::calculate(&options, (24, 6), viewport(100, 30));

        assert_eq!(layout.content.width, 24);
        assert_eq!(layout.content.height, 6);
        assert_eq!(layout.content.x, (100 - 24) / 2);
    }

    #[test]
    fn test_zero_size_content_degrades() {
        let options = DialogOptions::new();
        let layout = DialogLayout::calculate(&options, (0, 0), viewport(100, 30));

        assert_eq!(layout.content.width, 0);
        assert_eq!(layout.content.height, 0);
    }

    #[test]
    fn test_anchored_placement() {
        let anchor = Rect::new(10, 5, 20, 3);
        let options = DialogOptions::new()
            .size(Extent::Cells(15), Extent::Cells(4))
            .link_to(anchor);
        let layout = DialogLayout::calculate(&options, (0, 0), viewport(100, 30));

        // Placed directly below the anchor, no centering
        assert_eq!(layout.content.x, 10);
        assert_eq!(layout.content.y, 8);

        // Offsets act as plain margins from the anchor
        let options = DialogOptions::new()
            .size(Extent::Cells(15), Extent::Cells(4))
            .position(2, 1)
            .link_to(anchor);
        let layout = DialogLayout::calculate(&options, (0, 0), viewport(100, 30));
        assert_eq!(layout.content.x, 12);
        assert_eq!(layout.content.y, 9);
    }

    #[test]
    fn test_size_clamped_to_viewport() {
        let options = DialogOptions::new().size(Extent::Cells(500), Extent::Percent(100));
        let layout = DialogLayout::calculate(&options, (0, 0), viewport(80, 24));

        assert_eq!(layout.content.width, 80);
        assert_eq!(layout.content.height, 24);
    }
}
