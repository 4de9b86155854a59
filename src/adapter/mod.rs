//! The host boundary.
//!
//! Everything impure (node creation, styling, layout reads, event
//! subscription) happens behind [`HostAdapter`]. The core never references
//! framework types: a DOM adapter, a server-side renderer, and the test fake
//! are all just implementations of this trait, driven through
//! `Rc<dyn HostAdapter>` on one single-threaded event loop.

use crate::model::{PieceKind, PointerEvent, StyleRecord, TargetRect};

/// Cancellation closure returned by every subscription-like operation.
///
/// Calling it detaches whatever it guards. Dropping it without calling
/// leaks the subscription on the host side, so the owning instance always
/// invokes these during teardown.
pub type Unsubscribe = Box<dyn FnOnce()>;

/// Callback invoked on every viewport scroll or resize event.
pub type ViewportCallback = Box<dyn Fn()>;

/// Callback invoked with the pointer event of a panel click.
pub type ClickCallback = Box<dyn Fn(PointerEvent)>;

/// Opaque identifier of one created panel, minted by the adapter.
///
/// The core never interprets the value; it only hands it back to the
/// adapter. Adapters typically use it to index an internal node table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelHandle(u64);

impl PanelHandle {
    /// Wraps a raw adapter-side value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw adapter-side value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Host-side effects the spotlight core drives.
///
/// Implementations live on the same single-threaded event loop as the core
/// and may be re-entered only through the subscriptions they themselves
/// fire (a click callback hiding the spotlight is legal and supported).
pub trait HostAdapter {
    /// Reads the highlighted element's current bounding box.
    ///
    /// Called fresh on every show and recompute; implementations must not
    /// return cached layout from an earlier frame.
    fn target_rect(&self) -> TargetRect;

    /// Creates (but does not attach) a panel node for `kind`, returning its
    /// handle. Adapters usually tag the node with [`PieceKind::css_class`]
    /// and the kebab-case tag here.
    fn create_panel(&self, kind: PieceKind) -> PanelHandle;

    /// Applies the populated fields of `style` to the panel's node.
    fn apply_style(&self, panel: PanelHandle, style: &StyleRecord);

    /// Attaches a created panel: into `container` when given, else to the
    /// host root (e.g. `document.body`).
    fn append_to_host(&self, panel: PanelHandle, container: Option<PanelHandle>);

    /// Detaches and releases a panel.
    fn remove_panel(&self, panel: PanelHandle);

    /// Starts observing viewport scroll/resize, invoking `on_change` on
    /// each event until the returned closure is called.
    fn observe_viewport(&self, on_change: ViewportCallback) -> Unsubscribe;

    /// Attaches a click listener to a panel.
    ///
    /// The adapter must suppress the default click behavior (navigation,
    /// page scroll) before invoking `on_click`. The returned closure
    /// detaches the listener.
    fn on_panel_click(&self, panel: PanelHandle, on_click: ClickCallback) -> Unsubscribe;

    /// Scrolls the page to the very top.
    ///
    /// Only invoked when [`crate::SpotlightConfig::scroll_to_top`] is
    /// enabled; the default body does nothing.
    fn scroll_to_top(&self) {}
}
