//! Spotlight overlay geometry and lifecycle core.
//!
//! Computes and maintains the screen-space geometry of a spotlight effect:
//! four backdrops dimming everything around a highlighted region, optional
//! border strips framing it, a transparent overlay intercepting clicks, and
//! a container layer hosting them all. The crate follows a Pure Core /
//! Impure Shell split:
//!
//! - [`compute_style`] is the pure core: target rectangle in, per-piece
//!   [`StyleRecord`] out. No state, no I/O.
//! - [`Spotlight`] is the shell around one highlight target: the Hidden ⇄
//!   Shown state machine that creates panels, keeps them in place across
//!   scroll/resize, surfaces clicks, and tears everything down.
//! - [`SpotlightRegistry`] maps ids to live instances so application code
//!   can drive a highlight without holding a direct reference.
//!
//! All host effects (node creation, styling, layout reads, event
//! subscriptions) go through the [`HostAdapter`] trait, so the core never
//! references any UI framework. Everything is single-threaded and
//! event-driven; no operation blocks.
//!
//! # Examples
//!
//! ```
//! use spotlight_core::{
//!     HostAdapter, PanelHandle, PieceKind, PointerEvent, Spotlight, SpotlightConfig,
//!     SpotlightId, SpotlightRegistry, StyleRecord, TargetRect, Unsubscribe,
//! };
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! // A host adapter turns style records into real nodes; this one only counts.
//! #[derive(Default)]
//! struct CountingAdapter {
//!     next: Cell<u64>,
//!     live: Cell<u64>,
//! }
//!
//! impl HostAdapter for CountingAdapter {
//!     fn target_rect(&self) -> TargetRect {
//!         TargetRect::from_ltwh(100.0, 50.0, 200.0, 100.0)
//!     }
//!     fn create_panel(&self, _kind: PieceKind) -> PanelHandle {
//!         self.next.set(self.next.get() + 1);
//!         self.live.set(self.live.get() + 1);
//!         PanelHandle::new(self.next.get())
//!     }
//!     fn apply_style(&self, _panel: PanelHandle, _style: &StyleRecord) {}
//!     fn append_to_host(&self, _panel: PanelHandle, _container: Option<PanelHandle>) {}
//!     fn remove_panel(&self, _panel: PanelHandle) {
//!         self.live.set(self.live.get() - 1);
//!     }
//!     fn observe_viewport(&self, _on_change: Box<dyn Fn()>) -> Unsubscribe {
//!         Box::new(|| {})
//!     }
//!     fn on_panel_click(
//!         &self,
//!         _panel: PanelHandle,
//!         _on_click: Box<dyn Fn(PointerEvent)>,
//!     ) -> Unsubscribe {
//!         Box::new(|| {})
//!     }
//! }
//!
//! let registry = Rc::new(SpotlightRegistry::new());
//! let adapter = Rc::new(CountingAdapter::default());
//!
//! let spotlight = Spotlight::mount(
//!     adapter.clone(),
//!     &registry,
//!     SpotlightId::new("billing-panel").unwrap(),
//!     SpotlightConfig::default().border(true).indent(10.0),
//! )
//! .unwrap();
//!
//! spotlight.show();
//! assert!(spotlight.is_shown());
//! assert_eq!(adapter.live.get(), 10); // container + 4 backdrops + 4 borders + overlay
//!
//! spotlight.destroy();
//! assert!(!spotlight.is_shown());
//! assert_eq!(adapter.live.get(), 0);
//! assert!(registry.lookup("billing-panel").is_none());
//! ```

pub mod adapter;
pub mod config;
pub mod geometry;
pub mod model;
pub mod registry;
pub mod spotlight;

pub use adapter::{ClickCallback, HostAdapter, PanelHandle, Unsubscribe, ViewportCallback};
pub use config::{DEFAULT_BORDER_WIDTH, SpotlightConfig};
pub use geometry::compute_style;
pub use model::{
    BorderStyle, InvalidSpotlightId, MouseButton, PieceKind, PointerEvent, Position, Px,
    SpotlightClick, SpotlightError, SpotlightId, StyleRecord, TargetRect,
};
pub use registry::SpotlightRegistry;
pub use spotlight::Spotlight;

#[cfg(test)]
mod test_harness;
