//! Spotlight instances and their panel lifecycle.
//!
//! A [`Spotlight`] owns no host resources while hidden. `show()` reads the
//! target's bounding box once, creates the panel set through the adapter,
//! and wires click and viewport subscriptions; `hide()` releases all of it.
//! The instance itself survives any number of hide/show cycles until
//! [`destroy`](Spotlight::destroy) retires its id.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::adapter::{HostAdapter, PanelHandle, Unsubscribe};
use crate::config::SpotlightConfig;
use crate::geometry::compute_style;
use crate::model::{PieceKind, PointerEvent, SpotlightClick, SpotlightError, SpotlightId};
use crate::registry::SpotlightRegistry;

/// Handle to one mounted spotlight.
///
/// Cloning is cheap and every clone drives the same instance; the registry
/// holds one clone per registration, so a spotlight obtained from
/// [`SpotlightRegistry::lookup`] is the same instance that was mounted.
///
/// All panel work happens through the [`HostAdapter`] the spotlight was
/// mounted with. While shown, the panel set keeps the configuration and
/// geometry inputs it was shown with; configuration changes apply at the
/// next show.
#[derive(Clone)]
pub struct Spotlight {
    shared: Rc<Shared>,
}

struct Shared {
    id: SpotlightId,
    adapter: Rc<dyn HostAdapter>,
    registry: Weak<SpotlightRegistry>,
    config: Cell<SpotlightConfig>,
    active: RefCell<Option<ActivePanels>>,
    subscribers: RefCell<Vec<(u64, Rc<dyn Fn(&SpotlightClick)>)>>,
    next_subscriber: Cell<u64>,
}

/// Host resources owned while the panel set is on screen.
///
/// `indent` and `border_width` are the values the set was shown with;
/// recomputes reuse them so a live panel set never changes shape, only
/// position.
struct ActivePanels {
    panels: BTreeMap<PieceKind, PanelHandle>,
    click_unlistens: Vec<Unsubscribe>,
    viewport_unsubscribe: Unsubscribe,
    indent: f64,
    border_width: f64,
}

impl Spotlight {
    /// Creates a spotlight for `id` and registers it.
    ///
    /// Nothing is drawn until [`show`](Spotlight::show) is called.
    ///
    /// # Errors
    ///
    /// Returns [`SpotlightError::DuplicateId`] when `id` is already
    /// registered. The existing registration is untouched and the new
    /// instance is discarded.
    pub fn mount(
        adapter: Rc<dyn HostAdapter>,
        registry: &Rc<SpotlightRegistry>,
        id: SpotlightId,
        config: SpotlightConfig,
    ) -> Result<Self, SpotlightError> {
        let spotlight = Self {
            shared: Rc::new(Shared {
                id,
                adapter,
                registry: Rc::downgrade(registry),
                config: Cell::new(config),
                active: RefCell::new(None),
                subscribers: RefCell::new(Vec::new()),
                next_subscriber: Cell::new(0),
            }),
        };
        registry.register(&spotlight)?;
        debug!(id = %spotlight.id(), "mounted spotlight");
        Ok(spotlight)
    }

    /// The id this spotlight is registered under.
    pub fn id(&self) -> &SpotlightId {
        &self.shared.id
    }

    /// Whether the panel set is currently on screen.
    pub fn is_shown(&self) -> bool {
        self.shared.active.borrow().is_some()
    }

    /// The configuration the next [`show`](Spotlight::show) will use.
    pub fn config(&self) -> SpotlightConfig {
        self.shared.config.get()
    }

    /// Replaces the configuration used by the next [`show`](Spotlight::show).
    ///
    /// A panel set already on screen keeps the configuration it was shown
    /// with until it is hidden and shown again.
    pub fn set_config(&self, config: SpotlightConfig) {
        self.shared.config.set(config);
    }

    /// Presents the panel set around the target's current bounding box.
    ///
    /// Reads the configuration and the target rect once, then creates the
    /// container, the four backdrops, the border strips (when configured),
    /// and the overlay cover, in that order. Calling this while already
    /// shown is a no-op; panels are never duplicated.
    pub fn show(&self) {
        if self.is_shown() {
            trace!(id = %self.id(), "show ignored, already on screen");
            return;
        }
        let config = self.shared.config.get();
        if config.scrolls_to_top() {
            self.shared.adapter.scroll_to_top();
        }

        let adapter = &self.shared.adapter;
        let rect = adapter.target_rect();
        let indent = config.indent_px();
        let border_width = config.border_width_px();

        let container = adapter.create_panel(PieceKind::Container);
        adapter.apply_style(
            container,
            &compute_style(rect, PieceKind::Container, border_width, indent),
        );
        adapter.append_to_host(container, None);

        let mut panels = BTreeMap::new();
        panels.insert(PieceKind::Container, container);
        {
            let mut spawn = |piece: PieceKind| {
                let panel = adapter.create_panel(piece);
                adapter.apply_style(panel, &compute_style(rect, piece, border_width, indent));
                adapter.append_to_host(panel, Some(container));
                panels.insert(piece, panel);
            };
            for piece in PieceKind::BACKDROPS {
                spawn(piece);
            }
            if config.has_border() {
                for piece in PieceKind::BORDERS {
                    spawn(piece);
                }
            }
            if config.has_overlay() {
                spawn(PieceKind::Overlay);
            }
        }

        let mut click_unlistens = Vec::new();
        for (&piece, &panel) in &panels {
            if !piece.is_click_source() {
                continue;
            }
            let weak = Rc::downgrade(&self.shared);
            click_unlistens.push(adapter.on_panel_click(
                panel,
                Box::new(move |event| {
                    if let Some(shared) = weak.upgrade() {
                        shared.emit_click(piece, event);
                    }
                }),
            ));
        }

        let weak = Rc::downgrade(&self.shared);
        let viewport_unsubscribe = adapter.observe_viewport(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.recompute_panels();
            }
        }));

        let panel_count = panels.len();
        *self.shared.active.borrow_mut() = Some(ActivePanels {
            panels,
            click_unlistens,
            viewport_unsubscribe,
            indent,
            border_width,
        });
        debug!(id = %self.id(), panels = panel_count, "spotlight shown");
    }

    /// Removes the panel set from the screen.
    ///
    /// Subscriptions on the host are released and every panel is removed,
    /// the container last. Calling this while hidden is a no-op. Click
    /// subscribers are kept and fire again after the next
    /// [`show`](Spotlight::show).
    pub fn hide(&self) {
        self.shared.teardown();
    }

    /// Re-reads the target's bounding box and restyles every panel in place.
    ///
    /// Runs automatically while shown whenever the host reports a viewport
    /// scroll or resize; hosts with other invalidation sources can call it
    /// directly. Does nothing while hidden.
    pub fn recompute(&self) {
        self.shared.recompute_panels();
    }

    /// Subscribes to clicks on the backdrops and the overlay cover.
    ///
    /// Subscribers outlive hide/show cycles and are only dropped by
    /// [`destroy`](Spotlight::destroy) or by calling the returned closure.
    /// A subscriber may hide or destroy the spotlight from within the
    /// callback.
    pub fn on_click(&self, subscriber: impl Fn(&SpotlightClick) + 'static) -> Unsubscribe {
        let token = self.shared.next_subscriber.get();
        self.shared.next_subscriber.set(token + 1);
        self.shared
            .subscribers
            .borrow_mut()
            .push((token, Rc::new(subscriber)));
        let weak = Rc::downgrade(&self.shared);
        Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared
                    .subscribers
                    .borrow_mut()
                    .retain(|(held, _)| *held != token);
            }
        })
    }

    /// Hides the panel set, drops all click subscribers, and frees the id.
    ///
    /// After this the id can be mounted again. Safe to call on a spotlight
    /// that was never shown, and safe to call more than once.
    pub fn destroy(&self) {
        self.shared.teardown();
        self.shared.subscribers.borrow_mut().clear();
        if let Some(registry) = self.shared.registry.upgrade() {
            registry.deregister(self.shared.id.as_str());
        }
        debug!(id = %self.id(), "destroyed spotlight");
    }
}

impl Shared {
    /// Removes the live panel set, if any. State flips to hidden before the
    /// first adapter call so re-entrant observers see a hidden spotlight.
    fn teardown(&self) {
        let Some(active) = self.active.borrow_mut().take() else {
            return;
        };
        (active.viewport_unsubscribe)();
        for unlisten in active.click_unlistens {
            unlisten();
        }
        for (piece, panel) in active.panels {
            trace!(id = %self.id, piece = %piece, "removing panel");
            self.adapter.remove_panel(panel);
        }
        debug!(id = %self.id, "spotlight hidden");
    }

    /// Restyles the live panel set from a fresh target rect.
    ///
    /// Panel handles are snapshotted before any adapter call so a
    /// subscriber-triggered hide cannot observe a held borrow.
    fn recompute_panels(&self) {
        let (pieces, indent, border_width) = {
            let guard = self.active.borrow();
            let Some(active) = guard.as_ref() else {
                return;
            };
            let pieces: Vec<(PieceKind, PanelHandle)> = active
                .panels
                .iter()
                .map(|(&piece, &panel)| (piece, panel))
                .collect();
            (pieces, active.indent, active.border_width)
        };
        let rect = self.adapter.target_rect();
        trace!(id = %self.id, "restyling panels after viewport change");
        for (piece, panel) in pieces {
            self.adapter
                .apply_style(panel, &compute_style(rect, piece, border_width, indent));
        }
    }

    /// Forwards one panel click to every subscriber.
    ///
    /// The subscriber list is snapshotted first, so a callback may hide,
    /// destroy, or re-subscribe without tripping a borrow.
    fn emit_click(&self, piece: PieceKind, event: PointerEvent) {
        if self.active.borrow().is_none() {
            return;
        }
        let click = SpotlightClick {
            piece,
            mouse: event,
        };
        let subscribers: Vec<Rc<dyn Fn(&SpotlightClick)>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        trace!(id = %self.id, piece = %piece, subscribers = subscribers.len(), "spotlight clicked");
        for subscriber in subscribers {
            subscriber(&click);
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for Spotlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spotlight")
            .field("id", &self.shared.id)
            .field("shown", &self.is_shown())
            .finish_non_exhaustive()
    }
}
