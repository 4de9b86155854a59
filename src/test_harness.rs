//! Shared test infrastructure.
//!
//! Provides [`FakeAdapter`], an in-memory [`HostAdapter`] that records every
//! call so tests can assert on panel creation, styling, attachment, removal,
//! and subscription lifecycles, and can replay host events (viewport changes,
//! panel clicks) back into the core.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::adapter::{ClickCallback, HostAdapter, PanelHandle, Unsubscribe, ViewportCallback};
use crate::model::{PieceKind, PointerEvent, StyleRecord, TargetRect};

/// One panel as the fake host saw it.
struct PanelRecord {
    handle: PanelHandle,
    kind: PieceKind,
    styles: Vec<StyleRecord>,
    /// `None` until appended; `Some(None)` means appended to the host root.
    parent: Option<Option<PanelHandle>>,
    removed: bool,
    listeners: Vec<ListenerRecord>,
}

struct ListenerRecord {
    callback: Rc<dyn Fn(PointerEvent)>,
    active: Rc<Cell<bool>>,
}

struct ObserverRecord {
    callback: Rc<dyn Fn()>,
    active: Rc<Cell<bool>>,
}

/// Recording in-memory host.
///
/// Callbacks replayed through [`fire_viewport`](FakeAdapter::fire_viewport)
/// and [`click`](FakeAdapter::click) are snapshotted before they run, so a
/// callback is free to re-enter the adapter (hiding the spotlight from a
/// click handler, for instance).
pub struct FakeAdapter {
    rect: Cell<TargetRect>,
    next_panel: Cell<u64>,
    panels: RefCell<Vec<PanelRecord>>,
    observers: RefCell<Vec<ObserverRecord>>,
    removal_order: RefCell<Vec<PieceKind>>,
    scroll_to_top_calls: Cell<u32>,
    prevented_defaults: Cell<u32>,
}

impl FakeAdapter {
    /// Fake host reporting a 200x100 target at (100, 50).
    pub fn new() -> Self {
        Self {
            rect: Cell::new(TargetRect::from_ltwh(100.0, 50.0, 200.0, 100.0)),
            next_panel: Cell::new(1),
            panels: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            removal_order: RefCell::new(Vec::new()),
            scroll_to_top_calls: Cell::new(0),
            prevented_defaults: Cell::new(0),
        }
    }

    /// Replaces the rect the next `target_rect` call reports.
    pub fn set_rect(&self, rect: TargetRect) {
        self.rect.set(rect);
    }

    /// Number of panels created and not yet removed.
    pub fn live_panels(&self) -> usize {
        self.panels
            .borrow()
            .iter()
            .filter(|record| !record.removed)
            .count()
    }

    /// Kinds of the live panels, in creation order.
    pub fn live_kinds(&self) -> Vec<PieceKind> {
        self.panels
            .borrow()
            .iter()
            .filter(|record| !record.removed)
            .map(|record| record.kind)
            .collect()
    }

    /// Number of panels ever created, removed ones included.
    pub fn created_total(&self) -> usize {
        self.panels.borrow().len()
    }

    /// Handle of the live panel of `kind`. Panics if there is none.
    pub fn handle_of(&self, kind: PieceKind) -> PanelHandle {
        self.panels
            .borrow()
            .iter()
            .rev()
            .find(|record| record.kind == kind && !record.removed)
            .map(|record| record.handle)
            .expect("no live panel of the requested kind")
    }

    /// Most recent style applied to the most recent panel of `kind`.
    pub fn last_style(&self, kind: PieceKind) -> StyleRecord {
        self.panels
            .borrow()
            .iter()
            .rev()
            .find(|record| record.kind == kind)
            .and_then(|record| record.styles.last().cloned())
            .expect("no style was applied to the requested kind")
    }

    /// Total number of `apply_style` calls across all panels.
    pub fn style_applications(&self) -> usize {
        self.panels
            .borrow()
            .iter()
            .map(|record| record.styles.len())
            .sum()
    }

    /// Where the most recent panel of `kind` was appended. `None` means the
    /// host root. Panics if it was never appended.
    pub fn parent_of(&self, kind: PieceKind) -> Option<PanelHandle> {
        self.panels
            .borrow()
            .iter()
            .rev()
            .find(|record| record.kind == kind)
            .map(|record| record.parent)
            .expect("no panel of the requested kind")
            .expect("panel was never appended")
    }

    /// Kinds in the order their panels were removed.
    pub fn removal_order(&self) -> Vec<PieceKind> {
        self.removal_order.borrow().clone()
    }

    /// Number of viewport observers that have not been unsubscribed.
    pub fn active_observers(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|record| record.active.get())
            .count()
    }

    /// Fires every live viewport observer, as a scroll or resize would.
    pub fn fire_viewport(&self) {
        let callbacks: Vec<Rc<dyn Fn()>> = self
            .observers
            .borrow()
            .iter()
            .filter(|record| record.active.get())
            .map(|record| Rc::clone(&record.callback))
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Fires only unsubscribed observers, simulating host events that were
    /// already in flight when the subscription was dropped.
    pub fn fire_stale_observers(&self) {
        let callbacks: Vec<Rc<dyn Fn()>> = self
            .observers
            .borrow()
            .iter()
            .filter(|record| !record.active.get())
            .map(|record| Rc::clone(&record.callback))
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Whether the most recent panel of `kind` has a live click listener.
    pub fn has_click_listener(&self, kind: PieceKind) -> bool {
        self.panels
            .borrow()
            .iter()
            .rev()
            .find(|record| record.kind == kind)
            .is_some_and(|record| {
                record
                    .listeners
                    .iter()
                    .any(|listener| listener.active.get())
            })
    }

    /// Delivers a click to the most recent panel of `kind`, returning
    /// whether any live listener received it.
    ///
    /// Default click behavior is suppressed before delivery, as the
    /// [`HostAdapter::on_panel_click`] contract requires of real hosts;
    /// [`prevented_defaults`](FakeAdapter::prevented_defaults) counts those
    /// suppressions.
    pub fn click(&self, kind: PieceKind, event: PointerEvent) -> bool {
        let callbacks: Vec<Rc<dyn Fn(PointerEvent)>> = {
            let panels = self.panels.borrow();
            let Some(record) = panels.iter().rev().find(|record| record.kind == kind) else {
                return false;
            };
            record
                .listeners
                .iter()
                .filter(|listener| listener.active.get())
                .map(|listener| Rc::clone(&listener.callback))
                .collect()
        };
        let delivered = !callbacks.is_empty();
        if delivered {
            self.prevented_defaults
                .set(self.prevented_defaults.get() + 1);
        }
        for callback in callbacks {
            callback(event);
        }
        delivered
    }

    /// Number of clicks whose default behavior was suppressed before the
    /// listener ran.
    pub fn prevented_defaults(&self) -> u32 {
        self.prevented_defaults.get()
    }

    /// Number of `scroll_to_top` calls.
    pub fn scroll_to_top_count(&self) -> u32 {
        self.scroll_to_top_calls.get()
    }
}

impl HostAdapter for FakeAdapter {
    fn target_rect(&self) -> TargetRect {
        self.rect.get()
    }

    fn create_panel(&self, kind: PieceKind) -> PanelHandle {
        let handle = PanelHandle::new(self.next_panel.get());
        self.next_panel.set(handle.get() + 1);
        self.panels.borrow_mut().push(PanelRecord {
            handle,
            kind,
            styles: Vec::new(),
            parent: None,
            removed: false,
            listeners: Vec::new(),
        });
        handle
    }

    fn apply_style(&self, panel: PanelHandle, style: &StyleRecord) {
        let mut panels = self.panels.borrow_mut();
        let record = panels
            .iter_mut()
            .find(|record| record.handle == panel)
            .expect("style applied to an unknown panel");
        record.styles.push(style.clone());
    }

    fn append_to_host(&self, panel: PanelHandle, container: Option<PanelHandle>) {
        let mut panels = self.panels.borrow_mut();
        let record = panels
            .iter_mut()
            .find(|record| record.handle == panel)
            .expect("appended an unknown panel");
        record.parent = Some(container);
    }

    fn remove_panel(&self, panel: PanelHandle) {
        let mut panels = self.panels.borrow_mut();
        let record = panels
            .iter_mut()
            .find(|record| record.handle == panel)
            .expect("removed an unknown panel");
        record.removed = true;
        self.removal_order.borrow_mut().push(record.kind);
    }

    fn observe_viewport(&self, on_change: ViewportCallback) -> Unsubscribe {
        let active = Rc::new(Cell::new(true));
        self.observers.borrow_mut().push(ObserverRecord {
            callback: Rc::from(on_change),
            active: Rc::clone(&active),
        });
        Box::new(move || active.set(false))
    }

    fn on_panel_click(&self, panel: PanelHandle, on_click: ClickCallback) -> Unsubscribe {
        let active = Rc::new(Cell::new(true));
        let mut panels = self.panels.borrow_mut();
        let record = panels
            .iter_mut()
            .find(|record| record.handle == panel)
            .expect("listener attached to an unknown panel");
        record.listeners.push(ListenerRecord {
            callback: Rc::from(on_click),
            active: Rc::clone(&active),
        });
        Box::new(move || active.set(false))
    }

    fn scroll_to_top(&self) {
        self.scroll_to_top_calls
            .set(self.scroll_to_top_calls.get() + 1);
    }
}

/// Routes `tracing` output through the test writer; honors `RUST_LOG`.
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
