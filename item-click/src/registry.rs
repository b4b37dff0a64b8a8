use crate::key::ViewMap;
use crate::{GestureConfig, ItemClickSupport, ItemListView, TouchEvent, TouchListenerId, ViewId};

/// Maps list views to their [`ItemClickSupport`].
///
/// Owned by the application (typically next to the widget tree). Attaching is idempotent: a view
/// has at most one support, and attaching again returns the existing one.
#[derive(Debug, Default)]
pub struct ItemClickRegistry {
    config: GestureConfig,
    supports: ViewMap<ItemClickSupport>,
    next_listener_id: u64,
}

impl ItemClickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry whose supports resolve gestures with `config`.
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns the support attached to `view`, creating it (and registering its touch observer
    /// on the view) if needed.
    pub fn attach<V: ItemListView + ?Sized>(&mut self, view: &mut V) -> &mut ItemClickSupport {
        let view_id = view.view_id();
        let config = self.config;
        let next_listener_id = &mut self.next_listener_id;
        self.supports.entry(view_id).or_insert_with(|| {
            let listener_id = TouchListenerId(*next_listener_id);
            *next_listener_id = next_listener_id.wrapping_add(1);
            view.add_item_touch_listener(listener_id);
            cdebug!(view = view_id.0, listener = listener_id.0, "ItemClickRegistry: attach");
            ItemClickSupport::new(listener_id, config)
        })
    }

    /// Removes the support attached to `view` and unregisters its touch observer.
    ///
    /// Returns `false` (and does nothing) if no support was attached.
    pub fn detach<V: ItemListView + ?Sized>(&mut self, view: &mut V) -> bool {
        let view_id = view.view_id();
        let Some(support) = self.supports.remove(&view_id) else {
            return false;
        };
        view.remove_item_touch_listener(support.listener_id());
        cdebug!(
            view = view_id.0,
            listener = support.listener_id().0,
            "ItemClickRegistry: detach"
        );
        true
    }

    pub fn lookup(&self, view_id: ViewId) -> Option<&ItemClickSupport> {
        self.supports.get(&view_id)
    }

    pub fn lookup_mut(&mut self, view_id: ViewId) -> Option<&mut ItemClickSupport> {
        self.supports.get_mut(&view_id)
    }

    pub fn contains(&self, view_id: ViewId) -> bool {
        self.supports.contains_key(&view_id)
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    /// Routes an intercepted touch event to the view's support. Always `false`.
    pub fn on_intercept_touch_event<V: ItemListView + ?Sized>(
        &mut self,
        view: &mut V,
        event: TouchEvent,
    ) -> bool {
        match self.supports.get_mut(&view.view_id()) {
            Some(support) => support.on_intercept_touch_event(view, event),
            None => false,
        }
    }

    /// Routes a touch event to the view's support.
    ///
    /// Returns `true` if the event completed a gesture that a listener consumed.
    pub fn on_touch_event<V: ItemListView + ?Sized>(
        &mut self,
        view: &mut V,
        event: TouchEvent,
    ) -> bool {
        match self.supports.get_mut(&view.view_id()) {
            Some(support) => support.on_touch_event(view, event),
            None => false,
        }
    }

    /// Advances the long-press timer of the view's support.
    pub fn tick<V: ItemListView + ?Sized>(&mut self, view: &mut V, now_ms: u64) -> bool {
        match self.supports.get_mut(&view.view_id()) {
            Some(support) => support.tick(view, now_ms),
            None => false,
        }
    }

    pub fn on_request_disallow_intercept_touch_event(
        &mut self,
        view_id: ViewId,
        disallow_intercept: bool,
    ) {
        if let Some(support) = self.supports.get_mut(&view_id) {
            support.on_request_disallow_intercept_touch_event(disallow_intercept);
        }
    }
}
