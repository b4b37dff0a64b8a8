use alloc::sync::Arc;
use core::fmt;

use crate::{
    ClickGestureDetector, GestureConfig, HapticFeedback, ItemGesture, ItemHit, ItemListView,
    OnItemClick, OnItemLongClick, SoundEffect, TouchEvent, TouchListenerId,
};

/// Item click support for one list view.
///
/// Holds at most one click listener and at most one long-click listener; setting a listener
/// replaces the previous one. Created and owned by [`crate::ItemClickRegistry`].
pub struct ItemClickSupport {
    listener_id: TouchListenerId,
    detector: ClickGestureDetector,
    on_item_click: Option<OnItemClick>,
    on_item_long_click: Option<OnItemLongClick>,
}

impl ItemClickSupport {
    pub(crate) fn new(listener_id: TouchListenerId, config: GestureConfig) -> Self {
        Self {
            listener_id,
            detector: ClickGestureDetector::new(config),
            on_item_click: None,
            on_item_long_click: None,
        }
    }

    /// The touch observer this support registered on its view.
    pub fn listener_id(&self) -> TouchListenerId {
        self.listener_id
    }

    pub fn detector(&self) -> &ClickGestureDetector {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut ClickGestureDetector {
        &mut self.detector
    }

    pub fn has_on_item_click(&self) -> bool {
        self.on_item_click.is_some()
    }

    pub fn has_on_item_long_click(&self) -> bool {
        self.on_item_long_click.is_some()
    }

    /// Replaces the click listener.
    pub fn set_on_item_click(
        &mut self,
        listener: impl Fn(ItemHit) + Send + Sync + 'static,
    ) -> &mut Self {
        cdebug!(listener = self.listener_id.0, "ItemClickSupport: set click listener");
        self.on_item_click = Some(Arc::new(listener) as OnItemClick);
        self
    }

    /// Replaces the long-click listener.
    ///
    /// Installing a listener turns the view's long-clickable flag on. Passing `None` clears the
    /// listener and leaves the flag as it is.
    pub fn set_on_item_long_click<V: ItemListView + ?Sized>(
        &mut self,
        view: &mut V,
        listener: Option<impl Fn(ItemHit) -> bool + Send + Sync + 'static>,
    ) -> &mut Self {
        if listener.is_some() && !view.is_long_clickable() {
            view.set_long_clickable(true);
        }
        cdebug!(
            listener = self.listener_id.0,
            present = listener.is_some(),
            "ItemClickSupport: set long-click listener"
        );
        self.on_item_long_click = listener.map(|f| Arc::new(f) as _);
        self
    }

    /// Dispatches a click. Returns `true` if a listener handled it.
    pub fn perform_item_click<V: ItemListView + ?Sized>(&self, view: &mut V, hit: ItemHit) -> bool {
        let Some(listener) = &self.on_item_click else {
            return false;
        };
        view.play_sound_effect(hit.position, SoundEffect::Click);
        listener(hit);
        true
    }

    /// Dispatches a long click. Returns the listener's verdict, or `false` without a listener.
    pub fn perform_item_long_click<V: ItemListView + ?Sized>(
        &self,
        view: &mut V,
        hit: ItemHit,
    ) -> bool {
        let Some(listener) = &self.on_item_long_click else {
            return false;
        };
        view.perform_haptic_feedback(hit.position, HapticFeedback::LongPress);
        listener(hit)
    }

    /// Observes a touch event before the view handles it.
    ///
    /// Always returns `false`: the gesture is never intercepted, so scrolling keeps working.
    pub fn on_intercept_touch_event<V: ItemListView + ?Sized>(
        &mut self,
        view: &mut V,
        event: TouchEvent,
    ) -> bool {
        self.on_touch_event(view, event);
        false
    }

    /// Feeds a touch event. Returns `true` if it completed a gesture that a listener consumed.
    pub fn on_touch_event<V: ItemListView + ?Sized>(
        &mut self,
        view: &mut V,
        event: TouchEvent,
    ) -> bool {
        match self.detector.on_touch_event(&*view, event) {
            Some(gesture) => self.dispatch(view, gesture),
            None => false,
        }
    }

    /// Advances the long-press timer. Returns `true` if a long click fired and was consumed.
    pub fn tick<V: ItemListView + ?Sized>(&mut self, view: &mut V, now_ms: u64) -> bool {
        match self.detector.tick(now_ms) {
            Some(gesture) => self.dispatch(view, gesture),
            None => false,
        }
    }

    /// Scroll interception is left to the view.
    pub fn on_request_disallow_intercept_touch_event(&mut self, _disallow_intercept: bool) {}

    fn dispatch<V: ItemListView + ?Sized>(&self, view: &mut V, gesture: ItemGesture) -> bool {
        ctrace!(?gesture, "ItemClickSupport: dispatch");
        match gesture {
            ItemGesture::Click(hit) => self.perform_item_click(view, hit),
            ItemGesture::LongClick(hit) => self.perform_item_long_click(view, hit),
        }
    }
}

impl fmt::Debug for ItemClickSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemClickSupport")
            .field("listener_id", &self.listener_id)
            .field("detector", &self.detector)
            .field("on_item_click", &self.on_item_click.is_some())
            .field("on_item_long_click", &self.on_item_long_click.is_some())
            .finish()
    }
}
