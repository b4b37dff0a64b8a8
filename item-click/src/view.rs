use crate::{HapticFeedback, ItemHit, SoundEffect, TouchListenerId, ViewId};

/// The platform side of a scrollable list view.
///
/// Implemented by the UI layer. The crate never stores a view; every operation borrows it for
/// the duration of the call.
pub trait ItemListView {
    /// Stable identity of this view. Two views must never share an id while both are attached.
    fn view_id(&self) -> ViewId;

    /// Hit-tests a point (in view coordinates) against the laid-out rows.
    fn item_at(&self, x: f32, y: f32) -> Option<ItemHit>;

    fn is_long_clickable(&self) -> bool;

    fn set_long_clickable(&mut self, long_clickable: bool);

    /// Registers a touch observer. The UI layer routes this view's touch events to the
    /// registry while at least one observer is registered.
    fn add_item_touch_listener(&mut self, listener: TouchListenerId);

    fn remove_item_touch_listener(&mut self, listener: TouchListenerId);

    /// Plays a sound effect on the item at `position`.
    fn play_sound_effect(&mut self, position: usize, effect: SoundEffect);

    /// Performs haptic feedback on the item at `position`.
    ///
    /// Returns `false` if the platform did not perform it (e.g. haptics disabled).
    fn perform_haptic_feedback(&mut self, position: usize, feedback: HapticFeedback) -> bool;
}
