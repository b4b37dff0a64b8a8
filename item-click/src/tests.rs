use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

const ROW_HEIGHT: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
enum Feedback {
    Sound(usize, SoundEffect),
    Haptic(usize, HapticFeedback),
}

/// A vertical list of fixed-height rows whose ids are `1000 + position`.
#[derive(Debug)]
struct FakeList {
    id: ViewId,
    rows: usize,
    long_clickable: bool,
    listeners: Vec<TouchListenerId>,
    feedback: Vec<Feedback>,
}

impl FakeList {
    fn new(id: u64, rows: usize) -> Self {
        Self {
            id: ViewId(id),
            rows,
            long_clickable: false,
            listeners: Vec::new(),
            feedback: Vec::new(),
        }
    }

    fn row_y(position: usize) -> f32 {
        position as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0
    }

    fn hit(position: usize) -> ItemHit {
        ItemHit::new(position, 1000 + position as u64)
    }
}

impl ItemListView for FakeList {
    fn view_id(&self) -> ViewId {
        self.id
    }

    fn item_at(&self, _x: f32, y: f32) -> Option<ItemHit> {
        if y < 0.0 {
            return None;
        }
        let position = (y / ROW_HEIGHT) as usize;
        (position < self.rows).then(|| Self::hit(position))
    }

    fn is_long_clickable(&self) -> bool {
        self.long_clickable
    }

    fn set_long_clickable(&mut self, long_clickable: bool) {
        self.long_clickable = long_clickable;
    }

    fn add_item_touch_listener(&mut self, listener: TouchListenerId) {
        self.listeners.push(listener);
    }

    fn remove_item_touch_listener(&mut self, listener: TouchListenerId) {
        self.listeners.retain(|l| *l != listener);
    }

    fn play_sound_effect(&mut self, position: usize, effect: SoundEffect) {
        self.feedback.push(Feedback::Sound(position, effect));
    }

    fn perform_haptic_feedback(&mut self, position: usize, feedback: HapticFeedback) -> bool {
        self.feedback.push(Feedback::Haptic(position, feedback));
        true
    }
}

fn tap(registry: &mut ItemClickRegistry, view: &mut FakeList, position: usize, at_ms: u64) -> bool {
    let y = FakeList::row_y(position);
    registry.on_touch_event(view, TouchEvent::down(5.0, y, at_ms));
    registry.on_touch_event(view, TouchEvent::up(5.0, y, at_ms + 50))
}

fn recording_click(log: &Arc<Mutex<Vec<ItemHit>>>) -> impl Fn(ItemHit) + Send + Sync + 'static {
    let log = Arc::clone(log);
    move |hit| log.lock().unwrap().push(hit)
}

#[test]
fn attach_is_idempotent() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();

    let first = registry.attach(&mut view).listener_id();
    let second = registry.attach(&mut view).listener_id();
    assert_eq!(first, second);
    assert_eq!(view.listeners, [first]);
    assert_eq!(registry.len(), 1);
    assert!(registry.contains(ViewId(1)));
}

#[test]
fn attach_keeps_existing_listeners() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    registry.attach(&mut view).set_on_item_click(recording_click(&log));
    assert!(registry.attach(&mut view).has_on_item_click());

    assert!(tap(&mut registry, &mut view, 3, 0));
    assert_eq!(*log.lock().unwrap(), [FakeList::hit(3)]);
}

#[test]
fn detach_unregisters_observer_and_clears_lookup() {
    let mut view = FakeList::new(7, 10);
    let mut registry = ItemClickRegistry::new();
    registry.attach(&mut view);
    assert_eq!(view.listeners.len(), 1);

    assert!(registry.detach(&mut view));
    assert!(view.listeners.is_empty());
    assert!(registry.lookup(ViewId(7)).is_none());
    assert!(registry.is_empty());

    // Second detach is a no-op.
    assert!(!registry.detach(&mut view));

    // Re-attaching creates a fresh support with a new observer.
    let id = registry.attach(&mut view).listener_id();
    assert_eq!(view.listeners, [id]);
}

#[test]
fn views_are_tracked_independently() {
    let mut a = FakeList::new(1, 10);
    let mut b = FakeList::new(2, 10);
    let mut registry = ItemClickRegistry::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    registry.attach(&mut a).set_on_item_click(recording_click(&log));
    registry.attach(&mut b);
    assert_ne!(a.listeners, b.listeners);

    assert!(tap(&mut registry, &mut a, 1, 0));
    assert!(!tap(&mut registry, &mut b, 1, 100));
    assert_eq!(log.lock().unwrap().len(), 1);
    assert!(b.feedback.is_empty());
}

#[test]
fn events_for_unattached_views_are_ignored() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();
    assert!(registry.lookup(ViewId(1)).is_none());
    assert!(!tap(&mut registry, &mut view, 0, 0));
    assert!(!registry.tick(&mut view, 10_000));
    registry.on_request_disallow_intercept_touch_event(ViewId(1), true);
    assert!(view.feedback.is_empty());
}

#[test]
fn click_plays_sound_and_invokes_listener() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    registry.attach(&mut view).set_on_item_click(recording_click(&log));

    assert!(tap(&mut registry, &mut view, 4, 0));
    assert_eq!(*log.lock().unwrap(), [FakeList::hit(4)]);
    assert_eq!(view.feedback, [Feedback::Sound(4, SoundEffect::Click)]);
}

#[test]
fn click_without_listener_has_no_side_effects() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();
    registry.attach(&mut view);

    assert!(!tap(&mut registry, &mut view, 4, 0));
    assert!(view.feedback.is_empty());
}

#[test]
fn last_click_listener_wins() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let support = registry.attach(&mut view);
    support.set_on_item_click({
        let first = Arc::clone(&first);
        move |_| {
            first.fetch_add(1, Ordering::Relaxed);
        }
    });
    support.set_on_item_click({
        let second = Arc::clone(&second);
        move |_| {
            second.fetch_add(1, Ordering::Relaxed);
        }
    });

    assert!(tap(&mut registry, &mut view, 0, 0));
    assert_eq!(first.load(Ordering::Relaxed), 0);
    assert_eq!(second.load(Ordering::Relaxed), 1);
}

#[test]
fn long_click_listener_forces_long_clickable() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();
    assert!(!view.long_clickable);

    registry
        .attach(&mut view)
        .set_on_item_long_click(&mut view, Some(|_: ItemHit| true));
    assert!(view.long_clickable);
    assert!(registry.lookup(ViewId(1)).unwrap().has_on_item_long_click());
}

#[test]
fn clearing_long_click_listener_leaves_flag_alone() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();

    let support = registry.attach(&mut view);
    support.set_on_item_long_click(&mut view, None::<fn(ItemHit) -> bool>);
    assert!(!view.long_clickable);

    view.long_clickable = true;
    let support = registry.attach(&mut view);
    support.set_on_item_long_click(&mut view, Some(|_: ItemHit| true));
    support.set_on_item_long_click(&mut view, None::<fn(ItemHit) -> bool>);
    assert!(view.long_clickable);
    assert!(!support.has_on_item_long_click());
}

#[test]
fn long_press_fires_on_tick_with_haptics() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();
    let long_hits = Arc::new(AtomicU64::new(0));
    let clicks = Arc::new(AtomicUsize::new(0));

    let support = registry.attach(&mut view);
    support.set_on_item_click({
        let clicks = Arc::clone(&clicks);
        move |_| {
            clicks.fetch_add(1, Ordering::Relaxed);
        }
    });
    support.set_on_item_long_click(
        &mut view,
        Some({
            let long_hits = Arc::clone(&long_hits);
            move |hit: ItemHit| {
                long_hits.store(hit.id, Ordering::Relaxed);
                true
            }
        }),
    );

    let y = FakeList::row_y(2);
    registry.on_touch_event(&mut view, TouchEvent::down(5.0, y, 1_000));
    assert!(!registry.tick(&mut view, 1_200));
    assert!(registry.tick(&mut view, 1_500));
    // Fires once.
    assert!(!registry.tick(&mut view, 1_600));
    // Releasing after a long click is not a click.
    assert!(!registry.on_touch_event(&mut view, TouchEvent::up(5.0, y, 1_700)));

    assert_eq!(long_hits.load(Ordering::Relaxed), 1002);
    assert_eq!(clicks.load(Ordering::Relaxed), 0);
    assert_eq!(view.feedback, [Feedback::Haptic(2, HapticFeedback::LongPress)]);
}

#[test]
fn long_click_result_is_reported() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();
    registry
        .attach(&mut view)
        .set_on_item_long_click(&mut view, Some(|_: ItemHit| false));

    let y = FakeList::row_y(0);
    registry.on_touch_event(&mut view, TouchEvent::down(5.0, y, 0));
    assert!(!registry.tick(&mut view, 600));
    // The haptic still plays: the listener was invoked, it just did not consume the event.
    assert_eq!(view.feedback, [Feedback::Haptic(0, HapticFeedback::LongPress)]);
}

#[test]
fn long_press_detected_late_on_release() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();
    let fired = Arc::new(AtomicBool::new(false));
    registry.attach(&mut view).set_on_item_long_click(
        &mut view,
        Some({
            let fired = Arc::clone(&fired);
            move |_: ItemHit| {
                fired.store(true, Ordering::Relaxed);
                true
            }
        }),
    );

    let y = FakeList::row_y(1);
    registry.on_touch_event(&mut view, TouchEvent::down(5.0, y, 0));
    assert!(registry.on_touch_event(&mut view, TouchEvent::up(5.0, y, 900)));
    assert!(fired.load(Ordering::Relaxed));
}

#[test]
fn long_press_without_long_clickable_view_is_a_click() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    registry.attach(&mut view).set_on_item_click(recording_click(&log));

    let y = FakeList::row_y(5);
    registry.on_touch_event(&mut view, TouchEvent::down(5.0, y, 0));
    assert!(!registry.tick(&mut view, 2_000));
    assert!(registry.on_touch_event(&mut view, TouchEvent::up(5.0, y, 2_100)));
    assert_eq!(*log.lock().unwrap(), [FakeList::hit(5)]);
}

#[test]
fn drag_beyond_slop_is_a_scroll() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::with_config(GestureConfig::default().with_touch_slop(4.0));
    let log = Arc::new(Mutex::new(Vec::new()));
    registry.attach(&mut view).set_on_item_click(recording_click(&log));

    let y = FakeList::row_y(3);
    registry.on_touch_event(&mut view, TouchEvent::down(5.0, y, 0));
    registry.on_touch_event(&mut view, TouchEvent::moved(5.0, y + 3.0, 20));
    assert!(registry.lookup(ViewId(1)).unwrap().detector().is_pressed());
    registry.on_touch_event(&mut view, TouchEvent::moved(5.0, y + 12.0, 40));
    assert!(!registry.lookup(ViewId(1)).unwrap().detector().is_pressed());
    assert!(!registry.on_touch_event(&mut view, TouchEvent::up(5.0, y + 12.0, 60)));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn cancel_and_misses_resolve_nothing() {
    let mut view = FakeList::new(1, 3);
    let mut registry = ItemClickRegistry::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    registry.attach(&mut view).set_on_item_click(recording_click(&log));

    let y = FakeList::row_y(1);
    registry.on_touch_event(&mut view, TouchEvent::down(5.0, y, 0));
    registry.on_touch_event(&mut view, TouchEvent::cancel(10));
    assert!(!registry.on_touch_event(&mut view, TouchEvent::up(5.0, y, 20)));

    // Below the last row.
    assert!(!tap(&mut registry, &mut view, 8, 100));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn intercept_observes_without_consuming() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    registry.attach(&mut view).set_on_item_click(recording_click(&log));

    let y = FakeList::row_y(6);
    assert!(!registry.on_intercept_touch_event(&mut view, TouchEvent::down(5.0, y, 0)));
    assert!(!registry.on_intercept_touch_event(&mut view, TouchEvent::up(5.0, y, 30)));
    assert_eq!(*log.lock().unwrap(), [FakeList::hit(6)]);
}

#[test]
fn perform_item_click_can_be_driven_directly() {
    let mut view = FakeList::new(1, 10);
    let mut registry = ItemClickRegistry::new();
    let support = registry.attach(&mut view);
    assert!(!support.perform_item_click(&mut view, FakeList::hit(0)));
    assert!(!support.perform_item_long_click(&mut view, FakeList::hit(0)));

    support.set_on_item_click(|_| {});
    assert!(support.perform_item_click(&mut view, FakeList::hit(9)));
    assert_eq!(view.feedback, [Feedback::Sound(9, SoundEffect::Click)]);
}

#[test]
fn detector_resolves_gestures_without_a_registry() {
    let view = FakeList::new(1, 10);
    let mut d = ClickGestureDetector::new(GestureConfig::default().with_long_press_timeout_ms(100));
    let y = FakeList::row_y(2);

    assert_eq!(d.on_touch_event(&view, TouchEvent::down(1.0, y, 0)), None);
    assert_eq!(d.pressed_item(), Some(FakeList::hit(2)));
    assert_eq!(
        d.on_touch_event(&view, TouchEvent::up(1.0, y, 50)),
        Some(ItemGesture::Click(FakeList::hit(2)))
    );
    assert!(!d.is_pressed());
    assert_eq!(d.tick(1_000), None);
}
