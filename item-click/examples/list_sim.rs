use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use item_click::{
    GestureConfig, HapticFeedback, ItemClickRegistry, ItemHit, ItemListView, SoundEffect,
    TouchEvent, TouchListenerId, ViewId,
};

/// A fake list widget: 20 rows of height 24, row ids offset by 500.
struct SimList {
    long_clickable: bool,
    observers: Vec<TouchListenerId>,
}

impl ItemListView for SimList {
    fn view_id(&self) -> ViewId {
        ViewId(1)
    }

    fn item_at(&self, _x: f32, y: f32) -> Option<ItemHit> {
        let position = (y / 24.0).floor();
        (0.0..20.0)
            .contains(&position)
            .then(|| ItemHit::new(position as usize, 500 + position as u64))
    }

    fn is_long_clickable(&self) -> bool {
        self.long_clickable
    }

    fn set_long_clickable(&mut self, long_clickable: bool) {
        self.long_clickable = long_clickable;
    }

    fn add_item_touch_listener(&mut self, listener: TouchListenerId) {
        self.observers.push(listener);
    }

    fn remove_item_touch_listener(&mut self, listener: TouchListenerId) {
        self.observers.retain(|l| *l != listener);
    }

    fn play_sound_effect(&mut self, position: usize, effect: SoundEffect) {
        println!("  feedback: {effect:?} on row {position}");
    }

    fn perform_haptic_feedback(&mut self, position: usize, feedback: HapticFeedback) -> bool {
        println!("  feedback: {feedback:?} on row {position}");
        true
    }
}

fn main() {
    // Simulate a UI layer that owns the registry and forwards input + frame ticks.
    let mut list = SimList {
        long_clickable: false,
        observers: Vec::new(),
    };
    let mut registry =
        ItemClickRegistry::with_config(GestureConfig::default().with_long_press_timeout_ms(400));
    let last_long = Arc::new(AtomicU64::new(0));

    let support = registry.attach(&mut list);
    support.set_on_item_click(|hit| println!("  click: position={} id={}", hit.position, hit.id));
    support.set_on_item_long_click(
        &mut list,
        Some({
            let last_long = Arc::clone(&last_long);
            move |hit: ItemHit| {
                println!("  long click: position={} id={}", hit.position, hit.id);
                last_long.store(hit.id, Ordering::Relaxed);
                true
            }
        }),
    );
    println!("observers={:?} long_clickable={}", list.observers, list.long_clickable);

    println!("tap row 3:");
    registry.on_touch_event(&mut list, TouchEvent::down(10.0, 80.0, 0));
    registry.on_touch_event(&mut list, TouchEvent::up(10.0, 80.0, 90));

    println!("hold row 7:");
    registry.on_touch_event(&mut list, TouchEvent::down(10.0, 170.0, 1_000));
    let mut now_ms = 1_000;
    while now_ms < 1_600 {
        now_ms += 16;
        registry.tick(&mut list, now_ms);
    }
    registry.on_touch_event(&mut list, TouchEvent::up(10.0, 170.0, now_ms));

    println!("drag from row 1 (scroll, no click):");
    registry.on_touch_event(&mut list, TouchEvent::down(10.0, 30.0, 2_000));
    registry.on_touch_event(&mut list, TouchEvent::moved(10.0, 90.0, 2_030));
    registry.on_touch_event(&mut list, TouchEvent::up(10.0, 90.0, 2_060));

    registry.detach(&mut list);
    println!(
        "detached: observers={:?} last_long={}",
        list.observers,
        last_long.load(Ordering::Relaxed)
    );
}
