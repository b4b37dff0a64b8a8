//! Headless item click / long-click support for scrollable list views.
//!
//! A list widget usually only knows about scrolling. This crate adds item-level click handling on
//! top of it: raw touch events go in, and resolved gestures come out as calls to a single click
//! listener and a single long-click listener, together with the platform feedback users expect
//! (a click sound for clicks, haptic feedback for long presses).
//!
//! It is UI-agnostic. A GUI/TUI layer is expected to:
//! - implement [`ItemListView`] for its list widget (hit-testing, feedback, observer bookkeeping)
//! - own an [`ItemClickRegistry`] and forward touch events / frame ticks to it
//!
//! ```
//! use item_click::{ItemClickRegistry, ItemHit, ItemListView, TouchEvent};
//! # use item_click::{HapticFeedback, SoundEffect, TouchListenerId, ViewId};
//! # struct Rows { long_clickable: bool }
//! # impl ItemListView for Rows {
//! #     fn view_id(&self) -> ViewId { ViewId(1) }
//! #     fn item_at(&self, _x: f32, y: f32) -> Option<ItemHit> {
//! #         (y >= 0.0).then(|| ItemHit::new((y / 10.0) as usize, 100 + (y / 10.0) as u64))
//! #     }
//! #     fn is_long_clickable(&self) -> bool { self.long_clickable }
//! #     fn set_long_clickable(&mut self, v: bool) { self.long_clickable = v; }
//! #     fn add_item_touch_listener(&mut self, _: TouchListenerId) {}
//! #     fn remove_item_touch_listener(&mut self, _: TouchListenerId) {}
//! #     fn play_sound_effect(&mut self, _: usize, _: SoundEffect) {}
//! #     fn perform_haptic_feedback(&mut self, _: usize, _: HapticFeedback) -> bool { true }
//! # }
//! let mut view = Rows { long_clickable: false };
//! let mut registry = ItemClickRegistry::new();
//! registry
//!     .attach(&mut view)
//!     .set_on_item_click(|hit: ItemHit| println!("clicked row {}", hit.id));
//!
//! registry.on_touch_event(&mut view, TouchEvent::down(5.0, 25.0, 0));
//! assert!(registry.on_touch_event(&mut view, TouchEvent::up(5.0, 25.0, 80)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod detector;
mod key;
mod options;
mod registry;
mod support;
mod types;
mod view;

#[cfg(test)]
mod tests;

pub use detector::ClickGestureDetector;
pub use options::{GestureConfig, OnItemClick, OnItemLongClick};
pub use registry::ItemClickRegistry;
pub use support::ItemClickSupport;
pub use types::{
    HapticFeedback, ItemGesture, ItemHit, RowId, SoundEffect, TouchAction, TouchEvent,
    TouchListenerId, ViewId,
};
pub use view::ItemListView;
