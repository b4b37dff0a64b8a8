use alloc::sync::Arc;

use crate::ItemHit;

/// Callback invoked when an item is clicked.
pub type OnItemClick = Arc<dyn Fn(ItemHit) + Send + Sync>;

/// Callback invoked when an item is long-clicked.
///
/// Returns `true` if the callback consumed the long click.
pub type OnItemLongClick = Arc<dyn Fn(ItemHit) -> bool + Send + Sync>;

/// Gesture resolution thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureConfig {
    /// Distance (in view units) a touch may travel before it is treated as a scroll.
    pub touch_slop: f32,
    /// How long a touch must be held before it resolves to a long click.
    pub long_press_timeout_ms: u64,
}

impl GestureConfig {
    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_long_press_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.long_press_timeout_ms = timeout_ms;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            long_press_timeout_ms: 500,
        }
    }
}
