use crate::{GestureConfig, ItemGesture, ItemHit, ItemListView, TouchAction, TouchEvent};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Press {
    hit: ItemHit,
    x: f32,
    y: f32,
    down_ms: u64,
    long_press_enabled: bool,
    long_fired: bool,
}

/// Resolves raw touch events into item clicks and long clicks.
///
/// The detector tracks a single pointer:
/// - `Down` on an item starts a press; `Down` elsewhere is ignored.
/// - Moving farther than `touch_slop` from the press point turns the gesture into a scroll and
///   drops the press.
/// - Holding for `long_press_timeout_ms` resolves a long click once, if the view was
///   long-clickable when the press started. The timeout is noticed on `tick`, `Move` or `Up`.
/// - `Up` before a long click resolves a click. `Up` after a long click resolves nothing.
///
/// Long presses are time driven, so adapters should call [`Self::tick`] every frame/timer tick
/// while [`Self::is_pressed`] is `true`.
#[derive(Clone, Debug, Default)]
pub struct ClickGestureDetector {
    config: GestureConfig,
    press: Option<Press>,
}

impl ClickGestureDetector {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            press: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// The item under the active press, if any.
    pub fn pressed_item(&self) -> Option<ItemHit> {
        self.press.map(|p| p.hit)
    }

    pub fn reset(&mut self) {
        self.press = None;
    }

    /// Feeds a touch event. Returns the gesture it completes, if any.
    pub fn on_touch_event<V: ItemListView + ?Sized>(
        &mut self,
        view: &V,
        event: TouchEvent,
    ) -> Option<ItemGesture> {
        match event.action {
            TouchAction::Down => {
                self.press = view.item_at(event.x, event.y).map(|hit| Press {
                    hit,
                    x: event.x,
                    y: event.y,
                    down_ms: event.time_ms,
                    long_press_enabled: view.is_long_clickable(),
                    long_fired: false,
                });
                ctrace!(pressed = ?self.pressed_item(), "ClickGestureDetector: down");
                None
            }
            TouchAction::Move => {
                if let Some(gesture) = self.tick(event.time_ms) {
                    return Some(gesture);
                }
                let press = self.press?;
                if !press.long_fired && self.beyond_slop(&press, event.x, event.y) {
                    ctrace!(position = press.hit.position, "ClickGestureDetector: slop exceeded");
                    self.press = None;
                }
                None
            }
            TouchAction::Up => {
                if let Some(gesture) = self.tick(event.time_ms) {
                    self.press = None;
                    return Some(gesture);
                }
                let press = self.press.take()?;
                if press.long_fired || self.beyond_slop(&press, event.x, event.y) {
                    return None;
                }
                Some(ItemGesture::Click(press.hit))
            }
            TouchAction::Cancel => {
                self.press = None;
                None
            }
        }
    }

    /// Advances the long-press timer. Returns a long click once the timeout elapses.
    pub fn tick(&mut self, now_ms: u64) -> Option<ItemGesture> {
        let timeout = self.config.long_press_timeout_ms;
        let press = self.press.as_mut()?;
        if !press.long_press_enabled || press.long_fired {
            return None;
        }
        if now_ms.saturating_sub(press.down_ms) < timeout {
            return None;
        }
        press.long_fired = true;
        Some(ItemGesture::LongClick(press.hit))
    }

    fn beyond_slop(&self, press: &Press, x: f32, y: f32) -> bool {
        let dx = x - press.x;
        let dy = y - press.y;
        let slop = self.config.touch_slop;
        dx * dx + dy * dy > slop * slop
    }
}
