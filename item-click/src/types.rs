/// Stable identifier of a list row, distinct from its position in the list.
pub type RowId = u64;

/// Identity of a list view, used to key the [`crate::ItemClickRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(pub u64);

/// Handle of a touch observer registered on a list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TouchListenerId(pub u64);

/// A list item under a touch point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHit {
    /// Position of the item in the list.
    pub position: usize,
    pub id: RowId,
}

impl ItemHit {
    pub const fn new(position: usize, id: RowId) -> Self {
        Self { position, id }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw touch event in list-view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchEvent {
    pub action: TouchAction,
    pub x: f32,
    pub y: f32,
    /// Event timestamp in milliseconds (any monotonic clock).
    pub time_ms: u64,
}

impl TouchEvent {
    pub const fn new(action: TouchAction, x: f32, y: f32, time_ms: u64) -> Self {
        Self {
            action,
            x,
            y,
            time_ms,
        }
    }

    pub const fn down(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Down, x, y, time_ms)
    }

    pub const fn moved(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Move, x, y, time_ms)
    }

    pub const fn up(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Up, x, y, time_ms)
    }

    pub const fn cancel(time_ms: u64) -> Self {
        Self::new(TouchAction::Cancel, 0.0, 0.0, time_ms)
    }
}

/// A gesture resolved from touch events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemGesture {
    Click(ItemHit),
    LongClick(ItemHit),
}

impl ItemGesture {
    pub fn hit(&self) -> ItemHit {
        match self {
            Self::Click(hit) | Self::LongClick(hit) => *hit,
        }
    }
}

/// Sound effects a list view can play on an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoundEffect {
    Click,
}

/// Haptic feedback kinds a list view can perform on an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HapticFeedback {
    LongPress,
}
