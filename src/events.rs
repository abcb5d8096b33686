use crate::{KeyInput, NavKey, PointerDevice, PointerInput, WheelInput};

/// The closed set of canonical gesture kinds, used as subscription keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureKind {
    Wheel,
    PointerDown,
    /// Raw tracked pointer position (see `track_pointer`).
    PointerMove,
    /// Displacement since the last pointer-down/up, scaled per device.
    Drag,
    PointerUp,
    Keydown,
}

impl GestureKind {
    pub const COUNT: usize = 6;

    pub const ALL: [GestureKind; Self::COUNT] = [
        Self::Wheel,
        Self::PointerDown,
        Self::PointerMove,
        Self::Drag,
        Self::PointerUp,
        Self::Keydown,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A normalized wheel scroll.
///
/// `pixel_x`/`pixel_y` are in pixels with `wheel_multiplier` applied; `spin_x`/`spin_y` are
/// step counts (sign-only when the raw event carried pixel deltas).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelGesture {
    pub spin_x: f64,
    pub spin_y: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub raw: WheelInput,
}

/// A pointer position event (down, up, or tracked move).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerGesture {
    pub x: f64,
    pub y: f64,
    pub device: PointerDevice,
    pub raw: PointerInput,
}

/// A drag displacement since the tracking origin, scaled by the device multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragGesture {
    pub dx: f64,
    pub dy: f64,
    pub device: PointerDevice,
    pub raw: PointerInput,
}

/// A keyboard navigation step.
///
/// `value` is the signed scroll distance in pixels; `Tab` publishes 0 and is conventionally
/// treated as "reset to top" by consumers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyGesture {
    pub code: NavKey,
    pub shift: bool,
    pub value: f64,
    pub raw: KeyInput,
}

/// A canonical, device-agnostic gesture event.
///
/// Constructed fresh per raw event and delivered synchronously to subscribers; payloads are
/// plain `Copy` value objects.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureEvent {
    Wheel(WheelGesture),
    PointerDown(PointerGesture),
    PointerMove(PointerGesture),
    Drag(DragGesture),
    PointerUp(PointerGesture),
    Keydown(KeyGesture),
}

impl GestureEvent {
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Wheel(_) => GestureKind::Wheel,
            Self::PointerDown(_) => GestureKind::PointerDown,
            Self::PointerMove(_) => GestureKind::PointerMove,
            Self::Drag(_) => GestureKind::Drag,
            Self::PointerUp(_) => GestureKind::PointerUp,
            Self::Keydown(_) => GestureKind::Keydown,
        }
    }

    pub fn as_wheel(&self) -> Option<&WheelGesture> {
        match self {
            Self::Wheel(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_pointer(&self) -> Option<&PointerGesture> {
        match self {
            Self::PointerDown(g) | Self::PointerMove(g) | Self::PointerUp(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_drag(&self) -> Option<&DragGesture> {
        match self {
            Self::Drag(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_key(&self) -> Option<&KeyGesture> {
        match self {
            Self::Keydown(g) => Some(g),
            _ => None,
        }
    }
}
